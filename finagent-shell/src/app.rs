use makepad_widgets::*;

use finagent_data::Store;
use finagent_settings::SettingsApp;
use finagent_widgets::{AgentApp, AppRegistry};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use finagent_widgets::theme::*;

    // Import app widgets from external app crates
    use finagent_settings::screen::design::*;

    App = {{App}} {
        ui: <Window> {
            window: { title: "Agente de Automatización Financiera", inner_size: vec2(1000, 820) }
            pass: {
                clear_color: (PAGE_BG)
            }

            body = <View> {
                width: Fill, height: Fill
                flow: Down

                settings_screen = <SettingsScreen> {}
            }
        }
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,
    /// Session state, handed to the screens through Scope
    #[rust]
    store: Store,
    /// Metadata of the registered apps
    #[rust]
    apps: AppRegistry,
    #[rust]
    initialized: bool,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        if !self.initialized {
            // Fresh in-memory session: seed applications, API off
            self.store = Store::new();
            self.apps.register(SettingsApp::info());

            self.initialized = true;
            ::log::info!("App initialized with {} registered app(s)", self.apps.len());
        }
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        finagent_widgets::live_design(cx);
        // Register app widgets from external app crates via AgentApp trait
        <SettingsApp as AgentApp>::live_design(cx);
    }
}

impl MatchEvent for App {
    fn handle_startup(&mut self, _cx: &mut Cx) {
        for app in self.apps.apps() {
            ::log::info!("Registered app: {} ({}) - {}", app.name, app.id, app.description);
        }
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        // IMPORTANT: ui.handle_event must be called BEFORE match_event
        // because actions are generated during handle_event and then
        // processed by match_event's handle_actions
        let scope = &mut Scope::with_data(&mut self.store);
        self.ui.handle_event(cx, event, scope);

        self.match_event(cx, event);
    }
}

app_main!(App);
