pub mod design;

use makepad_widgets::*;
use finagent_data::{
    AddAppForm, ApiConfig, Application, ApplicationId, Notification, NotificationLevel, Store,
    StoreAction,
};
use finagent_widgets::{ToastLevel, ToastWidgetExt};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn toast_level(level: NotificationLevel) -> ToastLevel {
    match level {
        NotificationLevel::Success => ToastLevel::Success,
        NotificationLevel::Error   => ToastLevel::Error,
        NotificationLevel::Info    => ToastLevel::Info,
    }
}

/// Map clicked row indices to application ids, skipping stale rows
fn resolve_deletes(apps: &[Application], clicked_rows: &[usize]) -> Vec<ApplicationId> {
    clicked_rows
        .iter()
        .filter_map(|row| apps.get(*row).map(|app| app.id))
        .collect()
}

// ─── Widget ───────────────────────────────────────────────────────────────────

#[derive(Live, LiveHook, Widget)]
pub struct SettingsScreen {
    #[deref]
    view: View,

    #[rust] initialized: bool,
    /// Applications as of the last event, drawn by the PortalList
    #[rust] rows: Vec<Application>,
}

impl Widget for SettingsScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        let Some(store) = scope.data.get_mut::<Store>() else {
            if !self.initialized {
                ::log::warn!("SettingsScreen received an event without a Store in scope");
                self.initialized = true;
            }
            return;
        };

        if !self.initialized { self.initialize(cx, store); }

        self.handle_api_controls(cx, &actions, store);
        self.handle_dialog(cx, &actions, store);
        self.handle_list_clicks(cx, &actions, store);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        let app_list = self.view.portal_list(ids!(app_list));
        let app_list_uid = app_list.widget_uid();

        while let Some(widget) = self.view.draw_walk(cx, scope, walk).step() {
            if widget.widget_uid() == app_list_uid {
                self.draw_app_list(cx, scope, widget);
            }
        }

        DrawStep::done()
    }
}

impl SettingsScreen {
    fn draw_app_list(&mut self, cx: &mut Cx2d, scope: &mut Scope, widget: WidgetRef) {
        let binding = widget.as_portal_list();
        let Some(mut list) = binding.borrow_mut() else { return };

        list.set_item_range(cx, 0, self.rows.len());

        while let Some(item_id) = list.next_visible_item(cx) {
            let Some(app) = self.rows.get(item_id) else { continue };
            let item = list.item(cx, item_id, live_id!(AppRow));
            item.label(ids!(app_name)).set_text(cx, &app.name);
            item.label(ids!(app_package)).set_text(cx, &app.package_name);
            item.draw_all(cx, scope);
        }
    }

    // ── Init ─────────────────────────────────────────────────────────────────

    fn initialize(&mut self, cx: &mut Cx, store: &Store) {
        self.initialized = true;
        self.view.text_input(ids!(api_port_input)).set_text(cx, &store.api.port);
        self.sync_api_section(cx, &store.api);
        self.sync_form_fields(cx, &store.add_form);
        self.sync_app_list(cx, store);
        ::log::info!(
            "Settings screen ready: {} applications, API {}",
            store.applications.len(),
            if store.api.enabled { "enabled" } else { "disabled" }
        );
    }

    // ── Sync store -> widgets ────────────────────────────────────────────────

    fn sync_api_section(&mut self, cx: &mut Cx, api: &ApiConfig) {
        self.view.check_box(ids!(api_switch)).set_active(cx, api.enabled);
        self.view.label(ids!(api_status)).set_text(cx, api.status_text());
        self.view.widget(ids!(port_section)).set_visible(cx, api.shows_port());
        self.view.redraw(cx);
    }

    fn sync_form_fields(&mut self, cx: &mut Cx, form: &AddAppForm) {
        self.view.text_input(ids!(app_name_input)).set_text(cx, &form.name);
        self.view.text_input(ids!(app_package_input)).set_text(cx, &form.package_name);
    }

    fn set_dialog_error(&mut self, cx: &mut Cx, message: Option<&str>) {
        self.view.label(ids!(dialog_error)).set_text(cx, message.unwrap_or(""));
        self.view.widget(ids!(dialog_error)).set_visible(cx, message.is_some());
        self.view.redraw(cx);
    }

    fn sync_app_list(&mut self, cx: &mut Cx, store: &Store) {
        self.rows = store.applications.apps().to_vec();
        let empty = self.rows.is_empty();
        self.view.widget(ids!(app_list)).set_visible(cx, !empty);
        self.view.widget(ids!(apps_empty_state)).set_visible(cx, empty);
        self.view.redraw(cx);
    }

    fn notify(&mut self, cx: &mut Cx, notification: &Notification) {
        self.view
            .toast(ids!(toast))
            .show(cx, toast_level(notification.level), &notification.message);
    }

    // ── Event handlers ────────────────────────────────────────────────────────

    fn handle_api_controls(&mut self, cx: &mut Cx, actions: &Actions, store: &mut Store) {
        if let Some(enabled) = self.view.check_box(ids!(api_switch)).changed(actions) {
            store.handle_action(&StoreAction::SetApiEnabled(enabled));
            self.sync_api_section(cx, &store.api);
        }

        if let Some(port) = self.view.text_input(ids!(api_port_input)).changed(actions) {
            store.handle_action(&StoreAction::SetApiPort(port));
        }
    }

    fn handle_dialog(&mut self, cx: &mut Cx, actions: &Actions, store: &mut Store) {
        let modal = self.view.modal(ids!(add_app_modal));

        if self.view.button(ids!(add_app_btn)).clicked(actions) {
            store.handle_action(&StoreAction::OpenAddDialog);
            self.sync_form_fields(cx, &store.add_form);
            self.set_dialog_error(cx, None);
            modal.open(cx);
        }

        if let Some(name) = self.view.text_input(ids!(app_name_input)).changed(actions) {
            store.handle_action(&StoreAction::SetDraftName(name));
        }
        if let Some(package) = self.view.text_input(ids!(app_package_input)).changed(actions) {
            store.handle_action(&StoreAction::SetDraftPackage(package));
        }

        if self.view.button(ids!(save_app_btn)).clicked(actions) {
            if let Some(notification) = store.handle_action(&StoreAction::SubmitAddApplication) {
                if notification.level == NotificationLevel::Error {
                    self.set_dialog_error(cx, Some(&notification.message));
                }
                self.notify(cx, &notification);
            }
            if !store.add_form.is_open() {
                self.set_dialog_error(cx, None);
                self.sync_form_fields(cx, &store.add_form);
                self.sync_app_list(cx, store);
                modal.close(cx);
            }
        }

        if modal.dismissed(actions) && store.add_form.is_open() {
            store.handle_action(&StoreAction::CloseAddDialog);
        }
    }

    fn handle_list_clicks(&mut self, cx: &mut Cx, actions: &Actions, store: &mut Store) {
        let list = self.view.portal_list(ids!(app_list));
        let clicked_rows: Vec<usize> = list
            .items_with_actions(actions)
            .into_iter()
            .filter(|(_, item)| item.button(ids!(delete_btn)).clicked(actions))
            .map(|(item_id, _)| item_id)
            .collect();
        if clicked_rows.is_empty() { return; }

        for id in resolve_deletes(&self.rows, &clicked_rows) {
            if let Some(notification) = store.handle_action(&StoreAction::DeleteApplication(id)) {
                self.notify(cx, &notification);
            }
        }
        self.sync_app_list(cx, store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_level_mapping() {
        assert_eq!(toast_level(NotificationLevel::Success), ToastLevel::Success);
        assert_eq!(toast_level(NotificationLevel::Error), ToastLevel::Error);
        assert_eq!(toast_level(NotificationLevel::Info), ToastLevel::Info);
    }

    #[test]
    fn test_resolve_deletes() {
        let apps = vec![
            Application::new(1, "Ventas Agua", "com.tuempresa.ventasagua"),
            Application::new(2, "Mis Cuentas", "com.tuempresa.miscuentas"),
        ];
        assert_eq!(resolve_deletes(&apps, &[1]), vec![2]);
        assert_eq!(resolve_deletes(&apps, &[0, 1]), vec![1, 2]);
        // Stale row index past the end of the list
        assert!(resolve_deletes(&apps, &[5]).is_empty());
    }
}
