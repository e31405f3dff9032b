//! Finagent Settings App
//!
//! Local API configuration and the list of connected applications.

pub mod screen;

use makepad_widgets::{Cx, live_id, LiveId};
use finagent_widgets::{AgentApp, AppInfo};

pub use screen::{SettingsScreen, SettingsScreenRef};

/// Main app struct for AgentApp trait implementation
pub struct SettingsApp;

impl AgentApp for SettingsApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Configuración",
            id: "finagent-settings",
            description: "Local API and connected applications",
            page_id: live_id!(settings_screen),
        }
    }

    fn live_design(cx: &mut Cx) {
        crate::screen::design::live_design(cx);
    }
}
