//! # AgentApp Trait - Plugin App Interface
//!
//! Standard interface for screens that plug into the agent shell.
//!
//! ## Architecture
//!
//! Apps are separate crates that implement the AgentApp trait. The shell imports and
//! registers them via `live_design(cx)` calls. Widget types are then available for
//! use in the shell's `live_design!` macro via full module paths.
//!
//! Each app connects to the shell through 4 touch points:
//! 1. Import: `use finagent_settings::SettingsApp;`
//! 2. Live Register: `<SettingsApp as AgentApp>::live_design(cx);`
//! 3. Metadata: `SettingsApp::info()` for the registry
//! 4. UI Definition: `<SettingsScreen> {}` in live_design!
//!
//! ## Creating a New App
//!
//! ```rust,ignore
//! use finagent_widgets::{AgentApp, AppInfo};
//! use makepad_widgets::live_id;
//!
//! pub struct RulesApp;
//!
//! impl AgentApp for RulesApp {
//!     fn info() -> AppInfo {
//!         AppInfo {
//!             name: "Reglas",
//!             id: "finagent-rules",
//!             description: "Automation rules",
//!             page_id: live_id!(rules_screen),
//!         }
//!     }
//!
//!     fn live_design(cx: &mut Cx) {
//!         crate::screen::design::live_design(cx);
//!     }
//! }
//! ```

use makepad_widgets::{Cx, LiveId};

/// Metadata about a registered app
#[derive(Clone, Debug)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    /// Description of the app
    pub description: &'static str,
    /// Page/screen LiveId inside the shell
    pub page_id: LiveId,
}

/// Trait for apps that integrate with the agent shell
pub trait AgentApp {
    /// Returns metadata about this app
    fn info() -> AppInfo where Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Registry of all installed apps
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register an app; a second registration with the same id is ignored
    pub fn register(&mut self, info: AppInfo) {
        if self.find_by_id(info.id).is_some() {
            log::warn!("App {} already registered", info.id);
            return;
        }
        self.apps.push(info);
    }

    /// Get all registered apps
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Find an app by ID
    pub fn find_by_id(&self, id: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Number of registered apps
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use makepad_widgets::live_id;

    fn info(id: &'static str) -> AppInfo {
        AppInfo {
            name: "Test",
            id,
            description: "",
            page_id: live_id!(test_screen),
        }
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = AppRegistry::new();
        assert!(registry.is_empty());

        registry.register(info("a"));
        registry.register(info("b"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_id("b").map(|a| a.id), Some("b"));
        assert!(registry.find_by_id("c").is_none());
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let mut registry = AppRegistry::new();
        registry.register(info("a"));
        registry.register(info("a"));
        assert_eq!(registry.len(), 1);
    }
}
