use makepad_widgets::*;

use crate::add_app_form::AddAppForm;
use crate::api_config::ApiConfig;
use crate::applications::{Application, ApplicationId, ApplicationRegistry};
use crate::error::ValidationError;
use crate::ids::{ClockIds, IdGenerator};
use crate::notifications::Notification;

/// Actions that can be dispatched to modify the Store
#[derive(Clone, Debug, DefaultNone)]
pub enum StoreAction {
    /// Set the API-enabled flag explicitly
    SetApiEnabled(bool),
    /// Flip the API-enabled flag
    ToggleApi,
    /// Replace the API port text
    SetApiPort(String),
    /// Show the add-application dialog
    OpenAddDialog,
    /// Hide the add-application dialog, keeping what was typed
    CloseAddDialog,
    /// Replace the name field of the add-application form
    SetDraftName(String),
    /// Replace the package field of the add-application form
    SetDraftPackage(String),
    /// Validate the form and append a new application
    SubmitAddApplication,
    /// Remove an application by id
    DeleteApplication(ApplicationId),
    /// No action
    None,
}

/// Central state container for the settings screen
///
/// The shell owns the Store and passes it down to widgets via
/// Makepad's Scope mechanism. Everything lives in memory; a new
/// Store always starts from the seed applications.
///
/// # Usage
///
/// In App's handle_event:
/// ```rust,ignore
/// let scope = &mut Scope::with_data(&mut self.store);
/// self.ui.handle_event(cx, event, scope);
/// ```
///
/// In child widgets:
/// ```rust,ignore
/// let store = scope.data.get_mut::<Store>().unwrap();
/// if let Some(notification) = store.handle_action(&StoreAction::ToggleApi) {
///     // show it
/// }
/// ```
pub struct Store {
    /// Local API toggle and port
    pub api: ApiConfig,

    /// Connected applications, in insertion order
    pub applications: ApplicationRegistry,

    /// Add-application dialog fields and visibility
    pub add_form: AddAppForm,

    ids: Box<dyn IdGenerator>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Fresh session state, with clock-based ids for new applications
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(ClockIds::new()))
    }

    /// Fresh session state using the given id source
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            api: ApiConfig::default(),
            applications: ApplicationRegistry::seeded(),
            add_form: AddAppForm::default(),
            ids,
        }
    }

    /// Check if the local API is enabled
    pub fn is_api_enabled(&self) -> bool {
        self.api.enabled
    }

    /// Save the form contents as a new application
    ///
    /// On success the form is cleared and the dialog closed. On error
    /// nothing changes and the dialog stays open.
    pub fn submit_add_application(&mut self) -> Result<Application, ValidationError> {
        let added = self
            .applications
            .add(&self.add_form.name, &self.add_form.package_name, self.ids.as_mut())?
            .clone();
        self.add_form.clear();
        self.add_form.close();
        Ok(added)
    }

    /// Remove an application, returning it if it was present
    pub fn delete_application(&mut self, id: ApplicationId) -> Option<Application> {
        self.applications.remove(id)
    }

    /// Handle a StoreAction and update state accordingly
    ///
    /// Returns the notification the user should see, if any.
    pub fn handle_action(&mut self, action: &StoreAction) -> Option<Notification> {
        match action {
            StoreAction::SetApiEnabled(enabled) => {
                self.api.set_enabled(*enabled);
                ::log::debug!("API enabled: {}", enabled);
                None
            }
            StoreAction::ToggleApi => {
                self.api.toggle();
                ::log::debug!("API enabled: {}", self.api.enabled);
                None
            }
            StoreAction::SetApiPort(port) => {
                self.api.set_port(port);
                ::log::debug!("API port text: {:?}", port);
                None
            }
            StoreAction::OpenAddDialog => {
                self.add_form.open();
                ::log::debug!("Add application dialog opened");
                None
            }
            StoreAction::CloseAddDialog => {
                self.add_form.close();
                ::log::debug!("Add application dialog closed");
                None
            }
            StoreAction::SetDraftName(name) => {
                self.add_form.set_name(name);
                None
            }
            StoreAction::SetDraftPackage(package_name) => {
                self.add_form.set_package_name(package_name);
                None
            }
            StoreAction::SubmitAddApplication => match self.submit_add_application() {
                Ok(app) => {
                    ::log::info!("Added application {} ({}) id={}", app.name, app.package_name, app.id);
                    Some(Notification::application_added(&app.name))
                }
                Err(err) => {
                    ::log::warn!("Add application rejected: {}", err);
                    Some(Notification::validation_failed(&err))
                }
            },
            StoreAction::DeleteApplication(id) => match self.delete_application(*id) {
                Some(app) => {
                    ::log::info!("Deleted application {} id={}", app.name, app.id);
                    Some(Notification::application_deleted(&app.name))
                }
                None => {
                    ::log::debug!("Delete ignored, no application with id={}", id);
                    None
                }
            },
            StoreAction::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::notifications::NotificationLevel;

    fn test_store() -> Store {
        Store::with_id_generator(Box::new(SequentialIds::starting_at(100)))
    }

    fn entries(store: &Store) -> Vec<(String, String)> {
        store
            .applications
            .apps()
            .iter()
            .map(|a| (a.name.clone(), a.package_name.clone()))
            .collect()
    }

    fn fill_form(store: &mut Store, name: &str, package_name: &str) {
        store.handle_action(&StoreAction::OpenAddDialog);
        store.handle_action(&StoreAction::SetDraftName(name.to_string()));
        store.handle_action(&StoreAction::SetDraftPackage(package_name.to_string()));
    }

    #[test]
    fn test_initial_state() {
        let store = Store::new();
        assert!(!store.is_api_enabled());
        assert_eq!(store.api.port, "8080");
        assert_eq!(
            entries(&store),
            vec![
                ("Ventas Agua".to_string(), "com.tuempresa.ventasagua".to_string()),
                ("Mis Cuentas".to_string(), "com.tuempresa.miscuentas".to_string()),
            ]
        );
        assert!(!store.add_form.is_open());
    }

    #[test]
    fn test_toggle_and_port() {
        let mut store = test_store();
        assert!(store.handle_action(&StoreAction::ToggleApi).is_none());
        assert!(store.api.shows_port());

        store.handle_action(&StoreAction::SetApiPort("3000".to_string()));
        store.handle_action(&StoreAction::SetApiEnabled(false));
        assert!(!store.api.shows_port());
        store.handle_action(&StoreAction::SetApiEnabled(true));
        assert_eq!(store.api.port, "3000");
    }

    #[test]
    fn test_submit_with_empty_field() {
        let mut store = test_store();
        fill_form(&mut store, "Test", "");
        let before = store.applications.clone();

        let notification = store.handle_action(&StoreAction::SubmitAddApplication).unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert_eq!(notification.message, "Por favor, complete todos los campos.");
        assert_eq!(store.applications, before);
        assert!(store.add_form.is_open());
        assert_eq!(store.add_form.name, "Test");
    }

    #[test]
    fn test_submit_success() {
        let mut store = test_store();
        fill_form(&mut store, "Test", "com.test.app");

        let notification = store.handle_action(&StoreAction::SubmitAddApplication).unwrap();
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.message, "Aplicación \"Test\" agregada.");

        assert_eq!(store.applications.len(), 3);
        let last = &store.applications.apps()[2];
        assert_eq!(last.id, 100);
        assert_eq!((last.name.as_str(), last.package_name.as_str()), ("Test", "com.test.app"));
        assert!(store.add_form.name.is_empty());
        assert!(store.add_form.package_name.is_empty());
        assert!(!store.add_form.is_open());
    }

    #[test]
    fn test_dismiss_keeps_draft() {
        let mut store = test_store();
        fill_form(&mut store, "Banco", "com.banco");
        store.handle_action(&StoreAction::CloseAddDialog);
        store.handle_action(&StoreAction::OpenAddDialog);
        assert_eq!(store.add_form.name, "Banco");
        assert_eq!(store.add_form.package_name, "com.banco");
        assert_eq!(store.applications.len(), 2);
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut store = test_store();

        let notification = store.handle_action(&StoreAction::DeleteApplication(1)).unwrap();
        assert_eq!(notification.level, NotificationLevel::Info);
        assert_eq!(notification.message, "Aplicación \"Ventas Agua\" eliminada.");

        let before = store.applications.clone();
        assert!(store.handle_action(&StoreAction::DeleteApplication(1)).is_none());
        assert_eq!(store.applications, before);
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let mut store = test_store();
        fill_form(&mut store, "Test", "com.test.app");
        store.handle_action(&StoreAction::SubmitAddApplication);
        assert_eq!(store.applications.len(), 3);

        let first_seed = store.applications.apps()[0].id;
        store.handle_action(&StoreAction::DeleteApplication(first_seed));
        assert_eq!(
            entries(&store),
            vec![
                ("Mis Cuentas".to_string(), "com.tuempresa.miscuentas".to_string()),
                ("Test".to_string(), "com.test.app".to_string()),
            ]
        );
    }

    #[test]
    fn test_none_action() {
        let mut store = test_store();
        assert!(store.handle_action(&StoreAction::None).is_none());
        assert_eq!(store.applications.len(), 2);
    }
}
