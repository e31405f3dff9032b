use crate::error::ValidationError;
use crate::ids::IdGenerator;

/// Unique identifier for a connected application
pub type ApplicationId = u64;

/// An external application the agent is allowed to work with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    /// Display name shown in the list
    pub name: String,
    /// Package identifier (free-form, e.g. "com.empresa.app")
    pub package_name: String,
}

impl Application {
    pub fn new(id: ApplicationId, name: &str, package_name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            package_name: package_name.to_string(),
        }
    }
}

/// Entries every session starts with
pub fn seed_applications() -> Vec<Application> {
    vec![
        Application::new(1, "Ventas Agua", "com.tuempresa.ventasagua"),
        Application::new(2, "Mis Cuentas", "com.tuempresa.miscuentas"),
    ]
}

/// Ordered list of connected applications
///
/// Keeps insertion order and guarantees that no two entries share an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRegistry {
    apps: Vec<Application>,
}

impl Default for ApplicationRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ApplicationRegistry {
    /// Registry with no applications
    pub fn empty() -> Self {
        Self { apps: Vec::new() }
    }

    /// Registry holding the two seed applications
    pub fn seeded() -> Self {
        Self {
            apps: seed_applications(),
        }
    }

    /// Add a new application at the end of the list
    ///
    /// Both fields must be non-empty; whitespace-only values are accepted.
    /// On error the registry is left untouched.
    pub fn add(
        &mut self,
        name: &str,
        package_name: &str,
        ids: &mut dyn IdGenerator,
    ) -> Result<&Application, ValidationError> {
        if name.is_empty() || package_name.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let mut id = ids.next_id();
        while self.contains(id) {
            log::debug!("Id {} already in use, asking for another", id);
            id = ids.next_id();
        }

        self.apps.push(Application::new(id, name, package_name));
        let index = self.apps.len() - 1;
        Ok(&self.apps[index])
    }

    /// Remove the application with the given id
    ///
    /// Returns the removed entry, or None (and changes nothing) if the id
    /// is not in the list.
    pub fn remove(&mut self, id: ApplicationId) -> Option<Application> {
        let index = self.apps.iter().position(|app| app.id == id)?;
        Some(self.apps.remove(index))
    }

    pub fn get(&self, id: ApplicationId) -> Option<&Application> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn contains(&self, id: ApplicationId) -> bool {
        self.get(id).is_some()
    }

    /// All applications in insertion order
    pub fn apps(&self) -> &[Application] {
        &self.apps
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    /// Hands out the same id a fixed number of times, then `id + 100`
    struct StuckIds(ApplicationId, u32);

    impl IdGenerator for StuckIds {
        fn next_id(&mut self) -> ApplicationId {
            if self.1 > 0 {
                self.1 -= 1;
                self.0
            } else {
                self.0 + 100
            }
        }
    }

    fn names(registry: &ApplicationRegistry) -> Vec<&str> {
        registry.apps().iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_seeded_registry() {
        let registry = ApplicationRegistry::seeded();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.apps()[0],
            Application::new(1, "Ventas Agua", "com.tuempresa.ventasagua")
        );
        assert_eq!(
            registry.apps()[1],
            Application::new(2, "Mis Cuentas", "com.tuempresa.miscuentas")
        );
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut registry = ApplicationRegistry::seeded();
        let mut ids = SequentialIds::starting_at(100);

        let added = registry.add("Test", "com.test.app", &mut ids).unwrap().clone();
        assert_eq!(added, Application::new(100, "Test", "com.test.app"));
        assert_eq!(names(&registry), vec!["Ventas Agua", "Mis Cuentas", "Test"]);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut registry = ApplicationRegistry::seeded();
        let before = registry.clone();
        let mut ids = SequentialIds::starting_at(100);

        assert_eq!(
            registry.add("", "com.test.app", &mut ids),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            registry.add("Test", "", &mut ids),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(registry.add("", "", &mut ids), Err(ValidationError::MissingFields));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_add_accepts_whitespace_only() {
        let mut registry = ApplicationRegistry::empty();
        let mut ids = SequentialIds::starting_at(1);
        assert!(registry.add(" ", "  ", &mut ids).is_ok());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_skips_colliding_ids() {
        let mut registry = ApplicationRegistry::seeded();
        // Generator keeps handing out the id of a seed entry
        let mut ids = StuckIds(2, 3);
        let id = registry.add("Test", "com.test.app", &mut ids).unwrap().id;
        assert_eq!(id, 102);

        let mut all: Vec<_> = registry.apps().iter().map(|a| a.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), registry.len());
    }

    #[test]
    fn test_remove_present_id() {
        let mut registry = ApplicationRegistry::seeded();
        let mut ids = SequentialIds::starting_at(10);
        registry.add("Test", "com.test.app", &mut ids).unwrap();

        let removed = registry.remove(2).unwrap();
        assert_eq!(removed.name, "Mis Cuentas");
        assert_eq!(names(&registry), vec!["Ventas Agua", "Test"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut registry = ApplicationRegistry::seeded();
        let before = registry.clone();
        assert!(registry.remove(999).is_none());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_remove_until_empty() {
        let mut registry = ApplicationRegistry::seeded();
        registry.remove(1);
        registry.remove(2);
        assert!(registry.is_empty());
        assert!(registry.remove(1).is_none());
    }

    #[test]
    fn test_add_then_delete_scenario() {
        let mut registry = ApplicationRegistry::seeded();
        let mut ids = SequentialIds::starting_at(1000);

        registry.add("Test", "com.test.app", &mut ids).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.apps()[2].name, "Test");
        assert_eq!(registry.apps()[2].package_name, "com.test.app");

        let first_seed = registry.apps()[0].id;
        registry.remove(first_seed);
        assert_eq!(names(&registry), vec!["Mis Cuentas", "Test"]);
    }
}
