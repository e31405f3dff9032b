/// Port shown when the settings screen first opens
pub const DEFAULT_API_PORT: &str = "8080";

/// Local API section of the settings screen
///
/// Nothing here starts a server or binds a port; the values only drive
/// what the screen shows. The port is kept as the raw text the user typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub enabled: bool,
    pub port: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: DEFAULT_API_PORT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Replace the port text, accepted as-is
    pub fn set_port(&mut self, port: &str) {
        self.port = port.to_string();
    }

    /// Whether the port field should be visible
    pub fn shows_port(&self) -> bool {
        self.enabled
    }

    /// Status line shown under the toggle
    pub fn status_text(&self) -> &'static str {
        if self.enabled {
            "La API está activa."
        } else {
            "La API está inactiva."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.port, "8080");
        assert!(!config.shows_port());
        assert_eq!(config.status_text(), "La API está inactiva.");
    }

    #[test]
    fn test_toggle_reveals_and_hides_port() {
        let mut config = ApiConfig::default();
        config.toggle();
        assert!(config.shows_port());
        assert_eq!(config.status_text(), "La API está activa.");
        config.toggle();
        assert!(!config.shows_port());
    }

    #[test]
    fn test_port_survives_hide_show() {
        let mut config = ApiConfig::default();
        config.set_enabled(true);
        config.set_port("9090");
        config.set_enabled(false);
        config.set_enabled(true);
        assert_eq!(config.port, "9090");
    }

    #[test]
    fn test_port_is_not_validated() {
        let mut config = ApiConfig::default();
        config.set_port("not a port");
        assert_eq!(config.port, "not a port");
        config.set_port("");
        assert_eq!(config.port, "");
    }
}
