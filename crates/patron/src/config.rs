//! Patron module configuration.

use crate::modules::patron::{LAP_DURATION, MODULE_NAME};

/// Settings for [`initialize_patron_module_with`](crate::initialize_patron_module_with).
#[derive(Debug, Clone, PartialEq)]
pub struct PatronModuleConfig {
    /// Module the nodes are registered under (default `"patron"`).
    pub module_name: String,
    /// Width of the feeding window in laps (default [`LAP_DURATION`]).
    pub lap_duration: f32,
}

impl PatronModuleConfig {
    /// Module `"patron"` with the default [`LAP_DURATION`](crate::LAP_DURATION).
    #[must_use]
    pub fn new() -> Self {
        Self {
            module_name: MODULE_NAME.to_string(),
            lap_duration: LAP_DURATION,
        }
    }

    /// Register under a different module name.
    #[must_use]
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Override the feeding window width.
    #[must_use]
    pub fn with_lap_duration(mut self, laps: f32) -> Self {
        self.lap_duration = laps;
        self
    }
}

impl Default for PatronModuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PatronModuleConfig::default();
        assert_eq!(config.module_name, "patron");
        assert!((config.lap_duration - 1.05).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder_overrides() {
        let config = PatronModuleConfig::new()
            .with_module_name("patron_v2")
            .with_lap_duration(2.0);
        assert_eq!(config.module_name, "patron_v2");
        assert_eq!(config.lap_duration, 2.0);
    }
}
