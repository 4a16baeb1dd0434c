//! Tuning constants and the host-facing configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Width of the tolerance interval around every compared value.
pub const TOLERANCE_EPSILON: f64 = 0.000027;

/// Fraction of an outline's width used as ray-origin padding for inside tests.
pub const DEFAULT_BOUNDING_BOX_PADDING: f64 = 0.01;

pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_MOMENT_OF_INERTIA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Padding fraction handed to new colliders.
    pub bounding_box_padding: f64,
    /// Mass of a freshly created body.
    pub default_mass: f64,
    /// Moment of inertia of a freshly created body.
    pub default_moment_of_inertia: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            bounding_box_padding: DEFAULT_BOUNDING_BOX_PADDING,
            default_mass: DEFAULT_MASS,
            default_moment_of_inertia: DEFAULT_MOMENT_OF_INERTIA,
        }
    }
}

impl PhysicsConfig {
    /// Parses a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("rejected physics config: {}", err);
            return Err(err);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.bounding_box_padding) {
            return Err(ConfigError::Invalid(format!(
                "bounding_box_padding must be in [0, 1), got {}",
                self.bounding_box_padding
            )));
        }
        if !(self.default_mass.is_finite() && self.default_mass > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_mass must be positive, got {}",
                self.default_mass
            )));
        }
        if !(self.default_moment_of_inertia.is_finite() && self.default_moment_of_inertia > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_moment_of_inertia must be positive, got {}",
                self.default_moment_of_inertia
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_mass, 1.0);
        assert_eq!(config.bounding_box_padding, 0.01);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = PhysicsConfig::from_json(r#"{ "default_mass": 4.0 }"#).unwrap();
        assert_eq!(config.default_mass, 4.0);
        assert_eq!(config.default_moment_of_inertia, DEFAULT_MOMENT_OF_INERTIA);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            PhysicsConfig::from_json(r#"{ "default_mass": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PhysicsConfig::from_json(r#"{ "bounding_box_padding": 1.5 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(PhysicsConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }
}
