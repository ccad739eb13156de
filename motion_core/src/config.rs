use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Simulation configuration
///
/// Missing JSON fields fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Gravity flip
    pub gravity: Vec3,
    pub max_interpolation_time: f32,
    pub interpolation_step: f32,
    pub slerp_cutoff_ratio: f32,
    pub save_orientation_delay: f32,
    pub alignment_epsilon: f32,

    // Paddle
    pub paddle_impulse: f32,
    pub paddle_speed_cap: f32,
    pub paddle_extents: Vec2,

    // Projectile
    pub max_projectiles: usize,
    pub fire_rate: f32,
    pub projectile_impulse: f32,
    pub inherited_velocity_factor: f32,
    pub heading_blend: f32,
    pub spawn_offset: f32,
    pub projectile_extents: Vec2,

    // Physics
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, Params::GRAVITY_Y, 0.0),
            max_interpolation_time: Params::MAX_INTERPOLATION_TIME,
            interpolation_step: Params::INTERPOLATION_STEP,
            slerp_cutoff_ratio: Params::SLERP_CUTOFF_RATIO,
            save_orientation_delay: Params::SAVE_ORIENTATION_DELAY,
            alignment_epsilon: Params::ALIGNMENT_EPSILON,
            paddle_impulse: Params::PADDLE_IMPULSE,
            paddle_speed_cap: Params::PADDLE_SPEED_CAP,
            paddle_extents: Vec2::new(Params::PADDLE_HALF_WIDTH, Params::PADDLE_HALF_HEIGHT),
            max_projectiles: Params::MAX_PROJECTILES,
            fire_rate: Params::FIRE_RATE,
            projectile_impulse: Params::PROJECTILE_IMPULSE,
            inherited_velocity_factor: Params::INHERITED_VELOCITY_FACTOR,
            heading_blend: Params::HEADING_BLEND,
            spawn_offset: Params::SPAWN_OFFSET,
            projectile_extents: Vec2::new(
                Params::PROJECTILE_HALF_WIDTH,
                Params::PROJECTILE_HALF_HEIGHT,
            ),
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would stall or destabilise the tick loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            log::warn!("rejecting config: {field} {reason}");
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.max_interpolation_time > 0.0) {
            return invalid("max_interpolation_time", "must be positive");
        }
        if !(self.interpolation_step > 0.0) {
            return invalid("interpolation_step", "must be positive");
        }
        if !(self.slerp_cutoff_ratio > 0.0 && self.slerp_cutoff_ratio <= 1.0) {
            return invalid("slerp_cutoff_ratio", "must be in (0, 1]");
        }
        if !(self.save_orientation_delay >= 0.0) {
            return invalid("save_orientation_delay", "must not be negative");
        }
        if !(self.alignment_epsilon >= 0.0) {
            return invalid("alignment_epsilon", "must not be negative");
        }
        if !(self.paddle_impulse > 0.0) {
            return invalid("paddle_impulse", "must be positive");
        }
        if !(self.paddle_speed_cap > 0.0) {
            return invalid("paddle_speed_cap", "must be positive");
        }
        if !self.paddle_extents.cmpge(Vec2::ZERO).all() {
            return invalid("paddle_extents", "must not be negative");
        }
        if !(self.projectile_impulse >= 0.0) {
            return invalid("projectile_impulse", "must not be negative");
        }
        if !self.inherited_velocity_factor.is_finite() {
            return invalid("inherited_velocity_factor", "must be finite");
        }
        if !(self.spawn_offset >= 0.0) {
            return invalid("spawn_offset", "must not be negative");
        }
        if !self.projectile_extents.cmpge(Vec2::ZERO).all() {
            return invalid("projectile_extents", "must not be negative");
        }
        if !(self.fire_rate >= 0.0) {
            return invalid("fire_rate", "must not be negative");
        }
        if !(0.0..=1.0).contains(&self.heading_blend) {
            return invalid("heading_blend", "must be in [0, 1]");
        }
        if !(self.fixed_dt > 0.0) {
            return invalid("fixed_dt", "must be positive");
        }
        if !(self.max_dt >= self.fixed_dt) {
            return invalid("max_dt", "must be at least fixed_dt");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(config.max_projectiles, 5);
        assert_eq!(config.paddle_speed_cap, 30.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "fire_rate": 0.25, "max_projectiles": 3 }"#)
            .expect("partial config should load");
        assert_eq!(config.fire_rate, 0.25);
        assert_eq!(config.max_projectiles, 3);
        assert_eq!(config.max_interpolation_time, Params::MAX_INTERPOLATION_TIME);
    }

    #[test]
    fn test_json_vectors_are_arrays() {
        let config = Config::from_json(r#"{ "gravity": [0.0, -1.62, 0.0] }"#)
            .expect("vector field should load");
        assert_eq!(config.gravity.y, -1.62);
    }

    #[test]
    fn test_to_json_reloads() {
        let config = Config::new();
        let json = config.to_json().expect("serialize");
        assert_eq!(Config::from_json(&json).expect("reload"), config);
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn test_validate_rejects_zero_fixed_dt() {
        let err = Config::from_json(r#"{ "fixed_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "fixed_dt",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_cutoff() {
        let config = Config {
            slerp_cutoff_ratio: 1.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_impulse() {
        let err = Config::from_json(r#"{ "paddle_impulse": -5.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "paddle_impulse",
                ..
            }
        ));

        let zero = Config {
            paddle_impulse: 0.0,
            ..Config::default()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_geometry() {
        let extents = Config {
            paddle_extents: Vec2::new(0.25, -1.0),
            ..Config::default()
        };
        assert!(extents.validate().is_err());

        let offset = Config {
            spawn_offset: -0.75,
            ..Config::default()
        };
        assert!(offset.validate().is_err());

        let shot = Config {
            projectile_extents: Vec2::new(f32::NAN, 0.15),
            ..Config::default()
        };
        assert!(shot.validate().is_err());

        let impulse = Config {
            projectile_impulse: -10.0,
            ..Config::default()
        };
        assert!(impulse.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = Config {
            interpolation_step: f32::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
