//! Game Configuration
//!
//! Mat geometry and distance thresholds. Defaults match the physical mat;
//! every value can be overridden from the environment.

use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::core::point::MatBounds;
use crate::game::error::ConfigError;
use crate::{
    COLLECT_DISTANCE, DISTANCE_CLOSE, DISTANCE_FAR,
    MAX_PLACEMENT_ATTEMPTS, MAX_TREASURES, MIN_SEPARATION,
};

/// Configuration for a treasure hunt session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Region treasures are placed in
    pub bounds: MatBounds,
    /// Euclidean distance at or under which a treasure can be collected
    pub collect_distance: f64,
    /// Distances below this count as "close"
    pub distance_close: f64,
    /// Distances below this count as "near"; anything else is "far"
    pub distance_far: f64,
    /// Minimum Manhattan distance between any two treasures
    pub min_separation: u32,
    /// Upper bound on treasures per session
    pub max_treasures: usize,
    /// Candidate draws allowed per placement before giving up
    pub max_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: MatBounds::default(),
            collect_distance: COLLECT_DISTANCE,
            distance_close: DISTANCE_CLOSE,
            distance_far: DISTANCE_FAR,
            min_separation: MIN_SEPARATION,
            max_treasures: MAX_TREASURES,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    ///
    /// Unset variables keep their defaults. Recognized variables:
    /// `TREASURE_HUNT_COLLECT_DISTANCE`, `TREASURE_HUNT_DISTANCE_CLOSE`,
    /// `TREASURE_HUNT_DISTANCE_FAR`, `TREASURE_HUNT_MIN_SEPARATION`,
    /// `TREASURE_HUNT_MAX_TREASURES`, `TREASURE_HUNT_MAX_PLACEMENT_ATTEMPTS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_COLLECT_DISTANCE")? {
            config.collect_distance = v;
        }
        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_DISTANCE_CLOSE")? {
            config.distance_close = v;
        }
        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_DISTANCE_FAR")? {
            config.distance_far = v;
        }
        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_MIN_SEPARATION")? {
            config.min_separation = v;
        }
        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_MAX_TREASURES")? {
            config.max_treasures = v;
        }
        if let Some(v) = parse_var(&lookup, "TREASURE_HUNT_MAX_PLACEMENT_ATTEMPTS")? {
            config.max_placement_attempts = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bounds;
        if !b.is_valid() {
            return Err(ConfigError::InvalidBounds {
                x_min: b.x_min,
                x_max: b.x_max,
                y_min: b.y_min,
                y_max: b.y_max,
            });
        }

        for (name, value) in [
            ("collect_distance", self.collect_distance),
            ("distance_close", self.distance_close),
            ("distance_far", self.distance_far),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }

        if self.collect_distance > self.distance_close || self.distance_close > self.distance_far {
            return Err(ConfigError::ThresholdOrder {
                collect: self.collect_distance,
                close: self.distance_close,
                far: self.distance_far,
            });
        }

        if self.min_separation == 0 {
            return Err(ConfigError::NoSeparation);
        }
        if self.max_treasures == 0 {
            return Err(ConfigError::NoTreasuresAllowed);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }

        Ok(())
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_matches_mat() {
        let config = GameConfig::default();
        assert_eq!(config.bounds, MatBounds::new(-135, 135, -90, 90));
        assert_eq!(config.collect_distance, 15.0);
        assert_eq!(config.distance_close, 60.0);
        assert_eq!(config.distance_far, 100.0);
        assert_eq!(config.min_separation, 30);
        assert_eq!(config.max_treasures, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("TREASURE_HUNT_COLLECT_DISTANCE", "20"),
            ("TREASURE_HUNT_MIN_SEPARATION", " 40 "),
        ]))
        .unwrap();

        assert_eq!(config.collect_distance, 20.0);
        assert_eq!(config.min_separation, 40);
        assert_eq!(config.distance_far, 100.0);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = GameConfig::from_lookup(lookup_from(&[
            ("TREASURE_HUNT_MAX_TREASURES", "lots"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { var: "TREASURE_HUNT_MAX_TREASURES", .. }
        ));
    }

    #[test]
    fn test_from_lookup_validates_result() {
        let err = GameConfig::from_lookup(lookup_from(&[
            ("TREASURE_HUNT_COLLECT_DISTANCE", "80"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::ThresholdOrder { .. }));
    }

    #[test]
    fn test_from_lookup_rejects_zero_separation() {
        let err = GameConfig::from_lookup(lookup_from(&[
            ("TREASURE_HUNT_MIN_SEPARATION", "0"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::NoSeparation);
    }

    #[test]
    fn test_single_point_mat_needs_separation() {
        let config = GameConfig {
            bounds: MatBounds::new(0, 0, 0, 0),
            min_separation: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSeparation));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.bounds = MatBounds::new(10, -10, 0, 0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBounds { .. })));

        let mut config = GameConfig::default();
        config.collect_distance = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDistance { name: "collect_distance", .. })
        ));

        let mut config = GameConfig::default();
        config.min_separation = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoSeparation));

        let mut config = GameConfig::default();
        config.max_treasures = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoTreasuresAllowed));

        let mut config = GameConfig::default();
        config.max_placement_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoPlacementAttempts));
    }
}
