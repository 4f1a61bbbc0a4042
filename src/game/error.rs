//! Game Errors

use thiserror::Error;

/// Treasure placement errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Rejection sampling ran out of attempts before every treasure found a
    /// spot far enough from the others.
    #[error("placed {placed} of {requested} treasures before exhausting {attempts} attempts")]
    AttemptsExhausted {
        /// Treasures requested (after normalization)
        requested: usize,
        /// Treasures accepted before giving up
        placed: usize,
        /// Candidates drawn
        attempts: u32,
    },
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Mat bounds have min > max on some axis.
    #[error("invalid mat bounds: x {x_min}..={x_max}, y {y_min}..={y_max}")]
    InvalidBounds {
        /// Smallest x
        x_min: i32,
        /// Largest x
        x_max: i32,
        /// Smallest y
        y_min: i32,
        /// Largest y
        y_max: i32,
    },

    /// A distance threshold is negative or not finite.
    #[error("{name} must be a finite non-negative distance, got {value}")]
    InvalidDistance {
        /// Setting name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Proximity thresholds are out of order.
    #[error("thresholds must satisfy collect ({collect}) <= close ({close}) <= far ({far})")]
    ThresholdOrder {
        /// Collection distance
        collect: f64,
        /// "Close" threshold
        close: f64,
        /// "Far" threshold
        far: f64,
    },

    /// Treasure cap must allow at least one treasure.
    #[error("max_treasures must be at least 1")]
    NoTreasuresAllowed,

    /// Treasures must be at least one unit apart so no two share a point.
    #[error("min_separation must be at least 1")]
    NoSeparation,

    /// Placement needs at least one attempt.
    #[error("max_placement_attempts must be at least 1")]
    NoPlacementAttempts,

    /// Environment variable could not be parsed.
    #[error("failed to parse {var}={value:?}: {reason}")]
    InvalidEnvVar {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
        /// Parser message
        reason: String,
    },
}
