//! Proximity
//!
//! Distance from the cube to the nearest treasure still hidden, and the
//! coarse feedback bands used to drive lamp colors and sounds.

use serde::{Serialize, Deserialize};

use crate::core::point::Position;
use crate::game::config::GameConfig;
use crate::game::placement::Treasure;

/// Minimum Euclidean distance from `position` to any treasure in `remaining`.
///
/// Returns `None` when nothing remains.
pub fn nearest_distance<'a, I>(position: Position, remaining: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Treasure>,
{
    remaining
        .into_iter()
        .map(|treasure| position.distance_to(*treasure))
        .min_by(f64::total_cmp)
}

/// Coarse distance band for player feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProximityLevel {
    /// Within collection range
    Collectible = 0,
    /// Under the "close" threshold
    Close = 1,
    /// Under the "far" threshold
    Near = 2,
    /// Everything else
    Far = 3,
}

impl ProximityLevel {
    /// Band a distance using the configured thresholds.
    ///
    /// Collection range is inclusive; the close and far thresholds are exclusive.
    pub fn classify(distance: f64, config: &GameConfig) -> Self {
        if distance <= config.collect_distance {
            ProximityLevel::Collectible
        } else if distance < config.distance_close {
            ProximityLevel::Close
        } else if distance < config.distance_far {
            ProximityLevel::Near
        } else {
            ProximityLevel::Far
        }
    }

    /// Suggested cube lamp color (RGB) for this band.
    pub fn lamp_color(self) -> (u8, u8, u8) {
        match self {
            ProximityLevel::Collectible => (255, 0, 0),
            ProximityLevel::Close => (255, 128, 0),
            ProximityLevel::Near => (255, 255, 0),
            ProximityLevel::Far => (0, 0, 255),
        }
    }
}
