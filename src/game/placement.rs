//! Treasure Placement
//!
//! Rejection sampling of treasure coordinates with a minimum Manhattan
//! separation, plus normalization of the requested treasure count.

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::core::point::MatPoint;
use crate::core::rng::TreasureRng;
use crate::game::config::GameConfig;
use crate::game::error::PlacementError;
use crate::DEFAULT_TREASURE_COUNT;

/// A hidden treasure. Identity is its coordinate.
pub type Treasure = MatPoint;

/// How a requested treasure count was turned into the count actually placed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountNormalization {
    /// Value the caller asked for
    pub requested: f64,
    /// Count after rounding and clamping
    pub count: usize,
    /// Input had a fractional part and was rounded half up
    pub rounded: bool,
    /// Rounded value was above the cap and was reduced
    pub capped: bool,
    /// Rounded value was below one (or NaN) and was raised
    pub raised: bool,
}

impl CountNormalization {
    /// True if the placed count differs from what was literally asked for.
    pub fn adjusted(&self) -> bool {
        self.rounded || self.capped || self.raised
    }
}

/// Turn a caller-supplied count into a placeable one.
///
/// Rounds half up (`2.5` becomes `3`), caps at `max_treasures` and raises
/// anything below one to one. NaN falls back to the default count.
pub fn normalize_treasure_count(requested: f64, max_treasures: usize) -> CountNormalization {
    let max = max_treasures.max(1);

    if requested.is_nan() {
        return CountNormalization {
            requested,
            count: DEFAULT_TREASURE_COUNT.min(max),
            rounded: false,
            capped: false,
            raised: true,
        };
    }

    let rounded_value = (requested + 0.5).floor();
    let rounded = rounded_value != requested;

    let (count, capped, raised) = if rounded_value > max as f64 {
        (max, true, false)
    } else if rounded_value < 1.0 {
        (1, false, true)
    } else {
        (rounded_value as usize, false, false)
    };

    CountNormalization {
        requested,
        count,
        rounded,
        capped,
        raised,
    }
}

/// Place `count` treasures inside the configured mat.
///
/// Candidates are drawn uniformly and kept only if they are at least
/// `min_separation` (Manhattan) from every treasure already accepted.
/// Gives up after `max_placement_attempts` draws in total.
pub fn place_treasures<R>(
    rng: &mut R,
    config: &GameConfig,
    count: usize,
) -> Result<Vec<Treasure>, PlacementError>
where
    R: TreasureRng + ?Sized,
{
    let mut treasures: Vec<Treasure> = Vec::with_capacity(count);
    let mut attempts: u32 = 0;

    while treasures.len() < count {
        if attempts >= config.max_placement_attempts {
            warn!(
                placed = treasures.len(),
                requested = count,
                attempts,
                "treasure placement gave up"
            );
            return Err(PlacementError::AttemptsExhausted {
                requested: count,
                placed: treasures.len(),
                attempts,
            });
        }
        attempts += 1;

        let candidate = rng.random_point(&config.bounds);
        if is_far_enough(candidate, &treasures, config.min_separation) {
            debug!(%candidate, attempts, "treasure accepted");
            treasures.push(candidate);
        }
    }

    Ok(treasures)
}

/// Check a candidate against every accepted treasure.
///
/// A point already taken is never far enough, whatever `min_separation` says.
#[inline]
pub fn is_far_enough(candidate: MatPoint, accepted: &[Treasure], min_separation: u32) -> bool {
    let min_separation = min_separation.max(1);
    accepted
        .iter()
        .all(|existing| candidate.manhattan_distance(*existing) >= min_separation)
}
