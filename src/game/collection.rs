//! Treasure Collection
//!
//! Finds the treasure a cube reading can pick up.

use crate::core::point::Position;
use crate::game::placement::Treasure;

/// Index into `treasures` of the first uncollected treasure within `collect_distance`.
///
/// Scans in placement order and returns the first match, so when several
/// treasures are in range the earliest placed one wins regardless of which
/// is nearer. The range check is inclusive.
pub fn find_collectible(
    position: Position,
    treasures: &[Treasure],
    collected: &[Treasure],
    collect_distance: f64,
) -> Option<usize> {
    treasures
        .iter()
        .enumerate()
        .filter(|(_, treasure)| !collected.contains(treasure))
        .find(|(_, treasure)| position.distance_to(**treasure) <= collect_distance)
        .map(|(index, _)| index)
}
