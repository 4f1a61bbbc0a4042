//! Core primitives.
//!
//! Coordinates, the seeded random source used for placement, and the
//! wall-clock capability used by the session timer.

pub mod point;
pub mod rng;
pub mod clock;

// Re-export core types
pub use point::{MatBounds, MatPoint, Position};
pub use rng::{DeterministicRng, ScriptedRng, TreasureRng};
pub use clock::{Clock, ManualClock, SystemClock};
