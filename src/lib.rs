//! # Treasure Hunt Engine
//!
//! Game state and rules for a treasure hunt played by steering a tracked cube
//! around a printed mat.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TREASURE HUNT ENGINE                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                               │
//! │  ├── point.rs     - Mat points, cube positions, mat bounds   │
//! │  ├── rng.rs       - Seedable Xorshift128+ PRNG               │
//! │  └── clock.rs     - Wall-clock capability                    │
//! │                                                              │
//! │  game/            - Rules                                    │
//! │  ├── config.rs    - Thresholds and env overrides             │
//! │  ├── position.rs  - Cube position source                     │
//! │  ├── placement.rs - Treasure placement                       │
//! │  ├── proximity.rs - Nearest-treasure distance                │
//! │  ├── collection.rs- Collection range checks                  │
//! │  ├── timer.rs     - Session timing                           │
//! │  ├── events.rs    - Narration/feedback events                │
//! │  └── session.rs   - Session aggregate                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never talks to hardware. Callers hand it a
//! [`PositionSource`](game::position::PositionSource) and act on the
//! distances, booleans and events it returns.
//!
//! ```
//! use treasure_hunt::{GameConfig, GameSession, ManualClock, Position, ScriptedRng};
//!
//! let rng = ScriptedRng::from_points([(50, 0)]);
//! let mut session = GameSession::with_parts(GameConfig::default(), rng, ManualClock::default());
//! session.initialize_treasures(1.0).unwrap();
//!
//! let mut cube = Position::new(50.0, 10.0);
//! assert_eq!(session.treasure_distance(&mut cube), Some(10.0));
//! assert_eq!(session.try_collect_treasure(&mut cube), Some(true));
//! assert!(session.is_finished());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::point::{MatBounds, MatPoint, Position};
pub use crate::core::rng::{DeterministicRng, ScriptedRng, TreasureRng};
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use game::config::GameConfig;
pub use game::error::{ConfigError, PlacementError};
pub use game::position::PositionSource;
pub use game::proximity::ProximityLevel;
pub use game::session::{GameSession, SessionPhase, SessionSummary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Left edge of the mat
pub const MAT_X_MIN: i32 = -135;

/// Right edge of the mat
pub const MAT_X_MAX: i32 = 135;

/// Bottom edge of the mat
pub const MAT_Y_MIN: i32 = -90;

/// Top edge of the mat
pub const MAT_Y_MAX: i32 = 90;

/// Euclidean distance at or under which a treasure can be collected
pub const COLLECT_DISTANCE: f64 = 15.0;

/// Distances below this are "close"
pub const DISTANCE_CLOSE: f64 = 60.0;

/// Distances below this are "near"; beyond is "far"
pub const DISTANCE_FAR: f64 = 100.0;

/// Minimum Manhattan distance between two treasures
pub const MIN_SEPARATION: u32 = 30;

/// Most treasures a session may hold
pub const MAX_TREASURES: usize = 5;

/// Treasures placed when no count is given
pub const DEFAULT_TREASURE_COUNT: usize = 1;

/// Candidate draws allowed before placement gives up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Undrained events kept per session; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;
