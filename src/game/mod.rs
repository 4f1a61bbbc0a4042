//! Game Logic Module
//!
//! ## Module Structure
//!
//! - `config`: Mat geometry, thresholds, environment overrides
//! - `error`: Placement and configuration errors
//! - `position`: The cube position capability
//! - `placement`: Treasure placement and count normalization
//! - `proximity`: Nearest-treasure distance and feedback bands
//! - `collection`: Collection range checks
//! - `timer`: Session start/finish timestamps
//! - `events`: Game events for narration and feedback
//! - `session`: The session aggregate and its phases

pub mod config;
pub mod error;
pub mod position;
pub mod placement;
pub mod proximity;
pub mod collection;
pub mod timer;
pub mod events;
pub mod session;

// Re-export key types
pub use config::GameConfig;
pub use error::{ConfigError, PlacementError};
pub use position::{from_fn, PositionSource, ScriptedPositions};
pub use placement::{normalize_treasure_count, CountNormalization, Treasure};
pub use proximity::ProximityLevel;
pub use timer::{ElapsedTime, SessionTimer};
pub use events::{GameEvent, GameEventData};
pub use session::{GameSession, SessionPhase, SessionSummary};
