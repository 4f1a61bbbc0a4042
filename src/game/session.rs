//! Game Session
//!
//! The aggregate root of a treasure hunt: placed treasures, what has been
//! collected, the session timer and the phase the hunt is in. All mutation
//! goes through the methods here.
//!
//! ## Phases
//!
//! ```text
//!            initialize_treasures            last treasure collected
//!   Idle ─────────────────────────► Hunting ─────────────────────────► AllCollected
//!    ▲                                 │                                    │
//!    │ reset_game                      │ finish_game                        │ (immediately)
//!    │                                 ▼                                    ▼
//!    └──────────────────────── Finished { all_collected: false | true } ◄───┘
//! ```

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::core::clock::{Clock, SystemClock};
use crate::core::rng::{DeterministicRng, TreasureRng};
use crate::game::collection::find_collectible;
use crate::game::config::GameConfig;
use crate::game::error::PlacementError;
use crate::game::events::GameEvent;
use crate::game::placement::{normalize_treasure_count, place_treasures, Treasure};
use crate::game::position::PositionSource;
use crate::game::proximity::{nearest_distance, ProximityLevel};
use crate::game::timer::{ElapsedTime, SessionTimer};
use crate::{DEFAULT_TREASURE_COUNT, MAX_PENDING_EVENTS};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No treasures placed
    #[default]
    Idle,
    /// Treasures placed, some still hidden
    Hunting,
    /// Every treasure collected, finalization pending
    AllCollected,
    /// Finish time recorded
    Finished {
        /// Whether every treasure was found before finishing
        all_collected: bool,
    },
}

/// Outcome of a session, reported on finalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Treasures found
    pub collected: usize,
    /// Treasures placed
    pub total: usize,
    /// Play time, if the session had a start time
    pub elapsed: Option<ElapsedTime>,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "found {}/{} treasures", self.collected, self.total)?;
        match self.elapsed {
            Some(elapsed) => write!(f, " in {}", elapsed),
            None => write!(f, " (no start time recorded)"),
        }
    }
}

/// A single treasure hunt session.
///
/// Generic over the random source used for placement and the clock used for
/// timing so both can be pinned in tests. Single-owner: callers that share a
/// session across threads must serialize access themselves.
#[derive(Debug)]
pub struct GameSession<R = DeterministicRng, C = SystemClock> {
    config: GameConfig,
    rng: R,
    clock: C,
    treasures: Vec<Treasure>,
    collected: Vec<Treasure>,
    timer: SessionTimer,
    phase: SessionPhase,
    pending_events: VecDeque<GameEvent>,
}

impl GameSession {
    /// Session with the default mat, an entropy-seeded RNG and the system clock.
    pub fn new() -> Self {
        Self::with_parts(GameConfig::default(), DeterministicRng::from_entropy(), SystemClock)
    }

    /// Session with the default mat and a fixed placement seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(GameConfig::default(), DeterministicRng::new(seed), SystemClock)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TreasureRng, C: Clock> GameSession<R, C> {
    /// Session from explicit parts.
    ///
    /// The config is used as given; run [`GameConfig::validate`] first if it
    /// came from user input.
    pub fn with_parts(config: GameConfig, rng: R, clock: C) -> Self {
        info!(
            collect_distance = config.collect_distance,
            min_separation = config.min_separation,
            "treasure hunt session ready"
        );
        Self {
            config,
            rng,
            clock,
            treasures: Vec::new(),
            collected: Vec::new(),
            timer: SessionTimer::new(),
            phase: SessionPhase::Idle,
            pending_events: VecDeque::new(),
        }
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Hide treasures and start the session timer.
    ///
    /// `count` is normalized first: rounded half up, capped at
    /// `max_treasures`, raised to at least one. Any previous treasures and
    /// collection progress are discarded. Returns the number placed.
    ///
    /// On failure the session is left idle with no treasures and no start time.
    pub fn initialize_treasures(&mut self, count: f64) -> Result<usize, PlacementError> {
        let normalization = normalize_treasure_count(count, self.config.max_treasures);
        if normalization.rounded {
            info!(requested = count, rounded = normalization.count, "treasure count rounded");
        }
        if normalization.capped {
            warn!(
                requested = count,
                max = self.config.max_treasures,
                "treasure count above maximum, reduced"
            );
        }
        if normalization.raised {
            warn!(requested = count, count = normalization.count, "treasure count below one, raised");
        }
        if normalization.adjusted() {
            let now = self.clock.now();
            self.push_event(GameEvent::count_adjusted(now, normalization));
        }

        self.clear();

        info!(count = normalization.count, "placing treasures");
        let treasures = place_treasures(&mut self.rng, &self.config, normalization.count)?;
        self.treasures = treasures;

        let now = self.clock.now();
        self.timer.start(now);
        self.transition(SessionPhase::Hunting);
        self.push_event(GameEvent::treasures_placed(now, self.treasures.len()));
        info!(count = self.treasures.len(), "treasures hidden, session started");

        Ok(self.treasures.len())
    }

    /// Hide the default number of treasures (one).
    pub fn initialize_default(&mut self) -> Result<usize, PlacementError> {
        self.initialize_treasures(DEFAULT_TREASURE_COUNT as f64)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Euclidean distance from the cube to the nearest uncollected treasure.
    ///
    /// `None` if the position is unknown or nothing remains. No side effects.
    pub fn treasure_distance<S>(&self, source: &mut S) -> Option<f64>
    where
        S: PositionSource + ?Sized,
    {
        let position = source.current_position()?;
        nearest_distance(position, self.uncollected())
    }

    /// Feedback band for the cube's distance to the nearest uncollected treasure.
    pub fn proximity<S>(&self, source: &mut S) -> Option<ProximityLevel>
    where
        S: PositionSource + ?Sized,
    {
        self.treasure_distance(source)
            .map(|distance| ProximityLevel::classify(distance, &self.config))
    }

    /// Number of treasures not yet collected. Zero before placement.
    pub fn remaining_treasures(&self) -> usize {
        self.treasures.len() - self.collected.len()
    }

    /// Uncollected treasures in placement order.
    pub fn uncollected(&self) -> impl Iterator<Item = &Treasure> + '_ {
        self.treasures
            .iter()
            .filter(move |treasure| !self.collected.contains(treasure))
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Try to pick up a treasure at the cube's current position.
    ///
    /// Returns `None` if the position is unknown, `Some(true)` if a treasure
    /// within `collect_distance` was collected and `Some(false)` otherwise.
    /// When several are in range the earliest placed one is taken. Collecting
    /// the last treasure finalizes the session. A finished session accepts no
    /// further collections.
    pub fn try_collect_treasure<S>(&mut self, source: &mut S) -> Option<bool>
    where
        S: PositionSource + ?Sized,
    {
        let position = source.current_position()?;

        if self.is_finished() {
            debug!(%position, "collection attempted on a finished session");
            return Some(false);
        }

        let Some(index) = find_collectible(
            position,
            &self.treasures,
            &self.collected,
            self.config.collect_distance,
        ) else {
            debug!(%position, "no treasure in range");
            return Some(false);
        };

        let treasure = self.treasures[index];
        self.collected.push(treasure);

        let collected = self.collected.len();
        let total = self.treasures.len();
        let now = self.clock.now();
        self.push_event(GameEvent::treasure_collected(now, treasure, collected, total));
        info!(%treasure, collected, total, "treasure found");

        if self.remaining_treasures() == 0 {
            self.complete();
        }

        Some(true)
    }

    // =========================================================================
    // Finalization
    // =========================================================================

    /// End the session, recording the finish time.
    ///
    /// Works before every treasure is found. Only the first finalization
    /// records a time; later calls return the existing summary unchanged.
    pub fn finish_game(&mut self) -> SessionSummary {
        if self.is_finished() {
            debug!("session already finished");
            return self.summary();
        }
        self.finalize()
    }

    /// Hunting -> AllCollected -> Finished.
    fn complete(&mut self) {
        let total = self.treasures.len();
        self.transition(SessionPhase::AllCollected);
        let now = self.clock.now();
        self.push_event(GameEvent::all_collected(now, total));
        info!(total, "all treasures found");
        self.finalize();
    }

    fn finalize(&mut self) -> SessionSummary {
        let now = self.clock.now();
        self.timer.finish(now);

        let all_collected = !self.treasures.is_empty() && self.remaining_treasures() == 0;
        self.transition(SessionPhase::Finished { all_collected });

        let summary = self.summary();
        match summary.elapsed {
            Some(elapsed) => info!(
                collected = summary.collected,
                total = summary.total,
                %elapsed,
                "session finished"
            ),
            None => warn!("session finished without a recorded start time"),
        }
        self.push_event(GameEvent::session_finished(now, summary));

        summary
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Clear treasures, progress and timestamps. Does not start a new session.
    pub fn reset_game(&mut self) {
        self.clear();
        let now = self.clock.now();
        self.push_event(GameEvent::session_reset(now));
        info!("session reset");
    }

    fn clear(&mut self) {
        self.treasures.clear();
        self.collected.clear();
        self.timer.reset();
        self.transition(SessionPhase::Idle);
    }

    fn transition(&mut self, next: SessionPhase) {
        if self.phase != next {
            debug!(from = ?self.phase, to = ?next, "session phase change");
            self.phase = next;
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All placed treasures, in placement order.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Collected treasures, in collection order.
    pub fn collected(&self) -> &[Treasure] {
        &self.collected
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True once the finish time has been recorded.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished { .. })
    }

    /// When treasures were placed.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.timer.started_at()
    }

    /// When the session was finalized.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.timer.finished_at()
    }

    /// Play time, once both timestamps exist.
    pub fn elapsed(&self) -> Option<ElapsedTime> {
        self.timer.elapsed()
    }

    /// Snapshot of progress and play time.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            collected: self.collected.len(),
            total: self.treasures.len(),
            elapsed: self.timer.elapsed(),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take pending events (consumes them).
    ///
    /// Callers that care about events should drain them regularly: at most
    /// [`MAX_PENDING_EVENTS`] are kept, and the oldest are discarded first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events).into()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.pending_events.len() >= MAX_PENDING_EVENTS {
            self.pending_events.pop_front();
            debug!(cap = MAX_PENDING_EVENTS, "event log full, dropped oldest event");
        }
        self.pending_events.push_back(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
