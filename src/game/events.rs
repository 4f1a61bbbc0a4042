//! Game Events
//!
//! Everything a narrator, lamp or speaker might want to react to, recorded
//! as data. The session queues events; callers drain them with
//! `GameSession::take_events`.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::game::placement::{CountNormalization, Treasure};
use crate::game::session::SessionSummary;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Requested treasure count was rounded, capped or raised
    CountAdjusted {
        /// How the request was turned into a count
        normalization: CountNormalization,
    },

    /// Treasures were hidden and the timer started
    TreasuresPlaced {
        /// Treasures hidden
        count: usize,
    },

    /// A treasure was picked up
    TreasureCollected {
        /// Where it was hidden
        treasure: Treasure,
        /// Collected so far, including this one
        collected: usize,
        /// Treasures in the session
        total: usize,
    },

    /// The last treasure was picked up
    AllCollected {
        /// Treasures in the session
        total: usize,
    },

    /// The session was finalized
    SessionFinished {
        /// Final tally
        summary: SessionSummary,
    },

    /// The session was cleared
    SessionReset,
}

/// A game event with its wall-clock time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// When the event occurred
    pub at: DateTime<Utc>,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(at: DateTime<Utc>, data: GameEventData) -> Self {
        Self { at, data }
    }

    /// Create count adjusted event.
    pub fn count_adjusted(at: DateTime<Utc>, normalization: CountNormalization) -> Self {
        Self::new(at, GameEventData::CountAdjusted { normalization })
    }

    /// Create treasures placed event.
    pub fn treasures_placed(at: DateTime<Utc>, count: usize) -> Self {
        Self::new(at, GameEventData::TreasuresPlaced { count })
    }

    /// Create treasure collected event.
    pub fn treasure_collected(
        at: DateTime<Utc>,
        treasure: Treasure,
        collected: usize,
        total: usize,
    ) -> Self {
        Self::new(
            at,
            GameEventData::TreasureCollected {
                treasure,
                collected,
                total,
            },
        )
    }

    /// Create all collected event.
    pub fn all_collected(at: DateTime<Utc>, total: usize) -> Self {
        Self::new(at, GameEventData::AllCollected { total })
    }

    /// Create session finished event.
    pub fn session_finished(at: DateTime<Utc>, summary: SessionSummary) -> Self {
        Self::new(at, GameEventData::SessionFinished { summary })
    }

    /// Create session reset event.
    pub fn session_reset(at: DateTime<Utc>) -> Self {
        Self::new(at, GameEventData::SessionReset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::MatPoint;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = GameEvent::treasure_collected(
            DateTime::<Utc>::UNIX_EPOCH,
            MatPoint::new(50, 0),
            1,
            3,
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["data"]["TreasureCollected"]["treasure"]["x"], 50);
        assert_eq!(json["data"]["TreasureCollected"]["total"], 3);

        let back: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
