//! Treasure Hunt Demo
//!
//! Plays one session with a simulated cube that walks toward the nearest
//! hidden treasure, reporting proximity the way the lamp would.

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use treasure_hunt::{
    game::events::GameEventData,
    DeterministicRng, GameConfig, GameSession, ManualClock, MatPoint, Position,
    PositionSource, VERSION,
};

/// Distance the simulated cube moves per step.
const STEP: f64 = 12.0;

/// Seconds of play each simulated step represents.
const SECS_PER_STEP: i64 = 2;

/// Give up after this many steps.
const MAX_STEPS: usize = 500;

/// Every Nth reading is dropped to mimic the cube losing tracking.
const LOST_READING_EVERY: usize = 7;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Treasure Hunt v{}", VERSION);

    let config = GameConfig::from_env().context("invalid configuration")?;
    let seed = match std::env::var("TREASURE_HUNT_SEED") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("TREASURE_HUNT_SEED is not a u64: {raw:?}"))?,
        Err(_) => 12345,
    };
    let count: f64 = match std::env::var("TREASURE_HUNT_COUNT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("TREASURE_HUNT_COUNT is not a number: {raw:?}"))?,
        Err(_) => 3.0,
    };

    info!(seed, count, "starting demo session");
    demo_session(config, seed, count)
}

/// Simulated cube that walks in straight lines.
struct SimulatedCube {
    position: Position,
    readings: usize,
}

impl SimulatedCube {
    fn new(position: Position) -> Self {
        Self { position, readings: 0 }
    }

    fn step_toward(&mut self, target: MatPoint) {
        let dx = f64::from(target.x) - self.position.x;
        let dy = f64::from(target.y) - self.position.y;
        let distance = dx.hypot(dy);
        if distance <= STEP {
            self.position = target.to_position();
        } else {
            self.position.x += dx / distance * STEP;
            self.position.y += dy / distance * STEP;
        }
    }
}

impl PositionSource for SimulatedCube {
    fn current_position(&mut self) -> Option<Position> {
        self.readings += 1;
        if self.readings % LOST_READING_EVERY == 0 {
            None
        } else {
            Some(self.position)
        }
    }
}

fn demo_session(config: GameConfig, seed: u64, count: f64) -> Result<()> {
    let clock = ManualClock::at_epoch();
    let mut session = GameSession::with_parts(config, DeterministicRng::new(seed), clock.clone());

    let placed = session
        .initialize_treasures(count)
        .context("could not hide treasures")?;
    info!(placed, "treasures hidden");

    let mut cube = SimulatedCube::new(Position::new(0.0, 0.0));

    for step in 0..MAX_STEPS {
        if session.is_finished() {
            break;
        }

        let target = session
            .uncollected()
            .copied()
            .min_by(|a, b| cube.position.distance_to(*a).total_cmp(&cube.position.distance_to(*b)));
        let Some(target) = target else {
            break;
        };

        cube.step_toward(target);
        clock.advance_secs(SECS_PER_STEP);

        match session.proximity(&mut cube) {
            Some(level) => {
                let lamp = level.lamp_color();
                info!(step, position = %cube.position, ?level, ?lamp, "proximity");
            }
            None => warn!(step, "cube position unknown"),
        }

        match session.try_collect_treasure(&mut cube) {
            Some(true) => info!(step, remaining = session.remaining_treasures(), "treasure collected"),
            Some(false) => {}
            None => warn!(step, "collection skipped, cube position unknown"),
        }
    }

    if !session.is_finished() {
        warn!("step budget exhausted, ending session early");
        session.finish_game();
    }

    for event in session.take_events() {
        if let GameEventData::SessionFinished { summary } = event.data {
            info!("{}", summary);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
