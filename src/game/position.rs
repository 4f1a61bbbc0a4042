//! Position Source
//!
//! The engine's only dependency on hardware: something that can report where
//! the cube currently is, or that it doesn't know.

use crate::core::point::Position;

/// Best-effort, synchronous cube position query.
///
/// `None` means the sensor could not resolve a location (cube lifted off the
/// mat, lost tracking, not connected). The engine never retries.
pub trait PositionSource {
    /// Current cube position, if known.
    fn current_position(&mut self) -> Option<Position>;
}

impl<S: PositionSource + ?Sized> PositionSource for &mut S {
    fn current_position(&mut self) -> Option<Position> {
        (**self).current_position()
    }
}

impl PositionSource for Position {
    fn current_position(&mut self) -> Option<Position> {
        Some(*self)
    }
}

impl PositionSource for Option<Position> {
    fn current_position(&mut self) -> Option<Position> {
        *self
    }
}

impl PositionSource for (f64, f64) {
    fn current_position(&mut self) -> Option<Position> {
        Some(Position::from(*self))
    }
}

/// Adapter turning a closure into a [`PositionSource`].
#[derive(Clone, Debug)]
pub struct FnPositionSource<F>(F);

impl<F> PositionSource for FnPositionSource<F>
where
    F: FnMut() -> Option<Position>,
{
    fn current_position(&mut self) -> Option<Position> {
        (self.0)()
    }
}

/// Wrap a closure as a position source.
///
/// ```
/// use treasure_hunt::game::position::{from_fn, PositionSource};
/// use treasure_hunt::Position;
///
/// let mut source = from_fn(|| Some(Position::new(1.0, 2.0)));
/// assert_eq!(source.current_position(), Some(Position::new(1.0, 2.0)));
/// ```
pub fn from_fn<F>(f: F) -> FnPositionSource<F>
where
    F: FnMut() -> Option<Position>,
{
    FnPositionSource(f)
}

/// Replays a fixed sequence of readings, then reports unknown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPositions {
    readings: std::collections::VecDeque<Option<Position>>,
}

impl ScriptedPositions {
    /// Create from readings in the order they should be returned.
    pub fn new<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Option<Position>>,
    {
        Self {
            readings: readings.into_iter().collect(),
        }
    }

    /// Readings not yet consumed.
    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl PositionSource for ScriptedPositions {
    fn current_position(&mut self) -> Option<Position> {
        self.readings.pop_front().flatten()
    }
}
