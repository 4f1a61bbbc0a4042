//! Mat Coordinates
//!
//! Integer mat points for treasures, real-valued positions for cube readings,
//! and the rectangular bounds of the play mat.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{MAT_X_MIN, MAT_X_MAX, MAT_Y_MIN, MAT_Y_MAX};

/// Integer coordinate on the mat.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatPoint {
    /// X coordinate (mat units)
    pub x: i32,
    /// Y coordinate (mat units)
    pub y: i32,
}

impl MatPoint {
    /// Origin of the mat.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (sum of absolute coordinate differences).
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Euclidean distance to a cube position.
    #[inline]
    pub fn distance_to(self, position: Position) -> f64 {
        position.distance_to(self)
    }

    /// Convert to a real-valued position.
    #[inline]
    pub fn to_position(self) -> Position {
        Position::new(f64::from(self.x), f64::from(self.y))
    }
}

impl fmt::Debug for MatPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatPoint({}, {})", self.x, self.y)
    }
}

impl fmt::Display for MatPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for MatPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Position reported by the cube's position sensor.
///
/// Readings may be fractional, so components are `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (mat units)
    pub x: f64,
    /// Y coordinate (mat units)
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to a mat point.
    #[inline]
    pub fn distance_to(self, point: MatPoint) -> f64 {
        let dx = self.x - f64::from(point.x);
        let dy = self.y - f64::from(point.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<MatPoint> for Position {
    fn from(point: MatPoint) -> Self {
        point.to_position()
    }
}

/// Inclusive rectangular bounds of the play mat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatBounds {
    /// Smallest valid x
    pub x_min: i32,
    /// Largest valid x
    pub x_max: i32,
    /// Smallest valid y
    pub y_min: i32,
    /// Largest valid y
    pub y_max: i32,
}

impl Default for MatBounds {
    fn default() -> Self {
        Self {
            x_min: MAT_X_MIN,
            x_max: MAT_X_MAX,
            y_min: MAT_Y_MIN,
            y_max: MAT_Y_MAX,
        }
    }
}

impl MatBounds {
    /// Create bounds from inclusive ranges.
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Check if a point lies on the mat (edges inclusive).
    #[inline]
    pub fn contains(&self, point: MatPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Width in mat units.
    pub fn width(&self) -> u32 {
        self.x_min.abs_diff(self.x_max)
    }

    /// Height in mat units.
    pub fn height(&self) -> u32 {
        self.y_min.abs_diff(self.y_max)
    }

    /// Bounds are usable when min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }
}

// =============================================================================
// TESTS
// =============================================================================
