//! Stop positions and the distance metric between them.
//!
//! Stops sit on an integer grid.  The default metric is Manhattan distance,
//! which is symmetric and non-negative: the two properties the convergence
//! loop in `dv-routing` relies on.

use std::fmt;

use crate::Cost;

/// A fixed 2-D grid location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`, clamped to [`Cost::MAX_FINITE`].
    #[inline]
    pub fn manhattan(self, other: Position) -> Cost {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        Cost::finite(dx + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Metric trait ──────────────────────────────────────────────────────────────

/// Pluggable edge-cost function between two stops.
///
/// Implementations must be symmetric and return finite, non-negative costs
/// for every pair of positions; synchronisation terminates only under those
/// conditions.
pub trait Metric {
    fn distance(&self, a: Position, b: Position) -> Cost;
}

/// Manhattan (taxicab) distance.
#[derive(Copy, Clone, Debug, Default)]
pub struct Manhattan;

impl Metric for Manhattan {
    #[inline]
    fn distance(&self, a: Position, b: Position) -> Cost {
        a.manhattan(b)
    }
}
