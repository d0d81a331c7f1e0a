//! Path cost with an explicit unreachable sentinel.
//!
//! Costs are non-negative integers (Manhattan distance units).  `u32::MAX` is
//! reserved as [`Cost::UNREACHABLE`], so every finite cost is strictly below
//! it and arithmetic saturates into the sentinel rather than wrapping.

use std::fmt;

/// A cumulative routing cost, or [`Cost::UNREACHABLE`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(pub u32);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// "No known path."  Compares greater than every finite cost.
    pub const UNREACHABLE: Cost = Cost(u32::MAX);

    /// Largest representable finite cost.
    pub const MAX_FINITE: Cost = Cost(u32::MAX - 1);

    /// Build a finite cost from a wide integer, clamping to [`Cost::MAX_FINITE`].
    #[inline]
    pub fn finite(value: u64) -> Cost {
        Cost(value.min(Self::MAX_FINITE.0 as u64) as u32)
    }

    #[inline]
    pub fn is_unreachable(self) -> bool {
        self == Self::UNREACHABLE
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        !self.is_unreachable()
    }

    /// Sum of two costs.  Unreachable on either side, or a sum that reaches
    /// the sentinel, yields [`Cost::UNREACHABLE`].
    #[inline]
    pub fn saturating_add(self, rhs: Cost) -> Cost {
        Cost(self.0.saturating_add(rhs.0))
    }

    /// The raw value as `i64`, for callers that deal in signed costs.
    #[inline]
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Cost {
    /// Returns the unreachable sentinel so an unset cost is never mistaken
    /// for a real path.
    #[inline]
    fn default() -> Self {
        Self::UNREACHABLE
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreachable() {
            f.write_str("unreachable")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
