//! A single routing-table row: best known next hop and cumulative cost.

use dv_core::{Cost, StopId};

/// Best known way to reach one destination.
///
/// Entries are immutable values.  A table improves a route by replacing the
/// whole entry, never by editing it.
///
/// Invariant: `next` is `None` exactly when `cost` is [`Cost::UNREACHABLE`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingEntry {
    next: Option<StopId>,
    cost: Cost,
}

impl RoutingEntry {
    /// The "no known path" entry.
    pub const UNREACHABLE: RoutingEntry = RoutingEntry { next: None, cost: Cost::UNREACHABLE };

    /// Build an entry, normalising malformed input to [`RoutingEntry::UNREACHABLE`].
    ///
    /// A missing `next`, a negative `cost`, or a cost that does not fit below
    /// the sentinel all produce the unreachable entry for both fields.
    pub fn new(next: Option<StopId>, cost: i64) -> Self {
        match (next, u32::try_from(cost)) {
            (Some(next), Ok(raw)) if Cost(raw).is_finite() => {
                Self { next: Some(next), cost: Cost(raw) }
            }
            _ => Self::UNREACHABLE,
        }
    }

    /// Shorthand for a finite route via `next`.
    #[inline]
    pub fn via(next: StopId, cost: Cost) -> Self {
        Self::new(Some(next), cost.as_i64())
    }

    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The stop to forward to, or `None` if the destination is unreachable.
    #[inline]
    pub fn next(&self) -> Option<StopId> {
        self.next
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.next.is_some()
    }
}

impl Default for RoutingEntry {
    fn default() -> Self {
        Self::UNREACHABLE
    }
}
