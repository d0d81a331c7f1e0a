//! Per-stop routing table.
//!
//! A [`RoutingTable`] maps destination stops to the cheapest [`RoutingEntry`]
//! discovered so far.  It only knows other stops by `StopId`; operations that
//! need other tables (transfer, traversal, synchronisation) live on
//! [`StopNetwork`](crate::StopNetwork), which owns every table.
//!
//! # Monotonicity
//!
//! [`add_or_update_entry`](RoutingTable::add_or_update_entry) is the only
//! write path and replaces an entry only for a strictly cheaper cost, so the
//! cost recorded for any destination never increases.

use std::collections::{BTreeMap, HashMap};

use dv_core::{Cost, StopId};

use crate::{RoutingEntry, RoutingError, RoutingResult};

/// Destination → best known entry, for one owning stop.
///
/// Backed by a `BTreeMap` so iteration is in `StopId` order; transfers visit
/// destinations deterministically and equal-cost ties resolve identically on
/// every run.
#[derive(Clone, Debug)]
pub struct RoutingTable {
    owner:   StopId,
    entries: BTreeMap<StopId, RoutingEntry>,
}

impl RoutingTable {
    /// Create the table for `owner`, holding only the zero-cost self entry.
    pub fn new(owner: StopId) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(owner, RoutingEntry::via(owner, Cost::ZERO));
        Self { owner, entries }
    }

    /// The stop this table routes from.
    #[inline]
    pub fn stop(&self) -> StopId {
        self.owner
    }

    /// Add `destination`, or improve its entry if `new_cost` is strictly
    /// lower than the current one.
    ///
    /// Returns `Ok(true)` if the table changed and `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// [`RoutingError::MissingDestination`] if `destination` is `None`.
    pub fn add_or_update_entry(
        &mut self,
        destination:  impl Into<Option<StopId>>,
        new_cost:     Cost,
        intermediate: StopId,
    ) -> RoutingResult<bool> {
        let destination: Option<StopId> = destination.into();
        let destination = destination.ok_or(RoutingError::MissingDestination)?;
        Ok(self.relax(destination, new_cost, intermediate))
    }

    /// Infallible core of `add_or_update_entry`.
    pub(crate) fn relax(
        &mut self,
        destination: StopId,
        new_cost: Cost,
        intermediate: StopId,
    ) -> bool {
        match self.entries.get(&destination) {
            Some(current) if new_cost >= current.cost() => false,
            _ => {
                self.entries
                    .insert(destination, RoutingEntry::new(Some(intermediate), new_cost.as_i64()));
                true
            }
        }
    }

    /// Cost to reach `stop`, or [`Cost::UNREACHABLE`] if it is absent or
    /// unknown to this table.
    pub fn cost_to(&self, stop: impl Into<Option<StopId>>) -> Cost {
        let stop: Option<StopId> = stop.into();
        stop.and_then(|s| self.entries.get(&s))
            .map_or(Cost::UNREACHABLE, RoutingEntry::cost)
    }

    /// Snapshot of every known destination and its current cost.
    pub fn costs(&self) -> HashMap<StopId, Cost> {
        self.entries.iter().map(|(&dest, e)| (dest, e.cost())).collect()
    }

    /// The stop to forward to in order to reach `destination`.
    ///
    /// `None` if `destination` is absent, unknown, or unreachable.
    pub fn next_stop(&self, destination: impl Into<Option<StopId>>) -> Option<StopId> {
        let destination: Option<StopId> = destination.into();
        destination
            .and_then(|d| self.entries.get(&d))
            .and_then(RoutingEntry::next)
    }

    /// The full entry for `destination`, if present.
    pub fn entry(&self, destination: StopId) -> Option<RoutingEntry> {
        self.entries.get(&destination).copied()
    }

    #[inline]
    pub fn contains(&self, destination: StopId) -> bool {
        self.entries.contains_key(&destination)
    }

    /// Number of destinations, including the owner itself.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table holds at least its self entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known destinations in ascending `StopId` order.
    pub fn destinations(&self) -> impl Iterator<Item = StopId> + '_ {
        self.entries.keys().copied()
    }

    /// `(destination, cost)` for every entry with a known path, in
    /// ascending `StopId` order.
    pub fn reachable(&self) -> impl Iterator<Item = (StopId, Cost)> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| e.is_reachable())
            .map(|(&dest, e)| (dest, e.cost()))
    }
}
