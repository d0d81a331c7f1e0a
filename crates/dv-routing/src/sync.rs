//! Entry transfer, network traversal, and the convergence loop.
//!
//! # Algorithm
//!
//! ```text
//! repeat:
//!   changed = 0
//!   for n in traverse_network(from):        // every stop reachable from `from`
//!     for m in neighbours(n):
//!       for (dest, c) in table(n):           // distance-vector relaxation
//!         table(m).relax(dest, c + d(n, m), via = n)  → changed += 1 if improved
//! until changed == 0
//! ```
//!
//! Every relaxation adds an entry or strictly lowers a cost, and costs are
//! bounded below by the true shortest path (edge costs are non-negative), so
//! the loop reaches a fixed point after finitely many passes.  One call
//! mutates the table of every reachable stop, not just `from`'s.

use tracing::{debug, info, trace, warn};

use dv_core::{Cost, Metric, StopId};

use crate::{RoutingError, RoutingResult, StopNetwork};

// ── SyncReport ────────────────────────────────────────────────────────────────

/// Summary of one synchronisation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncReport {
    /// Passes executed, including the final quiet pass.
    pub passes: u32,
    /// Transfers that changed their target table, summed over all passes.
    pub changed_transfers: usize,
    /// Stops covered by the last pass.
    pub stops_visited: usize,
}

impl SyncReport {
    /// `true` if the run found the network already at its fixed point.
    pub fn was_converged(&self) -> bool {
        self.changed_transfers == 0
    }
}

// ── Operations ────────────────────────────────────────────────────────────────

impl<M: Metric> StopNetwork<M> {
    /// Push `from`'s entries into `other`'s table.
    ///
    /// For each reachable destination in `from`'s table the cost
    /// `cost_to(dest) + distance(from, other)` is offered to `other` with
    /// `from` as next hop.  Returns `true` iff at least one of `other`'s
    /// entries was added or improved.
    ///
    /// `other` must be a neighbour of `from`.  Transfers to an absent,
    /// unknown, or non-neighbouring stop return `false` and change nothing.
    pub fn transfer_entries(&mut self, from: StopId, other: impl Into<Option<StopId>>) -> bool {
        let other: Option<StopId> = other.into();
        let Some(other) = other else {
            return false;
        };
        let Some(source) = self.stop(from) else {
            return false;
        };
        if !source.neighbours.contains(&other) {
            return false;
        }
        let Some(hop) = self.distance(from, other) else {
            return false;
        };

        let offers: Vec<(StopId, Cost)> = source.table.reachable().collect();
        let target = &mut self.stops[other.index()].table;

        let mut changed = false;
        for (dest, cost) in offers {
            let candidate = cost.saturating_add(hop);
            if target.relax(dest, candidate, from) {
                trace!(%from, to = %other, %dest, cost = %candidate, "entry improved");
                changed = true;
            }
        }
        changed
    }

    /// Every stop reachable from `from`, each exactly once, in depth-first
    /// discovery order starting with `from` itself.
    ///
    /// The search starts from `from` and every destination already known to
    /// its table, and expands through each visited stop's neighbours.
    /// Destinations that are not stops of this network are skipped.
    pub fn traverse_network(&self, from: StopId) -> RoutingResult<Vec<StopId>> {
        let start = self.require(from)?;

        let mut visited = vec![false; self.stops.len()];
        let mut order = Vec::new();

        // Stack is LIFO: `from` pops first and is searched depth-first, then
        // any table-known seeds not yet visited.
        let mut stack: Vec<StopId> = start
            .table
            .destinations()
            .filter(|&d| d != from && d.index() < self.stops.len())
            .collect();
        stack.reverse();
        stack.push(from);

        while let Some(id) = stack.pop() {
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            order.push(id);

            for &m in self.stops[id.index()].neighbours.iter().rev() {
                if !visited[m.index()] {
                    stack.push(m);
                }
            }
        }
        Ok(order)
    }

    /// Drive every table reachable from `from` to the distance-vector fixed
    /// point.
    ///
    /// Runs full passes until one produces no change.  With
    /// `SyncConfig::max_passes` set, gives up with
    /// [`RoutingError::NotConverged`] once the limit is spent.
    pub fn synchronise(&mut self, from: StopId) -> RoutingResult<SyncReport> {
        self.require(from)?;
        let report = self.converge(|net| net.traverse_network(from))?;
        info!(
            %from,
            passes = report.passes,
            changed = report.changed_transfers,
            stops = report.stops_visited,
            "routing tables converged"
        );
        Ok(report)
    }

    /// Synchronise the whole network, including components unreachable from
    /// one another.  Each pass covers every stop.
    pub fn synchronise_all(&mut self) -> RoutingResult<SyncReport> {
        let report = self.converge(|net| Ok(net.stops.iter().map(|s| s.id).collect()))?;
        info!(
            passes = report.passes,
            changed = report.changed_transfers,
            stops = report.stops_visited,
            "all routing tables converged"
        );
        Ok(report)
    }

    /// Repeat passes over the stops returned by `scope` until quiescent.
    fn converge<F>(&mut self, mut scope: F) -> RoutingResult<SyncReport>
    where
        F: FnMut(&Self) -> RoutingResult<Vec<StopId>>,
    {
        let mut report = SyncReport::default();
        loop {
            let covered = scope(&*self)?;
            let changed = self.sync_pass(&covered);

            report.passes += 1;
            report.changed_transfers += changed;
            report.stops_visited = covered.len();
            debug!(pass = report.passes, changed, stops = covered.len(), "synchronisation pass");

            if changed == 0 {
                return Ok(report);
            }
            if self.config.max_passes.is_some_and(|limit| report.passes >= limit) {
                warn!(passes = report.passes, "synchronisation pass limit reached");
                return Err(RoutingError::NotConverged { passes: report.passes });
            }
        }
    }

    /// One sweep: every covered stop transfers to each of its neighbours.
    /// Returns the number of transfers that changed their target.
    fn sync_pass(&mut self, covered: &[StopId]) -> usize {
        let mut changed = 0;
        for &n in covered {
            let neighbours: Vec<StopId> =
                self.stops[n.index()].neighbours.iter().copied().collect();
            for m in neighbours {
                if self.transfer_entries(n, m) {
                    changed += 1;
                }
            }
        }
        changed
    }
}
