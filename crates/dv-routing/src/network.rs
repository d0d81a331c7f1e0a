//! Stop arena, adjacency, and spatial lookup.
//!
//! # Ownership
//!
//! [`StopNetwork`] owns every [`Stop`] (and therefore every routing table) in
//! a `Vec` indexed by `StopId`.  Stops refer to each other only by ID, so the
//! cyclic stop → neighbour → stop graph never becomes an ownership cycle.
//! Holding `&mut StopNetwork` is the capability to rewrite any table, which is
//! what synchronisation requires (see [`crate::sync`]).
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps grid positions to the nearest `StopId`, for
//! snapping arbitrary coordinates onto the network.

use std::collections::BTreeSet;

use rstar::RTree;
use rstar::primitives::GeomWithData;
use tracing::trace;

use dv_core::{Cost, Manhattan, Metric, Position, StopId, SyncConfig};

use crate::{RoutingError, RoutingResult, RoutingTable, Stop};

/// Entry stored in the R-tree spatial index: an `[x, y]` point with the
/// associated `StopId`.  `f64` holds every `i32` coordinate exactly.
type StopPoint = GeomWithData<[f64; 2], StopId>;

#[inline]
fn point(pos: Position) -> [f64; 2] {
    [pos.x as f64, pos.y as f64]
}

// ── StopNetwork ───────────────────────────────────────────────────────────────

/// All stops of one network plus the metric that prices the hops between them.
///
/// # Example
///
/// ```
/// use dv_core::{Cost, Position};
/// use dv_routing::StopNetwork;
///
/// let mut net = StopNetwork::new();
/// let a = net.add_stop("A", Position::new(0, 0));
/// let b = net.add_stop("B", Position::new(5, 0));
/// let c = net.add_stop("C", Position::new(5, 3));
/// net.add_neighbour(b, a).unwrap();
/// net.add_neighbour(b, c).unwrap();
///
/// let table = net.table(a).unwrap();
/// assert_eq!(table.cost_to(c), Cost(8));
/// assert_eq!(table.next_stop(c), Some(b));
/// ```
pub struct StopNetwork<M: Metric = Manhattan> {
    pub(crate) stops:  Vec<Stop>,
    pub(crate) config: SyncConfig,
    metric:            M,
    spatial_idx:       RTree<StopPoint>,
}

impl StopNetwork<Manhattan> {
    /// Empty network with the Manhattan metric and default configuration.
    pub fn new() -> Self {
        Self::build(Manhattan, SyncConfig::default())
    }

    /// Empty network with the Manhattan metric and the given configuration.
    pub fn with_config(config: SyncConfig) -> RoutingResult<Self> {
        Self::with_metric(Manhattan, config)
    }
}

impl Default for StopNetwork<Manhattan> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> StopNetwork<M> {
    /// Empty network with a custom metric.
    pub fn with_metric(metric: M, config: SyncConfig) -> RoutingResult<Self> {
        config.validate()?;
        Ok(Self::build(metric, config))
    }

    fn build(metric: M, config: SyncConfig) -> Self {
        Self { stops: Vec::new(), config, metric, spatial_idx: RTree::new() }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    // ── Stops ─────────────────────────────────────────────────────────────

    /// Add a stop and return its `StopId` (sequential from 0).
    ///
    /// The new stop has no neighbours and a table holding only itself.
    ///
    /// # Panics
    ///
    /// If the network already holds `u32::MAX + 1` stops.
    pub fn add_stop(&mut self, name: impl Into<String>, position: Position) -> StopId {
        let Ok(id) = StopId::try_from(self.stops.len()) else {
            panic!("stop count {} exceeds the StopId range", self.stops.len());
        };
        self.stops.push(Stop::new(id, name.into(), position));
        self.spatial_idx.insert(StopPoint::new(point(position), id));
        id
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn stops(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.stops.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<StopId> {
        self.stops.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// The routing table owned by `id`.
    pub fn table(&self, id: StopId) -> Option<&RoutingTable> {
        self.stop(id).map(|s| &s.table)
    }

    /// Mutable access to one table, for seeding entries by hand.
    pub fn table_mut(&mut self, id: StopId) -> Option<&mut RoutingTable> {
        self.stops.get_mut(id.index()).map(|s| &mut s.table)
    }

    pub fn neighbours(&self, id: StopId) -> Option<&BTreeSet<StopId>> {
        self.stop(id).map(|s| &s.neighbours)
    }

    /// Metric distance between two stops, `None` if either is unknown.
    pub fn distance(&self, a: StopId, b: StopId) -> Option<Cost> {
        let a = self.stop(a)?;
        let b = self.stop(b)?;
        Some(self.metric.distance(a.position, b.position))
    }

    pub(crate) fn require(&self, id: StopId) -> RoutingResult<&Stop> {
        self.stop(id).ok_or(RoutingError::StopNotFound(id))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The stop nearest to `pos` (Euclidean), `None` only for an empty network.
    pub fn nearest_stop(&self, pos: Position) -> Option<StopId> {
        self.spatial_idx.nearest_neighbor(&point(pos)).map(|p| p.data)
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Make `neighbour` a neighbour of `stop` and fold the direct hop into
    /// `stop`'s table.
    ///
    /// The link is one-directional: `stop` will push its entries to
    /// `neighbour` during synchronisation.  Use [`connect`](Self::connect)
    /// for a two-way link.
    ///
    /// If `neighbour` was not yet in `stop`'s table it is inserted with the
    /// metric distance as cost and itself as next hop, and (with
    /// `auto_synchronise`) the whole reachable network is synchronised.  If
    /// it was already known, its entry is re-offered at its current cost,
    /// which leaves the table unchanged and does not resynchronise.
    ///
    /// Returns whether `stop`'s table changed.
    pub fn add_neighbour(&mut self, stop: StopId, neighbour: StopId) -> RoutingResult<bool> {
        let link = self.link(stop, neighbour)?;
        if link.table_changed && self.config.auto_synchronise {
            self.synchronise(stop)?;
        }
        Ok(link.table_changed)
    }

    /// Link `a` and `b` in both directions, then synchronise once if either
    /// link is new.
    ///
    /// Both links are in place before synchronisation runs, so two
    /// previously separate components learn each other's routes, and a new
    /// shortcut between stops that already knew each other is priced in.
    ///
    /// Returns whether either link was new.
    pub fn connect(&mut self, a: StopId, b: StopId) -> RoutingResult<bool> {
        let forward = self.link(a, b)?;
        let backward = self.link(b, a)?;
        let added = forward.added || backward.added;
        let changed = forward.table_changed || backward.table_changed;
        if (added || changed) && self.config.auto_synchronise {
            self.synchronise(a)?;
        }
        Ok(added)
    }

    /// Adjacency insert plus direct-entry update, without synchronising.
    ///
    /// A self link is a no-op: the owner's self entry is always present at
    /// cost zero, and the adjacency set is left as it was.
    fn link(&mut self, stop: StopId, neighbour: StopId) -> RoutingResult<Link> {
        self.require(neighbour)?;
        if stop == neighbour {
            return Ok(Link { added: false, table_changed: false });
        }
        let hop = self
            .distance(stop, neighbour)
            .ok_or(RoutingError::StopNotFound(stop))?;

        let s = &mut self.stops[stop.index()];
        let added = s.neighbours.insert(neighbour);

        let table_changed = if s.table.contains(neighbour) {
            let current = s.table.cost_to(neighbour);
            s.table.relax(neighbour, current, neighbour)
        } else {
            s.table.relax(neighbour, hop, neighbour)
        };
        trace!(%stop, %neighbour, cost = %hop, added, table_changed, "neighbour linked");
        Ok(Link { added, table_changed })
    }
}

/// Outcome of [`StopNetwork::link`].
struct Link {
    /// `neighbour` was not yet in the adjacency set.
    added:         bool,
    /// The owner's table gained or improved the direct entry.
    table_changed: bool,
}
