//! A stop: fixed position, outgoing neighbour set, and its one routing table.

use std::collections::BTreeSet;

use dv_core::{Position, StopId};

use crate::RoutingTable;

/// One node of the network.
///
/// Stops are created by [`StopNetwork::add_stop`](crate::StopNetwork::add_stop)
/// and never removed.  `neighbours` is the directed adjacency used for
/// propagation: entries flow from this stop to each listed neighbour.
#[derive(Clone, Debug)]
pub struct Stop {
    pub(crate) id:         StopId,
    pub(crate) name:       String,
    pub(crate) position:   Position,
    pub(crate) neighbours: BTreeSet<StopId>,
    pub(crate) table:      RoutingTable,
}

impl Stop {
    pub(crate) fn new(id: StopId, name: String, position: Position) -> Self {
        Self {
            id,
            name,
            position,
            neighbours: BTreeSet::new(),
            table: RoutingTable::new(id),
        }
    }

    #[inline]
    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn neighbours(&self) -> &BTreeSet<StopId> {
        &self.neighbours
    }

    pub fn routing_table(&self) -> &RoutingTable {
        &self.table
    }
}
