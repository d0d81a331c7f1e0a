//! `dv-routing` — per-stop routing tables and distance-vector convergence.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`entry`]   | `RoutingEntry` (next hop + cost, immutable)                 |
//! | [`table`]   | `RoutingTable` (destination → entry, one per stop)          |
//! | [`stop`]    | `Stop` (position, neighbours, owned table)                  |
//! | [`network`] | `StopNetwork` (arena, adjacency, R-tree snap)               |
//! | [`sync`]    | transfer, traversal, `synchronise`, `SyncReport`            |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |
//!
//! # Logging
//!
//! Emits `tracing` events (`trace` per improved entry, `debug` per pass,
//! `info` on convergence).  Installing a subscriber is left to the binary.

pub mod entry;
pub mod error;
pub mod network;
pub mod stop;
pub mod sync;
pub mod table;


pub use entry::RoutingEntry;
pub use error::{RoutingError, RoutingResult};
pub use network::StopNetwork;
pub use stop::Stop;
pub use sync::SyncReport;
pub use table::RoutingTable;
