//! `dv-core` — foundational types for the `dv` distance-vector router.
//!
//! This crate is a dependency of every other `dv-*` crate.  It has no `dv-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StopId`                                              |
//! | [`cost`]        | `Cost` and the unreachable sentinel                   |
//! | [`position`]    | `Position`, `Metric` trait, `Manhattan`               |
//! | [`config`]      | `SyncConfig`                                          |
//! | [`error`]       | `DvError`, `DvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod cost;
pub mod error;
pub mod ids;
pub mod position;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SyncConfig;
pub use cost::Cost;
pub use error::{DvError, DvResult};
pub use ids::StopId;
pub use position::{Manhattan, Metric, Position};
