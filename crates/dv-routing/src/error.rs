//! Routing-subsystem error type.

use thiserror::Error;

use dv_core::{DvError, StopId};

/// Errors produced by `dv-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("routing update has no destination")]
    MissingDestination,

    #[error("stop {0} not found in network")]
    StopNotFound(StopId),

    #[error("synchronisation did not converge within {passes} passes")]
    NotConverged { passes: u32 },

    #[error(transparent)]
    Core(#[from] DvError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
