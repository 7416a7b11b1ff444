use thiserror::Error;

use tether_core::LayoutError;

/// Errors that can occur while instantiating a slave.
#[derive(Debug, Error)]
pub enum InstantiateError {
    #[error("missing instance name")]
    MissingInstanceName,

    #[error("invalid model layout: {0}")]
    Layout(#[from] LayoutError),
}
