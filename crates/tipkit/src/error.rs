use std::result::Result as StdResult;

use thiserror::Error;

use crate::host::HostError;

/// Convenient result type for the tooltip crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors surfaced by the tooltip controller.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration update was rejected.
    #[error(transparent)]
    Config(#[from] config::Error),

    /// The host failed to create or update the overlay.
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// The tooltip was unbound from its widget.
    #[error("tooltip is unbound")]
    Unbound,
}
