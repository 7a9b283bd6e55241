use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the geometry crate.
pub type Result<T> = StdResult<T, Error>;

/// Errors produced by anchor parsing and platform geometry queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// An anchor string was empty or contained something other than `n`, `e`, `s`, `w`.
    #[error("invalid anchor {input:?}: expected a combination of n, e, s, w or \"center\"")]
    InvalidAnchor {
        /// The rejected input.
        input: String,
    },

    /// The platform could not report a usable work area.
    #[error("work area unavailable: {0}")]
    WorkAreaUnavailable(String),
}
