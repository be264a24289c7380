//! Client for the skip hire API.

mod client;
mod model;

pub use client::SkipApi;
pub use model::SkipOffering;
#[cfg(test)]
pub(crate) use model::test_offering;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the outbound offerings fetch.
///
/// Returned to the caller instead of being swallowed at the call site, so
/// the view can decide presentation and tests can inspect the failure path.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport failure or a malformed response body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with {0}")]
    Status(StatusCode),
}
