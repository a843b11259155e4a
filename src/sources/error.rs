//! Error taxonomy for collection API calls.

use thiserror::Error;

/// Failures of the remote collection client.
///
/// An empty result set is not an error; it arrives as an empty page.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure, timeout, or non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The requested record id does not exist.
    #[error("Artwork {0} not found")]
    NotFound(u64),

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
