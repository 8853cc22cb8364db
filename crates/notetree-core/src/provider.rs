//! Seam to the remote children endpoint.

use std::fmt;

use crate::page::ChildrenResponse;

/// Errors from a children lookup.
///
/// Transport failures, bad statuses, and undecodable bodies all collapse
/// into the same outcome at the controller level: the fetch failed, the
/// prior render stays, the user may retry by toggling again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure issuing the request.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The body failed to decode, or decoded to a malformed shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Decode(msg) => write!(f, "undecodable response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Result type for children lookups.
pub type FetchResult<T> = Result<T, FetchError>;

/// Source of a page's children and its context metadata.
///
/// Implementations block until the lookup completes or fails; the driver
/// runs them on background threads, so issuing a fetch never blocks
/// input handling. No retries, no cancellation, no imposed timeout.
pub trait ChildrenProvider {
    /// Fetch the children of `page_id` together with the context page.
    fn fetch_children(&self, page_id: &str) -> FetchResult<ChildrenResponse>;
}
