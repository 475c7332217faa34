// SPDX-License-Identifier: MPL-2.0
//! Document store port definition.
//!
//! This module defines the [`FeedStore`] trait for reading the feed and
//! submitting new posts. Infrastructure adapters implement this trait to
//! bind a concrete backend; the UI layer only ever sees domain types.

use crate::domain::post::{Post, PostSubmission};
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur while talking to the document store.
///
/// Fetch failures resolve the feed's loading flag with no data and submit
/// failures drop the post; neither is surfaced beyond that, so these exist
/// mainly for adapters and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached.
    Unavailable,
    /// The backend rejected the request.
    Rejected(String),
    /// Anything else the adapter wants to report.
    Other(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "store unavailable"),
            StoreError::Rejected(msg) => write!(f, "store rejected request: {msg}"),
            StoreError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Port for the remote document store.
///
/// Both operations are fire-and-forget from the UI's perspective: they are
/// driven through `Task::perform` and their completion arrives as a message.
/// No retry or cancellation semantics are defined at this seam.
pub trait FeedStore: Send + Sync {
    /// Fetches all posts, in whatever order the store returns them
    /// (implicitly newest-first; not enforced here).
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot serve the feed.
    fn fetch_posts(&self) -> BoxFuture<'static, Result<Vec<Post>, StoreError>>;

    /// Submits a new post. The submission carries the server-timestamp
    /// sentinel; the store substitutes the actual write time.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend rejects or drops the post.
    fn submit_post(
        &self,
        submission: PostSubmission,
    ) -> BoxFuture<'static, Result<(), StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        assert_eq!(format!("{}", StoreError::Unavailable), "store unavailable");

        let err = StoreError::Rejected("quota".to_string());
        assert!(format!("{err}").contains("quota"));

        let err = StoreError::Other("weird".to_string());
        assert_eq!(format!("{err}"), "weird");
    }
}
