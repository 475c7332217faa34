// SPDX-License-Identifier: MPL-2.0
//! Feed records as read from, and written to, the document store.

use crate::domain::user::User;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Unique identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Creation time of a post.
///
/// The write path carries the sentinel; the store substitutes the actual
/// instant server-side. The read path may still see the sentinel for posts
/// whose timestamp has not resolved yet, which renders as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Placeholder substituted by the store at write time.
    ServerAssigned,
    /// Resolved creation instant returned by the store.
    Resolved(DateTime<Utc>),
}

impl Timestamp {
    /// Returns the resolved instant, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::ServerAssigned => None,
            Timestamp::Resolved(instant) => Some(*instant),
        }
    }
}

/// Denormalized author identity carried on each post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub photo: Option<PathBuf>,
    pub description: Option<String>,
}

impl From<User> for Author {
    fn from(user: User) -> Self {
        Self {
            name: user.display_name,
            photo: user.photo,
            description: user.headline,
        }
    }
}

/// A post as returned by the document store.
///
/// Immutable in this application's view. Image and video are independently
/// optional here; the composer guarantees it never submits both, but the
/// store may return posts with neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub date: Timestamp,
    pub description: String,
    pub image: Option<PathBuf>,
    pub video: Option<String>,
    /// Presentational social counts; no behavior is wired to them.
    pub likes: u32,
    pub comments: u32,
}

/// Payload handed to the store's submit operation.
///
/// Built by [`Draft::into_submission`](crate::domain::draft::Draft::into_submission);
/// the timestamp is always the server-assigned sentinel at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSubmission {
    pub image: Option<PathBuf>,
    pub video: Option<String>,
    pub user: User,
    pub description: String,
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_timestamp_has_no_resolved_instant() {
        assert_eq!(Timestamp::ServerAssigned.resolved(), None);
    }

    #[test]
    fn resolved_timestamp_round_trips() {
        let now = Utc::now();
        assert_eq!(Timestamp::Resolved(now).resolved(), Some(now));
    }

    #[test]
    fn author_from_user_carries_identity() {
        let user = User::new("Ada").with_headline("Analyst");
        let author = Author::from(user);
        assert_eq!(author.name, "Ada");
        assert_eq!(author.description.as_deref(), Some("Analyst"));
        assert!(author.photo.is_none());
    }
}
