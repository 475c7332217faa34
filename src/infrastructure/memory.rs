// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters for the store and auth ports.
//!
//! [`MemoryStore`] keeps posts in process memory, resolves the
//! server-timestamp sentinel at write time, and returns the feed
//! newest-first. [`FixedSession`] resolves a session for a user supplied at
//! construction. Together they make the application runnable without a
//! remote backend and give the integration tests a deterministic target.

use crate::application::port::auth::{AuthError, AuthProvider};
use crate::application::port::store::{FeedStore, StoreError};
use crate::domain::post::{Post, PostId, PostSubmission, Timestamp};
use crate::domain::user::User;
use chrono::Utc;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory [`FeedStore`] adapter.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: Arc<Mutex<Vec<Post>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with posts, newest-first.
    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.len() as u64;
        Self {
            posts: Arc::new(Mutex::new(posts)),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Number of posts currently held. Test hook.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.lock().map(|posts| posts.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeedStore for MemoryStore {
    fn fetch_posts(&self) -> BoxFuture<'static, Result<Vec<Post>, StoreError>> {
        let posts = Arc::clone(&self.posts);
        Box::pin(async move {
            let posts = posts
                .lock()
                .map_err(|_| StoreError::Other("store poisoned".to_string()))?;
            Ok(posts.clone())
        })
    }

    fn submit_post(
        &self,
        submission: PostSubmission,
    ) -> BoxFuture<'static, Result<(), StoreError>> {
        let posts = Arc::clone(&self.posts);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Box::pin(async move {
            let post = Post {
                id: PostId::new(format!("post-{id}")),
                author: submission.user.into(),
                // The sentinel resolves to the write instant here.
                date: Timestamp::Resolved(Utc::now()),
                description: submission.description,
                image: submission.image,
                video: submission.video,
                likes: 0,
                comments: 0,
            };
            let mut posts = posts
                .lock()
                .map_err(|_| StoreError::Other("store poisoned".to_string()))?;
            posts.insert(0, post);
            Ok(())
        })
    }
}

/// [`AuthProvider`] adapter that resolves a session for a fixed user.
#[derive(Debug, Clone)]
pub struct FixedSession {
    user: User,
}

impl FixedSession {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

impl AuthProvider for FixedSession {
    fn resolve_session(&self) -> BoxFuture<'static, Result<User, AuthError>> {
        let user = self.user.clone();
        Box::pin(async move { Ok(user) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::Draft;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn empty_store_fetches_no_posts() {
        let store = MemoryStore::new();
        let posts = block_on(store.fetch_posts()).expect("fetch");
        assert!(posts.is_empty());
    }

    #[test]
    fn submitted_post_resolves_sentinel_timestamp() {
        let store = MemoryStore::new();
        let mut draft = Draft::new();
        draft.set_text("Hello world");

        block_on(store.submit_post(draft.into_submission(User::new("Ada")))).expect("submit");

        let posts = block_on(store.fetch_posts()).expect("fetch");
        assert_eq!(posts.len(), 1);
        assert!(posts[0].date.resolved().is_some());
        assert_eq!(posts[0].description, "Hello world");
        assert_eq!(posts[0].author.name, "Ada");
    }

    #[test]
    fn newest_post_comes_first() {
        let store = MemoryStore::new();
        for text in ["first", "second"] {
            let mut draft = Draft::new();
            draft.set_text(text);
            block_on(store.submit_post(draft.into_submission(User::new("Ada")))).expect("submit");
        }

        let posts = block_on(store.fetch_posts()).expect("fetch");
        assert_eq!(posts[0].description, "second");
        assert_eq!(posts[1].description, "first");
    }

    #[test]
    fn post_ids_are_unique() {
        let store = MemoryStore::new();
        for _ in 0..3 {
            let mut draft = Draft::new();
            draft.set_text("x");
            block_on(store.submit_post(draft.into_submission(User::new("Ada")))).expect("submit");
        }

        let posts = block_on(store.fetch_posts()).expect("fetch");
        assert_ne!(posts[0].id, posts[1].id);
        assert_ne!(posts[1].id, posts[2].id);
    }

    #[test]
    fn fixed_session_resolves_configured_user() {
        let auth = FixedSession::new(User::new("Grace"));
        let user = block_on(auth.resolve_session()).expect("session");
        assert_eq!(user.display_name, "Grace");
    }
}
