// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::auth::AuthError;
use crate::application::port::store::StoreError;
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::ui::composer;
use crate::ui::feed;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Feed(feed::Message),
    Composer(composer::Message),
    Notification(notifications::NotificationMessage),
    /// The auth provider resolved (or failed to resolve) the session.
    SessionResolved(Result<User, AuthError>),
    /// The store answered the feed fetch.
    PostsFetched(Result<Vec<Post>, StoreError>),
    /// The store acknowledged (or rejected) a post submission.
    PostSubmitted(Result<(), StoreError>),
    /// Result from the image file dialog. `None` means cancelled.
    ImageDialogResult(Option<PathBuf>),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional display name for the local session.
    pub display_name: Option<String>,
}
