// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the feed and the
//! compose dialog.
//!
//! The `App` struct wires the UI components to the store and auth ports and
//! translates component events into side effects like store writes or the
//! native image dialog. Policy decisions (session gating, refresh after
//! submit, notification routing) live next to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::auth::AuthProvider;
use crate::application::port::store::FeedStore;
use crate::config::{self, Config};
use crate::domain::user::User;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FixedSession, MemoryStore};
use crate::ui::composer;
use crate::ui::feed;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Display name used when the launcher does not provide one.
const DEFAULT_DISPLAY_NAME: &str = "Feedline User";

/// Root Iced application state bridging UI components, localization, and the
/// storage/auth ports.
pub struct App {
    pub i18n: I18n,
    config: Config,
    store: Arc<dyn FeedStore>,
    auth: Arc<dyn AuthProvider>,
    /// `None` until the auth provider answers.
    session: Option<User>,
    feed: feed::State,
    composer: composer::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("modal", &self.feed.modal())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous session
    /// resolution based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(_) => (Config::default(), Some("notice-config-load-failed")),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let display_name = flags
            .display_name
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
        let store: Arc<dyn FeedStore> = Arc::new(MemoryStore::new());
        let auth: Arc<dyn AuthProvider> = Arc::new(FixedSession::new(User::new(display_name)));

        let mut app = Self::with_backends(i18n, config, store, auth);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let resolve = app.auth.resolve_session();
        let task = Task::perform(resolve, Message::SessionResolved);
        (app, task)
    }

    /// Assembles an app over explicit port implementations. Used by `new`
    /// and by integration tests that drive the update loop directly.
    pub fn with_backends(
        i18n: I18n,
        config: Config,
        store: Arc<dyn FeedStore>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            i18n,
            config,
            store,
            auth,
            session: None,
            feed: feed::State::new(),
            composer: composer::State::new(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn feed(&self) -> &feed::State {
        &self.feed
    }

    #[must_use]
    pub fn composer(&self) -> &composer::State {
        &self.composer
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{Author, Post, PostId, Timestamp};
    use crate::ui::feed::ModalVisibility;
    use chrono::{TimeZone, Utc};
    use iced::widget::text_editor::{Action, Edit};

    fn sample_post(id: &str, description: &str) -> Post {
        Post {
            id: PostId::new(id),
            author: Author::from(User::new("Grace")),
            date: Timestamp::Resolved(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            description: description.to_string(),
            image: None,
            video: None,
            likes: 0,
            comments: 0,
        }
    }

    fn test_app() -> App {
        App::with_backends(
            I18n::default(),
            Config::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(FixedSession::new(User::new("Ada"))),
        )
    }

    #[test]
    fn session_resolution_raises_the_loading_flag() {
        let mut app = test_app();
        assert!(!app.feed().is_loading());

        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));

        assert!(app.session().is_some());
        assert!(app.feed().is_loading());
    }

    #[test]
    fn failed_session_resolution_leaves_the_feed_gated() {
        let mut app = test_app();

        let _ = app.update(Message::SessionResolved(Err(
            crate::application::port::auth::AuthError::NoSession,
        )));

        assert!(app.session().is_none());
        assert!(!app.feed().is_loading());
    }

    #[test]
    fn fetched_posts_land_in_the_feed() {
        let mut app = test_app();
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));

        let _ = app.update(Message::PostsFetched(Ok(vec![sample_post("p-0", "hello")])));

        assert!(!app.feed().is_loading());
        assert_eq!(app.feed().posts().len(), 1);
        assert_eq!(app.feed().posts()[0].description, "hello");
    }

    #[test]
    fn fetch_results_render_uncapped_by_default() {
        let mut app = test_app();
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));

        let posts = (0..60)
            .map(|n| sample_post(&format!("p-{n}"), "body"))
            .collect::<Vec<_>>();
        let _ = app.update(Message::PostsFetched(Ok(posts)));

        assert_eq!(app.feed().posts().len(), 60);
    }

    #[test]
    fn configured_page_size_caps_fetch_results() {
        let config = Config {
            feed_page_size: Some(1),
            ..Config::default()
        };
        let mut app = App::with_backends(
            I18n::default(),
            config,
            Arc::new(MemoryStore::new()),
            Arc::new(FixedSession::new(User::new("Ada"))),
        );
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));

        let _ = app.update(Message::PostsFetched(Ok(vec![
            sample_post("p-0", "first"),
            sample_post("p-1", "second"),
        ])));

        assert_eq!(app.feed().posts().len(), 1);
        assert_eq!(app.feed().posts()[0].description, "first");
    }

    #[test]
    fn failed_fetch_resolves_loading_without_posts() {
        let mut app = test_app();
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));

        let _ = app.update(Message::PostsFetched(Err(
            crate::application::port::store::StoreError::Unavailable,
        )));

        assert!(!app.feed().is_loading());
        assert!(app.feed().posts().is_empty());
    }

    #[test]
    fn compose_request_opens_the_dialog_and_close_shuts_it() {
        let mut app = test_app();

        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        assert_eq!(app.feed().modal(), ModalVisibility::Open);

        let _ = app.update(Message::Composer(composer::Message::Close));
        assert_eq!(app.feed().modal(), ModalVisibility::Closed);
    }

    #[test]
    fn closing_the_dialog_discards_the_draft() {
        let mut app = test_app();
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        let _ = app.update(Message::Composer(composer::Message::EditorAction(
            Action::Edit(Edit::Paste(std::sync::Arc::new("unfinished".to_owned()))),
        )));

        let _ = app.update(Message::Composer(composer::Message::Close));

        assert_eq!(app.composer().draft().text(), "");
    }

    #[test]
    fn submit_closes_the_dialog_and_clears_the_draft() {
        let mut app = test_app();
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        let _ = app.update(Message::Composer(composer::Message::EditorAction(
            Action::Edit(Edit::Paste(std::sync::Arc::new("Hello world".to_owned()))),
        )));

        let _ = app.update(Message::Composer(composer::Message::Submit));

        assert_eq!(app.feed().modal(), ModalVisibility::Closed);
        assert_eq!(app.composer().draft().text(), "");
    }

    #[test]
    fn submit_with_empty_draft_keeps_the_dialog_open() {
        let mut app = test_app();
        let _ = app.update(Message::SessionResolved(Ok(User::new("Ada"))));
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));

        let _ = app.update(Message::Composer(composer::Message::Submit));

        assert_eq!(app.feed().modal(), ModalVisibility::Open);
    }

    #[test]
    fn acknowledged_submission_shows_a_toast() {
        let mut app = test_app();

        let _ = app.update(Message::PostSubmitted(Ok(())));

        assert!(app.notifications().has_notifications());
    }

    #[test]
    fn rejected_submission_stays_silent() {
        let mut app = test_app();

        let _ = app.update(Message::PostSubmitted(Err(
            crate::application::port::store::StoreError::Rejected("denied".into()),
        )));

        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn cancelled_image_dialog_shows_a_warning_toast() {
        let mut app = test_app();
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        let _ = app.update(Message::Composer(composer::Message::AssetAreaSelected(
            crate::domain::draft::AssetArea::Image,
        )));

        let _ = app.update(Message::ImageDialogResult(None));

        assert!(app.notifications().has_notifications());
        assert!(app.composer().draft().image().is_none());
    }

    #[test]
    fn chosen_image_lands_in_the_draft() {
        let mut app = test_app();
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        let _ = app.update(Message::Composer(composer::Message::AssetAreaSelected(
            crate::domain::draft::AssetArea::Image,
        )));

        let _ = app.update(Message::ImageDialogResult(Some(std::path::PathBuf::from(
            "photo.png",
        ))));

        assert!(app.composer().draft().image().is_some());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn dialog_result_after_close_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::Feed(feed::Message::ComposeRequested));
        let _ = app.update(Message::Composer(composer::Message::AssetAreaSelected(
            crate::domain::draft::AssetArea::Image,
        )));
        let _ = app.update(Message::Composer(composer::Message::Close));

        let _ = app.update(Message::ImageDialogResult(Some(std::path::PathBuf::from(
            "late.png",
        ))));

        assert!(app.composer().draft().image().is_none());

        let _ = app.update(Message::ImageDialogResult(None));

        assert!(!app.notifications().has_notifications());
    }
}
