// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.
//!
//! Routes component messages, resolves composer events into side effects,
//! and applies the session gate on the initial feed fetch.

use super::{App, Message};
use crate::ui::composer;
use crate::ui::feed::ModalVisibility;
use crate::ui::notifications::Notification;
use iced::Task;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Feed(feed_message) => {
            app.feed.update(feed_message);
            Task::none()
        }
        Message::Composer(composer_message) => handle_composer_message(app, composer_message),
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::SessionResolved(Ok(user)) => {
            app.session = Some(user);
            if app.feed.session_ready() {
                fetch_posts(app)
            } else {
                Task::none()
            }
        }
        // Without a session the feed never fetches; the share box still
        // renders and the compose dialog simply cannot submit.
        Message::SessionResolved(Err(_)) => Task::none(),
        Message::PostsFetched(result) => {
            // Posts render in store order; the cap only applies when the
            // config asks for one.
            app.feed.posts_loaded(result.map(|mut posts| {
                if let Some(cap) = app.config.feed_page_size {
                    posts.truncate(cap);
                }
                posts
            }));
            Task::none()
        }
        Message::PostSubmitted(Ok(())) => {
            app.notifications
                .push(Notification::success("notice-post-submitted"));
            // The store has no change feed; re-fetch to show the new post.
            fetch_posts(app)
        }
        // Rejected writes stay silent; the dialog is already closed and the
        // draft already cleared.
        Message::PostSubmitted(Err(_)) => Task::none(),
        Message::ImageDialogResult(file) => {
            // The native dialog can outlive the composer; a result that
            // arrives after close must not touch the draft.
            if app.feed.modal() == ModalVisibility::Closed {
                return Task::none();
            }
            if app.composer.attach_image(file).is_err() {
                app.notifications
                    .push(Notification::warning("notice-image-selection-empty"));
            }
            Task::none()
        }
        Message::Tick(_instant) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_composer_message(app: &mut App, message: composer::Message) -> Task<Message> {
    match app.composer.update(message, app.session.as_ref()) {
        composer::Event::None => Task::none(),
        composer::Event::PickImageRequested => {
            open_image_dialog(app.i18n.tr("composer-image-dialog-title"))
        }
        composer::Event::Submitted(payload) => {
            app.feed.toggle_modal();
            Task::perform(app.store.submit_post(payload), Message::PostSubmitted)
        }
        composer::Event::CloseRequested => {
            app.feed.toggle_modal();
            Task::none()
        }
    }
}

fn fetch_posts(app: &App) -> Task<Message> {
    Task::perform(app.store.fetch_posts(), Message::PostsFetched)
}

fn open_image_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::ImageDialogResult,
    )
}
