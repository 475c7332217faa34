// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: feed, compose dialog overlay, and toasts.

use super::{App, Message};
use crate::ui::composer;
use crate::ui::feed::{self, ModalVisibility};
use crate::ui::modal;
use crate::ui::notifications::Toast;
use iced::widget::stack;
use iced::Element;

pub fn view(app: &App) -> Element<'_, Message> {
    let feed_view = feed::view(feed::ViewContext {
        i18n: &app.i18n,
        state: &app.feed,
        session: app.session.as_ref(),
    })
    .map(Message::Feed);

    let content: Element<'_, Message> = match app.feed.modal() {
        ModalVisibility::Closed => feed_view,
        ModalVisibility::Open => {
            let dialog = composer::view(
                &app.composer,
                &app.i18n,
                app.session.as_ref(),
                app.config.default_audience.as_deref(),
            )
            .map(Message::Composer);
            // Backdrop presses close the dialog; presses inside it do not.
            modal::overlay(feed_view, dialog, Message::Composer(composer::Message::Close))
        }
    };

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    stack![content, toasts].into()
}
