// SPDX-License-Identifier: MPL-2.0
//! Compose dialog: draft editing, attachment panels and submission.
//!
//! State down, messages up. The component owns the [`Draft`] and the editor
//! buffer; side effects (file dialog, store write, dialog dismissal) are
//! reported to the parent through [`Event`].

use crate::domain::draft::{AssetArea, Draft, EmptySelection};
use crate::domain::post::PostSubmission;
use crate::domain::user::User;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, space::horizontal as horizontal_space, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    /// Edit performed in the post text editor.
    EditorAction(text_editor::Action),
    /// One of the attachment toggles was pressed.
    AssetAreaSelected(AssetArea),
    /// The image panel's file picker button was pressed.
    PickImage,
    /// The video link input changed.
    VideoLinkEdited(String),
    /// The submit button was pressed.
    Submit,
    /// The close button or the backdrop was pressed.
    Close,
}

/// Side effects the parent must carry out.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the native file dialog for an image.
    PickImageRequested,
    /// A payload is ready for the store; the dialog should be dismissed.
    Submitted(PostSubmission),
    /// The dialog should be dismissed without submitting.
    CloseRequested,
}

#[derive(Default)]
pub struct State {
    draft: Draft,
    editor: text_editor::Content,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Forwards a chosen file to the draft. `None` means the user cancelled
    /// the dialog or confirmed an empty selection; the caller surfaces a
    /// notice and the prior attachment is kept.
    pub fn attach_image(&mut self, file: Option<PathBuf>) -> Result<(), EmptySelection> {
        self.draft.attach_image(file)
    }

    pub fn update(&mut self, message: Message, session: Option<&User>) -> Event {
        match message {
            Message::EditorAction(action) => {
                self.editor.perform(action);
                // The editor buffer reports a trailing newline even when
                // empty; strip it so the submit gate sees the real text.
                let mut text = self.editor.text();
                if text.ends_with('\n') {
                    text.pop();
                }
                self.draft.set_text(text);
                Event::None
            }
            Message::AssetAreaSelected(area) => {
                self.draft.switch_asset_area(area);
                Event::None
            }
            Message::PickImage => Event::PickImageRequested,
            Message::VideoLinkEdited(link) => {
                self.draft.set_video_link(link);
                Event::None
            }
            Message::Submit => {
                if !self.draft.can_submit() {
                    return Event::None;
                }
                let Some(user) = session else {
                    return Event::None;
                };
                let draft = std::mem::take(&mut self.draft);
                self.editor = text_editor::Content::new();
                Event::Submitted(draft.into_submission(user.clone()))
            }
            Message::Close => {
                self.reset();
                Event::CloseRequested
            }
        }
    }

    /// Clears the draft and the editor buffer, as on submit or close.
    pub fn reset(&mut self) {
        self.draft.reset();
        self.editor = text_editor::Content::new();
    }
}

pub fn view<'a>(
    state: &'a State,
    i18n: &'a I18n,
    session: Option<&'a User>,
    audience: Option<&'a str>,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(header(i18n))
        .push(identity(i18n, session))
        .push(
            text_editor(&state.editor)
                .placeholder(i18n.tr("composer-editor-placeholder"))
                .on_action(Message::EditorAction)
                .height(sizing::EDITOR_MIN_HEIGHT),
        );

    match state.draft.asset_area() {
        AssetArea::None => {}
        AssetArea::Image => body = body.push(image_panel(state, i18n)),
        AssetArea::Video => body = body.push(video_panel(state, i18n)),
    }

    body = body.push(footer(state, i18n, audience));

    Container::new(body)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

fn header(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("composer-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_900),
        )
        .push(horizontal_space())
        .push(
            button(icons::sized(icons::close(), sizing::ICON_MD))
                .padding(spacing::XXS)
                .style(styles::button::flat)
                .on_press(Message::Close),
        )
        .into()
}

fn identity<'a>(i18n: &'a I18n, session: Option<&'a User>) -> Element<'a, Message> {
    let avatar: Element<'a, Message> = match session.and_then(|user| user.photo.as_ref()) {
        Some(photo) => iced::widget::image(photo.clone())
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .into(),
        None => icons::sized(icons::user(), sizing::AVATAR).into(),
    };

    let name = match session {
        Some(user) => user.display_name.clone(),
        None => i18n.tr("composer-greeting"),
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(Text::new(name).size(typography::BODY_LG).color(palette::GRAY_900))
        .into()
}

fn image_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut panel = Column::new().spacing(spacing::XS).push(
        button(Text::new(i18n.tr("composer-select-image")).size(typography::BODY))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::start_post)
            .on_press(Message::PickImage),
    );

    if let Some(image) = state.draft.image() {
        panel = panel.push(
            iced::widget::image(image.clone())
                .width(Length::Fill)
                .content_fit(iced::ContentFit::Contain),
        );
    }

    panel.into()
}

fn video_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut panel = Column::new().spacing(spacing::XS).push(
        text_input(
            &i18n.tr("composer-video-placeholder"),
            state.draft.video().unwrap_or(""),
        )
        .on_input(Message::VideoLinkEdited)
        .size(typography::BODY)
        .padding(spacing::XS),
    );

    // Same panel the feed cards use; playback stays with the external
    // service, so the preview only names the link.
    if let Some(video) = state.draft.video() {
        let label = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(icons::sized(icons::video(), sizing::ICON_XL))
            .push(
                Text::new(video)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_200),
            );

        panel = panel.push(
            Container::new(label)
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .style(styles::container::video_panel),
        );
    }

    panel.into()
}

fn footer<'a>(
    state: &'a State,
    i18n: &'a I18n,
    audience: Option<&'a str>,
) -> Element<'a, Message> {
    let submit = state
        .draft
        .can_submit()
        .then_some(Message::Submit);

    // The audience selector is a fixed label; the override comes from the
    // config file.
    let audience_label = match audience {
        Some(label) => label.to_string(),
        None => i18n.tr("composer-audience-anyone"),
    };

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(asset_toggle(icons::photo(), AssetArea::Image, state))
        .push(asset_toggle(icons::video(), AssetArea::Video, state))
        .push(horizontal_space())
        .push(
            Text::new(audience_label)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .push(
            button(Text::new(i18n.tr("composer-post")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press_maybe(submit),
        )
        .into()
}

fn asset_toggle<'a>(icon: Svg<'static>, area: AssetArea, state: &State) -> Element<'a, Message> {
    let style = if state.draft.asset_area() == area {
        styles::button::asset_selected
    } else {
        styles::button::flat
    };

    button(icons::sized(icon, sizing::ICON_MD))
        .padding(spacing::XS)
        .style(style)
        .on_press(Message::AssetAreaSelected(area))
        .into()
}
