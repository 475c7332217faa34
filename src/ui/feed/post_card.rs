// SPDX-License-Identifier: MPL-2.0
//! Renders a single post card.
//!
//! The social counts and action buttons are presentational only; nothing is
//! wired to them.

use super::Message;
use crate::domain::post::Post;
use crate::domain::timefmt;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use chrono::Utc;
use iced::widget::{button, rule::horizontal as horizontal_rule, svg::Svg, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(post: &'a Post, i18n: &'a I18n) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(header(post))
        .push(
            Text::new(&post.description)
                .size(typography::BODY)
                .color(palette::GRAY_900),
        );

    if let Some(image) = &post.image {
        body = body.push(
            iced::widget::image(image.clone())
                .width(Length::Fill)
                .content_fit(iced::ContentFit::Contain),
        );
    }

    if let Some(video) = &post.video {
        body = body.push(video_panel(video, i18n));
    }

    body = body
        .push(counts(post, i18n))
        .push(horizontal_rule(1))
        .push(actions(i18n));

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn header(post: &Post) -> Element<'_, Message> {
    let avatar: Element<'_, Message> = match &post.author.photo {
        Some(photo) => iced::widget::image(photo.clone())
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .into(),
        None => icons::sized(icons::user(), sizing::AVATAR).into(),
    };

    let mut identity = Column::new().push(
        Text::new(&post.author.name)
            .size(typography::BODY)
            .color(palette::GRAY_900),
    );

    if let Some(description) = &post.author.description {
        identity = identity.push(
            Text::new(description)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }

    identity = identity.push(
        Text::new(timefmt::relative(post.date, Utc::now()))
            .size(typography::CAPTION)
            .color(palette::GRAY_500),
    );

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(identity.width(Length::Fill))
        .push(Element::from(icons::sized(icons::ellipsis(), sizing::ICON_MD)))
        .into()
}

/// Stands in for an embedded player; playback stays with the external
/// service, so the card only names the link.
fn video_panel<'a>(video: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let label = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icons::video(), sizing::ICON_XL))
        .push(
            Text::new(i18n.tr("post-video-panel"))
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(video)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    Container::new(label)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::video_panel)
        .into()
}

fn counts<'a>(post: &'a Post, i18n: &'a I18n) -> Element<'a, Message> {
    let likes = i18n.tr_with_args("post-likes-count", &[("count", &post.likes.to_string())]);
    let comments = i18n.tr_with_args(
        "post-comments-count",
        &[("count", &post.comments.to_string())],
    );

    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(likes).size(typography::CAPTION).color(palette::GRAY_500))
        .push(
            Text::new(comments)
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        )
        .into()
}

fn actions(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(action(i18n.tr("post-action-like"), icons::like()))
        .push(action(i18n.tr("post-action-comment"), icons::comment()))
        .push(action(i18n.tr("post-action-share"), icons::share()))
        .push(action(i18n.tr("post-action-send"), icons::send()))
        .into()
}

fn action<'a>(label: String, icon: Svg<'static>) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(Text::new(label).size(typography::BODY));

    // No on_press: presentational only.
    button(content)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::flat)
        .into()
}
