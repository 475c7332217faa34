// SPDX-License-Identifier: MPL-2.0
//! Main feed screen: share box, post list, and compose-dialog visibility.
//!
//! The feed owns the single modal visibility value (state down, messages
//! up); the compose dialog only ever requests changes through events the
//! application root translates back into [`State::toggle_modal`].

mod post_card;

use crate::application::port::store::StoreError;
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, Element, Length};

/// Whether the compose dialog is shown. Owned by the feed, toggled by every
/// trigger affordance and by the dialog's own close paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

impl ModalVisibility {
    /// Strict alternation; there is no state besides open and closed.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ModalVisibility::Open => ModalVisibility::Closed,
            ModalVisibility::Closed => ModalVisibility::Open,
        }
    }
}

/// Messages emitted by the feed's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Any of the share-box trigger affordances was pressed.
    ComposeRequested,
}

/// Feed screen state.
#[derive(Debug, Default)]
pub struct State {
    posts: Vec<Post>,
    loading: bool,
    fetched: bool,
    modal: ModalVisibility,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the session transitions from absent to present.
    ///
    /// Returns `true` exactly once per mount; the caller then issues the
    /// fetch. The loading flag stays raised until the result lands.
    pub fn session_ready(&mut self) -> bool {
        if self.fetched {
            return false;
        }
        self.fetched = true;
        self.loading = true;
        true
    }

    /// Resolves an in-flight fetch.
    ///
    /// A failed fetch resolves the loading flag with no data; there is no
    /// local error surface for it.
    pub fn posts_loaded(&mut self, result: Result<Vec<Post>, StoreError>) {
        if let Ok(posts) = result {
            self.posts = posts;
        }
        self.loading = false;
    }

    pub fn toggle_modal(&mut self) {
        self.modal = self.modal.toggled();
    }

    #[must_use]
    pub fn modal(&self) -> ModalVisibility {
        self.modal
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ComposeRequested => self.toggle_modal(),
        }
    }
}

/// Context required to render the feed screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub session: Option<&'a User>,
}

/// Renders the share box and the post list.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::FEED_WIDTH))
        .push(share_box(&ctx))
        .push(content(&ctx));

    Container::new(Scrollable::new(
        Container::new(column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::LG),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn share_box<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let loading = ctx.state.is_loading();
    let trigger = (!loading).then_some(Message::ComposeRequested);

    let avatar: Element<'a, Message> = match ctx.session.and_then(|user| user.photo.as_ref()) {
        Some(photo) => iced::widget::image(photo.clone())
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .into(),
        None => icons::sized(icons::user(), sizing::AVATAR).into(),
    };

    let start_post = button(
        Text::new(ctx.i18n.tr("feed-start-post")).size(typography::BODY),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::MD])
    .style(styles::button::start_post)
    .on_press_maybe(trigger.clone());

    let top_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(start_post);

    let triggers = Row::new()
        .spacing(spacing::XS)
        .push(trigger_button(ctx.i18n, "feed-action-photo", icons::photo(), trigger.clone()))
        .push(trigger_button(ctx.i18n, "feed-action-video", icons::video(), trigger.clone()))
        .push(trigger_button(ctx.i18n, "feed-action-event", icons::event(), trigger.clone()))
        .push(trigger_button(ctx.i18n, "feed-action-article", icons::article(), trigger));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(top_row)
            .push(triggers),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn trigger_button<'a>(
    i18n: &'a I18n,
    key: &str,
    icon: iced::widget::svg::Svg<'static>,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD))
        .push(Text::new(i18n.tr(key)).size(typography::BODY));

    button(content)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::share_trigger)
        .on_press_maybe(on_press)
        .into()
}

/// What the content area below the share box shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    /// Loading indicator; shown regardless of post count.
    Loading,
    /// Explicit empty-state message.
    Empty,
    /// The post list.
    Posts,
}

fn content_kind(state: &State) -> ContentKind {
    if state.is_loading() {
        ContentKind::Loading
    } else if state.posts().is_empty() {
        ContentKind::Empty
    } else {
        ContentKind::Posts
    }
}

fn content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Before the session resolves nothing has been fetched; say so instead
    // of claiming the feed is empty.
    if ctx.session.is_none() && !ctx.state.is_loading() && ctx.state.posts().is_empty() {
        return centered_caption(ctx.i18n.tr("feed-session-pending"));
    }

    match content_kind(ctx.state) {
        ContentKind::Loading => return centered_caption(ctx.i18n.tr("feed-loading")),
        ContentKind::Empty => return centered_caption(ctx.i18n.tr("feed-empty-state")),
        ContentKind::Posts => {}
    }

    let cards = ctx
        .state
        .posts()
        .iter()
        .map(|post| post_card::view(post, ctx.i18n))
        .collect::<Vec<_>>();

    Column::with_children(cards).spacing(spacing::XS).into()
}

fn centered_caption<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}
