// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so each icon is parsed once per process.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//! use crate::ui::design_tokens::sizing;
//!
//! let like_button = button(icons::sized(icons::like(), sizing::ICON_SM));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `ellipsis` not `post_menu`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(user, "user.svg", "Generic avatar silhouette.");
define_icon!(photo, "photo.svg", "Framed landscape photo.");
define_icon!(video, "video.svg", "Camera with play wedge.");
define_icon!(event, "event.svg", "Calendar page.");
define_icon!(article, "article.svg", "Document with text lines.");
define_icon!(close, "close.svg", "Diagonal cross.");
define_icon!(like, "like.svg", "Thumbs up.");
define_icon!(comment, "comment.svg", "Speech bubble.");
define_icon!(share, "share.svg", "Connected nodes.");
define_icon!(send, "send.svg", "Paper plane.");
define_icon!(ellipsis, "ellipsis.svg", "Three horizontal dots.");

/// Constrains an icon to a square of the given side length.
pub fn sized(icon: Svg<'static>, side: f32) -> Svg<'static> {
    icon.width(Length::Fixed(side)).height(Length::Fixed(side))
}
