// SPDX-License-Identifier: MPL-2.0
//! Ephemeral compose-dialog state.
//!
//! A [`Draft`] is created empty when the dialog opens, mutated by user input,
//! and consumed on submit or discarded on close. It is never persisted.

use crate::domain::post::{PostSubmission, Timestamp};
use crate::domain::user::User;
use std::fmt;
use std::path::PathBuf;

/// Mutually exclusive attachment mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetArea {
    /// No attachment panel is shown.
    #[default]
    None,
    /// Image picker panel.
    Image,
    /// Video link input panel.
    Video,
}

/// Rejection produced when an image selection comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySelection;

impl fmt::Display for EmptySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty image selection")
    }
}

impl std::error::Error for EmptySelection {}

/// A post-in-progress held by the compose dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    text: String,
    asset_area: AssetArea,
    image: Option<PathBuf>,
    video: Option<String>,
}

impl Draft {
    /// Creates an empty draft, as on dialog open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn asset_area(&self) -> AssetArea {
        self.asset_area
    }

    #[must_use]
    pub fn image(&self) -> Option<&PathBuf> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    /// Switches the attachment panel, unconditionally clearing both pending
    /// attachments first. At most one of image/video is ever set afterwards.
    pub fn switch_asset_area(&mut self, area: AssetArea) {
        self.image = None;
        self.video = None;
        self.asset_area = area;
    }

    /// Stores a chosen image file as the pending attachment.
    ///
    /// A cancelled or otherwise empty selection is rejected: the prior
    /// pending image is left unchanged and the caller surfaces a notice.
    pub fn attach_image(&mut self, file: Option<PathBuf>) -> Result<(), EmptySelection> {
        match file {
            Some(path) => {
                self.image = Some(path);
                Ok(())
            }
            None => Err(EmptySelection),
        }
    }

    pub fn set_video_link(&mut self, link: impl Into<String>) {
        let link = link.into();
        self.video = if link.is_empty() { None } else { Some(link) };
    }

    /// Whether the submit affordance is enabled. Exact-empty-string check
    /// only; whitespace-only text still submits.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty()
    }

    /// Clears text and both pending attachments, as on submit or close.
    pub fn reset(&mut self) {
        self.text.clear();
        self.image = None;
        self.video = None;
        self.asset_area = AssetArea::None;
    }

    /// Consumes the draft into a submission payload for the store.
    /// The timestamp is the server-assigned sentinel; the store substitutes
    /// the actual write time.
    #[must_use]
    pub fn into_submission(self, user: User) -> PostSubmission {
        PostSubmission {
            image: self.image,
            video: self.video,
            user,
            description: self.text,
            timestamp: Timestamp::ServerAssigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_empty() {
        let draft = Draft::new();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.asset_area(), AssetArea::None);
        assert!(draft.image().is_none());
        assert!(draft.video().is_none());
        assert!(!draft.can_submit());
    }

    #[test]
    fn switching_to_image_clears_pending_video() {
        let mut draft = Draft::new();
        draft.switch_asset_area(AssetArea::Video);
        draft.set_video_link("https://example.com/clip");
        draft.switch_asset_area(AssetArea::Image);

        assert_eq!(draft.asset_area(), AssetArea::Image);
        assert!(draft.video().is_none());
        assert!(draft.image().is_none());
    }

    #[test]
    fn switching_to_video_clears_pending_image() {
        let mut draft = Draft::new();
        draft.switch_asset_area(AssetArea::Image);
        draft
            .attach_image(Some(PathBuf::from("photo.png")))
            .expect("attach");
        draft.switch_asset_area(AssetArea::Video);

        assert!(draft.image().is_none());
        assert!(draft.video().is_none());
    }

    #[test]
    fn at_most_one_attachment_after_any_switch_sequence() {
        let mut draft = Draft::new();
        draft.switch_asset_area(AssetArea::Image);
        draft
            .attach_image(Some(PathBuf::from("a.png")))
            .expect("attach");
        draft.switch_asset_area(AssetArea::Video);
        draft.set_video_link("https://example.com/v");
        draft.switch_asset_area(AssetArea::Image);
        draft
            .attach_image(Some(PathBuf::from("b.png")))
            .expect("attach");

        let both = draft.image().is_some() && draft.video().is_some();
        assert!(!both);
        assert!(draft.image().is_some());
    }

    #[test]
    fn empty_selection_is_rejected_and_keeps_prior_image() {
        let mut draft = Draft::new();
        draft.switch_asset_area(AssetArea::Image);
        draft
            .attach_image(Some(PathBuf::from("kept.png")))
            .expect("attach");

        let result = draft.attach_image(None);

        assert_eq!(result, Err(EmptySelection));
        assert_eq!(draft.image(), Some(&PathBuf::from("kept.png")));
    }

    #[test]
    fn can_submit_iff_text_non_empty() {
        let mut draft = Draft::new();
        assert!(!draft.can_submit());
        draft.set_text("Hello world");
        assert!(draft.can_submit());
        draft.set_text("");
        assert!(!draft.can_submit());
        // Exact-empty-string check: whitespace counts as content.
        draft.set_text("   ");
        assert!(draft.can_submit());
    }

    #[test]
    fn reset_clears_everything() {
        let mut draft = Draft::new();
        draft.set_text("Hello");
        draft.switch_asset_area(AssetArea::Image);
        draft
            .attach_image(Some(PathBuf::from("p.png")))
            .expect("attach");

        draft.reset();

        assert_eq!(draft, Draft::new());
    }

    #[test]
    fn submission_carries_sentinel_timestamp() {
        let mut draft = Draft::new();
        draft.set_text("Hello world");

        let user = User::new("Ada");
        let payload = draft.into_submission(user.clone());

        assert_eq!(payload.description, "Hello world");
        assert_eq!(payload.user, user);
        assert_eq!(payload.timestamp, Timestamp::ServerAssigned);
        assert!(payload.image.is_none());
        assert!(payload.video.is_none());
    }
}
