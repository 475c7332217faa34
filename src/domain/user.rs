// SPDX-License-Identifier: MPL-2.0
//! Session identity as exposed by the authentication provider.

use std::path::PathBuf;

/// Externally owned identity record.
///
/// The application never mutates this; it arrives asynchronously once the
/// auth provider resolves the session and is only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Name shown on posts and in the compose dialog.
    pub display_name: String,
    /// Optional avatar image reference.
    pub photo: Option<PathBuf>,
    /// Optional headline shown under the author name.
    pub headline: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            photo: None,
            headline: None,
        }
    }

    #[must_use]
    pub fn with_photo(mut self, photo: PathBuf) -> Self {
        self.photo = Some(photo);
        self
    }

    #[must_use]
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }
}
