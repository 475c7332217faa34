// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feed types with no presentation dependencies.
//!
//! This module contains pure domain types and the business rules the UI
//! layer relies on, kept free of Iced so they stay trivially testable.
//!
//! # Modules
//!
//! - [`draft`]: Compose-dialog draft state ([`Draft`](draft::Draft),
//!   [`AssetArea`](draft::AssetArea))
//! - [`post`]: Feed records ([`Post`](post::Post), [`Author`](post::Author),
//!   [`Timestamp`](post::Timestamp))
//! - [`timefmt`]: Relative timestamp formatting
//! - [`user`]: Session identity ([`User`](user::User))

pub mod draft;
pub mod post;
pub mod timefmt;
pub mod user;
