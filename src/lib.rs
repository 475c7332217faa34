// SPDX-License-Identifier: MPL-2.0
//! `feedline` is a desktop social-feed client built with the Iced GUI framework.
//!
//! It renders a feed of posts fetched from a remote document store and offers
//! a modal compose dialog for new posts. Persistence, authentication, and sync
//! live behind port traits; this crate is presentation and event wiring, and
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

#![doc(html_root_url = "https://docs.rs/feedline/0.2.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
