// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete backends.
//!
//! # Available Ports
//!
//! - [`auth`]: Authentication provider (session resolution)
//! - [`store`]: Document store (feed reads, post submission)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no backend SDK types)
//! - Traits are `Send + Sync` so `Task::perform` can drive them
//! - Methods return boxed futures; callers fire-and-forget through Iced tasks

pub mod auth;
pub mod store;

// Re-export main types for convenience
pub use auth::{AuthError, AuthProvider};
pub use store::{FeedStore, StoreError};
