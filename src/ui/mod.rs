// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feed`] - Main feed screen with the share box and post list
//! - [`composer`] - Modal compose dialog for creating posts
//!
//! # Shared Infrastructure
//!
//! - [`modal`] - Overlay stack with backdrop-only dismissal
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod composer;
pub mod design_tokens;
pub mod feed;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod styles;
