// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It resolves the locale once at startup and formats strings from embedded bundles.
//!
//! # Features
//!
//! - Locale resolution at boot: CLI flag, then config, then system settings
//! - `.ftl` translation files embedded in the binary at compile time
//! - Fallback to default locale when translations are missing

pub mod fluent;
