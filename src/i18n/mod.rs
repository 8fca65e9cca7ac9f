// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded from `assets/i18n/`
//! - Named message arguments (e.g. result counts with plural forms)
//! - `MISSING: <key>` placeholder when a key has no translation

pub mod fluent;

pub use fluent::I18n;
