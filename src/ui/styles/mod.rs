// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.
//!
//! Style functions receive the active Iced [`Theme`] and look up the matching
//! [`ColorScheme`], so they work unchanged in light and dark mode.

pub mod button;
pub mod container;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Color scheme for the Iced theme the app is running with.
pub(crate) fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}
