// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and the persisted theme preference.
//!
//! [`ThemeController`] owns the current [`ThemePreference`]. It is read once
//! at startup (stored value, then the OS preference, then the configured
//! default) and changed only through [`ThemeController::toggle`], which also
//! writes the new value to local storage. Views never query it directly: the
//! app passes the preference down through their view contexts.

use crate::app::config::GeneralConfig;
use crate::app::storage::KeyValueStore;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local storage key of the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Value written to local storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but `"light"`/`"dark"` is ignored.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Asks the OS for its dark-mode preference.
    ///
    /// Returns `None` when detection fails or the platform has no opinion.
    #[must_use]
    pub fn from_system() -> Option<Self> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(ThemePreference::Dark),
            Ok(dark_light::Mode::Light) => Some(ThemePreference::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the startup preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

/// Owns the theme preference and its persistence.
#[derive(Debug)]
pub struct ThemeController {
    preference: ThemePreference,
    source: ThemeSource,
    store: Option<Box<dyn KeyValueStore>>,
}

impl ThemeController {
    /// Resolves the startup preference, consulting the OS when allowed.
    #[must_use]
    pub fn init(store: Option<Box<dyn KeyValueStore>>, general: &GeneralConfig) -> Self {
        let system = if general.follow_system_theme {
            ThemePreference::from_system()
        } else {
            None
        };
        Self::init_with(store, system, general.default_theme)
    }

    /// Resolves the startup preference from explicit inputs.
    ///
    /// Order: stored value, then `system`, then `fallback`. Nothing is written
    /// to the store until the first toggle.
    #[must_use]
    pub fn init_with(
        store: Option<Box<dyn KeyValueStore>>,
        system: Option<ThemePreference>,
        fallback: ThemePreference,
    ) -> Self {
        let stored = store
            .as_deref()
            .and_then(|store| store.get(THEME_KEY))
            .and_then(|value| ThemePreference::parse(&value));

        let (preference, source) = match (stored, system) {
            (Some(stored), _) => (stored, ThemeSource::Stored),
            (None, Some(system)) => (system, ThemeSource::System),
            (None, None) => (fallback, ThemeSource::Default),
        };

        tracing::info!(theme = %preference, source = ?source, "theme resolved");

        Self {
            preference,
            source,
            store,
        }
    }

    /// Flips the preference and persists it.
    ///
    /// A failed write is logged; the in-memory preference changes regardless.
    pub fn toggle(&mut self) {
        self.preference = self.preference.toggled();

        if let Some(store) = self.store.as_deref_mut() {
            if let Err(err) = store.set(THEME_KEY, self.preference.as_str()) {
                tracing::warn!(error = %err, "failed to persist theme preference");
            }
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn source(&self) -> ThemeSource {
        self.source
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Whether toggles are written anywhere.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Iced theme for the current preference.
    #[must_use]
    pub fn theme(&self) -> Theme {
        iced_theme(self.preference)
    }
}

/// Maps a preference to the built-in Iced theme.
#[must_use]
pub fn iced_theme(preference: ThemePreference) -> Theme {
    match preference {
        ThemePreference::Light => Theme::Light,
        ThemePreference::Dark => Theme::Dark,
    }
}

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_page: Color,
    pub surface_card: Color,
    pub surface_muted: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,

    // Navigation pill
    pub pill_background: Color,
    pub pill_text: Color,

    // Particle layer
    pub particle: Color,
    pub link_opacity: f32,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::GRAY_100,
            surface_card: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            surface_muted: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_600,

            pill_background: palette::GRAY_900,
            pill_text: palette::WHITE,

            particle: palette::PARTICLE_DARK,
            link_opacity: opacity::LINK_LIGHT,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::NEUTRAL_950,
            surface_card: Color {
                a: opacity::SURFACE,
                ..palette::NEUTRAL_800
            },
            surface_muted: palette::NEUTRAL_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,

            brand_primary: palette::PRIMARY_400,

            pill_background: palette::WHITE,
            pill_text: palette::NEUTRAL_900,

            particle: palette::WHITE,
            link_opacity: opacity::LINK_DARK,
        }
    }

    #[must_use]
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::MemoryStore;
    use crate::error::{Error, Result};

    /// Store whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }
    }

    fn controller_with(stored: Option<&str>, system: Option<ThemePreference>) -> ThemeController {
        let store = match stored {
            Some(value) => MemoryStore::with_entry(THEME_KEY, value),
            None => MemoryStore::new(),
        };
        ThemeController::init_with(Some(Box::new(store)), system, ThemePreference::Dark)
    }

    #[test]
    fn stored_values_are_loaded() {
        for preference in [ThemePreference::Dark, ThemePreference::Light] {
            let controller = controller_with(Some(preference.as_str()), None);
            assert_eq!(controller.preference(), preference);
            assert_eq!(controller.source(), ThemeSource::Stored);
        }
    }

    #[test]
    fn stored_value_beats_system_preference() {
        let controller = controller_with(Some("light"), Some(ThemePreference::Dark));
        assert_eq!(controller.preference(), ThemePreference::Light);
    }

    #[test]
    fn system_preference_used_when_nothing_stored() {
        let controller = controller_with(None, Some(ThemePreference::Light));
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(controller.source(), ThemeSource::System);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let controller = controller_with(Some("sepia"), None);
        assert_eq!(controller.preference(), ThemePreference::Dark);
        assert_eq!(controller.source(), ThemeSource::Default);
    }

    #[test]
    fn configured_default_applies_last() {
        let controller = ThemeController::init_with(None, None, ThemePreference::Light);
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(controller.source(), ThemeSource::Default);
    }

    #[test]
    fn init_does_not_write() {
        let controller = controller_with(None, Some(ThemePreference::Light));
        let store = controller.store.as_deref().expect("store");
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut controller = controller_with(Some("dark"), None);
        controller.toggle();

        assert_eq!(controller.preference(), ThemePreference::Light);
        assert!(!controller.is_dark());
        let store = controller.store.as_deref().expect("store");
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn toggling_twice_restores_value_and_storage() {
        for original in ["dark", "light"] {
            let mut controller = controller_with(Some(original), None);
            controller.toggle();
            controller.toggle();

            assert_eq!(controller.preference().as_str(), original);
            let store = controller.store.as_deref().expect("store");
            assert_eq!(store.get(THEME_KEY), Some(original.to_string()));
        }
    }

    #[test]
    fn toggle_without_store_stays_in_memory() {
        let mut controller = ThemeController::init_with(None, None, ThemePreference::Dark);
        assert!(!controller.is_persistent());

        controller.toggle();
        assert_eq!(controller.preference(), ThemePreference::Light);
    }

    #[test]
    fn failed_write_still_toggles() {
        let mut controller =
            ThemeController::init_with(Some(Box::new(ReadOnlyStore)), None, ThemePreference::Dark);
        controller.toggle();
        assert_eq!(controller.preference(), ThemePreference::Light);
    }

    #[test]
    fn iced_theme_follows_preference() {
        assert_eq!(iced_theme(ThemePreference::Light), Theme::Light);
        assert_eq!(iced_theme(ThemePreference::Dark), Theme::Dark);
    }

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_page.r > 0.9);
        assert_eq!(scheme.link_opacity, 0.8);
    }

    #[test]
    fn dark_scheme_has_dark_surface_and_white_particles() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_page.r < 0.1);
        assert_eq!(scheme.particle, Color::WHITE);
        assert_eq!(scheme.link_opacity, 0.3);
    }

    #[test]
    fn system_detection_does_not_panic() {
        let _ = ThemePreference::from_system();
    }
}
