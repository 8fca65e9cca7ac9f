// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and default theme
//! - `[header]` - Logo fade distance, breakpoint and removal timing
//! - `[background]` - Particle background
//! - `[gallery]` - Projects gallery defaults
//! - `[content]` - Write-up cache sizing
//!
//! Values are stored as written and clamped when read through the accessor
//! methods (`fade_config()`, `particle_count()`, ...), so a hand-edited file
//! with out-of-range numbers still yields a usable configuration.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::SortOrder;
use crate::domain::fade::FadeConfig;
use crate::error::{Error, Result};
use crate::ui::theming::ThemePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when `settings.toml` exists but cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "warning-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme used when nothing is stored and the system gives no answer.
    #[serde(default)]
    pub default_theme: ThemePreference,

    /// Whether to ask the OS for its dark-mode preference on first launch.
    #[serde(default = "default_true")]
    pub follow_system_theme: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            default_theme: ThemePreference::default(),
            follow_system_theme: true,
        }
    }
}

/// Header logo fade settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeaderConfig {
    /// Scroll distance (px) over which the logo fades out.
    #[serde(default = "default_fade_distance")]
    pub fade_distance: f32,

    /// Window width (px) above which the logo never fades.
    #[serde(default = "default_fade_breakpoint")]
    pub fade_breakpoint: f32,

    /// Opacity under which the logo stops reacting to input.
    #[serde(default = "default_hide_threshold")]
    pub hide_threshold: f32,

    /// Delay (ms) before a faded logo stops reacting to input.
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            fade_distance: DEFAULT_FADE_DISTANCE,
            fade_breakpoint: DEFAULT_FADE_BREAKPOINT,
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

impl HeaderConfig {
    /// Fade tunables, clamped to usable ranges.
    ///
    /// A fade distance of zero is kept: the logo then disappears as soon as
    /// the page scrolls at all.
    #[must_use]
    pub fn fade_config(&self) -> FadeConfig {
        FadeConfig {
            fade_distance: finite_or(self.fade_distance, DEFAULT_FADE_DISTANCE)
                .clamp(0.0, MAX_FADE_DISTANCE),
            breakpoint_width: finite_or(self.fade_breakpoint, DEFAULT_FADE_BREAKPOINT).max(0.0),
            hide_threshold: finite_or(self.hide_threshold, DEFAULT_HIDE_THRESHOLD).clamp(0.0, 1.0),
            hide_delay: Duration::from_millis(self.hide_delay_ms.min(MAX_HIDE_DELAY_MS)),
        }
    }
}

/// Particle background settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundConfig {
    /// Whether the particle layer is drawn at all.
    #[serde(default = "default_true")]
    pub particles: bool,

    /// Particle count for an 800x800 window; scaled with the window area.
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,

    /// Distance (px) under which particles are linked.
    #[serde(default = "default_link_distance")]
    pub link_distance: f32,

    /// Speed in px per 60 Hz frame.
    #[serde(default = "default_particle_speed")]
    pub speed: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particles: true,
            particle_count: DEFAULT_PARTICLE_COUNT,
            link_distance: DEFAULT_LINK_DISTANCE,
            speed: DEFAULT_PARTICLE_SPEED,
        }
    }
}

impl BackgroundConfig {
    #[must_use]
    pub fn particle_count(&self) -> u32 {
        self.particle_count.min(MAX_PARTICLE_COUNT)
    }

    #[must_use]
    pub fn link_distance(&self) -> f32 {
        finite_or(self.link_distance, DEFAULT_LINK_DISTANCE).clamp(0.0, MAX_LINK_DISTANCE)
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        finite_or(self.speed, DEFAULT_PARTICLE_SPEED).clamp(0.0, MAX_PARTICLE_SPEED)
    }

    /// Whether a particle layer should exist.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.particles && self.particle_count() > 0
    }
}

/// Projects gallery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Sort order selected when the app starts.
    #[serde(default)]
    pub default_sort: SortOrder,
}

/// Embedded content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Number of parsed write-ups kept in memory.
    #[serde(default = "default_writeup_cache_size")]
    pub writeup_cache_size: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            writeup_cache_size: DEFAULT_WRITEUP_CACHE_SIZE,
        }
    }
}

impl ContentConfig {
    /// Write-up cache capacity in `1..=MAX_WRITEUP_CACHE_SIZE`.
    #[must_use]
    pub fn writeup_cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.writeup_cache_size.clamp(1, MAX_WRITEUP_CACHE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Header logo fade settings.
    #[serde(default)]
    pub header: HeaderConfig,

    /// Particle background settings.
    #[serde(default)]
    pub background: BackgroundConfig,

    /// Projects gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Embedded content settings.
    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_fade_distance() -> f32 {
    DEFAULT_FADE_DISTANCE
}

fn default_fade_breakpoint() -> f32 {
    DEFAULT_FADE_BREAKPOINT
}

fn default_hide_threshold() -> f32 {
    DEFAULT_HIDE_THRESHOLD
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY_MS
}

fn default_particle_count() -> u32 {
    DEFAULT_PARTICLE_COUNT
}

fn default_link_distance() -> f32 {
    DEFAULT_LINK_DISTANCE
}

fn default_particle_speed() -> f32 {
    DEFAULT_PARTICLE_SPEED
}

fn default_writeup_cache_size() -> usize {
    DEFAULT_WRITEUP_CACHE_SIZE
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                default_theme: ThemePreference::Light,
                follow_system_theme: false,
            },
            header: HeaderConfig {
                fade_distance: 250.0,
                fade_breakpoint: 1200.0,
                hide_threshold: 0.1,
                hide_delay_ms: 350,
            },
            background: BackgroundConfig {
                particles: false,
                particle_count: 12,
                link_distance: 90.0,
                speed: 1.5,
            },
            gallery: GalleryConfig {
                default_sort: SortOrder::Oldest,
            },
            content: ContentConfig {
                writeup_cache_size: 3,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.default_theme, ThemePreference::Dark);
        assert!(config.general.follow_system_theme);
        assert_eq!(config.header.fade_distance, 100.0);
        assert_eq!(config.header.fade_breakpoint, 1580.0);
        assert_eq!(config.header.hide_threshold, 0.05);
        assert_eq!(config.header.hide_delay_ms, 200);
        assert!(config.background.particles);
        assert_eq!(config.background.particle_count, 40);
        assert_eq!(config.gallery.default_sort, SortOrder::Newest);
        assert_eq!(config.content.writeup_cache_size, 8);
    }

    #[test]
    fn default_fade_config_matches_domain_default() {
        assert_eq!(HeaderConfig::default().fade_config(), FadeConfig::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[header]\nfade_distance = 300.0\n\n[gallery]\ndefault_sort = \"oldest\"\n",
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.header.fade_distance, 300.0);
        assert_eq!(config.header.fade_breakpoint, DEFAULT_FADE_BREAKPOINT);
        assert_eq!(config.gallery.default_sort, SortOrder::Oldest);
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.background, BackgroundConfig::default());
    }

    #[test]
    fn unknown_theme_value_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ndefault_theme = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_clamped_on_read() {
        let header = HeaderConfig {
            fade_distance: -50.0,
            fade_breakpoint: f32::NAN,
            hide_threshold: 3.0,
            hide_delay_ms: 60_000,
        };
        let fade = header.fade_config();
        assert_eq!(fade.fade_distance, 0.0);
        assert_eq!(fade.breakpoint_width, DEFAULT_FADE_BREAKPOINT);
        assert_eq!(fade.hide_threshold, 1.0);
        assert_eq!(fade.hide_delay, Duration::from_millis(MAX_HIDE_DELAY_MS));

        let background = BackgroundConfig {
            particles: true,
            particle_count: 10_000,
            link_distance: f32::INFINITY,
            speed: -1.0,
        };
        assert_eq!(background.particle_count(), MAX_PARTICLE_COUNT);
        assert_eq!(background.link_distance(), DEFAULT_LINK_DISTANCE);
        assert_eq!(background.speed(), 0.0);
    }

    #[test]
    fn background_without_particles_is_disabled() {
        let mut background = BackgroundConfig::default();
        assert!(background.is_enabled());

        background.particle_count = 0;
        assert!(!background.is_enabled());

        background.particle_count = 40;
        background.particles = false;
        assert!(!background.is_enabled());
    }

    #[test]
    fn writeup_cache_capacity_is_never_zero() {
        let content = ContentConfig {
            writeup_cache_size: 0,
        };
        assert_eq!(content.writeup_cache_capacity().get(), 1);

        let content = ContentConfig {
            writeup_cache_size: 1_000,
        };
        assert_eq!(content.writeup_cache_capacity().get(), MAX_WRITEUP_CACHE_SIZE);
    }

    #[test]
    fn save_to_path_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("failed to save config");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "invalid toml [[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("failed to read config");

        for section in ["[general]", "[header]", "[background]", "[gallery]", "[content]"] {
            assert!(content.contains(section), "missing {section}");
        }
        assert!(content.contains("default_theme = \"dark\""));
        assert!(content.contains("default_sort = \"newest\""));
    }
}
