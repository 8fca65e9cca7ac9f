// SPDX-License-Identifier: MPL-2.0
//! Where the application keeps its files.
//!
//! Two directories are used:
//! - the **config** directory holds `settings.toml` (user preferences),
//! - the **data** directory holds `storage.cbor` (the persisted theme).
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FOLIO_DATA_DIR`, `ICED_FOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs`, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_FOLIO_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// CLI overrides, set once at startup.
static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

/// Which application directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn env_var(self) -> &'static str {
        match self {
            DirKind::Data => ENV_DATA_DIR,
            DirKind::Config => ENV_CONFIG_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            DirKind::Data => overrides.data_dir.clone(),
            DirKind::Config => overrides.config_dir.clone(),
        }
    }

    fn platform_default(self) -> Option<PathBuf> {
        match self {
            DirKind::Data => dirs::data_dir(),
            DirKind::Config => dirs::config_dir(),
        }
    }
}

/// Records the `--data-dir` / `--config-dir` CLI arguments.
///
/// Only the first call has an effect; later calls are ignored and reported
/// with `false`.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    CLI_OVERRIDES
        .set(CliOverrides {
            data_dir: data_dir.map(PathBuf::from),
            config_dir: config_dir.map(PathBuf::from),
        })
        .is_ok()
}

fn resolve(kind: DirKind, override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = kind.cli_override() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(kind.env_var()) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    kind.platform_default().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory (persisted local storage).
///
/// Returns `None` if no platform directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    resolve(DirKind::Data, None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Data, override_path)
}

/// Returns the config directory (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    resolve(DirKind::Config, None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(DirKind::Config, override_path)
}
