// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::home;
use crate::ui::not_found;
use crate::ui::project_detail;
use iced::widget::scrollable::Viewport;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Home(home::Message),
    Gallery(gallery::Message),
    Detail(project_detail::Message),
    NotFound(not_found::Message),
    Footer(footer::Message),
    /// Navigate to a path (parsed into a route, redirects applied).
    Navigate(String),
    /// Page scrolled.
    Scrolled(Viewport),
    /// Window resized.
    Resized(Size),
    /// Cursor moved over the window, or left it.
    CursorMoved(Option<Point>),
    /// Animation frame.
    Frame(Instant),
    /// Hide a startup warning banner.
    DismissWarning(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to open instead of `/` (e.g. `/projects`).
    pub route: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
