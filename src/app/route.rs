// SPDX-License-Identifier: MPL-2.0
//! Page routes and path parsing.
//!
//! Paths follow the site layout: `/`, `/projects` and `/projects/<slug>`.
//! Anything else is kept verbatim in [`Route::NotFound`] so the page can show
//! what was requested. Retired paths are rewritten through [`REDIRECTS`]
//! before parsing.

use std::fmt;

/// Permanent redirects, `(from, to)`.
pub const REDIRECTS: &[(&str, &str)] = &[(
    "/projects/Long-short-portfolio",
    "/projects/market-neutral-price-compression-portfolio",
)];

const PROJECTS_PREFIX: &str = "/projects/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    About,
    Projects,
    Project(String),
    NotFound(String),
}

impl Route {
    /// Parses a path, following redirects.
    ///
    /// A single trailing slash is ignored (`/projects/` is `/projects`).
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = normalize(path);
        let path = redirect_target(path).unwrap_or(path);

        match path {
            "/" => Route::About,
            "/projects" => Route::Projects,
            _ => match path.strip_prefix(PROJECTS_PREFIX) {
                Some(slug) if is_valid_slug(slug) => Route::Project(slug.to_string()),
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    /// Canonical path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::About => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Project(slug) => format!("{PROJECTS_PREFIX}{slug}"),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Whether the header (logo, navigation) is shown on this route.
    #[must_use]
    pub fn shows_header(&self) -> bool {
        !matches!(self, Route::Project(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Returns the redirect target for `path`, if it was retired.
#[must_use]
pub fn redirect_target(path: &str) -> Option<&'static str> {
    REDIRECTS
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to)
}

fn normalize(path: &str) -> &str {
    let path = path.trim();
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains('/')
}
