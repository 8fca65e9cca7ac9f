// SPDX-License-Identifier: MPL-2.0
//! Content embedded in the binary.
//!
//! Everything the pages display comes from `assets/content/`:
//!
//! - `catalog.toml`: project records ([`catalog`])
//! - `profile.toml`: hero, skills, experience and certifications ([`profile`])
//! - `writeups/<slug>.md`: optional long-form write-ups ([`writeups`])
//!
//! The files ship with the binary, so a parse failure is a packaging bug.
//! [`Content::load`] reports it as [`ContentError`] and the app refuses to
//! start.

pub mod catalog;
pub mod profile;
pub mod writeups;

use crate::domain::catalog::ProjectRecord;
use crate::error::{ContentError, Result};
use profile::Profile;
use rust_embed::RustEmbed;
use std::num::NonZeroUsize;
use writeups::WriteupCache;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

pub const CATALOG_FILE: &str = "catalog.toml";
pub const PROFILE_FILE: &str = "profile.toml";

/// Parsed content plus the write-up cache.
#[derive(Debug)]
pub struct Content {
    projects: Vec<ProjectRecord>,
    profile: Profile,
    writeups: WriteupCache,
}

impl Content {
    /// Parses the embedded catalog and profile.
    pub fn load(writeup_cache_capacity: NonZeroUsize) -> Result<Self> {
        let projects = catalog::parse_catalog(&read_text(CATALOG_FILE)?)?;
        let profile = profile::parse_profile(&read_text(PROFILE_FILE)?)?;

        tracing::debug!(projects = projects.len(), "content loaded");

        Ok(Self {
            projects,
            profile,
            writeups: WriteupCache::new(writeup_cache_capacity),
        })
    }

    /// All project records in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Parsed write-up for `slug`, if one is embedded.
    pub fn writeup(&mut self, slug: &str) -> Option<writeups::Writeup> {
        self.writeups.get(slug)
    }

    #[must_use]
    pub fn writeup_cache(&self) -> &WriteupCache {
        &self.writeups
    }
}

/// Reads an embedded file as UTF-8.
fn read_text(file: &str) -> Result<String> {
    let asset = ContentAsset::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    String::from_utf8(asset.data.into_owned()).map_err(|err| {
        ContentError::Malformed {
            file: file.to_string(),
            reason: err.to_string(),
        }
        .into()
    })
}

/// Reads an embedded file as UTF-8, `None` when it does not exist.
fn read_optional_text(file: &str) -> Result<Option<String>> {
    if ContentAsset::get(file).is_none() {
        return Ok(None);
    }
    read_text(file).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn load() -> Content {
        Content::load(NonZeroUsize::new(4).expect("non-zero")).expect("embedded content parses")
    }

    #[test]
    fn embedded_content_loads() {
        let content = load();
        assert_eq!(content.projects().len(), 4);
        assert!(!content.profile().name.is_empty());
    }

    #[test]
    fn embedded_dates_are_well_formed() {
        let content = load();
        assert!(content
            .projects()
            .iter()
            .all(|project| project.date_added.is_well_formed()));
    }

    #[test]
    fn project_lookup_by_slug() {
        let content = load();
        let project = content
            .project("market-neutral-price-compression-portfolio")
            .expect("project exists");
        assert!(project.is_featured);
        assert!(content.project("does-not-exist").is_none());
    }

    #[test]
    fn writeup_is_available_for_flagship_project() {
        let mut content = load();
        assert!(content
            .writeup("market-neutral-price-compression-portfolio")
            .is_some());
        assert!(content.writeup("Cypress-lawn").is_none());
    }

    #[test]
    fn missing_file_is_reported() {
        match read_text("nope.toml") {
            Err(Error::Content(ContentError::Missing(file))) => assert_eq!(file, "nope.toml"),
            other => panic!("expected missing file error, got {:?}", other),
        }
    }

    #[test]
    fn optional_missing_file_is_none() {
        assert!(read_optional_text("writeups/nope.md")
            .expect("lookup succeeds")
            .is_none());
    }
}
