// SPDX-License-Identifier: MPL-2.0
//! Project catalog types and the gallery filter.
//!
//! The catalog is static: records are parsed once from embedded content and
//! never mutated. Every view the gallery shows is derived by [`apply_filter`],
//! a pure function of the records, the search term, the selected skills and
//! the sort order.
//!
//! # Matching Rules
//!
//! - An empty search term matches every record; otherwise the lowercased term
//!   must be a substring of the lowercased title or description.
//! - An empty skill selection matches every record; otherwise every selected
//!   tag must be present on the record.
//! - Sorting is stable, so records added on the same day keep catalog order.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Date Added
// =============================================================================

/// Date a project was added to the catalog.
///
/// Keeps the raw text for display diagnostics alongside a normalized calendar
/// date used for ordering. Unparseable input normalizes to the Unix epoch so
/// ordering stays total and deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAdded {
    raw: String,
    date: NaiveDate,
    well_formed: bool,
}

impl DateAdded {
    /// Parses `YYYY-MM-DD` or an RFC 3339 timestamp (date part is kept).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .ok()
                    .map(|dt| dt.date_naive())
            });

        match parsed {
            Some(date) => Self {
                raw: raw.to_string(),
                date,
                well_formed: true,
            },
            None => Self {
                raw: raw.to_string(),
                date: NaiveDate::default(),
                well_formed: false,
            },
        }
    }

    /// Normalized date used for sorting.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The text the date was parsed from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns false when the raw text could not be parsed and the date was
    /// normalized to the epoch.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }
}

// =============================================================================
// Project Record
// =============================================================================

/// Labelled external target of a project card ("View Site", "View Report").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAction {
    pub label: String,
    pub target: String,
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Skill tags in display order. Duplicates are removed at load time.
    pub skills: Vec<String>,
    pub image: String,
    /// Source repository, when public.
    pub repository: Option<String>,
    pub primary_action: Option<ProjectAction>,
    pub date_added: DateAdded,
    pub details: String,
    pub is_featured: bool,
}

impl ProjectRecord {
    /// Returns true when the record carries the given skill tag.
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    fn matches_skills(&self, selection: &SkillSelection) -> bool {
        selection.iter().all(|skill| self.has_skill(skill))
    }
}

// =============================================================================
// Query Inputs
// =============================================================================

/// Date-based ordering of the gallery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    /// Returns the i18n message key for this order.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortOrder::Newest => "gallery-sort-newest",
            SortOrder::Oldest => "gallery-sort-oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

/// Set of skill tags a record must all carry to pass the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelection {
    skills: BTreeSet<String>,
}

impl SkillSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tag when absent, removes it when present.
    ///
    /// Returns true when the tag is selected after the call.
    pub fn toggle(&mut self, skill: &str) -> bool {
        if self.skills.remove(skill) {
            false
        } else {
            self.skills.insert(skill.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn clear(&mut self) {
        self.skills.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            skills: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Derivations
// =============================================================================

/// Derives the gallery view of `projects`.
///
/// Never mutates the catalog; the result borrows the matching records in
/// display order and may be empty.
#[must_use]
pub fn apply_filter<'a>(
    projects: &'a [ProjectRecord],
    search_term: &str,
    selected_skills: &SkillSelection,
    sort_order: SortOrder,
) -> Vec<&'a ProjectRecord> {
    let needle = search_term.to_lowercase();

    let mut matches: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|project| project.matches_search(&needle))
        .filter(|project| project.matches_skills(selected_skills))
        .collect();

    // `sort_by` is stable: equal dates keep their catalog order.
    match sort_order {
        SortOrder::Newest => {
            matches.sort_by(|a, b| b.date_added.date().cmp(&a.date_added.date()));
        }
        SortOrder::Oldest => {
            matches.sort_by(|a, b| a.date_added.date().cmp(&b.date_added.date()));
        }
    }

    matches
}

/// Unique skill tags across the catalog in first-appearance order.
#[must_use]
pub fn all_skills(projects: &[ProjectRecord]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    projects
        .iter()
        .flat_map(|project| project.skills.iter())
        .filter(|skill| seen.insert(skill.as_str()))
        .map(String::as_str)
        .collect()
}

/// Featured records, newest first.
#[must_use]
pub fn featured(projects: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut featured: Vec<&ProjectRecord> = projects.iter().filter(|p| p.is_featured).collect();
    featured.sort_by(|a, b| b.date_added.date().cmp(&a.date_added.date()));
    featured
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a record with just the fields the filter looks at.
    pub fn record(slug: &str, title: &str, description: &str, skills: &[&str], date: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            image: String::new(),
            repository: None,
            primary_action: None,
            date_added: DateAdded::parse(date),
            details: String::new(),
            is_featured: false,
        }
    }
}
