// SPDX-License-Identifier: MPL-2.0
//! `catalog.toml` parsing.

use crate::domain::catalog::{DateAdded, ProjectAction, ProjectRecord};
use crate::error::{ContentError, Result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    slug: String,
    title: String,
    description: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    primary_action: Option<RawAction>,
    date_added: String,
    #[serde(default)]
    details: String,
    #[serde(default)]
    featured: bool,
}

#[derive(Debug, Deserialize)]
struct RawAction {
    label: String,
    target: String,
}

/// Parses the catalog, keeping file order.
///
/// Skill tags are deduplicated per record (first occurrence wins), empty
/// links are dropped, and malformed dates are logged and normalized.
pub fn parse_catalog(source: &str) -> Result<Vec<ProjectRecord>> {
    let file: CatalogFile = toml::from_str(source).map_err(|err| ContentError::Malformed {
        file: super::CATALOG_FILE.to_string(),
        reason: err.to_string(),
    })?;

    let mut slugs = HashSet::new();
    let mut projects = Vec::with_capacity(file.projects.len());

    for raw in file.projects {
        if !slugs.insert(raw.slug.clone()) {
            return Err(ContentError::DuplicateSlug(raw.slug).into());
        }
        projects.push(into_record(raw));
    }

    Ok(projects)
}

fn into_record(raw: RawProject) -> ProjectRecord {
    let date_added = DateAdded::parse(&raw.date_added);
    if !date_added.is_well_formed() {
        tracing::warn!(
            slug = %raw.slug,
            date = %date_added.raw(),
            "malformed date_added, sorting as 1970-01-01"
        );
    }

    let mut seen = HashSet::new();
    let skills = raw
        .skills
        .into_iter()
        .filter(|skill| seen.insert(skill.clone()))
        .collect();

    ProjectRecord {
        slug: raw.slug,
        title: raw.title,
        description: raw.description,
        skills,
        image: raw.image,
        repository: raw.repository.filter(|url| !url.trim().is_empty()),
        primary_action: raw
            .primary_action
            .filter(|action| !action.target.trim().is_empty())
            .map(|action| ProjectAction {
                label: action.label,
                target: action.target,
            }),
        date_added,
        details: raw.details,
        is_featured: raw.featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    const TWO_PROJECTS: &str = r#"
[[projects]]
slug = "alpha"
title = "Alpha Factor Long-short Strategy"
description = "Factor research"
skills = ["Python", "Pandas", "Python"]
repository = "https://example.com/alpha"
date_added = "2025-05-18"
featured = true

[projects.primary_action]
label = "View Report"
target = "/projects/alpha"

[[projects]]
slug = "site"
title = "Portfolio Website"
description = "Personal site"
repository = ""
date_added = "sometime"
"#;

    #[test]
    fn parses_records_in_file_order() {
        let projects = parse_catalog(TWO_PROJECTS).expect("valid catalog");
        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["alpha", "site"]);
    }

    #[test]
    fn duplicate_skills_are_collapsed() {
        let projects = parse_catalog(TWO_PROJECTS).expect("valid catalog");
        assert_eq!(projects[0].skills, ["Python", "Pandas"]);
    }

    #[test]
    fn empty_repository_is_dropped() {
        let projects = parse_catalog(TWO_PROJECTS).expect("valid catalog");
        assert_eq!(
            projects[0].repository.as_deref(),
            Some("https://example.com/alpha")
        );
        assert_eq!(projects[1].repository, None);
    }

    #[test]
    fn primary_action_is_mapped() {
        let projects = parse_catalog(TWO_PROJECTS).expect("valid catalog");
        let action = projects[0].primary_action.as_ref().expect("action");
        assert_eq!(action.label, "View Report");
        assert!(crate::domain::navigation::is_internal_link(&action.target));
        assert!(projects[1].primary_action.is_none());
    }

    #[test]
    fn malformed_date_normalizes_to_epoch() {
        let projects = parse_catalog(TWO_PROJECTS).expect("valid catalog");
        let date = &projects[1].date_added;
        assert!(!date.is_well_formed());
        assert_eq!(date.raw(), "sometime");
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1970, 1, 1).expect("date"));
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let source = r#"
[[projects]]
slug = "same"
title = "A"
description = ""
date_added = "2025-01-01"

[[projects]]
slug = "same"
title = "B"
description = ""
date_added = "2025-01-02"
"#;
        match parse_catalog(source) {
            Err(Error::Content(ContentError::DuplicateSlug(slug))) => assert_eq!(slug, "same"),
            other => panic!("expected duplicate slug error, got {:?}", other),
        }
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let source = "[[projects]]\nslug = \"x\"\n";
        assert!(matches!(
            parse_catalog(source),
            Err(Error::Content(ContentError::Malformed { .. }))
        ));
    }

    #[test]
    fn empty_file_is_an_empty_catalog() {
        assert!(parse_catalog("").expect("empty catalog").is_empty());
    }
}
