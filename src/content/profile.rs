// SPDX-License-Identifier: MPL-2.0
//! `profile.toml` parsing.

use crate::error::{ContentError, Result};
use serde::Deserialize;

/// Owner of the portfolio and everything the About page shows about them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub headline: String,
    pub summary: String,
    pub copyright: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Titled card of related skills.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

/// Timeline entry (school or job).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: String,
    pub place: String,
    #[serde(default)]
    pub period: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Certification {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub url: String,
}

pub fn parse_profile(source: &str) -> Result<Profile> {
    toml::from_str(source).map_err(|err| {
        ContentError::Malformed {
            file: super::PROFILE_FILE.to_string(),
            reason: err.to_string(),
        }
        .into()
    })
}
