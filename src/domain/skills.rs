// SPDX-License-Identifier: MPL-2.0
//! Skill tag categories, used to color badges and filter chips.

/// Broad family a skill tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Language,
    Database,
    DataTooling,
    MachineLearning,
    Frontend,
    Quant,
    Other,
}

const LANGUAGES: &[&str] = &["Python", "C", "C++", "Java", "JavaScript", "TypeScript"];
const DATABASES: &[&str] = &["SQL", "Postgres", "KDB+"];
const DATA_TOOLING: &[&str] = &["Pandas", "NumPy", "Matplotlib"];
const MACHINE_LEARNING: &[&str] = &["OpenCV", "TensorFlow", "PyTorch", "Keras", "Scikit-learn"];
const FRONTEND: &[&str] = &["React", "Next.js", "Tailwind CSS", "UI/UX", "Figma"];
const QUANT: &[&str] = &["Alphalens", "VectorBT", "Backtrader", "Pyfolio"];

impl SkillCategory {
    /// Categorizes a tag by exact, case-sensitive name.
    #[must_use]
    pub fn of(skill: &str) -> Self {
        let table: [(&[&str], SkillCategory); 6] = [
            (LANGUAGES, SkillCategory::Language),
            (DATABASES, SkillCategory::Database),
            (DATA_TOOLING, SkillCategory::DataTooling),
            (MACHINE_LEARNING, SkillCategory::MachineLearning),
            (FRONTEND, SkillCategory::Frontend),
            (QUANT, SkillCategory::Quant),
        ];

        table
            .iter()
            .find(|(names, _)| names.contains(&skill))
            .map_or(SkillCategory::Other, |(_, category)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_are_categorized() {
        assert_eq!(SkillCategory::of("Python"), SkillCategory::Language);
        assert_eq!(SkillCategory::of("KDB+"), SkillCategory::Database);
        assert_eq!(SkillCategory::of("Pandas"), SkillCategory::DataTooling);
        assert_eq!(SkillCategory::of("PyTorch"), SkillCategory::MachineLearning);
        assert_eq!(SkillCategory::of("Tailwind CSS"), SkillCategory::Frontend);
        assert_eq!(SkillCategory::of("Alphalens"), SkillCategory::Quant);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(SkillCategory::of("python"), SkillCategory::Other);
        assert_eq!(SkillCategory::of("AlphaLens"), SkillCategory::Other);
    }

    #[test]
    fn unknown_tags_are_other() {
        assert_eq!(SkillCategory::of("Vercel"), SkillCategory::Other);
        assert_eq!(SkillCategory::of("Quant Finance"), SkillCategory::Other);
        assert_eq!(SkillCategory::of(""), SkillCategory::Other);
    }
}
