use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// the catalog shipped with the site, edited by hand and baked in at build time
pub const SHIPPED_CATALOG: &str = include_str!("../assets/content.toml");

// Profile
//
// everything about the site owner that shows up in the hero, about and
// contact sections.  paths are handed to the browser as-is
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub photo: String,
    pub resume: String,
    pub email: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

// urls are not checked in any way
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub repo_url: String,
    pub demo_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: i32,
}

impl SkillEntry {
    // level as a percentage, clamped for display
    pub fn proficiency(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}

/// The static content of the page.
///
/// Every list is rendered in the order it was declared in the source document
/// and there is no way to change the catalog once it has been loaded.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContentCatalog {
    profile: Profile,
    #[serde(default)]
    social: Vec<SocialLink>,
    #[serde(default)]
    highlights: Vec<Highlight>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    frontend_skills: Vec<SkillEntry>,
    #[serde(default)]
    backend_skills: Vec<SkillEntry>,
    #[serde(default)]
    tags: Vec<String>,
}

// the catalog lives under a [catalog] table so the document has room for
// comments and other top-level keys
#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    catalog: ContentCatalog,
}

impl ContentCatalog {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let file: CatalogFile =
            toml::from_str(doc).context("failed to parse content catalog")?;

        let catalog = file.catalog;

        debug!(
            projects = catalog.projects.len(),
            frontend_skills = catalog.frontend_skills.len(),
            backend_skills = catalog.backend_skills.len(),
            tags = catalog.tags.len(),
            "loaded content catalog"
        );
        Ok(catalog)
    }

    pub fn shipped() -> anyhow::Result<Self> {
        Self::from_toml(SHIPPED_CATALOG)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.social
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn frontend_skills(&self) -> &[SkillEntry] {
        &self.frontend_skills
    }

    pub fn backend_skills(&self) -> &[SkillEntry] {
        &self.backend_skills
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[catalog]
tags = ["Docker", "Git", "Agile"]

[catalog.profile]
name = "Sam Example"
headline = "Developer"
tagline = "Builds things"
about = ["one", "two"]
photo = "/assets/me.jpg"
resume = "/assets/resume.pdf"
email = "sam@example.com"
location = "Nowhere"

[[catalog.projects]]
title = "Zeta"
description = "last alphabetically, first declared"
tags = ["Rust", "Wasm", "CSS"]
repo_url = "https://example.com/zeta"
demo_url = "https://zeta.example.com"

[[catalog.projects]]
title = "Alpha"
description = "second"
tags = ["TypeScript"]
repo_url = "not even a url"
demo_url = ""

[[catalog.frontend_skills]]
name = "Overconfident"
level = 140

[[catalog.backend_skills]]
name = "Underwater"
level = -5
"#;

    #[test]
    fn test_declaration_order_is_kept() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();

        let titles: Vec<&str> = catalog.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha"]);
        assert_eq!(catalog.projects()[0].tags, vec!["Rust", "Wasm", "CSS"]);
        assert_eq!(catalog.tags(), ["Docker", "Git", "Agile"]);
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();

        let first: Vec<Project> = catalog.projects().to_vec();
        let second: Vec<Project> = catalog.projects().to_vec();
        assert_eq!(first, second);
        assert_eq!(catalog.tags(), catalog.tags());
    }

    #[test]
    fn test_urls_are_not_validated() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.projects()[1].repo_url, "not even a url");
        assert_eq!(catalog.projects()[1].demo_url, "");
    }

    #[test]
    fn test_proficiency_is_clamped() {
        let catalog = ContentCatalog::from_toml(SAMPLE).unwrap();
        assert_eq!(catalog.frontend_skills()[0].proficiency(), 100);
        assert_eq!(catalog.backend_skills()[0].proficiency(), 0);

        let skill = SkillEntry {
            name: String::from("Rust"),
            level: 85,
        };
        assert_eq!(skill.proficiency(), 85);
    }

    #[test]
    fn test_optional_lists_default_to_empty() {
        let doc = r#"
[catalog.profile]
name = "n"
headline = "h"
tagline = "t"
about = []
photo = ""
resume = ""
email = ""
location = ""
"#;
        let catalog = ContentCatalog::from_toml(doc).unwrap();
        assert!(catalog.projects().is_empty());
        assert!(catalog.social().is_empty());
        assert!(catalog.tags().is_empty());
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let err = ContentCatalog::from_toml("[catalog]\ntags = []\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse content catalog"));
    }

    #[test]
    fn test_shipped_catalog_parses() {
        let catalog = ContentCatalog::shipped().unwrap();

        assert!(!catalog.profile().name.is_empty());
        assert!(!catalog.projects().is_empty());
        assert!(!catalog.frontend_skills().is_empty());
        assert!(!catalog.backend_skills().is_empty());
        assert!(!catalog.tags().is_empty());

        for skill in catalog.frontend_skills().iter().chain(catalog.backend_skills()) {
            assert!((0..=100).contains(&skill.level), "{} out of range", skill.name);
        }
    }
}
