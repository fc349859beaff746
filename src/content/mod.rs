// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Hero text, about, skills, projects, journey milestones, social links and
//! the résumé reference. The content is inert data: views read it, nothing
//! mutates it. A default document is embedded in the binary; a TOML file on
//! disk can replace it (`--content`, or `[content] path` in the settings).

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "portfolio.toml";

/// Warning key shown when an override file could not be used.
pub const LOAD_WARNING_KEY: &str = "notification-content-load-error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub eyebrow: String,
    pub headline: String,
    /// Emphasized tail of the headline.
    pub highlight: String,
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub stack: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub period: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Pre-built résumé document, exposed by reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    /// URL or path of the document.
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    #[serde(default)]
    pub skills: Vec<String>,
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub resume: Resume,
}

impl PortfolioContent {
    /// Parses a content document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if the TOML is malformed, a section is
    /// missing, or the hero has no name.
    pub fn parse(source: &str) -> Result<Self> {
        let content: Self =
            toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
        if content.hero.name.trim().is_empty() {
            return Err(Error::Content("hero.name must not be empty".into()));
        }
        Ok(content)
    }

    /// The document shipped inside the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded asset is missing or invalid, which the
    /// tests rule out.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_FILE)
            .ok_or_else(|| Error::Content(format!("embedded {EMBEDDED_FILE} not found")))?;
        Self::parse(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Reads a content document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Content`] if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }
}

/// Loads the override at `path` if given, else the embedded content.
///
/// A broken override falls back to the embedded content and returns
/// [`LOAD_WARNING_KEY`] for the UI.
///
/// # Errors
///
/// Fails only when the embedded content itself cannot be loaded.
pub fn load(path: Option<&Path>) -> Result<(PortfolioContent, Option<String>)> {
    let Some(path) = path else {
        return Ok((PortfolioContent::embedded()?, None));
    };

    match PortfolioContent::from_path(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "portfolio content loaded");
            Ok((content, None))
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to embedded content");
            Ok((PortfolioContent::embedded()?, Some(LOAD_WARNING_KEY.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[hero]
name = "Sam Doe"
eyebrow = "Available"
headline = "Making"
highlight = "things"
intro = "Hello."

[about]
text = "About me."

[resume]
reference = "resume.pdf"
"#;

    #[test]
    fn embedded_content_is_complete() {
        let content = PortfolioContent::embedded().expect("embedded content parses");
        assert_eq!(content.hero.name, "Alex Carter");
        assert_eq!(content.skills.len(), 5);
        let titles: Vec<&str> = content.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Nova Commerce", "Pulse Health", "Orbit Studio"]);
        assert!(!content.milestones.is_empty());
        assert!(!content.socials.is_empty());
        assert!(!content.resume.reference.is_empty());
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let content = PortfolioContent::parse(MINIMAL).expect("minimal parses");
        assert!(content.skills.is_empty());
        assert!(content.projects.is_empty());
        assert_eq!(content.resume.reference, "resume.pdf");
    }

    #[test]
    fn missing_section_is_a_content_error() {
        let err = PortfolioContent::parse("[about]\ntext = \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let source = MINIMAL.replace("Sam Doe", "  ");
        assert!(matches!(
            PortfolioContent::parse(&source),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn load_without_override_uses_embedded() {
        let (content, warning) = load(None).expect("embedded content");
        assert_eq!(content.hero.name, "Alex Carter");
        assert!(warning.is_none());
    }

    #[test]
    fn load_uses_override_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("mine.toml");
        fs::write(&path, MINIMAL).expect("write content");

        let (content, warning) = load(Some(&path)).expect("load");
        assert_eq!(content.hero.name, "Sam Doe");
        assert!(warning.is_none());
    }

    #[test]
    fn broken_override_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[hero\nname = ").expect("write content");

        let (content, warning) = load(Some(&path)).expect("load");
        assert_eq!(content.hero.name, "Alex Carter");
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_override_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let (_, warning) = load(Some(&dir.path().join("absent.toml"))).expect("load");
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
    }
}
