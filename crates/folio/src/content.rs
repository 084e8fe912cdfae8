//! Portfolio content
//!
//! The page is described by a TOML file: a hero block (name, headline,
//! tagline), an ordered list of sections addressable as `#<id>`, a list of
//! tagged projects, and optional explicit nav links and palette entries.
//! Everything here is read once at startup and never changes afterwards.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Built-in sample page used when no content file is configured
const SAMPLE_PORTFOLIO: &str = include_str!("../assets/portfolio.toml");

/// Id of the section that hosts the project cards and filter bar
pub const PROJECTS_SECTION_ID: &str = "projects";

/// Filter that matches every project
pub const FILTER_ALL: &str = "all";

/// Maximum number of nav links reachable through number keys
pub const MAX_NAV_LINKS: usize = 9;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("section #{index} has an empty id")]
    EmptySectionId { index: usize },

    #[error("section id `{0}` is used more than once")]
    DuplicateSection(String),
}

/// A single navigable destination shown in the command palette
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteEntry {
    pub label: String,
    pub target: String,
}

impl PaletteEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A nav bar link
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Whether the section fades in when first scrolled into view
    #[serde(default = "default_reveal")]
    pub reveal: bool,
}

fn default_reveal() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Whether this project card is shown under the given filter
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == FILTER_ALL || self.tags.iter().any(|tag| tag == filter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    palette: Vec<PaletteEntry>,
    #[serde(default)]
    filters: Vec<String>,
}

impl Portfolio {
    /// Load and validate a portfolio from a TOML file
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|err| match err {
            ContentError::Parse { source, .. } => ContentError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// The built-in sample portfolio
    pub fn sample() -> Result<Self, ContentError> {
        Self::parse(SAMPLE_PORTFOLIO)
    }

    pub fn parse(content: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(content).map_err(|source| ContentError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ContentError::EmptySectionId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    /// Palette entries: the explicit list, or one per section
    pub fn palette_entries(&self) -> Vec<PaletteEntry> {
        if !self.palette.is_empty() {
            return self.palette.clone();
        }
        self.sections
            .iter()
            .map(|s| PaletteEntry::new(&s.title, format!("#{}", s.id)))
            .collect()
    }

    /// Nav bar links: the explicit list, or one per section
    pub fn nav_links(&self) -> Vec<Link> {
        let links: Vec<Link> = if self.links.is_empty() {
            self.sections
                .iter()
                .map(|s| Link {
                    label: s.title.clone(),
                    target: format!("#{}", s.id),
                })
                .collect()
        } else {
            self.links.clone()
        };
        links.into_iter().take(MAX_NAV_LINKS).collect()
    }

    /// Filter buttons: `all` first, then the explicit list or every tag in
    /// first-seen order
    pub fn filters(&self) -> Vec<String> {
        let mut filters = vec![FILTER_ALL.to_string()];
        let candidates: Box<dyn Iterator<Item = &String>> = if self.filters.is_empty() {
            Box::new(self.projects.iter().flat_map(|p| p.tags.iter()))
        } else {
            Box::new(self.filters.iter())
        };
        for tag in candidates {
            if !filters.contains(tag) {
                filters.push(tag.clone());
            }
        }
        filters
    }

    /// Whether the page declares its own projects section
    pub fn has_projects_section(&self) -> bool {
        self.sections.iter().any(|s| s.id == PROJECTS_SECTION_ID)
    }
}

/// Strip the leading `#` from a target, if any
pub fn target_id(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        name = "Test"

        [[sections]]
        id = "home"
        title = "Home"

        [[sections]]
        id = "about"
        title = "About"
        reveal = false

        [[projects]]
        name = "a"
        tags = ["rust", "cli"]

        [[projects]]
        name = "b"
        tags = ["web", "rust"]
    "#;

    #[test]
    fn test_sample_portfolio_parses() {
        let portfolio = Portfolio::sample().unwrap();
        assert!(!portfolio.sections.is_empty());
        assert!(portfolio.has_projects_section());
        assert!(!portfolio.headline.is_empty());
    }

    #[test]
    fn test_defaults() {
        let portfolio = Portfolio::parse(MINIMAL).unwrap();
        assert!(portfolio.sections[0].reveal);
        assert!(!portfolio.sections[1].reveal);
        assert!(portfolio.headline.is_empty());
        assert!(!portfolio.has_projects_section());
    }

    #[test]
    fn test_palette_entries_default_to_sections() {
        let portfolio = Portfolio::parse(MINIMAL).unwrap();
        assert_eq!(
            portfolio.palette_entries(),
            vec![
                PaletteEntry::new("Home", "#home"),
                PaletteEntry::new("About", "#about"),
            ]
        );
    }

    #[test]
    fn test_explicit_palette_entries() {
        let content = format!(
            "{}\n[[palette]]\nlabel = \"Say hi\"\ntarget = \"#about\"\n",
            MINIMAL
        );
        let portfolio = Portfolio::parse(&content).unwrap();
        assert_eq!(
            portfolio.palette_entries(),
            vec![PaletteEntry::new("Say hi", "#about")]
        );
    }

    #[test]
    fn test_filters_first_seen_order() {
        let portfolio = Portfolio::parse(MINIMAL).unwrap();
        assert_eq!(portfolio.filters(), vec!["all", "rust", "cli", "web"]);
    }

    #[test]
    fn test_project_matches_filter() {
        let portfolio = Portfolio::parse(MINIMAL).unwrap();
        let a = &portfolio.projects[0];
        assert!(a.matches_filter("all"));
        assert!(a.matches_filter("cli"));
        assert!(!a.matches_filter("web"));
        // Exact tag match only
        assert!(!a.matches_filter("rus"));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let content = r#"
            name = "Dup"
            [[sections]]
            id = "a"
            title = "A"
            [[sections]]
            id = "a"
            title = "Again"
        "#;
        let err = Portfolio::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSection(id) if id == "a"));
    }

    #[test]
    fn test_empty_section_id_rejected() {
        let content = r#"
            name = "Empty"
            [[sections]]
            id = " "
            title = "A"
        "#;
        let err = Portfolio::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::EmptySectionId { index: 0 }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Portfolio::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        match Portfolio::load(&path).unwrap_err() {
            ContentError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_target_id() {
        assert_eq!(target_id("#about"), "about");
        assert_eq!(target_id("about"), "about");
    }
}
