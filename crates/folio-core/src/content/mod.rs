//! Portfolio content: hero text, navigation, projects and the career timeline
//!
//! Content is plain data loaded once from TOML. A default document is
//! compiled into the binary so folio runs without any files on disk.

mod models;

pub use models::{
    Feature, NavItem, NavTarget, Profile, ProjectsSection, StorySection, TimelineEntry,
    TimelineLinks,
};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Bundled default content
pub const BUNDLED_CONTENT: &str = include_str!("portfolio.toml");

/// Number of columns the project grid is laid out on
pub const GRID_COLUMNS: u16 = 6;

/// The whole content document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    pub projects: ProjectsSection,
    pub story: StorySection,
}

impl Portfolio {
    /// Parse and validate a content document
    pub fn from_toml(source: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// The compiled-in default content
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_CONTENT)
    }

    /// Load content from a file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&source)?;
        info!(path = %path.display(), "loaded portfolio content");
        Ok(portfolio)
    }

    /// Load from an explicit path, then the configured path, then the bundled content
    pub fn resolve(config: &AppConfig, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match config.content_path() {
            Some(path) => Self::load(&path),
            None => {
                debug!("using bundled portfolio content");
                Self::bundled()
            }
        }
    }

    /// Check the invariants the renderer relies on
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::Content("profile.name is empty".to_string()));
        }
        if self.profile.headline.iter().any(|w| w.text.trim().is_empty()) {
            return Err(Error::Content("profile.headline contains an empty word".to_string()));
        }

        for item in &self.nav {
            if item.resolve().is_none() {
                return Err(Error::Content(format!(
                    "nav item '{}' has unknown target '{}'",
                    item.name, item.target
                )));
            }
        }

        for feature in &self.projects.features {
            if feature.title.trim().is_empty() {
                return Err(Error::Content("project with empty title".to_string()));
            }
            if feature.span == 0 || feature.span > GRID_COLUMNS {
                return Err(Error::Content(format!(
                    "project '{}' has span {}, expected 1..={}",
                    feature.title, feature.span, GRID_COLUMNS
                )));
            }
            if let Some(ref link) = feature.link {
                url::Url::parse(link)?;
            }
        }

        for entry in &self.story.entries {
            if entry.title.trim().is_empty() {
                return Err(Error::Content("timeline entry with empty title".to_string()));
            }
            for (_, link) in entry.links.labelled() {
                url::Url::parse(link)?;
            }
        }

        Ok(())
    }

    /// About line split into plain words for the text-generate effect
    pub fn about_words(&self) -> Vec<crate::text::WordToken> {
        crate::text::WordToken::from_sentence(&self.profile.about)
    }

    /// Render the document back to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
