use serde::{Deserialize, Serialize};

use crate::text::WordToken;

/// Who the portfolio is about, and the hero text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short label shown as the navbar logo
    #[serde(default)]
    pub logo: Option<String>,
    /// Hero headline, revealed word by word with highlighted runs
    pub headline: Vec<WordToken>,
    /// Sentence revealed word by word under the headline
    #[serde(default)]
    pub about: String,
}

impl Profile {
    pub fn logo(&self) -> &str {
        self.logo.as_deref().unwrap_or(&self.name)
    }
}

/// Navbar entry; `target` is a section anchor (`#projects`) or a page route (`/story`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub target: String,
}

/// Where a navbar entry leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    About,
    Projects,
    Home,
    Story,
}

impl NavItem {
    pub fn resolve(&self) -> Option<NavTarget> {
        match self.target.as_str() {
            "#about" => Some(NavTarget::About),
            "#projects" => Some(NavTarget::Projects),
            "/" => Some(NavTarget::Home),
            "/story" => Some(NavTarget::Story),
            _ => None,
        }
    }
}

/// One card of the project grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Width in a six-column grid
    #[serde(default = "default_span")]
    pub span: u16,
}

fn default_span() -> u16 {
    3
}

/// Header and intro of the project grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// External links attached to a timeline entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl TimelineLinks {
    /// Present links with their button labels, in display order
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Visit Website", &self.website),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("YouTube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

/// One milestone on the story page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    /// Usually the date, e.g. "August 2024"
    pub subtitle: String,
    pub content: String,
    /// Short bullet lines under the body
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub links: TimelineLinks,
}

/// Heading and intro of the story page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorySection {
    /// Heading words; highlighted words get the gradient treatment
    pub heading: Vec<WordToken>,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub entries: Vec<TimelineEntry>,
}
