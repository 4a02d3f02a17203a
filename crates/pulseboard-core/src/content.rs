//! Dashboard content records.
//!
//! Content is data, not layout: the page is built from a
//! [`DashboardContent`] value that can come from the built-in defaults or a
//! JSON document. Fields missing from the document keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Number of tiles in the statistics row
pub const STAT_TILE_COUNT: usize = 3;

/// A feature card's content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub content: String,
    /// Single glyph shown before the title
    pub icon: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, content: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            icon: icon.into(),
        }
    }

    /// Card header text: `"{icon} {title}"`
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// One statistics tile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Profile block shown above the feature list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub avatar_url: String,
    pub greeting: String,
    pub name: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            avatar_url: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            greeting: "Welcome back,".to_string(),
            name: "Rishav Bhardwaz".to_string(),
        }
    }
}

/// Everything the dashboard displays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub app_title: String,
    pub app_subtitle: String,
    pub profile: Profile,
    pub section_heading: String,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

impl Default for DashboardContent {
    fn default() -> Self {
        Self {
            app_title: "Awesome App".to_string(),
            app_subtitle: "Built with Dioxus".to_string(),
            profile: Profile::default(),
            section_heading: "Featured Today".to_string(),
            features: default_features(),
            stats: default_stats(),
        }
    }
}

fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "Discover Amazing Features",
            "Explore our collection of premium features designed to make your life easier.",
            "🌟",
        ),
        Feature::new(
            "Personalized Experience",
            "Get recommendations tailored just for you based on your preferences.",
            "🎯",
        ),
        Feature::new(
            "Seamless Integration",
            "Connect with your favorite apps and services without any hassle.",
            "🔗",
        ),
        Feature::new(
            "24/7 Support",
            "Our team is always ready to help you with any questions or issues.",
            "🛟",
        ),
    ]
}

fn default_stats() -> Vec<Stat> {
    vec![
        Stat::new("42", "Projects"),
        Stat::new("98%", "Success"),
        Stat::new("24", "Hours"),
    ]
}

impl DashboardContent {
    /// Parse and validate a JSON content document
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON content file
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::debug!(
            "Loaded {} features and {} stats from {:?}",
            content.features.len(),
            content.stats.len(),
            path
        );
        Ok(content)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if let Some(index) = self.features.iter().position(|f| f.title.trim().is_empty()) {
            return Err(DashboardError::InvalidContent(format!(
                "feature {} has an empty title",
                index
            )));
        }
        if self.stats.len() != STAT_TILE_COUNT {
            return Err(DashboardError::InvalidContent(format!(
                "stats row needs exactly {} tiles, got {}",
                STAT_TILE_COUNT,
                self.stats.len()
            )));
        }
        Ok(())
    }
}
