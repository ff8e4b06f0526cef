//! Site configuration (_config.yml)

use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::helpers::{is_valid_date_format, DEFAULT_DATE_FORMAT};

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub root: String,

    // Content
    pub content_dir: String,
    pub sections: Vec<SectionConfig>,
    pub tag_dir: String,
    pub logo_dir: String,

    // Loading
    pub include_drafts: bool,
    /// Number of characters kept when a description falls back to the body
    pub excerpt_length: usize,
    /// Date given to items whose `publishedAt` is missing or unparseable
    pub fallback_date: String,

    /// chrono strftime format for listing dates
    pub date_format: String,

    #[serde(default)]
    pub related: RelatedConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Content".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            sections: vec![
                SectionConfig::new("articles"),
                SectionConfig::new("tutorials"),
            ],
            tag_dir: "tags".to_string(),
            logo_dir: "logos".to_string(),

            include_drafts: false,
            excerpt_length: 160,
            fallback_date: "1970-01-01".to_string(),

            date_format: DEFAULT_DATE_FORMAT.to_string(),

            related: RelatedConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        if !is_valid_date_format(&config.date_format) {
            bail!("Invalid date_format {:?}", config.date_format);
        }
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// A content section such as `articles` or `tutorials`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    /// Directory under `content_dir`; defaults to the name
    #[serde(default)]
    pub dir: Option<String>,
    /// URL prefix for items; defaults to the name
    #[serde(default)]
    pub route: Option<String>,
}

impl SectionConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dir: None,
            route: None,
        }
    }

    pub fn dir(&self) -> &str {
        self.dir.as_deref().unwrap_or(&self.name)
    }

    pub fn route(&self) -> &str {
        self.route.as_deref().unwrap_or(&self.name)
    }
}

/// Display limits for related content
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    pub sidebar_limit: usize,
    /// `None` shows every related item
    pub panel_limit: Option<usize>,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            sidebar_limit: 5,
            panel_limit: None,
        }
    }
}
