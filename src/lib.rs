//! mdx-corpus: front-matter corpus loading and related-content selection
//!
//! This crate reads MDX/markdown content sections (articles, tutorials, ...)
//! into ordered corpora of [`content::ContentItem`] records and selects
//! related items by shared tags, newest first.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod related;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use related::select_related;

/// A content site rooted at a directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory holding one directory per section
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir.as_ref());
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Directory of a section's sources
    pub fn section_dir(&self, section: &config::SectionConfig) -> PathBuf {
        self.content_dir.join(section.dir())
    }

    /// Load one section by name
    pub fn load_section(&self, name: &str) -> Result<content::Corpus> {
        Ok(content::CorpusLoader::new(self)?.load_named(name)?)
    }

    /// Load every configured section
    pub fn load_all(&self) -> Result<Vec<content::Corpus>> {
        Ok(content::CorpusLoader::new(self)?.load_all()?)
    }
}
