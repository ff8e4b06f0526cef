//! Content item model

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::markdown::Heading;

lazy_static! {
    static ref SOURCE_EXT: Regex = Regex::new(r"\.mdx?$").unwrap();
}

/// A published article or tutorial
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Title; identifies the item within a corpus
    pub title: String,

    /// Tags in front-matter order
    pub tags: Vec<String>,

    /// Publication date
    pub published_at: DateTime<Utc>,

    /// Source path relative to the section directory (`rust/ownership.mdx`)
    pub file_path: String,

    /// Section the item was loaded from
    pub section: String,

    pub description: Option<String>,
    pub author: Option<String>,
    pub feature_img: Option<String>,
    pub logo_image: Option<String>,

    /// Headings found in the body
    pub headings: Vec<Heading>,

    /// Custom front-matter fields
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl ContentItem {
    /// Create an item with the fields the related selector needs
    pub fn new(title: &str, tags: &[&str], published_at: DateTime<Utc>) -> Self {
        let file_path = format!("{}.mdx", slug::slugify(title));
        Self {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published_at,
            file_path,
            section: String::new(),
            description: None,
            author: None,
            feature_img: None,
            logo_image: None,
            headings: Vec::new(),
            extra: HashMap::new(),
        }
    }

    /// File path without its `.md`/`.mdx` extension
    pub fn slug(&self) -> &str {
        match SOURCE_EXT.find(&self.file_path) {
            Some(m) => &self.file_path[..m.start()],
            None => &self.file_path,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the two items have at least one tag in common
    pub fn shares_tag_with(&self, other: &ContentItem) -> bool {
        self.tags.iter().any(|t| other.has_tag(t))
    }
}
