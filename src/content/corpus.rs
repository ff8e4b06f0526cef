//! In-memory corpus of content items

use indexmap::IndexMap;
use serde::Serialize;

use super::ContentItem;
use crate::related;

/// What the loader had to fall back on or skip while building a corpus
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// Source paths whose `publishedAt` was missing or unparseable
    pub date_fallbacks: Vec<String>,
    /// Source paths whose front-matter block could not be read, with the reason
    pub invalid_front_matter: Vec<(String, String)>,
    /// Source paths that could not be loaded, with the reason
    pub skipped: Vec<(String, String)>,
    /// Drafts left out of the corpus
    pub drafts: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.date_fallbacks.is_empty()
            && self.invalid_front_matter.is_empty()
            && self.skipped.is_empty()
    }
}

/// A title carried by more than one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateTitle {
    pub title: String,
    pub files: Vec<String>,
}

/// An ordered, read-only collection of content items from one section
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    section: String,
    items: Vec<ContentItem>,
    report: LoadReport,
}

impl Corpus {
    pub fn new(section: &str, items: Vec<ContentItem>) -> Self {
        Self {
            section: section.to_string(),
            items,
            report: LoadReport::default(),
        }
    }

    pub(crate) fn with_report(mut self, report: LoadReport) -> Self {
        self.report = report;
        self
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Find an item by slug; a trailing `.md`/`.mdx` or `/` is ignored
    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        let wanted = slug.trim_matches('/');
        let wanted = wanted
            .strip_suffix(".mdx")
            .or_else(|| wanted.strip_suffix(".md"))
            .unwrap_or(wanted);
        self.items.iter().find(|item| item.slug() == wanted)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.title == title)
    }

    /// Tag usage counts in first-seen order
    pub fn tag_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for item in &self.items {
            for tag in &item.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Items carrying `tag`, in corpus order
    pub fn tagged(&self, tag: &str) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.has_tag(tag)).collect()
    }

    /// Titles shared by more than one source file
    pub fn duplicate_titles(&self) -> Vec<DuplicateTitle> {
        let mut by_title: IndexMap<&str, Vec<String>> = IndexMap::new();
        for item in &self.items {
            by_title
                .entry(item.title.as_str())
                .or_default()
                .push(item.file_path.clone());
        }

        by_title
            .into_iter()
            .filter(|(_, files)| files.len() > 1)
            .map(|(title, files)| DuplicateTitle {
                title: title.to_string(),
                files,
            })
            .collect()
    }

    /// Items related to `target`, newest first
    pub fn related_to(&self, target: &ContentItem) -> Vec<&ContentItem> {
        related::select_related(target, &self.items)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn corpus() -> Corpus {
        let date = |y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap();
        let mut dup = ContentItem::new("Intro", &["rust"], date(2019));
        dup.file_path = "old/intro.mdx".to_string();
        Corpus::new(
            "articles",
            vec![
                ContentItem::new("Intro", &["rust", "beginner"], date(2020)),
                ContentItem::new("Traits", &["rust"], date(2021)),
                ContentItem::new("Flutter", &["dart"], date(2022)),
                dup,
            ],
        )
    }

    #[test]
    fn test_lookups() {
        let corpus = corpus();
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.find_by_slug("traits").unwrap().title, "Traits");
        assert_eq!(corpus.find_by_slug("/traits.mdx").unwrap().title, "Traits");
        assert_eq!(
            corpus.find_by_slug("old/intro").unwrap().file_path,
            "old/intro.mdx"
        );
        assert!(corpus.find_by_slug("missing").is_none());
        assert_eq!(corpus.find_by_title("Flutter").unwrap().slug(), "flutter");
    }

    #[test]
    fn test_tag_counts_keep_first_seen_order() {
        let counts = corpus().tag_counts();
        let keys: Vec<_> = counts.keys().cloned().collect();
        assert_eq!(keys, vec!["rust", "beginner", "dart"]);
        assert_eq!(counts["rust"], 3);
        assert_eq!(corpus().tagged("dart").len(), 1);
    }

    #[test]
    fn test_duplicate_titles() {
        let dups = corpus().duplicate_titles();
        assert_eq!(
            dups,
            vec![DuplicateTitle {
                title: "Intro".to_string(),
                files: vec!["intro.mdx".to_string(), "old/intro.mdx".to_string()],
            }]
        );
    }

    #[test]
    fn test_related_to() {
        let corpus = corpus();
        let target = corpus.find_by_slug("traits").unwrap();
        let related: Vec<_> = corpus
            .related_to(target)
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(related, vec!["Intro"]);
    }
}
