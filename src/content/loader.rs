//! Content loader - builds corpora from section directories

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use super::frontmatter::parse_date_string;
use super::{ContentItem, Corpus, FrontMatter, LoadReport, MarkdownAnalyzer};
use crate::config::SectionConfig;
use crate::Site;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Front-matter error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid fallback date: {0}")]
    InvalidFallbackDate(String),
}

/// Loads content items from the site's section directories
pub struct CorpusLoader<'a> {
    site: &'a Site,
    analyzer: MarkdownAnalyzer,
    fallback_date: DateTime<Utc>,
}

impl<'a> CorpusLoader<'a> {
    /// Create a new loader
    pub fn new(site: &'a Site) -> Result<Self, ContentError> {
        let fallback_date = parse_date_string(&site.config.fallback_date).ok_or_else(|| {
            ContentError::InvalidFallbackDate(site.config.fallback_date.clone())
        })?;
        Ok(Self {
            site,
            analyzer: MarkdownAnalyzer::new(site.config.excerpt_length),
            fallback_date,
        })
    }

    /// Load every configured section, in configuration order
    pub fn load_all(&self) -> Result<Vec<Corpus>, ContentError> {
        self.site
            .config
            .sections
            .iter()
            .map(|section| self.load_section(section))
            .collect()
    }

    /// Load a section by name
    pub fn load_named(&self, name: &str) -> Result<Corpus, ContentError> {
        let section = self
            .site
            .config
            .section(name)
            .ok_or_else(|| ContentError::UnknownSection(name.to_string()))?;
        self.load_section(section)
    }

    /// Load all items of one section, in file-name order
    pub fn load_section(&self, section: &SectionConfig) -> Result<Corpus, ContentError> {
        let dir = self.site.section_dir(section);
        if !dir.exists() {
            tracing::warn!("Section directory not found: {:?}", dir);
            return Ok(Corpus::new(&section.name, Vec::new()));
        }

        let mut items = Vec::new();
        let mut report = LoadReport::default();

        let walker = WalkDir::new(&dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_content_file(path) {
                continue;
            }

            match self.load_item(section, &dir, path, &mut report) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => report.drafts += 1,
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                    report.skipped.push((relative_path(&dir, path), e.to_string()));
                }
            }
        }

        let corpus = Corpus::new(&section.name, items).with_report(report);
        for dup in corpus.duplicate_titles() {
            tracing::warn!(
                "Duplicate title {:?} in section {}: {}",
                dup.title,
                section.name,
                dup.files.join(", ")
            );
        }

        tracing::info!("Loaded {} items from {}", corpus.len(), section.name);
        Ok(corpus)
    }

    /// Load a single item; `None` for drafts that are not wanted
    fn load_item(
        &self,
        section: &SectionConfig,
        dir: &Path,
        path: &Path,
        report: &mut LoadReport,
    ) -> Result<Option<ContentItem>, ContentError> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&source).map_err(|e| ContentError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if fm.is_draft() && !self.site.config.include_drafts {
            tracing::debug!("Skipping draft {:?}", path);
            return Ok(None);
        }

        let file_path = relative_path(dir, path);

        if let Some(reason) = &fm.invalid {
            tracing::warn!("Invalid front-matter in {}: {}", file_path, reason);
            report
                .invalid_front_matter
                .push((file_path.clone(), reason.clone()));
        }

        let published_at = match fm.parse_published_at() {
            Some(date) => date,
            None if fm.invalid.is_some() => self.fallback_date,
            None => {
                tracing::warn!(
                    "Missing or invalid publishedAt {:?} in {}, using {}",
                    fm.published_at.as_deref().unwrap_or(""),
                    file_path,
                    self.fallback_date.format("%Y-%m-%d")
                );
                report.date_fallbacks.push(file_path.clone());
                self.fallback_date
            }
        };

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let description = fm.description.or_else(|| self.analyzer.excerpt(body));

        let mut item = ContentItem::new(&title, &[], published_at);
        item.tags = fm.tags;
        item.file_path = file_path;
        item.section = section.name.clone();
        item.description = description;
        item.author = fm.author;
        item.feature_img = fm.feature_img;
        item.logo_image = fm.logo_image;
        item.headings = self.analyzer.headings(body);
        item.extra = fm.extra;

        Ok(Some(item))
    }
}

/// Check if a file is a markdown or MDX source
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

/// `_partials`, `.git` and similar entries are not content
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('_') || s.starts_with('.'))
        .unwrap_or(false)
}

/// Path relative to the section directory, with `/` separators
fn relative_path(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(dir: &TempDir, config: SiteConfig) -> Site {
        Site::with_config(dir.path(), config)
    }

    #[test]
    fn test_load_section() {
        let dir = TempDir::new().unwrap();
        let articles = dir.path().join("content/articles");
        write(
            &articles,
            "b-second.mdx",
            "---\ntitle: Second\npublishedAt: '2023-02-01'\ntags: [rust, cli]\nlogoImage: rust.png\n---\n\n## Setup\n\nInstall things.\n",
        );
        write(
            &articles,
            "a-first.md",
            "---\ntitle: First\npublishedAt: 2023-01-01\ntags: rust\ndescription: Custom\n---\nBody\n",
        );
        write(&articles, "notes.txt", "not content");
        write(&articles, "_drafts/hidden.mdx", "---\ntitle: Hidden\n---\n");
        write(&articles, "nested/deep.mdx", "---\ntitle: Deep\npublishedAt: 2022-05-05\n---\n");

        let site = site(&dir, SiteConfig::default());
        let loader = CorpusLoader::new(&site).unwrap();
        let corpus = loader.load_named("articles").unwrap();

        let titles: Vec<_> = corpus.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Deep"]);

        let second = corpus.find_by_slug("b-second").unwrap();
        assert_eq!(second.tags, vec!["rust", "cli"]);
        assert_eq!(second.section, "articles");
        assert_eq!(second.logo_image.as_deref(), Some("rust.png"));
        assert_eq!(second.headings[0].text, "Setup");
        assert_eq!(second.description.as_deref(), Some("Install things."));

        let first = corpus.find_by_slug("a-first").unwrap();
        assert_eq!(first.description.as_deref(), Some("Custom"));
        assert_eq!(corpus.find_by_slug("nested/deep").unwrap().title, "Deep");
        assert!(corpus.report().is_clean());
    }

    #[test]
    fn test_date_fallback_and_title_fallback() {
        let dir = TempDir::new().unwrap();
        let tutorials = dir.path().join("content/tutorials");
        write(&tutorials, "no-date.mdx", "---\ntags: [x]\n---\nBody\n");
        write(&tutorials, "bad-date.mdx", "---\ntitle: Bad\npublishedAt: someday\n---\n");

        let site = site(&dir, SiteConfig::default());
        let corpus = CorpusLoader::new(&site)
            .unwrap()
            .load_named("tutorials")
            .unwrap();

        assert_eq!(corpus.len(), 2);
        let untitled = corpus.find_by_slug("no-date").unwrap();
        assert_eq!(untitled.title, "no-date");
        assert_eq!(untitled.published_at.timestamp(), 0);
        assert_eq!(
            corpus.report().date_fallbacks,
            vec!["bad-date.mdx".to_string(), "no-date.mdx".to_string()]
        );
    }

    #[test]
    fn test_drafts_and_broken_files() {
        let dir = TempDir::new().unwrap();
        let articles = dir.path().join("content/articles");
        write(&articles, "draft.mdx", "---\ntitle: Draft\ndraft: true\n---\n");
        write(&articles, "broken.mdx", ";;;{\"title\": ;;;\nbody");
        write(&articles, "ok.mdx", "---\ntitle: Ok\npublishedAt: 2020-01-01\n---\n");

        let site = site(&dir, SiteConfig::default());
        let corpus = CorpusLoader::new(&site)
            .unwrap()
            .load_named("articles")
            .unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.report().drafts, 1);
        assert_eq!(corpus.report().skipped.len(), 1);
        assert_eq!(corpus.report().skipped[0].0, "broken.mdx");

        let config = SiteConfig {
            include_drafts: true,
            ..SiteConfig::default()
        };
        let site = Site::with_config(dir.path(), config);
        let corpus = CorpusLoader::new(&site)
            .unwrap()
            .load_named("articles")
            .unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_invalid_front_matter_is_reported() {
        let dir = TempDir::new().unwrap();
        let articles = dir.path().join("content/articles");
        write(
            &articles,
            "go.mdx",
            "---\ntitle: Go: the basics\npublishedAt: 2021-01-01\ntags: [go]\n---\n\n## Setup\n\nInstall Go.\n",
        );
        write(
            &articles,
            "go-web.mdx",
            "---\ntitle: Go Web\npublishedAt: 2022-01-01\ntags: [go]\n---\n",
        );

        let site = site(&dir, SiteConfig::default());
        let corpus = CorpusLoader::new(&site)
            .unwrap()
            .load_named("articles")
            .unwrap();
        assert_eq!(corpus.len(), 2);

        let broken = corpus.find_by_slug("go").unwrap();
        assert_eq!(broken.title, "go");
        assert!(broken.tags.is_empty());
        assert_eq!(broken.headings.len(), 1);
        assert_eq!(broken.headings[0].text, "Setup");
        assert_eq!(broken.description.as_deref(), Some("Install Go."));

        let report = corpus.report();
        assert!(!report.is_clean());
        assert_eq!(report.invalid_front_matter.len(), 1);
        assert_eq!(report.invalid_front_matter[0].0, "go.mdx");
        assert!(report.date_fallbacks.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_missing_and_unknown_sections() {
        let dir = TempDir::new().unwrap();
        let site = site(&dir, SiteConfig::default());
        let loader = CorpusLoader::new(&site).unwrap();

        let corpora = loader.load_all().unwrap();
        assert_eq!(corpora.len(), 2);
        assert!(corpora.iter().all(|c| c.is_empty()));

        assert!(matches!(
            loader.load_named("snippets"),
            Err(ContentError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_invalid_fallback_date() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            fallback_date: "never".to_string(),
            ..SiteConfig::default()
        };
        let site = Site::with_config(dir.path(), config);
        assert!(matches!(
            CorpusLoader::new(&site),
            Err(ContentError::InvalidFallbackDate(_))
        ));
    }
}
