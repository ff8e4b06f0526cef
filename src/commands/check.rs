//! Report data-quality problems in the content sources

use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::content::{DuplicateTitle, LoadReport};
use crate::Site;

/// Problems found in one section
#[derive(Debug, Serialize)]
pub struct SectionCheck {
    pub section: String,
    pub items: usize,
    pub duplicate_titles: Vec<DuplicateTitle>,
    #[serde(flatten)]
    pub report: LoadReport,
}

impl SectionCheck {
    pub fn has_errors(&self) -> bool {
        !self.duplicate_titles.is_empty()
    }
}

/// Collect problems for every configured section
pub fn collect(site: &Site) -> Result<Vec<SectionCheck>> {
    Ok(site
        .load_all()?
        .into_iter()
        .map(|corpus| SectionCheck {
            section: corpus.section().to_string(),
            items: corpus.len(),
            duplicate_titles: corpus.duplicate_titles(),
            report: corpus.report().clone(),
        })
        .collect())
}

/// Print the report; duplicate titles fail the check
pub fn run(site: &Site, json: bool) -> Result<()> {
    let checks = collect(site)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        print!("{}", render(&checks)?);
    }

    let duplicates: usize = checks.iter().map(|c| c.duplicate_titles.len()).sum();
    if duplicates > 0 {
        bail!("Found {} duplicate title(s)", duplicates);
    }
    Ok(())
}

pub fn render(checks: &[SectionCheck]) -> Result<String> {
    let mut out = String::new();
    for check in checks {
        writeln!(out, "{} ({} items):", check.section, check.items)?;
        if !check.has_errors() && check.report.is_clean() {
            writeln!(out, "  ok")?;
        }
        for dup in &check.duplicate_titles {
            writeln!(
                out,
                "  duplicate title {:?}: {}",
                dup.title,
                dup.files.join(", ")
            )?;
        }
        for (file, reason) in &check.report.invalid_front_matter {
            writeln!(out, "  invalid front-matter {}: {}", file, reason)?;
        }
        for file in &check.report.date_fallbacks {
            writeln!(out, "  missing or invalid publishedAt: {}", file)?;
        }
        for (file, reason) in &check.report.skipped {
            writeln!(out, "  skipped {}: {}", file, reason)?;
        }
        if check.report.drafts > 0 {
            writeln!(out, "  {} draft(s) left out", check.report.drafts)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_reports_problems() {
        let dir = TempDir::new().unwrap();
        let articles = dir.path().join("content/articles");
        fs::create_dir_all(articles.join("old")).unwrap();
        fs::write(
            articles.join("intro.mdx"),
            "---\ntitle: Intro\npublishedAt: 2021-01-01\n---\n",
        )
        .unwrap();
        fs::write(
            articles.join("old/intro.mdx"),
            "---\ntitle: Intro\npublishedAt: not a date\n---\n",
        )
        .unwrap();
        fs::write(
            articles.join("setup.mdx"),
            "---\ntitle: Setup: step one\npublishedAt: 2021-02-02\n---\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let checks = collect(&site).unwrap();
        assert_eq!(checks.len(), 2);
        assert!(checks[0].has_errors());
        assert!(!checks[1].has_errors());

        let out = render(&checks).unwrap();
        assert!(out.contains("duplicate title \"Intro\": intro.mdx, old/intro.mdx"));
        assert!(out.contains("missing or invalid publishedAt: old/intro.mdx"));
        assert!(out.contains("invalid front-matter setup.mdx: "));
        assert!(!out.contains("publishedAt: setup.mdx"));
        assert!(out.contains("tutorials (0 items):\n  ok"));

        assert!(run(&site, false).is_err());
    }
}
