//! Show the related content of one item

use anyhow::{bail, Result};
use chrono::Utc;
use std::fmt::Write;

use super::load_corpora;
use crate::content::{ContentItem, Corpus};
use crate::helpers::{related_links, tag_href, RelatedLink};
use crate::Site;

/// How many related items to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// The configured sidebar limit
    Sidebar,
    /// The configured panel limit (unlimited by default)
    Panel,
    Exactly(usize),
}

#[derive(Debug, Clone)]
pub struct RelatedOptions<'a> {
    pub slug: &'a str,
    pub section: Option<&'a str>,
    pub limit: Limit,
    pub json: bool,
}

pub fn run(site: &Site, opts: &RelatedOptions<'_>) -> Result<()> {
    print!("{}", render(site, opts)?);
    Ok(())
}

pub fn render(site: &Site, opts: &RelatedOptions<'_>) -> Result<String> {
    let corpora = load_corpora(site, opts.section)?;

    // Related items come from the target's own section
    let Some((corpus, target)) = corpora
        .iter()
        .find_map(|c| c.find_by_slug(opts.slug).map(|t| (c, t)))
    else {
        bail!("No content item with slug {:?}", opts.slug);
    };

    let links = links_for(site, corpus, target, opts.limit)?;

    if opts.json {
        return Ok(serde_json::to_string_pretty(&links)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "Related tags:")?;
    for tag in &target.tags {
        writeln!(out, "  #{} {}", tag, tag_href(&site.config, tag))?;
    }

    if links.is_empty() {
        match target.tags.first() {
            Some(tag) => writeln!(
                out,
                "No related posts! Like {}? Try writing about it.",
                tag
            )?,
            None => writeln!(out, "No related posts!")?,
        }
        return Ok(out);
    }

    writeln!(out, "Related posts ({}):", links.len())?;
    for link in &links {
        writeln!(out, "  {} · {} {}", link.title, link.time_ago, link.href)?;
    }
    Ok(out)
}

fn links_for(
    site: &Site,
    corpus: &Corpus,
    target: &ContentItem,
    limit: Limit,
) -> Result<Vec<RelatedLink>> {
    let Some(section) = site.config.section(corpus.section()) else {
        bail!("Unknown section: {}", corpus.section());
    };

    let related = corpus.related_to(target);
    let limit = match limit {
        Limit::Sidebar => Some(site.config.related.sidebar_limit),
        Limit::Panel => site.config.related.panel_limit,
        Limit::Exactly(n) => Some(n),
    };

    tracing::debug!(
        "{} related to {:?}, showing {:?}",
        related.len(),
        target.title,
        limit
    );

    Ok(related_links(&site.config, section, &related, limit, &Utc::now()))
}
