//! List helpers: related links and tag listings

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::date::{date_xml, format_date, time_ago};
use super::url::{feature_src, item_href, logo_src, tag_href};
use crate::config::{SectionConfig, SiteConfig};
use crate::content::{ContentItem, Corpus};

/// A related item, ready for a link or card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    pub title: String,
    pub href: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub date: String,
    #[serde(rename = "timeAgo")]
    pub time_ago: String,
    #[serde(rename = "logoSrc", skip_serializing_if = "Option::is_none")]
    pub logo_src: Option<String>,
    #[serde(rename = "featureSrc", skip_serializing_if = "Option::is_none")]
    pub feature_src: Option<String>,
}

/// Build links for already-selected related items, keeping at most `limit`
pub fn related_links(
    config: &SiteConfig,
    section: &SectionConfig,
    related: &[&ContentItem],
    limit: Option<usize>,
    now: &DateTime<Utc>,
) -> Vec<RelatedLink> {
    let limit = limit.unwrap_or(related.len());
    related
        .iter()
        .take(limit)
        .map(|item| RelatedLink {
            title: item.title.clone(),
            href: item_href(config, section, item),
            published_at: date_xml(&item.published_at),
            date: format_date(&item.published_at, &config.date_format),
            time_ago: time_ago(&item.published_at, now),
            logo_src: logo_src(config, item),
            feature_src: feature_src(config, section, item),
        })
        .collect()
}

/// A tag with its usage count and listing link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub count: usize,
    pub href: String,
}

/// Tags across corpora, most used first; ties keep first-seen order
pub fn list_tags(config: &SiteConfig, corpora: &[Corpus]) -> Vec<TagEntry> {
    let mut counts: indexmap::IndexMap<String, usize> = indexmap::IndexMap::new();
    for corpus in corpora {
        for (tag, count) in corpus.tag_counts() {
            *counts.entry(tag).or_insert(0) += count;
        }
    }

    let mut tags: Vec<TagEntry> = counts
        .into_iter()
        .map(|(name, count)| TagEntry {
            href: tag_href(config, &name),
            name,
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_related_links_truncate() {
        let config = SiteConfig::default();
        let section = SectionConfig::new("articles");
        let items: Vec<ContentItem> = (1..=7)
            .map(|m| ContentItem::new(&format!("Post {m}"), &["x"], date(2023, m)))
            .collect();
        let related: Vec<&ContentItem> = items.iter().rev().collect();
        let now = date(2023, 8);

        let sidebar = related_links(&config, &section, &related, Some(5), &now);
        assert_eq!(sidebar.len(), 5);
        assert_eq!(sidebar[0].title, "Post 7");
        assert_eq!(sidebar[0].href, "/articles/post-7");
        assert_eq!(sidebar[0].date, "2023-07-01");
        assert_eq!(sidebar[0].time_ago, "a month ago");
        assert_eq!(sidebar[0].logo_src, None);

        let panel = related_links(&config, &section, &related, None, &now);
        assert_eq!(panel.len(), 7);
    }

    #[test]
    fn test_related_link_json_shape() {
        let config = SiteConfig::default();
        let section = SectionConfig::new("tutorials");
        let mut item = ContentItem::new("Flask", &["python"], date(2022, 3));
        item.logo_image = Some("flask.png".to_string());
        let links = related_links(&config, &section, &[&item], None, &date(2022, 3));

        let json = serde_json::to_value(&links[0]).unwrap();
        assert_eq!(json["href"], "/tutorials/flask");
        assert_eq!(json["logoSrc"], "/logos/flask.png");
        assert_eq!(json["publishedAt"], "2022-03-01T00:00:00.000+00:00");
        assert!(json.get("featureSrc").is_none());
    }

    #[test]
    fn test_list_tags() {
        let config = SiteConfig::default();
        let now = date(2020, 1);
        let articles = Corpus::new(
            "articles",
            vec![
                ContentItem::new("A", &["go", "rust"], now),
                ContentItem::new("B", &["rust"], now),
            ],
        );
        let tutorials = Corpus::new(
            "tutorials",
            vec![ContentItem::new("C", &["go", "rust"], now)],
        );

        let tags = list_tags(&config, &[articles, tutorials]);
        assert_eq!(tags[0].name, "rust");
        assert_eq!(tags[0].count, 3);
        assert_eq!(tags[0].href, "/tags/rust");
        assert_eq!(tags[1].name, "go");
        assert_eq!(tags[1].count, 2);
    }
}
