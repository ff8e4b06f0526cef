//! Related content selection
//!
//! Items are related when they share at least one tag with the target.
//! The result holds one entry per title, never contains the target, and is
//! ordered newest first. Truncation is left to the caller.

use std::collections::HashSet;

use crate::content::ContentItem;

/// Select the items of `corpus` related to `target`, newest first.
pub fn select_related<'a>(
    target: &ContentItem,
    corpus: &'a [ContentItem],
) -> Vec<&'a ContentItem> {
    // One entry per (target tag, item tag) match; duplicates are removed below
    let mut matches: Vec<&ContentItem> = Vec::new();
    for wanted in &target.tags {
        for item in corpus {
            for tag in &item.tags {
                if tag == wanted {
                    matches.push(item);
                }
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut related: Vec<&ContentItem> = matches
        .into_iter()
        .filter(|item| seen.insert(item.title.as_str()))
        .filter(|item| item.title != target.title)
        .collect();

    // Stable: equal dates keep match order
    related.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    tracing::debug!("{} related items for {:?}", related.len(), target.title);

    related
}
