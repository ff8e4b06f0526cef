//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::{SectionConfig, SiteConfig};
use crate::content::ContentItem;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Link to an item: `/<route>/<slug>`
pub fn item_href(config: &SiteConfig, section: &SectionConfig, item: &ContentItem) -> String {
    let slug = item
        .slug()
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/");
    url_for(config, &format!("{}/{}", section.route(), slug))
}

/// Link to a tag listing: `/tags/<tag>`
pub fn tag_href(config: &SiteConfig, tag: &str) -> String {
    url_for(config, &format!("{}/{}", config.tag_dir, encode_segment(tag)))
}

/// Path of an item's logo image, if it has one
pub fn logo_src(config: &SiteConfig, item: &ContentItem) -> Option<String> {
    item.logo_image
        .as_deref()
        .map(|logo| url_for(config, &format!("{}/{}", config.logo_dir, logo)))
}

/// Path of an item's feature image, stored beside its sources:
/// `/<content_dir>/<section dir>/<slug>/<image>`
pub fn feature_src(
    config: &SiteConfig,
    section: &SectionConfig,
    item: &ContentItem,
) -> Option<String> {
    item.feature_img.as_deref().map(|img| {
        url_for(
            config,
            &format!("{}/{}/{}/{}", config.content_dir, section.dir(), item.slug(), img),
        )
    })
}
