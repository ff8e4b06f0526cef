//! List site content

use anyhow::Result;
use std::fmt::Write;

use super::load_corpora;
use crate::helpers::format_date;
use crate::Site;

/// List items of one section, or of all sections
pub fn run(site: &Site, section: Option<&str>) -> Result<()> {
    print!("{}", render(site, section)?);
    Ok(())
}

pub fn render(site: &Site, section: Option<&str>) -> Result<String> {
    let mut out = String::new();
    for corpus in load_corpora(site, section)? {
        writeln!(out, "{} ({}):", corpus.section(), corpus.len())?;
        for item in &corpus {
            writeln!(
                out,
                "  {} - {} [{}]",
                format_date(&item.published_at, &site.config.date_format),
                item.title,
                item.slug()
            )?;
        }
    }
    Ok(out)
}
