//! List tags with usage counts

use anyhow::Result;
use std::fmt::Write;

use super::load_corpora;
use crate::helpers::list_tags;
use crate::Site;

pub fn run(site: &Site, section: Option<&str>) -> Result<()> {
    print!("{}", render(site, section)?);
    Ok(())
}

pub fn render(site: &Site, section: Option<&str>) -> Result<String> {
    let corpora = load_corpora(site, section)?;
    let tags = list_tags(&site.config, &corpora);

    let mut out = String::new();
    writeln!(out, "Tags ({}):", tags.len())?;
    for tag in tags {
        writeln!(out, "  {} ({}) {}", tag.name, tag.count, tag.href)?;
    }
    Ok(out)
}
