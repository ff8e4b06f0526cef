//! CLI commands

pub mod check;
pub mod list;
pub mod related;
pub mod tags;

use anyhow::Result;

use crate::content::Corpus;
use crate::Site;

/// Load one section, or every section when none is named
fn load_corpora(site: &Site, section: Option<&str>) -> Result<Vec<Corpus>> {
    match section {
        Some(name) => Ok(vec![site.load_section(name)?]),
        None => site.load_all(),
    }
}
