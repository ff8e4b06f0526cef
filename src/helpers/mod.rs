//! Helper functions for the presentation boundary
//!
//! These turn content items into the link paths, date labels and
//! listings that page templates consume.

mod date;
mod list;
mod url;

pub use date::*;
pub use list::*;
pub use url::*;
