//! Content module - front-matter, items, corpora and loading

mod corpus;
mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use corpus::{Corpus, DuplicateTitle, LoadReport};
pub use frontmatter::FrontMatter;
pub use item::ContentItem;
pub use loader::{ContentError, CorpusLoader};
pub use markdown::{Heading, MarkdownAnalyzer};
