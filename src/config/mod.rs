//! Configuration module

mod site;

pub use site::RelatedConfig;
pub use site::SectionConfig;
pub use site::SiteConfig;
