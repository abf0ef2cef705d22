//! Configuration module

mod site;

pub use site::{AuthorConfig, SiteConfig};
