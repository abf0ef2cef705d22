//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site identity
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub author: AuthorConfig,

    // Directory
    pub posts_dir: String,
    pub output_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "A minblog site".to_string(),
            description: String::new(),
            author: AuthorConfig::default(),

            posts_dir: "content".to_string(),
            output_dir: "docs".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Author identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub bio: String,
    /// Contact URL or handle (e.g. a social profile link)
    pub contact: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            bio: String::new(),
            contact: String::new(),
        }
    }
}
