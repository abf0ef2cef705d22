//! minblog: a minimal static blog generator
//!
//! Reads markdown posts with front-matter from a content directory, renders
//! them to HTML, and writes one `index.html` per post under the output
//! directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod site;

use anyhow::Result;
use std::path::Path;

/// The main blog application
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Markdown source directory
    pub posts_dir: std::path::PathBuf,
    /// HTML output directory
    pub output_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
        })
    }

    /// Build the static site
    pub async fn build(&self, fail_fast: bool) -> Result<()> {
        commands::build::run(self, &[], fail_fast).await
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
