//! Post model

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::FrontMatter;

/// A blog post, immutable once loaded
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Content identifier: the relative path (without extension) naming both
    /// the source file and the output directory
    pub id: String,

    /// Front-matter attributes
    pub attributes: FrontMatter,

    /// Rendered HTML content
    pub body: String,

    /// Full source file path
    pub source: PathBuf,
}

impl Post {
    /// The directory this post renders into
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.id)
    }

    /// The `index.html` path this post renders into
    pub fn output_path(&self, output_root: &Path) -> PathBuf {
        self.output_dir(output_root).join("index.html")
    }
}
