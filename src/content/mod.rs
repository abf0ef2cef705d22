//! Content module - handles posts, front-matter, and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, FrontmatterError};
pub use loader::PostLoader;
pub use markdown::MarkdownRenderer;
pub use post::Post;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a post
#[derive(Debug, Error)]
pub enum ContentError {
    /// Source file missing or not a regular file
    #[error("post source not found: {0}")]
    NotFound(PathBuf),

    /// Front-matter block could not be parsed
    #[error("invalid front-matter in {path}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    /// Markdown renderer failure, propagated opaquely
    #[error("failed to render {path}")]
    Render {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Any other I/O failure while reading the source
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
