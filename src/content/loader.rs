//! Post loader - loads and renders posts from the content directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// Loads posts from the content directory
pub struct PostLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load a single post by content identifier
    ///
    /// The identifier is the path of the source file relative to the content
    /// directory, without the `.md` extension.
    pub fn load(&self, id: &str) -> Result<Post, ContentError> {
        let path = self.blog.posts_dir.join(format!("{}.md", id));
        if !path.is_file() {
            return Err(ContentError::NotFound(path));
        }

        let raw = fs::read_to_string(&path)?;

        let (attributes, raw_body) =
            FrontMatter::parse(&raw).map_err(|source| ContentError::Frontmatter {
                path: path.clone(),
                source,
            })?;

        let body = self
            .renderer
            .render(raw_body)
            .map_err(|source| ContentError::Render {
                path: path.clone(),
                source,
            })?;

        Ok(Post {
            id: id.to_string(),
            attributes,
            body,
            source: path,
        })
    }

    /// Load a list of posts in order, stopping at the first failure
    pub fn load_all(&self, ids: &[String]) -> Result<Vec<Post>, ContentError> {
        ids.iter().map(|id| self.load(id)).collect()
    }

    /// Discover the identifiers of every markdown file under the content
    /// directory, sorted
    pub fn discover(&self) -> Result<Vec<String>, ContentError> {
        let mut ids = Vec::new();
        if !self.blog.posts_dir.exists() {
            return Ok(ids);
        }

        for entry in WalkDir::new(&self.blog.posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                let relative = path.strip_prefix(&self.blog.posts_dir).unwrap_or(path);
                let id = relative.with_extension("");
                ids.push(id.to_string_lossy().replace('\\', "/"));
            }
        }

        ids.sort();
        Ok(ids)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
