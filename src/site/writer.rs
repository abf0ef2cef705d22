//! Site writer - writes rendered posts to the output directory
//!
//! Writes are dispatched as one task per post, back-to-back, and joined into
//! a list of per-post outcomes. Each post owns a disjoint output path, so the
//! tasks share nothing and may complete in any order.

use chrono::Local;
use std::path::PathBuf;
use thiserror::Error;

use super::template;
use crate::content::Post;
use crate::Blog;

/// Failure while writing a single post
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write task failed")]
    Task(#[source] tokio::task::JoinError),
}

/// Per-post write result
#[derive(Debug)]
pub struct WriteOutcome {
    pub id: String,
    pub result: Result<PathBuf, WriteError>,
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Writes posts as static HTML files
pub struct SiteWriter {
    output_dir: PathBuf,
}

impl SiteWriter {
    /// Create a new site writer
    pub fn new(blog: &Blog) -> Self {
        Self {
            output_dir: blog.output_dir.clone(),
        }
    }

    /// Write every post to `<output_dir>/<id>/index.html`
    ///
    /// One task per post; all tasks are dispatched before any is awaited.
    /// Outcomes come back in input order regardless of completion order, so
    /// duplicate identifiers resolve to last write wins.
    pub async fn write_posts(&self, posts: Vec<Post>) -> Vec<WriteOutcome> {
        let mut handles = Vec::with_capacity(posts.len());
        for post in posts {
            let output_dir = self.output_dir.clone();
            let id = post.id.clone();
            handles.push((id, tokio::spawn(write_post(output_dir, post))));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => outcomes.push(WriteOutcome {
                    id,
                    result: Err(WriteError::Task(e)),
                }),
            }
        }
        outcomes
    }
}

/// Write a single post: ensure the directory exists (including missing
/// ancestors, so nested identifiers work), render the page, write index.html
async fn write_post(output_dir: PathBuf, post: Post) -> WriteOutcome {
    let target_dir = post.output_dir(&output_dir);
    let index_path = post.output_path(&output_dir);

    let result = async {
        tokio::fs::create_dir_all(&target_dir)
            .await
            .map_err(|source| WriteError::CreateDir {
                path: target_dir.clone(),
                source,
            })?;

        let html = template::render_page(&post, Local::now());

        tokio::fs::write(&index_path, html)
            .await
            .map_err(|source| WriteError::WriteFile {
                path: index_path.clone(),
                source,
            })?;

        Ok(index_path.clone())
    }
    .await;

    match &result {
        Ok(_) => tracing::info!("{}/index.html was created successfully", post.id),
        Err(e) => tracing::error!("failed to write post {}: {}", post.id, e),
    }

    WriteOutcome {
        id: post.id,
        result,
    }
}
