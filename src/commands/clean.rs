//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Delete the output directory
pub fn run(blog: &Blog) -> Result<()> {
    if blog.output_dir.exists() {
        fs::remove_dir_all(&blog.output_dir)?;
        tracing::info!("Deleted: {:?}", blog.output_dir);
    }

    Ok(())
}
