//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Scaffold a new post file under the content directory
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)?;

    let slug = slug::slugify(title);
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: "{}"
description: ""
---
"#,
        title
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
