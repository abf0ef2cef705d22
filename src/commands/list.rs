//! List site content

use anyhow::Result;

use crate::content::PostLoader;
use crate::Blog;

/// List every post under the content directory
pub fn run(blog: &Blog) -> Result<()> {
    let loader = PostLoader::new(blog);
    let ids = loader.discover()?;

    println!("Posts ({}):", ids.len());
    for id in ids {
        match loader.load(&id) {
            Ok(post) => println!("  {} - {}", id, post.attributes.title()),
            Err(e) => {
                tracing::warn!("Failed to load post {}: {}", id, e);
                println!("  {} - (unreadable)", id);
            }
        }
    }

    Ok(())
}
