//! Build the static site

use anyhow::{bail, Result};

use crate::content::PostLoader;
use crate::site::SiteWriter;
use crate::Blog;

/// Build the site: load posts, write one index.html per post
///
/// With an empty `ids` list, every markdown file under the content directory
/// is built. Loading is sequential and stops at the first failure; writes are
/// dispatched per post and collected. With `fail_fast` the first write
/// failure is returned directly, otherwise failures are reported together
/// after every outcome is in.
pub async fn run(blog: &Blog, ids: &[String], fail_fast: bool) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = PostLoader::new(blog);
    let ids = if ids.is_empty() {
        loader.discover()?
    } else {
        ids.to_vec()
    };

    let posts = loader.load_all(&ids)?;
    tracing::info!("Loaded {} posts", posts.len());

    let writer = SiteWriter::new(blog);
    let outcomes = writer.write_posts(posts).await;

    let total = outcomes.len();
    let mut failed = 0;
    for outcome in outcomes {
        if let Err(e) = outcome.result {
            if fail_fast {
                return Err(anyhow::Error::new(e).context(format!("post {}", outcome.id)));
            }
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} posts failed to write", failed, total);
    }

    let duration = start.elapsed();
    tracing::info!("Generated {} posts in {:.2}s", total, duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_post(base: &Path, id: &str, content: &str) {
        let path = base.join("content").join(format!("{}.md", id));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_end_to_end_single_post() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(
            tmp.path(),
            "hello",
            "---\ntitle: \"Hello\"\ndescription: \"First post\"\n---\n# Hi there\n",
        );

        let blog = Blog::new(tmp.path()).unwrap();
        run(&blog, &["hello".to_string()], false).await.unwrap();

        let html = fs::read_to_string(tmp.path().join("docs/hello/index.html")).unwrap();
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains(r#"content="First post""#));
        assert!(html.contains("<h1>Hi there</h1>"));
    }

    #[tokio::test]
    async fn test_end_to_end_two_posts() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "a", "---\ntitle: A\n---\nalpha\n");
        write_post(tmp.path(), "b", "---\ntitle: B\n---\nbeta\n");

        let blog = Blog::new(tmp.path()).unwrap();
        run(&blog, &[], false).await.unwrap();

        let a = fs::read_to_string(tmp.path().join("docs/a/index.html")).unwrap();
        let b = fs::read_to_string(tmp.path().join("docs/b/index.html")).unwrap();
        assert!(a.contains("<title>A</title>"));
        assert!(a.contains("alpha"));
        assert!(!a.contains("beta"));
        assert!(b.contains("<title>B</title>"));
        assert!(b.contains("beta"));
        assert!(!b.contains("alpha"));
    }

    #[tokio::test]
    async fn test_missing_post_produces_no_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();

        let result = run(&blog, &["nonexistent".to_string()], false).await;
        assert!(result.is_err());
        assert!(!tmp.path().join("docs/nonexistent").exists());
    }

    #[tokio::test]
    async fn test_fail_fast_returns_first_write_failure() {
        let tmp = tempfile::tempdir().unwrap();
        write_post(tmp.path(), "bad", "---\ntitle: Bad\n---\nx\n");
        write_post(tmp.path(), "good", "---\ntitle: Good\n---\ny\n");
        // Block directory creation for "bad" by putting a file in its place
        fs::create_dir_all(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs/bad"), "not a directory").unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        let ids = vec!["bad".to_string(), "good".to_string()];
        let err = run(&blog, &ids, true).await.unwrap_err();
        assert!(format!("{:#}", err).contains("post bad"));
    }

    #[tokio::test]
    async fn test_custom_config_directories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: My Blog\nposts_dir: posts\noutput_dir: public\n",
        )
        .unwrap();
        let path = tmp.path().join("posts/hello.md");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "---\ntitle: Hello\n---\nhi\n").unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        run(&blog, &[], false).await.unwrap();

        assert!(tmp.path().join("public/hello/index.html").is_file());
    }
}
