//! Page template
//!
//! A single fixed document shape: every post renders into the identical
//! structure, with the title, description, timestamp, and rendered body
//! interpolated into fixed slots. The body is already HTML and is embedded
//! verbatim, never escaped again.

use chrono::{DateTime, Local};

use crate::content::Post;

/// Render the full HTML document for a post
///
/// Pure string construction; the caller supplies the generation timestamp so
/// output is deterministic under test while the writer passes wall-clock time.
pub fn render_page(post: &Post, generated_at: DateTime<Local>) -> String {
    let title = post.attributes.title();
    let description = post.attributes.description();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta name="description" content="{description}" />
    <link rel="stylesheet" href="../assets/styles/grotesk.light.min.css">
    <link rel="stylesheet" href="../assets/styles/main.min.css">
    <link rel="stylesheet" href="../assets/styles/highlights.css">
    <title>{title}</title>
  </head>
  <body>
    <header>
      <a href="/">Go back home</a>
    </header>
    <div class="content">
      <h1>{title}</h1>
      <p>{generated_at}</p>
      <hr />
      {body}
    </div>
  </body>
</html>
"#,
        description = description,
        title = title,
        generated_at = generated_at.to_rfc2822(),
        body = post.body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use std::path::PathBuf;

    fn post(title: Option<&str>, description: Option<&str>, body: &str) -> Post {
        Post {
            id: "hello".to_string(),
            attributes: FrontMatter {
                title: title.map(String::from),
                description: description.map(String::from),
                ..Default::default()
            },
            body: body.to_string(),
            source: PathBuf::from("content/hello.md"),
        }
    }

    fn now() -> DateTime<Local> {
        Local::now()
    }

    #[test]
    fn test_document_structure() {
        let html = render_page(
            &post(Some("Hello"), Some("First post"), "<h1>Hi there</h1>"),
            now(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8" />"#));
        assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0" />"#));
        assert!(html.contains(r#"<meta name="description" content="First post" />"#));
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains(r#"<a href="/">Go back home</a>"#));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<hr />"));
        assert!(html.contains("<h1>Hi there</h1>"));
        assert_eq!(html.matches("stylesheet").count(), 3);
    }

    #[test]
    fn test_body_embedded_verbatim() {
        let html = render_page(&post(Some("T"), None, "<p>a &amp; b</p>"), now());
        // Already-rendered HTML must not be escaped again
        assert!(html.contains("<p>a &amp; b</p>"));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn test_missing_attributes_render_empty() {
        let html = render_page(&post(None, None, ""), now());
        assert!(html.contains("<title></title>"));
        assert!(html.contains(r#"<meta name="description" content="" />"#));
    }

    #[test]
    fn test_identical_modulo_timestamp() {
        let p = post(Some("Hello"), Some("d"), "<p>x</p>");
        let ts = now();
        assert_eq!(render_page(&p, ts), render_page(&p, ts));
    }

    #[test]
    fn test_timestamp_embedded() {
        let ts = now();
        let html = render_page(&post(Some("T"), None, ""), ts);
        assert!(html.contains(&format!("<p>{}</p>", ts.to_rfc2822())));
    }
}
