//! Front-matter parsing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Front-matter parse failure
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Opening delimiter without a matching closing delimiter
    #[error("unterminated front-matter block (missing closing `{0}`)")]
    Unterminated(&'static str),

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),
}

/// Front-matter attributes from a post
///
/// `title` and `description` are the keys the page template consumes; every
/// other key present in the source is preserved in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontmatterError> {
        let content = content.trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        // No front-matter found
        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), FrontmatterError> {
        let rest = &content[3..]; // Skip opening ---
        // Skip exactly one line terminator, so a closing delimiter on the
        // very next line (an empty block) is still found below
        let rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);

        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else if let Some(end_pos) = rest.find("\n---") {
            (&rest[..end_pos], &rest[end_pos + 4..]) // Skip \n---
        } else {
            return Err(FrontmatterError::Unterminated("---"));
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)?;
        Ok((fm, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), FrontmatterError> {
        // JSON front-matter delimited by ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let Some(end_pos) = rest.find(";;;") else {
                return Err(FrontmatterError::Unterminated(";;;"));
            };

            let json_content = &rest[..end_pos];
            let remaining = &rest[end_pos + 3..];
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            let fm: FrontMatter = serde_json::from_str(json_content)?;
            return Ok((fm, remaining));
        }

        // Bare JSON object at the start of the file
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(FrontmatterError::Unterminated("}"));
        }

        let json_content = &content[..end_pos];
        let remaining = &content[end_pos..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        let fm: FrontMatter = serde_json::from_str(json_content)?;
        Ok((fm, remaining))
    }

    /// Title with the missing-key default applied
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description with the missing-key default applied
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
