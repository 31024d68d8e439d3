//! Essay model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::frontmatter::CheckedMetadata;

/// A single published essay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Essay {
    /// Unique identifier, the source filename with its extension stripped
    pub slug: String,

    /// Essay title
    pub title: String,

    /// One-line description shown in the index
    pub description: String,

    /// Publication date string as written in the metadata block
    pub date: String,

    /// Parsed publication date, the sort key
    #[serde(skip)]
    pub sort_date: NaiveDate,

    /// Tags in the order they appear in the metadata block
    pub tags: Vec<String>,

    /// Whether the essay is featured
    pub featured: bool,

    /// External link for essays published elsewhere
    #[serde(rename = "externalUrl", skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,

    /// Raw body text after the metadata block
    pub content: String,
}

impl Essay {
    /// Build an essay from validated metadata and its body text
    pub fn from_parts(slug: String, meta: CheckedMetadata, body: &str) -> Self {
        Self {
            slug,
            title: meta.title,
            description: meta.description,
            date: meta.date_raw,
            sort_date: meta.date,
            tags: meta.tags,
            featured: meta.featured,
            external_url: meta.external_url,
            content: body.to_string(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Derive a slug from a content file path by stripping the extension
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
