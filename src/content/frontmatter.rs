//! Metadata block parsing

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Errors from parsing an essay's metadata block
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("missing metadata block (expected leading ---)")]
    MissingBlock,

    #[error("metadata block is not closed (no trailing ---)")]
    UnclosedBlock,

    #[error("invalid metadata YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unsortable date `{0}` (expected YYYY-MM-DD)")]
    BadDate(String),
}

/// Raw metadata as written in the block; required fields are checked
/// separately so the error can name the missing key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(rename = "externalUrl")]
    pub external_url: Option<String>,
}

/// Metadata after required-field and date validation
#[derive(Debug, Clone)]
pub struct CheckedMetadata {
    pub title: String,
    pub description: String,
    /// Date string exactly as written, kept for serialization
    pub date_raw: String,
    /// Parsed date, the sort key
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub featured: bool,
    pub external_url: Option<String>,
}

impl Metadata {
    /// Parse the metadata block from an essay file.
    /// Returns (metadata, body).
    pub fn parse(content: &str) -> Result<(Self, &str), MetadataError> {
        let content = content.trim_start_matches('\u{feff}');

        if !content.starts_with("---") {
            return Err(MetadataError::MissingBlock);
        }

        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(MetadataError::UnclosedBlock);
        };

        let yaml_content = &rest[..end_pos];
        let body = &rest[end_pos + 4..];
        let body = body.trim_start_matches(['\n', '\r']);

        let meta: Metadata = if yaml_content.trim().is_empty() {
            Metadata::default()
        } else {
            serde_yaml::from_str(yaml_content)?
        };

        Ok((meta, body))
    }

    /// Validate required fields and the date format.
    pub fn into_checked(self) -> Result<CheckedMetadata, MetadataError> {
        let title = self.title.ok_or(MetadataError::MissingField("title"))?;
        let description = self
            .description
            .ok_or(MetadataError::MissingField("description"))?;
        let date_raw = self.date.ok_or(MetadataError::MissingField("date"))?;
        let date =
            parse_date(&date_raw).ok_or_else(|| MetadataError::BadDate(date_raw.clone()))?;

        Ok(CheckedMetadata {
            title,
            description,
            date_raw,
            date,
            tags: self.tags,
            featured: self.featured,
            external_url: self.external_url,
        })
    }
}

/// Parse a date string in the accepted formats, normalized to a date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_block() {
        let content = r#"---
title: On Attention
description: Why attention is the scarce resource.
date: 2024-01-15
tags:
  - consciousness
  - technology
---

This is the body.
"#;

        let (meta, body) = Metadata::parse(content).unwrap();
        assert_eq!(meta.title, Some("On Attention".to_string()));
        assert_eq!(meta.tags, vec!["consciousness", "technology"]);
        assert!(body.starts_with("This is the body."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = r#"---
title: Single Tag
description: d
date: 2024-01-15
tags: notes
---
Body.
"#;

        let (meta, _) = Metadata::parse(content).unwrap();
        assert_eq!(meta.tags, vec!["notes"]);
    }

    #[test]
    fn test_optional_fields_default() {
        let content = "---\ntitle: T\ndescription: D\ndate: 2024-01-15\n---\nBody.";
        let (meta, _) = Metadata::parse(content).unwrap();
        let checked = meta.into_checked().unwrap();
        assert!(checked.tags.is_empty());
        assert!(!checked.featured);
        assert!(checked.external_url.is_none());
    }

    #[test]
    fn test_missing_block_is_error() {
        let err = Metadata::parse("Just prose, no header.").unwrap_err();
        assert!(matches!(err, MetadataError::MissingBlock));
    }

    #[test]
    fn test_unclosed_block_is_error() {
        let err = Metadata::parse("---\ntitle: T\n").unwrap_err();
        assert!(matches!(err, MetadataError::UnclosedBlock));
    }

    #[test]
    fn test_missing_required_field() {
        let content = "---\ntitle: T\ndate: 2024-01-15\n---\nBody.";
        let (meta, _) = Metadata::parse(content).unwrap();
        let err = meta.into_checked().unwrap_err();
        assert!(matches!(err, MetadataError::MissingField("description")));
    }

    #[test]
    fn test_bad_date_is_error() {
        let content = "---\ntitle: T\ndescription: D\ndate: January 2024\n---\nBody.";
        let (meta, _) = Metadata::parse(content).unwrap();
        let err = meta.into_checked().unwrap_err();
        assert!(matches!(err, MetadataError::BadDate(_)));
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00+00:00"), Some(expected));
        assert_eq!(parse_date("someday"), None);
    }

    #[test]
    fn test_external_url_key() {
        let content =
            "---\ntitle: T\ndescription: D\ndate: 2024-01-15\nexternalUrl: https://example.com/x\nfeatured: true\n---\nBody.";
        let (meta, _) = Metadata::parse(content).unwrap();
        let checked = meta.into_checked().unwrap();
        assert_eq!(
            checked.external_url.as_deref(),
            Some("https://example.com/x")
        );
        assert!(checked.featured);
    }
}
