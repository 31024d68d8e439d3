//! Content loader - loads essays from the content directory

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::essay::slug_from_path;
use super::{Essay, Metadata, MetadataError};
use crate::Site;

/// Recognized content file extensions
const ESSAY_EXTS: [&str; 2] = ["mdx", "md"];

/// Errors from loading the essay collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read content: {0}")]
    Io(#[from] io::Error),

    #[error("{file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: MetadataError,
    },

    #[error("duplicate slug `{slug}` ({first} and {second})")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

/// Loads essays from the site's content directory.
///
/// Every load re-reads the directory; nothing is cached across calls.
/// A single malformed file fails the whole load so a broken entry cannot
/// be published silently.
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all essays, sorted by date descending (slug breaks ties).
    pub fn load_all(&self) -> Result<Vec<Essay>, LoadError> {
        let mut essays = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in self.content_files()? {
            let essay = self.load_file(&path)?;

            if let Some(first) = seen.insert(essay.slug.clone(), path.clone()) {
                return Err(LoadError::DuplicateSlug {
                    slug: essay.slug,
                    first: first.display().to_string(),
                    second: path.display().to_string(),
                });
            }

            essays.push(essay);
        }

        essays.sort_by(|a, b| {
            b.sort_date
                .cmp(&a.sort_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        tracing::debug!("loaded {} essays", essays.len());

        Ok(essays)
    }

    /// Look up a single essay by slug.
    pub fn load_by_slug(&self, slug: &str) -> Result<Option<Essay>, LoadError> {
        Ok(self.load_all()?.into_iter().find(|e| e.slug == slug))
    }

    /// Enumerate content files in the content directory (non-recursive)
    pub fn content_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let dir = &self.site.content_dir;
        if !dir.is_dir() {
            return Err(LoadError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("content directory not found: {}", dir.display()),
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                LoadError::Io(e.into_io_error().unwrap_or_else(|| {
                    io::Error::new(io::ErrorKind::Other, "directory walk failed")
                }))
            })?;
            let path = entry.path();
            if path.is_file() && is_essay_file(path) {
                files.push(path.to_path_buf());
            }
        }

        // Stable input order so errors are reported deterministically
        files.sort();

        Ok(files)
    }

    /// Load a single essay from a file
    pub fn load_file(&self, path: &Path) -> Result<Essay, LoadError> {
        let raw = fs::read_to_string(path)?;

        let parse_err = |source| LoadError::Parse {
            file: path.display().to_string(),
            source,
        };

        let (meta, body) = Metadata::parse(&raw).map_err(parse_err)?;
        let checked = meta.into_checked().map_err(parse_err)?;

        let slug = slug_from_path(path).ok_or_else(|| {
            LoadError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unusable file name: {}", path.display()),
            ))
        })?;

        Ok(Essay::from_parts(slug, checked, body))
    }
}

/// Check if a file has a recognized content extension
fn is_essay_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| ESSAY_EXTS.contains(&e))
        .unwrap_or(false)
}
