//! essayist: a small essay-publishing site
//!
//! Essays live as flat files with a YAML metadata header. This crate loads
//! and indexes them, models the reader's filter/selection state, and serves
//! the collection over a small read API.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod view;

use anyhow::Result;
use std::path::Path;

/// The site handle: a base directory plus its loaded configuration
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (flat, one file per essay)
    pub content_dir: std::path::PathBuf,
    /// Static asset directory served alongside the API
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site handle from a directory. A missing `_config.yml`
    /// falls back to defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults_without_config() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.content_dir, tmp.path().join("content/essays"));
        assert_eq!(site.config.server.port, 3000);
    }

    #[test]
    fn test_site_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: Joseph's Essays\ncontent_dir: writing\n",
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.config.title, "Joseph's Essays");
        assert_eq!(site.content_dir, tmp.path().join("writing"));
    }
}
