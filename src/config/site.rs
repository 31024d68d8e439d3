//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,

    // Directories, relative to the base dir
    pub content_dir: String,
    pub public_dir: String,

    // Date display (Moment.js-style format strings)
    pub date_format: String,
    pub list_date_format: String,

    // Server defaults
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Essays".to_string(),
            description: String::new(),
            author: String::new(),
            url: "http://localhost:3000".to_string(),

            content_dir: "content/essays".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMM D, YYYY".to_string(),
            list_date_format: "MMM YYYY".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 3000,
        }
    }
}
