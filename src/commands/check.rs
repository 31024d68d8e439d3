//! Validate the content directory
//!
//! The loader fails closed, so one broken file blocks the whole site. This
//! command reports every problem in one pass instead of stopping at the
//! first.

use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::content::ContentLoader;
use crate::Site;

/// Check every content file and report per-file errors
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let files = loader.content_files()?;

    let mut errors = 0usize;
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in &files {
        match loader.load_file(path) {
            Ok(essay) => {
                if let Some(first) = seen.insert(essay.slug.clone(), path.clone()) {
                    errors += 1;
                    println!(
                        "error: duplicate slug `{}` ({} and {})",
                        essay.slug,
                        first.display(),
                        path.display()
                    );
                }
            }
            Err(e) => {
                errors += 1;
                println!("error: {}", e);
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("{} of {} content files failed validation", errors, files.len());
    }

    println!("OK: {} content files", files.len());
    Ok(())
}
