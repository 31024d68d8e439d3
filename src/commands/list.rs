//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::helpers::date::format_date;
use crate::view::ViewState;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);

    match content_type {
        "essay" | "essays" => {
            let essays = loader.load_all()?;
            println!("Essays ({}):", essays.len());
            for essay in &essays {
                let mut line = format!(
                    "  {} - {}",
                    format_date(&essay.sort_date, &site.config.list_date_format),
                    essay.title
                );
                if !essay.tags.is_empty() {
                    line.push_str(&format!(" [{}]", essay.tags.join(", ")));
                }
                if essay.featured {
                    line.push_str(" (featured)");
                }
                println!("{}", line);
            }
        }
        "tag" | "tags" => {
            let state = ViewState::new(loader.load_all()?);
            let tags = state.all_tags();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                let count = state
                    .essays()
                    .iter()
                    .filter(|e| e.has_tag(tag))
                    .count();
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: essay, tag", content_type);
        }
    }

    Ok(())
}
