//! Create a new essay file

use anyhow::Result;
use std::fs;

use crate::Site;

/// Scaffold a new essay in the content directory.
/// The filename (and therefore the slug) is the slugified title.
pub fn run(site: &Site, title: &str, tags: &[String]) -> Result<()> {
    let today = chrono::Local::now().date_naive();

    fs::create_dir_all(&site.content_dir)?;

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("title produces an empty slug: {:?}", title);
    }

    let file_path = site.content_dir.join(format!("{}.mdx", slug));
    if file_path.exists() {
        anyhow::bail!("file already exists: {:?}", file_path);
    }

    let tags_yaml = if tags.is_empty() {
        "tags: []".to_string()
    } else {
        format!("tags: [{}]", tags.join(", "))
    };

    let content = format!(
        "---\ntitle: {title}\ndescription: ''\ndate: {date}\n{tags_yaml}\n---\n\n",
        date = today.format("%Y-%m-%d"),
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
