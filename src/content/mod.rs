//! Content module - essay files, metadata, loading, and body rendering

mod essay;
mod frontmatter;
pub mod loader;
mod render;

pub use essay::Essay;
pub use frontmatter::{Metadata, MetadataError};
pub use loader::{ContentLoader, LoadError};
pub use render::render_body;
