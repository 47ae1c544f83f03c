//! Utility modules for mapping merges, slug handling, and media filtering.
//!
//! # Modules
//!
//! - [`merge`]: Overrides-over-defaults mapping merge
//! - [`slug`]: Slug sanitization and hidden-slug filtering
//! - [`media`]: Allowed image-extension filtering

pub mod media;
pub mod merge;
pub mod slug;
