//! Markdown splitting, front-matter parsing, recovery, and rendering.
//!
//! Data flow through this module:
//!
//! ```text
//! raw document
//!   -> frontmatter::split_front_matter  -> (header, body)
//!   -> frontmatter::parse_front_matter  -> mapping | anomaly
//!        ok:      recovery::apply_defaults -> record
//!        anomaly: recovery::recover        -> record (skip_file: "yes")
//!   body -> render::render_html -> HTML
//! ```
//!
//! The parser returns a tagged result and never lets a YAML failure
//! propagate; [`recovery`] is the only component that decides what a bad
//! header turns into.

pub mod frontmatter;
pub mod recovery;
pub mod render;

// Re-export key types and functions
pub use frontmatter::{FrontMatterAnomaly, SplitDocument, parse_front_matter, split_front_matter};
pub use recovery::{apply_defaults, default_front_matter, recover};
pub use render::render_html;
