//! Front-matter extraction, recovery, and markdown rendering.
//!
//! This crate is the content engine of the Markpress publishing pipeline.
//! A source document is plain text optionally beginning with a YAML
//! front-matter block fenced by `---` lines; the engine splits it, parses
//! the header, absorbs every malformed-header failure mode behind the
//! `skip_file` sentinel, and renders the body to HTML.
//!
//! # Modules
//!
//! - [`markdown`]: Splitting, parsing, recovery, and rendering
//!   - [`markdown::frontmatter`]: Fence splitting and tagged YAML parsing
//!   - [`markdown::recovery`]: Defaults and the fail-safe substitute record
//!   - [`markdown::render`]: Markdown-to-HTML rendering
//! - [`pipeline`]: The public [`ContentPipeline`] surface
//!
//! # Design Philosophy
//!
//! **Total over its input, fail-safe over its metadata.** `parse_content`
//! accepts any string and always returns a record plus a body; a header
//! that cannot be trusted yields the documented defaults with
//! `skip_file: "yes"` rather than a half-parsed record, because publishing
//! wrong metadata is worse than publishing nothing.
//!
//! # Example
//!
//! ```rust
//! use markpress_content::ContentPipeline;
//!
//! let pipeline = ContentPipeline::new();
//! let parsed = pipeline.parse_content("---\ntitle: Hello\n---\n\n## Body");
//!
//! assert_eq!(parsed.get_str("title"), Some("Hello"));
//! assert!(parsed.markdown.contains("## Body"));
//! assert!(!parsed.should_skip());
//! ```

pub mod markdown;
pub mod pipeline;

// Re-export commonly used types
pub use markdown::frontmatter::{FrontMatterAnomaly, SplitDocument, parse_front_matter, split_front_matter};
pub use markdown::recovery::{apply_defaults, default_front_matter, recover};
pub use markdown::render::render_html;
pub use pipeline::{ContentPipeline, ParsedContent};
