//! The public content-processing surface.
//!
//! [`ContentPipeline`] ties the splitter, parser, recovery policy, and
//! renderer together behind two operations:
//!
//! - [`ContentPipeline::parse_content`]: raw document text in, front-matter
//!   record plus markdown body out. Total over any input string; never
//!   panics, never propagates a YAML failure. Callers detect degraded
//!   processing through the `skip_file` sentinel and the diagnostics sink,
//!   not through an error channel.
//! - [`ContentPipeline::render`]: markdown body to HTML.
//!
//! The diagnostics sink is injected (defaulting to a fresh in-memory
//! collector) so concurrent pipelines keep their entries attributable;
//! callers processing many documents clear it between documents.
//!
//! # Example
//!
//! ```rust
//! use markpress_content::ContentPipeline;
//!
//! let pipeline = ContentPipeline::new();
//!
//! let parsed = pipeline.parse_content("---\ntitle: Hello\n---\n\n## Body");
//! assert_eq!(parsed.get_str("title"), Some("Hello"));
//!
//! let html = pipeline.render(&parsed.markdown);
//! assert!(html.contains("<h2>"));
//! ```

use markpress_core::{Diagnostics, Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::markdown::frontmatter::{parse_front_matter, split_front_matter};
use crate::markdown::recovery::{SKIP_SENTINEL, apply_defaults, recover};
use crate::markdown::render::render_html;

/// A processed document: full front-matter record plus markdown body.
///
/// The record is always a mapping exposing the documented default key set;
/// see [`default_front_matter`](crate::markdown::recovery::default_front_matter).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent {
    /// The front-matter record, merged over defaults or substituted by the
    /// recovery policy.
    pub front_matter: Mapping,
    /// The markdown body, verbatim.
    pub markdown: String,
}

impl ParsedContent {
    /// Get a string field from the record.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.front_matter.get(key)?.as_str()
    }

    /// Get a string list field from the record.
    ///
    /// Returns an empty vec if the field is missing or not a sequence.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.front_matter
            .get(key)
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the term list for one taxonomy (e.g. `category`, `post_tag`).
    ///
    /// Returns an empty vec if the taxonomy is absent.
    pub fn taxonomy_terms(&self, taxonomy: &str) -> Vec<String> {
        self.front_matter
            .get("taxonomy")
            .and_then(|v| v.get(taxonomy))
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether downstream synchronization should skip this document.
    ///
    /// True when `skip_file` is the `"yes"` sentinel, whether set by the
    /// recovery policy or by the document's author. An author writing the
    /// unquoted YAML boolean spelling (`skip_file: true`) also counts.
    pub fn should_skip(&self) -> bool {
        match self.front_matter.get("skip_file") {
            Some(value) => {
                value.as_str() == Some(SKIP_SENTINEL) || value.as_bool() == Some(true)
            }
            None => false,
        }
    }

    /// Deserialize the record into a typed structure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use markpress_content::ContentPipeline;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct PostMeta {
    ///     title: String,
    ///     post_status: String,
    /// }
    ///
    /// let pipeline = ContentPipeline::new();
    /// let parsed = pipeline.parse_content("---\ntitle: Typed\n---\nBody");
    /// let meta: PostMeta = parsed.deserialize().unwrap();
    /// assert_eq!(meta.title, "Typed");
    /// assert_eq!(meta.post_status, "publish");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.front_matter.clone()))
            .map_err(|e| Error::parse(format!("Failed to deserialize front matter: {e}")))
    }
}

/// Front-matter extraction and rendering pipeline for one logical unit of
/// work.
#[derive(Debug, Clone, Default)]
pub struct ContentPipeline {
    diagnostics: Diagnostics,
}

impl ContentPipeline {
    /// Create a pipeline with its own in-memory diagnostics sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline recording into a caller-supplied sink.
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// The sink this pipeline records into.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Process one raw document into a front-matter record and body.
    ///
    /// Total over its input: any string (empty, huge, binary-as-text)
    /// yields the `{front_matter, markdown}` shape. Anomalies in the
    /// header are absorbed by the recovery policy, which substitutes the
    /// defaults with `skip_file: "yes"` and records diagnostics.
    pub fn parse_content(&self, raw: &str) -> ParsedContent {
        let split = split_front_matter(raw);

        let front_matter = match parse_front_matter(split.header) {
            Ok(mapping) => apply_defaults(mapping),
            Err(anomaly) => recover(&anomaly, split.header.unwrap_or_default(), &self.diagnostics),
        };

        ParsedContent {
            front_matter,
            markdown: split.body.to_string(),
        }
    }

    /// Render a markdown body to HTML.
    pub fn render(&self, markdown: &str) -> String {
        render_html(markdown)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_header_passthrough() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline.parse_content("---\ntitle: Basic Post\npost_status: publish\n---\n\n## Hello World\n");

        assert_eq!(parsed.get_str("title"), Some("Basic Post"));
        assert_eq!(parsed.get_str("post_status"), Some("publish"));
        assert!(parsed.markdown.contains("## Hello World"));
        assert!(!parsed.should_skip());
        assert!(pipeline.diagnostics().is_empty());
    }

    #[test]
    fn test_no_front_matter_yields_defaults() {
        let pipeline = ContentPipeline::new();
        let content = "## No Front Matter\n\nJust body.";
        let parsed = pipeline.parse_content(content);

        assert_eq!(parsed.get_str("title"), Some(""));
        assert_eq!(parsed.get_str("post_status"), Some("publish"));
        assert_eq!(parsed.markdown, content);
        assert!(!parsed.should_skip());
    }

    #[test]
    fn test_malformed_header_recovers_with_sentinel() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline.parse_content("---\ntitle: Bad\n  orphan: value\n---\nBody");

        assert!(parsed.should_skip());
        assert!(pipeline.diagnostics().any_contains("YAML parse error"));
        assert!(pipeline.diagnostics().any_contains("Raw:"));
    }

    #[test]
    fn test_author_supplied_skip_passes_through() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline.parse_content("---\ntitle: Skipped\nskip_file: \"yes\"\n---\nBody");

        assert!(parsed.should_skip());
        assert_eq!(parsed.get_str("title"), Some("Skipped"));
        assert!(pipeline.diagnostics().is_empty());
    }

    #[test]
    fn test_boolean_skip_spelling_counts() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline.parse_content("---\nskip_file: true\n---\nBody");
        assert!(parsed.should_skip());
    }

    #[test]
    fn test_taxonomy_terms_accessor() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline
            .parse_content("---\ntaxonomy:\n  category:\n    - tech\n    - news\n---\nBody");

        assert_eq!(parsed.taxonomy_terms("category"), vec!["tech", "news"]);
        assert!(parsed.taxonomy_terms("post_tag").is_empty());
    }

    #[test]
    fn test_get_string_list_non_sequence_is_empty() {
        let pipeline = ContentPipeline::new();
        let parsed = pipeline.parse_content("---\ntitle: Scalar\n---\nBody");
        assert!(parsed.get_string_list("title").is_empty());
    }

    #[test]
    fn test_injected_sink_receives_entries() {
        let diagnostics = Diagnostics::new();
        let pipeline = ContentPipeline::with_diagnostics(diagnostics.clone());

        pipeline.parse_content("---\njust a scalar\n---\nBody");
        assert!(diagnostics.any_contains("non-array"));
    }

    #[test]
    fn test_render_delegates() {
        let pipeline = ContentPipeline::new();
        let html = pipeline.render("**bold**");
        assert!(html.contains("<strong>bold</strong>"));
    }
}
