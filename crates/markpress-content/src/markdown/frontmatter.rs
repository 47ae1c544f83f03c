//! YAML front-matter splitting and tagged parsing.
//!
//! A front-matter block is metadata at the start of a markdown file,
//! delimited by `---` fence lines:
//!
//! ```markdown
//! ---
//! title: My Post
//! post_status: publish
//! taxonomy:
//!   category:
//!     - tech
//! ---
//!
//! ## Post Content
//!
//! The body of the post starts here.
//! ```
//!
//! Splitting and parsing are separate steps with separate contracts:
//!
//! - [`split_front_matter`] finds the fences. It cannot fail; a document
//!   without a block (or with an unterminated one) is simply all body.
//! - [`parse_front_matter`] parses the extracted header. It returns a
//!   tagged result: the caller can distinguish "no header", "valid
//!   mapping", "parsed but not a mapping", and "malformed syntax" without
//!   any of those escaping as a panic or propagating error.
//!
//! What a failed parse turns into is not decided here; see
//! [`recovery`](super::recovery).
//!
//! # Usage
//!
//! ```rust
//! use markpress_content::markdown::frontmatter::{parse_front_matter, split_front_matter};
//!
//! let split = split_front_matter("---\ntitle: Test\n---\n\nBody");
//! assert_eq!(split.body, "\nBody");
//!
//! let mapping = parse_front_matter(split.header).unwrap();
//! assert_eq!(mapping.get("title").and_then(|v| v.as_str()), Some("Test"));
//! ```

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// A document separated into an optional front-matter header and a body.
///
/// `header: None` means no front-matter block was present, which is not an
/// error. `header: Some("")` means fences were present with nothing between
/// them; YAML parses that to null, so it flows through the non-mapping
/// guard like any other non-mapping header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw text strictly between the fences, if a block was found.
    pub header: Option<&'a str>,
    /// Everything after the closing fence line, or the whole document when
    /// no block was found.
    pub body: &'a str,
}

/// Anomalous outcome of parsing a front-matter header.
///
/// The `Display` wording is part of the observable contract: diagnostics
/// built from these messages are what operators grep for (`YAML parse
/// error`, `non-array`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterAnomaly {
    /// The header is not syntactically valid YAML (bad indentation, tabs
    /// used as indentation, unterminated quotes, ambiguous colons).
    #[error("YAML parse error in front matter: {message}")]
    Syntax { message: String },

    /// The header is valid YAML but its document is not a mapping
    /// (a bare scalar, a sequence, or null).
    #[error("front matter is a non-array value ({kind}), cannot use it")]
    NotMapping { kind: &'static str },
}

/// Split a document into front-matter header and markdown body.
///
/// The opening fence must be the document's very first line (a UTF-8 BOM
/// before it is tolerated); a fence line is `---` with optional trailing
/// whitespace, so CRLF documents work. The closing fence is the next line
/// matching the same shape. With no opening fence at line one, or no
/// closing fence at all, the whole document is body.
///
/// Fence-shaped tokens later in the body (markdown horizontal rules) are
/// never promoted to fences: once the closing fence is found everything
/// after it belongs to the body, and when no block was opened nothing in
/// the body can open one.
///
/// # Example
///
/// ```rust
/// use markpress_content::markdown::frontmatter::split_front_matter;
///
/// // With a block
/// let split = split_front_matter("---\ntitle: Test\n---\nBody");
/// assert_eq!(split.header, Some("title: Test\n"));
/// assert_eq!(split.body, "Body");
///
/// // Without one, even if the body contains a horizontal rule
/// let split = split_front_matter("Intro\n\n---\n\nOutro");
/// assert_eq!(split.header, None);
/// assert_eq!(split.body, "Intro\n\n---\n\nOutro");
/// ```
pub fn split_front_matter(content: &str) -> SplitDocument<'_> {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);

    let (first_line, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        // Single line, no newline: even "---" alone opens nothing usable
        None => return SplitDocument { header: None, body: content },
    };

    if !is_fence(first_line) {
        return SplitDocument { header: None, body: content };
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return SplitDocument { header: Some(header), body };
        }
        offset += line.len();
    }

    // Opening fence but no closing fence: not a front-matter block
    SplitDocument { header: None, body: content }
}

/// A fence line is `---` with optional trailing whitespace (covers CR).
fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Parse an extracted front-matter header into a mapping.
///
/// Total over its input; the four outcomes the caller must distinguish are
/// all represented in the return type:
///
/// 1. `None` (no block present) yields an empty mapping.
/// 2. A header parsing to a YAML mapping yields that mapping as-is.
/// 3. A header parsing to anything else yields
///    [`FrontMatterAnomaly::NotMapping`].
/// 4. A header that fails to parse yields [`FrontMatterAnomaly::Syntax`]
///    carrying the underlying parser message.
///
/// # Example
///
/// ```rust
/// use markpress_content::markdown::frontmatter::{parse_front_matter, FrontMatterAnomaly};
///
/// assert!(parse_front_matter(None).unwrap().is_empty());
///
/// let mapping = parse_front_matter(Some("title: Hi")).unwrap();
/// assert_eq!(mapping.get("title").and_then(|v| v.as_str()), Some("Hi"));
///
/// let anomaly = parse_front_matter(Some("just a scalar")).unwrap_err();
/// assert!(matches!(anomaly, FrontMatterAnomaly::NotMapping { .. }));
/// ```
pub fn parse_front_matter(header: Option<&str>) -> Result<Mapping, FrontMatterAnomaly> {
    let Some(header) = header else {
        return Ok(Mapping::new());
    };

    match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(other) => Err(FrontMatterAnomaly::NotMapping { kind: value_kind(&other) }),
        Err(err) => Err(FrontMatterAnomaly::Syntax { message: err.to_string() }),
    }
}

/// Human-readable kind of a YAML value, for diagnostics.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

// ============================================================================
// Tests
// ============================================================================
