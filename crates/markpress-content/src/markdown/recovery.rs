//! Recovery policy for anomalous front matter.
//!
//! When the parser reports an anomaly, the document's metadata cannot be
//! trusted. The policy here is fail-safe, not fail-partial: no attempt is
//! made to salvage individual fields from a malformed header, because a
//! half-parsed header risks publishing wrong metadata. The substitute
//! record is the documented defaults with `skip_file: "yes"`, which
//! downstream synchronization uniformly treats as "do not publish".
//!
//! The diagnostics recorded here are the only externally observable trace
//! of the anomaly besides the sentinel itself: an identifying label for
//! the anomaly kind, and the raw header text prefixed with `Raw:`.

use markpress_core::{Diagnostics, merge};
use serde_yaml::{Mapping, Value};

use super::frontmatter::FrontMatterAnomaly;

/// Value of `skip_file` marking a document as unsynchronizable.
pub const SKIP_SENTINEL: &str = "yes";

/// The documented default front-matter record.
///
/// Every record returned by the engine exposes this full key set; keys the
/// source header supplied are layered on top.
///
/// | key              | default     |
/// |------------------|-------------|
/// | `title`          | `""`        |
/// | `menu_order`     | `0`         |
/// | `post_status`    | `"publish"` |
/// | `post_excerpt`   | `""`        |
/// | `comment_status` | `"closed"`  |
/// | `taxonomy`       | `{}`        |
/// | `custom_fields`  | `{}`        |
/// | `skip_file`      | `""`        |
pub fn default_front_matter() -> Mapping {
    let mut defaults = Mapping::new();
    defaults.insert("title".into(), "".into());
    defaults.insert("menu_order".into(), 0.into());
    defaults.insert("post_status".into(), "publish".into());
    defaults.insert("post_excerpt".into(), "".into());
    defaults.insert("comment_status".into(), "closed".into());
    defaults.insert("taxonomy".into(), Value::Mapping(Mapping::new()));
    defaults.insert("custom_fields".into(), Value::Mapping(Mapping::new()));
    defaults.insert("skip_file".into(), "".into());
    defaults
}

/// Success path: layer a parsed header over the defaults.
///
/// # Example
///
/// ```rust
/// use serde_yaml::{Mapping, Value};
/// use markpress_content::markdown::recovery::apply_defaults;
///
/// let mut parsed = Mapping::new();
/// parsed.insert("title".into(), "My Post".into());
///
/// let record = apply_defaults(parsed);
/// assert_eq!(record.get("title").and_then(Value::as_str), Some("My Post"));
/// assert_eq!(record.get("post_status").and_then(Value::as_str), Some("publish"));
/// ```
pub fn apply_defaults(parsed: Mapping) -> Mapping {
    merge(Value::Mapping(parsed), default_front_matter())
}

/// Anomaly path: record diagnostics and produce the substitute record.
///
/// The substitute is always a mapping: the defaults with
/// `skip_file: "yes"`. Two diagnostic entries are recorded, one naming the
/// anomaly kind (the anomaly's `Display`, which contains `YAML parse
/// error` or `non-array`), one carrying the raw header text after `Raw:`.
pub fn recover(
    anomaly: &FrontMatterAnomaly,
    raw_header: &str,
    diagnostics: &Diagnostics,
) -> Mapping {
    match anomaly {
        FrontMatterAnomaly::Syntax { .. } => {
            diagnostics.record(anomaly.to_string());
        }
        FrontMatterAnomaly::NotMapping { .. } => {
            diagnostics.record(format!("{anomaly}, skipping file"));
        }
    }
    diagnostics.record(format!("Raw: {raw_header}"));

    let mut substitute = default_front_matter();
    substitute.insert("skip_file".into(), SKIP_SENTINEL.into());
    substitute
}

// ============================================================================
// Tests
// ============================================================================
