//! Overrides-over-defaults mapping merge.
//!
//! Front-matter records are assembled by layering whatever the document
//! supplied over a full set of documented defaults, so every record exposes
//! the same key set regardless of what the author wrote. The same contract
//! covers the failure mode: if the overrides are not a mapping at all, the
//! defaults win outright.

use serde_yaml::{Mapping, Value};

/// Merge `overrides` over `defaults`, overrides taking precedence.
///
/// The merge is shallow: a key present in both replaces the default value
/// wholesale, including nested mappings. Non-mapping `overrides` (null,
/// scalar, sequence) fail over to `defaults` alone.
///
/// # Example
///
/// ```rust
/// use serde_yaml::{Mapping, Value};
/// use markpress_core::merge;
///
/// let mut defaults = Mapping::new();
/// defaults.insert("title".into(), "".into());
/// defaults.insert("post_status".into(), "publish".into());
///
/// let mut overrides = Mapping::new();
/// overrides.insert("title".into(), "My Post".into());
///
/// let merged = merge(Value::Mapping(overrides), defaults);
/// assert_eq!(merged.get("title").and_then(Value::as_str), Some("My Post"));
/// assert_eq!(merged.get("post_status").and_then(Value::as_str), Some("publish"));
/// ```
pub fn merge(overrides: Value, defaults: Mapping) -> Mapping {
    match overrides {
        Value::Mapping(overrides) => {
            let mut merged = defaults;
            for (key, value) in overrides {
                merged.insert(key, value);
            }
            merged
        }
        _ => defaults,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Mapping {
        let mut defaults = Mapping::new();
        defaults.insert("title".into(), "".into());
        defaults.insert("menu_order".into(), 0.into());
        defaults
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = Mapping::new();
        overrides.insert("title".into(), "Override".into());

        let merged = merge(Value::Mapping(overrides), defaults());
        assert_eq!(merged.get("title").and_then(Value::as_str), Some("Override"));
        assert_eq!(merged.get("menu_order").and_then(Value::as_i64), Some(0));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let mut overrides = Mapping::new();
        overrides.insert("custom".into(), "extra".into());

        let merged = merge(Value::Mapping(overrides), defaults());
        assert_eq!(merged.get("custom").and_then(Value::as_str), Some("extra"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_non_mapping_overrides_fail_over_to_defaults() {
        assert_eq!(merge(Value::Null, defaults()), defaults());
        assert_eq!(merge(Value::String("scalar".into()), defaults()), defaults());
        assert_eq!(
            merge(Value::Sequence(vec!["a".into()]), defaults()),
            defaults()
        );
    }

    #[test]
    fn test_empty_overrides_leave_defaults_unchanged() {
        let merged = merge(Value::Mapping(Mapping::new()), defaults());
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut nested_default = Mapping::new();
        nested_default.insert("category".into(), Value::Sequence(vec!["old".into()]));
        let mut base = defaults();
        base.insert("taxonomy".into(), Value::Mapping(nested_default));

        let mut nested_override = Mapping::new();
        nested_override.insert("post_tag".into(), Value::Sequence(vec!["new".into()]));
        let mut overrides = Mapping::new();
        overrides.insert("taxonomy".into(), Value::Mapping(nested_override));

        let merged = merge(Value::Mapping(overrides), base);
        let taxonomy = merged.get("taxonomy").and_then(Value::as_mapping).unwrap();
        // Replaced wholesale: the default "category" key is gone
        assert!(taxonomy.get("category").is_none());
        assert!(taxonomy.get("post_tag").is_some());
    }
}
