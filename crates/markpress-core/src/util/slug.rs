//! Slug sanitization and filtering.
//!
//! Post slugs come from file and directory names in the source repository.
//! Publishing normalizes them to lowercase kebab-ish form, and items whose
//! slug starts with `_` or `.` (template folders, image folders, VCS
//! droppings) are never synchronized.

use regex::Regex;

/// Sanitize a title or file stem into a slug.
///
/// Every character outside `[A-Za-z0-9-]` becomes a hyphen, then the whole
/// slug is lowercased. This intentionally mirrors the CMS-side
/// sanitization so slugs computed here match slugs the CMS would compute.
///
/// # Examples
///
/// ```rust
/// use markpress_core::sanitize_slug;
///
/// assert_eq!(sanitize_slug("About Us"), "about-us");
/// assert_eq!(sanitize_slug("Hello_World.md"), "hello-world-md");
/// assert_eq!(sanitize_slug("already-fine"), "already-fine");
/// ```
pub fn sanitize_slug(title: &str) -> String {
    let non_slug = Regex::new(r"[^a-zA-Z0-9\-]").expect("Invalid slug regex");
    non_slug.replace_all(title, "-").to_lowercase()
}

/// Whether an item slug marks the item as hidden from synchronization.
///
/// Slugs beginning with `_` (e.g. `_images`, `_templates`) or `.`
/// (e.g. `.gitignore`) are skipped by the publisher.
///
/// # Examples
///
/// ```rust
/// use markpress_core::is_hidden_slug;
///
/// assert!(is_hidden_slug("_images"));
/// assert!(is_hidden_slug(".gitignore"));
/// assert!(!is_hidden_slug("my-post"));
/// ```
pub fn is_hidden_slug(slug: &str) -> bool {
    slug.starts_with('_') || slug.starts_with('.')
}

// ============================================================================
// Tests
// ============================================================================
