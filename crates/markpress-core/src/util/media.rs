//! Media filtering for uploadable assets.
//!
//! The source repository's image folders contain more than images
//! (`.gitkeep`, `.DS_Store`, stray markdown). Only files with a recognized
//! raster-image extension are eligible for upload.

/// Extensions the publisher will upload. Matches the CMS's own allow-list.
const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "jpe", "png", "gif", "webp"];

/// Whether a file extension is an uploadable image type.
///
/// Matching is case-insensitive. The empty extension (a file with no
/// extension at all) is rejected.
///
/// # Examples
///
/// ```rust
/// use markpress_core::is_allowed_image_extension;
///
/// assert!(is_allowed_image_extension("png"));
/// assert!(is_allowed_image_extension("JPG"));
/// assert!(!is_allowed_image_extension("svg"));
/// assert!(!is_allowed_image_extension(""));
/// ```
pub fn is_allowed_image_extension(extension: &str) -> bool {
    let extension = extension.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for ext in ["jpg", "jpeg", "jpe", "png", "gif", "webp"] {
            assert!(is_allowed_image_extension(ext), "{ext} should be allowed");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_allowed_image_extension("JPG"));
        assert!(is_allowed_image_extension("Png"));
        assert!(is_allowed_image_extension("WEBP"));
    }

    #[test]
    fn test_rejected_extensions() {
        for ext in [
            "gitkeep", "DS_Store", "md", "txt", "svg", "bmp", "tiff", "ico", "pdf", "php", "html",
        ] {
            assert!(!is_allowed_image_extension(ext), "{ext} should be rejected");
        }
    }

    #[test]
    fn test_empty_extension_rejected() {
        assert!(!is_allowed_image_extension(""));
    }
}
