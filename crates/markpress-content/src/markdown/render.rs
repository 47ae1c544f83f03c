//! Markdown-to-HTML rendering.
//!
//! Rendering is delegated to `pulldown-cmark`; this module only fixes the
//! option set so every caller renders with the same dialect. Markdown
//! semantics are the renderer's contract, not ours, so coverage here is
//! smoke-level (headings, bold, italic).

use pulldown_cmark::{Options, Parser, html};

/// Render markdown body text to HTML.
///
/// Tables, strikethrough, footnotes, and task lists are enabled on top of
/// CommonMark.
///
/// # Example
///
/// ```rust
/// use markpress_content::markdown::render::render_html;
///
/// let html = render_html("## Hello\n\nSome **bold** text.");
/// assert!(html.contains("<h2>"));
/// assert!(html.contains("<strong>bold</strong>"));
/// ```
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Tests
// ============================================================================
