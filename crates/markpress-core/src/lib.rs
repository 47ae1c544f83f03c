//! Markpress Core — shared types, errors, diagnostics, and utilities.
//!
//! This crate provides the foundational types used across all Markpress
//! crates. It has no internal Markpress dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`diagnostics`]: Append-only diagnostic sink
//! - [`util`]: Merge, slug, and media utilities

#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use diagnostics::Diagnostics;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::media::is_allowed_image_extension;
pub use util::merge::merge;
pub use util::slug::{is_hidden_slug, sanitize_slug};
