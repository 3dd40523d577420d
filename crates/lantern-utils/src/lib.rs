//! # Lantern Utils
//!
//! Shared helpers for the Lantern toolkit: dotted-path access to nested
//! value trees (the shape configuration is stored in) and text utilities
//! such as slug generation.

pub mod path;
pub mod text;

pub use text::{slugify, slugify_with};
