//! URL handling module for Shelfscrape
//!
//! This module provides the syntactic URL check that gates user input and the
//! absolute-link resolution used by both extractors.

mod resolve;
mod validate;

// Re-export main functions
pub use resolve::resolve_link;
pub use validate::{is_valid_url, validate_input};
