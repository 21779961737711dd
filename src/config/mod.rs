//! Configuration module for Shelfscrape
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, every setting takes its default.
//!
//! # Example
//!
//! ```no_run
//! use shelfscrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("shelfscrape.toml")).unwrap();
//! println!("Scraping {} pages by default", config.books.default_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BooksConfig, Config, ExportConfig, HttpConfig, TitlesConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
