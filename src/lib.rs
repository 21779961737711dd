//! Shelfscrape: listing-page extraction for blogs and book catalogues
//!
//! This crate fetches HTML pages, locates article titles through a cascade of
//! structural selectors, extracts normalized book records from a catalogue
//! listing across several pages, and exports the results to CSV.

pub mod config;
pub mod crawler;
pub mod output;
pub mod records;
pub mod state;
pub mod url;

use crate::crawler::PageFailure;
use thiserror::Error;

/// Main error type for Shelfscrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid input: {0}")]
    InputValidation(String),

    #[error("Connection error for {url}: {source}")]
    Connection { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data to export")]
    NoData,

    #[error("All {} requested pages failed", .failures.len())]
    AllPagesFailed { failures: Vec<PageFailure> },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl ScrapeError {
    /// Maps a fetch failure to the terminal state of the page it hit
    ///
    /// Errors that do not come from fetching a page map to `Failed`.
    pub fn page_state(&self) -> state::PageState {
        use crate::state::PageState;

        match self {
            Self::HttpStatus { status: 404, .. } => PageState::DeadLink,
            Self::HttpStatus { status: 429, .. } => PageState::RateLimited,
            Self::Connection { .. } => PageState::Unreachable,
            _ => PageState::Failed,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Shelfscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{Coordinator, ScrapeReport};
pub use crate::records::{BookRecord, TitleRecord};
pub use crate::state::PageState;
pub use crate::url::{is_valid_url, resolve_link, validate_input};
