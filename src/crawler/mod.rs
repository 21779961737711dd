//! Crawler module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with classified failures
//! - The title selector cascade
//! - Book record extraction and normalization
//! - Multi-page coordination with partial-failure tolerance

mod book;
mod cascade;
mod coordinator;
mod fetcher;
mod progress;

pub use book::{extract_book, normalize_price, parse_rating};
pub use cascade::{
    extract_titles, extract_titles_with, Candidate, DocumentQuery, DEFAULT_MAX_TITLES,
    TITLE_SELECTORS,
};
pub use coordinator::{Coordinator, PageFailure, ScrapeReport, SkippedItem, MAX_PAGES};
pub use fetcher::{build_http_client, Fetcher};
pub use progress::{NullProgress, ScrapeProgress};
