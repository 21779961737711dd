//! State module for tracking scrape progress
//!
//! # Components
//!
//! - `PageState`: Tracks the state of individual catalogue pages (pending, fetching, scraped, failed, etc.)

mod page_state;

// Re-export main types
pub use page_state::PageState;
