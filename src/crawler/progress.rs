//! Progress reporting for multi-page scrapes
//!
//! Frontends implement [`ScrapeProgress`] to surface status while the
//! driver works; every method has a no-op default.

use crate::crawler::coordinator::{PageFailure, ScrapeReport};

/// Observer of a running scrape
pub trait ScrapeProgress {
    /// Called once before the first page with the number of pages requested
    fn begin(&mut self, _total_pages: u32) {}

    /// Called before a page is fetched
    fn page_started(&mut self, _page: u32, _url: &str) {}

    /// Called after a page's items were extracted
    fn page_scraped(&mut self, _page: u32, _new_records: usize, _total_records: usize) {}

    /// Called when a page was skipped because its fetch failed
    fn page_failed(&mut self, _failure: &PageFailure) {}

    /// Called after the last page, successful or not
    fn finish(&mut self, _report: &ScrapeReport) {}
}

/// A no-op progress sink
pub struct NullProgress;

impl ScrapeProgress for NullProgress {}
