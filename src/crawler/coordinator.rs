//! Scrape coordinator - page loop orchestration
//!
//! This module contains the two scrape drivers:
//! - Title mode: validate one URL, fetch it, run the selector cascade
//! - Book mode: walk a bounded number of catalogue pages, extracting every
//!   item container on each and tolerating individual page failures
//!
//! Pages are processed strictly in sequence; one request is in flight at a
//! time and nothing is retried.

use crate::config::Config;
use crate::crawler::book::extract_book;
use crate::crawler::cascade::extract_titles;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::progress::ScrapeProgress;
use crate::records::{BookRecord, TitleRecord};
use crate::state::PageState;
use crate::url::validate_input;
use crate::{ConfigError, ScrapeError};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Largest page count a book scrape accepts
pub const MAX_PAGES: u32 = 10;

/// A page that was skipped because its fetch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    /// 1-based page number
    pub page: u32,
    pub url: String,
    /// Terminal state the failure maps to
    pub state: PageState,
    pub message: String,
}

/// An item container whose markup could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub page: u32,
    /// 1-based position of the item on its page
    pub position: usize,
    pub reason: String,
}

/// Outcome of a multi-page book scrape
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    /// Records in page order, then document order within a page
    pub records: Vec<BookRecord>,
    pub pages_requested: u32,
    /// State of every requested page, in page order
    pub page_states: Vec<(u32, PageState)>,
    pub failures: Vec<PageFailure>,
    pub skipped_items: Vec<SkippedItem>,
}

impl ScrapeReport {
    /// Empty report with every page from 1 to `pages` pending
    fn pending(pages: u32) -> Self {
        Self {
            pages_requested: pages,
            page_states: (1..=pages).map(|page| (page, PageState::Pending)).collect(),
            ..Self::default()
        }
    }

    /// Moves a page to its next state
    ///
    /// Pages that already reached a terminal state are left untouched.
    fn mark(&mut self, page: u32, state: PageState) {
        let Some(entry) = self.page_states.iter_mut().find(|(p, _)| *p == page) else {
            return;
        };

        if entry.1.is_terminal() {
            tracing::debug!("Page {} is already {}, ignoring {}", page, entry.1, state);
            return;
        }

        tracing::trace!("Page {}: {} -> {}", page, entry.1, state);
        entry.1 = state;
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Page numbers whose fetch failed
    pub fn failed_pages(&self) -> BTreeSet<u32> {
        self.failures.iter().map(|f| f.page).collect()
    }

    /// True if any page or item was skipped
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() || !self.skipped_items.is_empty()
    }

    /// Number of pages fetched and extracted
    pub fn pages_scraped(&self) -> usize {
        self.page_states
            .iter()
            .filter(|(_, state)| state.is_success())
            .count()
    }

    /// True once every requested page reached a terminal state
    pub fn is_complete(&self) -> bool {
        self.page_states.iter().all(|(_, state)| state.is_terminal())
    }

    /// True if at least one page was requested and every one of them failed
    fn all_failed(&self) -> bool {
        !self.page_states.is_empty() && self.page_states.iter().all(|(_, state)| state.is_error())
    }
}

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
    item_selector: Selector,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrapeError)` - The HTTP client or item selector could not be built
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let fetcher = Fetcher::new(&config.http)?;
        let item_selector = Selector::parse(&config.books.item_selector).map_err(|e| {
            ConfigError::Validation(format!(
                "item-selector '{}' is not a valid CSS selector: {:?}",
                config.books.item_selector, e
            ))
        })?;

        Ok(Self {
            config,
            fetcher,
            item_selector,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URL of a catalogue page
    ///
    /// Page 1 is the bare base URL; later pages substitute the page number
    /// into the catalogue template.
    pub fn page_url(&self, page: u32) -> Result<Url, ScrapeError> {
        let url = if page == 1 {
            self.config.books.base_url.clone()
        } else {
            self.config
                .books
                .catalogue_template
                .replace("{page}", &page.to_string())
        };

        Ok(Url::parse(&url)?)
    }

    /// Extracts article titles from a single page
    ///
    /// The input is validated before any request is made. An empty result is
    /// not an error.
    pub async fn scrape_titles(&self, input: &str) -> Result<Vec<TitleRecord>, ScrapeError> {
        let url = validate_input(input)?;
        tracing::info!("Extracting titles from {}", url);

        let html = self.fetcher.fetch(url.as_str()).await?;
        let document = Html::parse_document(&html);
        let titles = extract_titles(&document, &url, self.config.titles.max_items);

        if titles.is_empty() {
            tracing::warn!("No article titles found at {}", url);
        } else {
            tracing::info!("Found {} titles", titles.len());
        }

        Ok(titles)
    }

    /// Scrapes `pages` catalogue pages into a report
    ///
    /// Every requested page is attempted in order. A page whose fetch fails
    /// is recorded in `failures` and skipped; an item with malformed markup
    /// is recorded in `skipped_items` and skipped.
    ///
    /// # Errors
    ///
    /// * `InputValidation` - `pages` is outside `1..=MAX_PAGES` (no request is made)
    /// * `AllPagesFailed` - not a single page could be fetched
    pub async fn scrape_books(
        &self,
        pages: u32,
        progress: &mut dyn ScrapeProgress,
    ) -> Result<ScrapeReport, ScrapeError> {
        if !(1..=MAX_PAGES).contains(&pages) {
            return Err(ScrapeError::InputValidation(format!(
                "page count must be between 1 and {}, got {}",
                MAX_PAGES, pages
            )));
        }

        let urls = (1..=pages)
            .map(|page| self.page_url(page))
            .collect::<Result<Vec<_>, _>>()?;

        let mut report = ScrapeReport::pending(pages);
        progress.begin(pages);

        for (page, url) in (1..=pages).zip(urls) {
            tracing::info!("Scraping page {} of {}: {}", page, pages, url);
            report.mark(page, PageState::Fetching);
            progress.page_started(page, url.as_str());

            let html = match self.fetcher.fetch(url.as_str()).await {
                Ok(html) => html,
                Err(e) => {
                    let failure = PageFailure {
                        page,
                        url: url.to_string(),
                        state: e.page_state(),
                        message: e.to_string(),
                    };
                    tracing::warn!("Skipping page {}: {}", page, failure.message);
                    progress.page_failed(&failure);
                    report.mark(page, failure.state);
                    report.failures.push(failure);
                    continue;
                }
            };

            let before = report.records.len();
            self.extract_page(&html, &url, page, &mut report);
            let added = report.records.len() - before;

            tracing::debug!("Page {} yielded {} books", page, added);
            report.mark(page, PageState::Scraped);
            progress.page_scraped(page, added, report.records.len());
        }

        tracing::info!(
            "Scrape complete: {} books, {} failed pages",
            report.total_records(),
            report.failures.len()
        );
        progress.finish(&report);

        if report.all_failed() {
            return Err(ScrapeError::AllPagesFailed {
                failures: report.failures,
            });
        }

        Ok(report)
    }

    /// Runs the record extractor over every item container of one page
    fn extract_page(&self, html: &str, page_url: &Url, page: u32, report: &mut ScrapeReport) {
        let document = Html::parse_document(html);

        for (index, item) in document.select(&self.item_selector).enumerate() {
            match extract_book(item, page_url) {
                Ok(book) => report.records.push(book),
                Err(e) => {
                    tracing::warn!("Skipping item {} on page {}: {}", index + 1, page, e);
                    report.skipped_items.push(SkippedItem {
                        page,
                        position: index + 1,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::NullProgress;

    fn coordinator() -> Coordinator {
        Coordinator::new(Config::default()).unwrap()
    }

    #[test]
    fn test_page_urls() {
        let coordinator = coordinator();
        assert_eq!(
            coordinator.page_url(1).unwrap().as_str(),
            "https://books.toscrape.com/"
        );
        assert_eq!(
            coordinator.page_url(3).unwrap().as_str(),
            "https://books.toscrape.com/catalogue/page-3.html"
        );
    }

    #[tokio::test]
    async fn test_rejects_page_count_out_of_range() {
        let coordinator = coordinator();

        let err = coordinator.scrape_books(0, &mut NullProgress).await.unwrap_err();
        assert!(matches!(err, ScrapeError::InputValidation(_)));

        let err = coordinator.scrape_books(11, &mut NullProgress).await.unwrap_err();
        assert!(matches!(err, ScrapeError::InputValidation(_)));
    }

    #[tokio::test]
    async fn test_scrape_titles_rejects_invalid_url() {
        let err = coordinator().scrape_titles("not a url").await.unwrap_err();
        assert!(matches!(err, ScrapeError::InputValidation(_)));
    }

    #[test]
    fn test_extract_page_skips_malformed_items() {
        let html = r#"
            <article class="product_pod">
                <p class="star-rating Two"></p>
                <h3><a href="good_1/index.html" title="Good">Good</a></h3>
                <p class="price_color">£10.00</p>
            </article>
            <article class="product_pod">
                <p class="star-rating Two"></p>
                <h3><a href="bad_2/index.html">No title attribute</a></h3>
                <p class="price_color">£11.00</p>
            </article>
        "#;
        let base = Url::parse("https://books.toscrape.com/catalogue/page-2.html").unwrap();
        let mut report = ScrapeReport::default();

        coordinator().extract_page(html, &base, 2, &mut report);

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].title, "Good");
        assert_eq!(
            report.records[0].link,
            "https://books.toscrape.com/catalogue/good_1/index.html"
        );
        assert_eq!(report.skipped_items.len(), 1);
        assert_eq!(report.skipped_items[0].page, 2);
        assert_eq!(report.skipped_items[0].position, 2);
        assert!(report.is_partial());
    }

    #[test]
    fn test_page_lifecycle() {
        let mut report = ScrapeReport::pending(3);
        assert_eq!(report.pages_requested, 3);
        assert!(report
            .page_states
            .iter()
            .all(|(_, state)| *state == PageState::Pending));
        assert!(!report.is_complete());

        report.mark(1, PageState::Fetching);
        assert_eq!(report.page_states[0], (1, PageState::Fetching));
        report.mark(1, PageState::Scraped);

        report.mark(2, PageState::Fetching);
        report.mark(2, PageState::DeadLink);
        assert!(!report.is_complete());

        report.mark(3, PageState::Fetching);
        report.mark(3, PageState::Scraped);

        // Terminal states stick
        report.mark(2, PageState::Fetching);
        assert_eq!(report.page_states[1], (2, PageState::DeadLink));

        assert!(report.is_complete());
        assert_eq!(report.pages_scraped(), 2);
        assert!(!report.all_failed());
    }

    #[test]
    fn test_all_failed_needs_every_page_in_error() {
        let mut report = ScrapeReport::pending(2);
        for page in 1..=2 {
            report.mark(page, PageState::Fetching);
            report.mark(page, PageState::Unreachable);
        }
        assert!(report.all_failed());

        assert!(!ScrapeReport::default().all_failed());
    }

    #[test]
    fn test_report_failed_pages() {
        let report = ScrapeReport {
            pages_requested: 3,
            failures: vec![PageFailure {
                page: 2,
                url: "https://books.toscrape.com/catalogue/page-2.html".to_string(),
                state: PageState::Failed,
                message: "HTTP 500".to_string(),
            }],
            ..ScrapeReport::default()
        };

        assert_eq!(report.failed_pages(), BTreeSet::from([2]));
        assert_eq!(report.total_records(), 0);
    }
}
