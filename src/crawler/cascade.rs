//! Selector cascade for locating article titles
//!
//! Blog markup is not known in advance, so titles are looked up through an
//! ordered list of structural selectors, most specific first. Each selector
//! contributes matches in document order until the batch reaches its cap;
//! once the cap is hit, no later selector is evaluated.

use crate::records::TitleRecord;
use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Title selectors in priority order: semantic markup before generic
/// heading-anchor patterns.
pub const TITLE_SELECTORS: &[&str] = &[
    "article h2 a",
    ".post-title a",
    ".entry-title a",
    "[itemprop=\"headline\"] a",
    "h2 a",
    "h1 a",
    "h3 a",
];

/// Default cap on the number of titles collected from one page
pub const DEFAULT_MAX_TITLES: usize = 5;

/// One element matched by a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Visible text of the element, untrimmed
    pub text: String,

    /// The element's `href` attribute, if any
    pub href: Option<String>,
}

/// Query capability of a parsed document
///
/// The cascade only needs "all elements matching this selector, in document
/// order"; keeping that behind a trait lets callers observe which selectors
/// were evaluated.
pub trait DocumentQuery {
    fn select_candidates(&self, selector: &str) -> Vec<Candidate>;
}

impl DocumentQuery for Html {
    fn select_candidates(&self, selector: &str) -> Vec<Candidate> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!("Skipping unparsable selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };

        self.select(&selector)
            .map(|element| Candidate {
                text: element.text().collect(),
                href: element.value().attr("href").map(str::to_string),
            })
            .collect()
    }
}

/// Extracts up to `max_items` article titles from a document
///
/// Selectors from [`TITLE_SELECTORS`] are tried in order. Elements whose
/// trimmed text is empty are skipped; a missing `href` defaults to `#`.
/// Relative links are resolved against `base`. Matches are not deduplicated
/// across selectors.
///
/// Returns an empty vector when nothing matches.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use shelfscrape::crawler::extract_titles;
/// use url::Url;
///
/// let doc = Html::parse_document(r#"<article><h2><a href="/first">First post</a></h2></article>"#);
/// let base = Url::parse("https://blog.example.com/").unwrap();
/// let titles = extract_titles(&doc, &base, 5);
/// assert_eq!(titles[0].text, "First post");
/// assert_eq!(titles[0].link, "https://blog.example.com/first");
/// ```
pub fn extract_titles<D>(doc: &D, base: &Url, max_items: usize) -> Vec<TitleRecord>
where
    D: DocumentQuery + ?Sized,
{
    extract_titles_with(doc, base, max_items, TITLE_SELECTORS)
}

/// Runs the cascade with an explicit selector list
pub fn extract_titles_with<D>(
    doc: &D,
    base: &Url,
    max_items: usize,
    selectors: &[&str],
) -> Vec<TitleRecord>
where
    D: DocumentQuery + ?Sized,
{
    let mut titles = Vec::with_capacity(max_items);

    for selector in selectors {
        if titles.len() >= max_items {
            break;
        }

        let candidates = doc.select_candidates(selector);
        tracing::debug!("Selector '{}' matched {} elements", selector, candidates.len());

        for candidate in candidates {
            if titles.len() >= max_items {
                break;
            }

            let text = candidate.text.trim();
            if text.is_empty() {
                continue;
            }

            let href = candidate.href.as_deref().unwrap_or("#");
            titles.push(TitleRecord {
                text: text.to_string(),
                link: resolve_link(base, href),
            });
        }
    }

    titles
}
