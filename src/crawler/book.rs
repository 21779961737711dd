//! Book record extraction from catalogue item containers
//!
//! Each listing item carries a fixed set of fields at fixed locations:
//!
//! | Field  | Location                                  |
//! |--------|-------------------------------------------|
//! | title  | `title` attribute of `h3 > a`             |
//! | price  | text of `p.price_color`                   |
//! | rating | second class token of `p.star-rating`     |
//! | link   | `href` of `h3 > a`, resolved against base |

use crate::records::BookRecord;
use crate::url::resolve_link;
use crate::ScrapeError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

static TITLE_ANCHOR: Lazy<Selector> = Lazy::new(|| selector("h3 a"));
static PRICE: Lazy<Selector> = Lazy::new(|| selector("p.price_color"));
static STAR_RATING: Lazy<Selector> = Lazy::new(|| selector("p.star-rating"));

/// Currency symbols kept by price normalization
const CURRENCY_SYMBOLS: &[char] = &['£', '$', '€', '¥', '₹', '₩', '₽', '¢'];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Extracts one book from its item container
///
/// # Errors
///
/// Returns `ScrapeError::MalformedRecord` when the title anchor, its `title`
/// or `href` attribute, the price element or the rating element is missing.
/// An unrecognized rating token is not an error; it yields a rating of 0.
pub fn extract_book(item: ElementRef<'_>, base: &Url) -> Result<BookRecord, ScrapeError> {
    let anchor = item
        .select(&TITLE_ANCHOR)
        .next()
        .ok_or_else(|| ScrapeError::MalformedRecord("missing h3 title anchor".to_string()))?;

    let title = anchor
        .value()
        .attr("title")
        .ok_or_else(|| ScrapeError::MalformedRecord("title anchor has no title attribute".to_string()))?;

    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::MalformedRecord(format!("'{}' has no href", title)))?;

    let price_text: String = item
        .select(&PRICE)
        .next()
        .ok_or_else(|| ScrapeError::MalformedRecord(format!("'{}' has no price element", title)))?
        .text()
        .collect();

    let rating_element = item
        .select(&STAR_RATING)
        .next()
        .ok_or_else(|| ScrapeError::MalformedRecord(format!("'{}' has no rating element", title)))?;

    // class="star-rating Three"
    let rating_token = rating_element
        .value()
        .attr("class")
        .and_then(|classes| classes.split_whitespace().nth(1))
        .unwrap_or("");

    Ok(BookRecord {
        title: title.to_string(),
        price: normalize_price(&price_text),
        rating: parse_rating(rating_token),
        link: resolve_link(base, href),
    })
}

/// Keeps only digits, the decimal point and currency symbols
///
/// A `.` counts as a decimal point only when a digit follows it, so the
/// period of an abbreviation such as "incl." is dropped. No numeric parsing
/// happens; the result is a display string.
///
/// # Examples
///
/// ```
/// use shelfscrape::crawler::normalize_price;
///
/// assert_eq!(normalize_price("£51.77 incl. tax"), "£51.77");
/// assert_eq!(normalize_price("Â£13.99"), "£13.99");
/// ```
pub fn normalize_price(raw: &str) -> String {
    let mut chars = raw.chars().peekable();
    let mut price = String::with_capacity(raw.len());

    while let Some(c) = chars.next() {
        let keep = match c {
            '.' => chars.peek().is_some_and(|next| next.is_ascii_digit()),
            c => c.is_ascii_digit() || CURRENCY_SYMBOLS.contains(&c),
        };
        if keep {
            price.push(c);
        }
    }

    price
}

/// Maps a star-rating word to its number
///
/// `One` through `Five` map to 1 through 5 (exact, case-sensitive match).
/// Anything else maps to 0.
pub fn parse_rating(token: &str) -> u8 {
    match token {
        "One" => 1,
        "Two" => 2,
        "Three" => 3,
        "Four" => 4,
        "Five" => 5,
        _ => 0,
    }
}
