use crate::ScrapeError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Scheme, then a dotted host, `localhost` or a dotted-quad IPv4 address,
/// then an optional port and an optional path or query.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL pattern is a valid regex")
});

/// Checks whether a string is a well-formed absolute URL
///
/// Accepts `http`, `https`, `ftp` and `ftps` URLs whose host is a dotted
/// hostname, `localhost` or an IPv4 address, with an optional port and path.
/// This is a pattern check only; the host is never resolved.
///
/// # Examples
///
/// ```
/// use shelfscrape::url::is_valid_url;
///
/// assert!(is_valid_url("https://books.toscrape.com/catalogue/page-2.html"));
/// assert!(is_valid_url("HTTP://LOCALHOST:8080/"));
/// assert!(!is_valid_url("books.toscrape.com"));
/// assert!(!is_valid_url(""));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

/// Validates user input and parses it into a `Url`
///
/// Leading and trailing whitespace is ignored. Empty or malformed input is
/// rejected with `ScrapeError::InputValidation` before any I/O happens.
pub fn validate_input(input: &str) -> Result<Url, ScrapeError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ScrapeError::InputValidation(
            "please enter a URL".to_string(),
        ));
    }

    if !is_valid_url(input) {
        return Err(ScrapeError::InputValidation(format!(
            "'{}' is not a valid URL; it must start with http:// or https://",
            input
        )));
    }

    // The pattern does not bound port numbers or IPv4 octets
    Url::parse(input).map_err(|e| {
        ScrapeError::InputValidation(format!("'{}' is not a valid URL: {}", input, e))
    })
}
