use url::Url;

/// Resolves a link href into an absolute URL
///
/// An href that already starts with `http://` or `https://` is returned
/// unchanged. Anything else is joined against `base` with standard URL-join
/// semantics. If the join fails the href is returned as-is.
///
/// # Examples
///
/// ```
/// use shelfscrape::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://books.toscrape.com/catalogue/page-2.html").unwrap();
/// assert_eq!(
///     resolve_link(&base, "a-light-in-the-attic_1000/index.html"),
///     "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
/// );
/// assert_eq!(resolve_link(&base, "https://other.com/x"), "https://other.com/x");
/// ```
pub fn resolve_link(base: &Url, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    match base.join(href) {
        Ok(absolute) => absolute.to_string(),
        Err(e) => {
            tracing::debug!("Could not join '{}' onto {}: {}", href, base, e);
            href.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Url {
        Url::parse("https://books.toscrape.com/catalogue/").unwrap()
    }

    #[test]
    fn test_relative_href_joins_against_base() {
        assert_eq!(
            resolve_link(&catalogue(), "catalogue/a-light-in-the-attic_1000/index.html"),
            "https://books.toscrape.com/catalogue/catalogue/a-light-in-the-attic_1000/index.html"
        );
    }

    #[test]
    fn test_relative_href_from_site_root() {
        let base = Url::parse("https://books.toscrape.com/").unwrap();
        assert_eq!(
            resolve_link(&base, "catalogue/a-light-in-the-attic_1000/index.html"),
            "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
        );
    }

    #[test]
    fn test_absolute_href_unchanged() {
        // Kept byte for byte, no trailing slash added
        assert_eq!(
            resolve_link(&catalogue(), "https://example.com"),
            "https://example.com"
        );
        assert_eq!(
            resolve_link(&catalogue(), "http://example.com/a?b=c"),
            "http://example.com/a?b=c"
        );
    }

    #[test]
    fn test_root_relative_href() {
        assert_eq!(
            resolve_link(&catalogue(), "/index.html"),
            "https://books.toscrape.com/index.html"
        );
    }

    #[test]
    fn test_parent_segments() {
        assert_eq!(
            resolve_link(&catalogue(), "../media/cover.jpg"),
            "https://books.toscrape.com/media/cover.jpg"
        );
    }

    #[test]
    fn test_fragment_default() {
        assert_eq!(
            resolve_link(&catalogue(), "#"),
            "https://books.toscrape.com/catalogue/#"
        );
    }
}
