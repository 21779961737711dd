//! Console rendering of scrape results
//!
//! This is the presentation side used by the command-line binary; the
//! library core never calls it.

use crate::crawler::ScrapeReport;
use crate::records::TitleRecord;
use std::fmt::Write;

/// Renders a rating as stars plus its number, e.g. `★★★ (3)`
pub fn render_stars(rating: u8) -> String {
    format!("{} ({})", "★".repeat(usize::from(rating)), rating)
}

/// Formats extracted titles as a numbered list
pub fn format_titles(url: &str, titles: &[TitleRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Titles found at: {} ===\n", url);

    for (index, title) in titles.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, title.text);
        let _ = writeln!(out, "   Link: {}\n", title.link);
    }

    out
}

/// Formats a book scrape as a table followed by a summary
pub fn format_books(report: &ScrapeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {:<50}  {:>8}  {:<11}  Link", "#", "Title", "Price", "Rating");

    for (index, book) in report.records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<50}  {:>8}  {:<11}  {}",
            index + 1,
            truncate(&book.title, 50),
            book.price,
            render_stars(book.rating),
            book.link
        );
    }

    let _ = writeln!(
        out,
        "\nScrape complete: {} books from {} of {} pages",
        report.total_records(),
        report.pages_requested as usize - report.failures.len(),
        report.pages_requested
    );

    for failure in &report.failures {
        let _ = writeln!(
            out,
            "Warning: page {} could not be scraped ({}): {}",
            failure.page, failure.state, failure.message
        );
    }

    if !report.skipped_items.is_empty() {
        let _ = writeln!(
            out,
            "Warning: {} items skipped because of malformed markup",
            report.skipped_items.len()
        );
    }

    out
}

pub fn print_titles(url: &str, titles: &[TitleRecord]) {
    print!("{}", format_titles(url, titles));
}

pub fn print_books(report: &ScrapeReport) {
    print!("{}", format_books(report));
}

/// Shortens text to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::PageFailure;
    use crate::records::BookRecord;
    use crate::state::PageState;

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(3), "★★★ (3)");
        assert_eq!(render_stars(0), " (0)");
    }

    #[test]
    fn test_format_titles() {
        let titles = vec![TitleRecord {
            text: "Hello world".to_string(),
            link: "https://blog.example.com/hello".to_string(),
        }];
        let out = format_titles("https://blog.example.com/", &titles);

        assert!(out.starts_with("=== Titles found at: https://blog.example.com/ ==="));
        assert!(out.contains("1. Hello world\n"));
        assert!(out.contains("   Link: https://blog.example.com/hello"));
    }

    #[test]
    fn test_format_books_with_failure() {
        let report = ScrapeReport {
            records: vec![BookRecord {
                title: "Soumission".to_string(),
                price: "£50.10".to_string(),
                rating: 1,
                link: "https://books.toscrape.com/catalogue/soumission_998/index.html".to_string(),
            }],
            pages_requested: 2,
            page_states: vec![(1, PageState::Scraped), (2, PageState::DeadLink)],
            failures: vec![PageFailure {
                page: 2,
                url: "https://books.toscrape.com/catalogue/page-2.html".to_string(),
                state: PageState::DeadLink,
                message: "HTTP 404".to_string(),
            }],
            skipped_items: vec![],
        };
        let out = format_books(&report);

        assert!(out.contains("Soumission"));
        assert!(out.contains("★ (1)"));
        assert!(out.contains("1 books from 1 of 2 pages"));
        assert!(out.contains("Warning: page 2 could not be scraped (dead_link): HTTP 404"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
