//! Extracted record types
//!
//! Records are plain values: the extractors build them once and callers only
//! read them afterwards.

/// An article title and the absolute link it points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    /// Trimmed visible text of the title anchor (never empty)
    pub text: String,

    /// Absolute URL of the article
    pub link: String,
}

/// A book listed on a catalogue page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,

    /// Display price: digits, decimal point and currency symbols only
    pub price: String,

    /// Star rating from 1 to 5, or 0 when the rating token was not recognized
    pub rating: u8,

    /// Absolute URL of the book's detail page
    pub link: String,
}
