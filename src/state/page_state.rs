/// Page state definitions for tracking scrape progress
///
/// This module defines every state a listing page can be in while the
/// pagination driver works through it.
use std::fmt;

/// Represents the current state of a page in the scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Page is requested but not yet fetched
    Pending,

    /// Page request is in flight
    Fetching,

    // ===== Terminal Success States =====
    /// Page was fetched and its items extracted
    Scraped,

    // ===== Terminal Error States =====
    /// Page returned HTTP 404
    DeadLink,

    /// Page returned HTTP 429
    RateLimited,

    /// Page could not be reached (DNS failure, connection refused, timeout)
    Unreachable,

    /// Page fetch failed for other reasons (any other non-2xx status)
    Failed,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns true if this is an active state (page may still be processed)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Fetching)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Scraped)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::DeadLink | Self::RateLimited | Self::Unreachable | Self::Failed
        )
    }

    /// Short, stable label used in logs and console output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Scraped => "scraped",
            Self::DeadLink => "dead_link",
            Self::RateLimited => "rate_limited",
            Self::Unreachable => "unreachable",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
