use crate::crawler::DEFAULT_MAX_TITLES;
use serde::Deserialize;

/// Main configuration structure for Shelfscrape
///
/// Every section and key is optional in the TOML file; missing values take
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub titles: TitlesConfig,
    #[serde(default)]
    pub books: BooksConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// HTTP request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Browser-identifying User-Agent header
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Accept-Language header
    #[serde(rename = "accept-language")]
    pub accept_language: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            accept_language: "es-ES,es;q=0.9".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Title-mode configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TitlesConfig {
    /// Maximum number of titles collected from one page
    #[serde(rename = "max-items")]
    pub max_items: usize,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_TITLES,
        }
    }
}

/// Book-catalogue configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BooksConfig {
    /// URL of the first catalogue page
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// URL of pages 2..N, with `{page}` standing for the page number
    #[serde(rename = "catalogue-template")]
    pub catalogue_template: String,

    /// CSS selector of one item container on a listing page
    #[serde(rename = "item-selector")]
    pub item_selector: String,

    /// Page count used when the caller gives none
    #[serde(rename = "default-pages")]
    pub default_pages: u32,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            base_url: "https://books.toscrape.com/".to_string(),
            catalogue_template: "https://books.toscrape.com/catalogue/page-{page}.html"
                .to_string(),
            item_selector: "article.product_pod".to_string(),
            default_pages: 3,
        }
    }
}

/// CSV export configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exports written without an explicit path
    pub directory: String,

    /// File name prefix for timestamped exports
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "books".to_string(),
        }
    }
}
