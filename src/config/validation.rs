use crate::config::types::{BooksConfig, Config, ExportConfig, HttpConfig, TitlesConfig};
use crate::crawler::MAX_PAGES;
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_titles_config(&config.titles)?;
    validate_books_config(&config.books)?;
    validate_export_config(&config.export)?;
    Ok(())
}

/// Validates HTTP configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates title-mode configuration
fn validate_titles_config(config: &TitlesConfig) -> Result<(), ConfigError> {
    if config.max_items < 1 {
        return Err(ConfigError::Validation(
            "max-items must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates book-catalogue configuration
fn validate_books_config(config: &BooksConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;

    if !config.catalogue_template.contains("{page}") {
        return Err(ConfigError::Validation(format!(
            "catalogue-template must contain a {{page}} placeholder, got '{}'",
            config.catalogue_template
        )));
    }
    validate_http_url(
        "catalogue-template",
        &config.catalogue_template.replace("{page}", "2"),
    )?;

    Selector::parse(&config.item_selector).map_err(|e| {
        ConfigError::Validation(format!(
            "item-selector '{}' is not a valid CSS selector: {:?}",
            config.item_selector, e
        ))
    })?;

    if config.default_pages < 1 || config.default_pages > MAX_PAGES {
        return Err(ConfigError::Validation(format!(
            "default-pages must be between 1 and {}, got {}",
            MAX_PAGES, config.default_pages
        )));
    }

    Ok(())
}

/// Validates export configuration
fn validate_export_config(config: &ExportConfig) -> Result<(), ConfigError> {
    if config.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file-prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a configured URL parses and uses HTTP or HTTPS
fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use HTTP or HTTPS",
            key, value
        )));
    }

    Ok(())
}
