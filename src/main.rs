//! Shelfscrape main entry point
//!
//! This is the command-line interface for extracting blog titles and book
//! catalogue records.

use anyhow::Context;
use clap::{Parser, Subcommand};
use shelfscrape::config::{load_or_default, Config};
use shelfscrape::crawler::{Coordinator, PageFailure, ScrapeProgress, ScrapeReport};
use shelfscrape::output::{default_export_path, export_csv, print_books, print_titles};
use shelfscrape::ScrapeError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shelfscrape: listing-page extraction for blogs and book catalogues
#[derive(Parser, Debug)]
#[command(name = "shelfscrape")]
#[command(version = "1.0.0")]
#[command(about = "Extracts blog titles and book catalogue records", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the first article titles from a blog page
    Titles {
        /// Blog URL (http, https, ftp or ftps)
        url: String,
    },

    /// Scrape book records from the catalogue and export them to CSV
    Books {
        /// Number of catalogue pages to scrape (1-10)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10))]
        pages: Option<u32>,

        /// CSV output path (defaults to a timestamped file)
        #[arg(short, long, value_name = "FILE", conflicts_with = "no_export")]
        output: Option<PathBuf>,

        /// Only print the results, do not write a CSV file
        #[arg(long)]
        no_export: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load configuration from {}", path.display()),
        None => "invalid default configuration".to_string(),
    })?;

    let result = match cli.command {
        Command::Titles { url } => handle_titles(config, &url).await,
        Command::Books {
            pages,
            output,
            no_export,
        } => handle_books(config, pages, output, no_export).await,
    };

    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }
    result
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelfscrape=info,warn"),
            1 => EnvFilter::new("shelfscrape=debug,info"),
            2 => EnvFilter::new("shelfscrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the `titles` command: one page, selector cascade
async fn handle_titles(config: Config, url: &str) -> anyhow::Result<()> {
    let coordinator = Coordinator::new(config)?;
    let titles = coordinator.scrape_titles(url).await?;

    if titles.is_empty() {
        println!("No articles found on the page");
        return Ok(());
    }

    print_titles(url.trim(), &titles);
    Ok(())
}

/// Handles the `books` command: paginated scrape, then export
async fn handle_books(
    config: Config,
    pages: Option<u32>,
    output: Option<PathBuf>,
    no_export: bool,
) -> anyhow::Result<()> {
    let pages = pages.unwrap_or(config.books.default_pages);
    let export_dir = PathBuf::from(&config.export.directory);
    let export_prefix = config.export.file_prefix.clone();

    let coordinator = Coordinator::new(config)?;
    let report = coordinator
        .scrape_books(pages, &mut LogProgress)
        .await
        .context("book scrape failed")?;

    print_books(&report);

    if no_export {
        return Ok(());
    }

    let path = output.unwrap_or_else(|| {
        default_export_path(&export_dir, &export_prefix, chrono::Local::now())
    });
    export(&report, &path)
}

/// Writes the report's records to CSV; an empty batch only warns
fn export(report: &ScrapeReport, path: &Path) -> anyhow::Result<()> {
    match export_csv(&report.records, path) {
        Ok(rows) => {
            println!("Exported {} books to {}", rows, path.display());
            Ok(())
        }
        Err(ScrapeError::NoData) => {
            tracing::warn!("No data to export");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("could not export to {}", path.display())),
    }
}

/// Progress observer that reports through tracing
struct LogProgress;

impl ScrapeProgress for LogProgress {
    fn begin(&mut self, total_pages: u32) {
        tracing::info!("Starting scrape of {} pages", total_pages);
    }

    fn page_scraped(&mut self, page: u32, new_records: usize, total_records: usize) {
        tracing::info!(
            "Page {}: {} books ({} so far)",
            page,
            new_records,
            total_records
        );
    }

    fn page_failed(&mut self, failure: &PageFailure) {
        tracing::warn!(
            "Could not access page {} ({})",
            failure.page,
            failure.state
        );
    }
}
