//! Output module for exporting and displaying scrape results
//!
//! This module handles:
//! - Exporting book records to CSV
//! - Rendering titles and book tables on the console

pub mod console;
mod csv_export;

pub use console::{format_books, format_titles, print_books, print_titles, render_stars};
pub use csv_export::{default_export_path, export_csv, write_csv, CSV_HEADER};
