//! CSV export of scraped books

use crate::records::BookRecord;
use crate::ScrapeError;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of every export
pub const CSV_HEADER: [&str; 5] = ["#", "Title", "Price", "Rating", "Link"];

/// Writes books to a CSV file
///
/// The file starts with [`CSV_HEADER`], followed by one row per record with
/// a 1-based index in the `#` column. Output is UTF-8.
///
/// # Returns
///
/// * `Ok(usize)` - Number of data rows written
/// * `Err(ScrapeError::NoData)` - `records` is empty; the file is not created
/// * `Err(ScrapeError::Io)` - The file could not be created or written; a
///   partially written file is removed
pub fn export_csv(records: &[BookRecord], path: &Path) -> Result<usize, ScrapeError> {
    if records.is_empty() {
        return Err(ScrapeError::NoData);
    }

    let file = File::create(path)?;
    let rows = write_csv(records, file).map_err(|e| discard_partial(path, e))?;

    tracing::info!("Exported {} books to {}", rows, path.display());
    Ok(rows)
}

/// Writes books as CSV to any writer
pub fn write_csv<W: Write>(records: &[BookRecord], writer: W) -> Result<usize, ScrapeError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(CSV_HEADER).map_err(csv_io)?;
    for (index, book) in records.iter().enumerate() {
        writer
            .write_record([
                (index + 1).to_string().as_str(),
                book.title.as_str(),
                book.price.as_str(),
                book.rating.to_string().as_str(),
                book.link.as_str(),
            ])
            .map_err(csv_io)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Builds a timestamped export path such as `./books_20240131_142500.csv`
pub fn default_export_path(directory: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    directory.join(format!("{}_{}.csv", prefix, now.format("%Y%m%d_%H%M%S")))
}

/// Removes a half-written export, passing the original error through
fn discard_partial(path: &Path, error: ScrapeError) -> ScrapeError {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("Could not remove partial export {}: {}", path.display(), e);
    }
    error
}

fn csv_io(e: csv::Error) -> ScrapeError {
    ScrapeError::Io(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn books() -> Vec<BookRecord> {
        vec![
            BookRecord {
                title: "A Light in the Attic".to_string(),
                price: "£51.77".to_string(),
                rating: 3,
                link: "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
                    .to_string(),
            },
            BookRecord {
                title: "Sapiens: A Brief History of Humankind, Illustrated".to_string(),
                price: "£54.23".to_string(),
                rating: 5,
                link: "https://books.toscrape.com/catalogue/sapiens_996/index.html".to_string(),
            },
        ]
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.csv");

        let rows = export_csv(&books(), &path).unwrap();
        assert_eq!(rows, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#,Title,Price,Rating,Link");
        assert_eq!(
            lines[1],
            "1,A Light in the Attic,£51.77,3,https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html"
        );
        // Commas in titles are quoted
        assert!(lines[2].starts_with("2,\"Sapiens: A Brief History of Humankind, Illustrated\","));
    }

    #[test]
    fn test_export_empty_is_no_data_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        let err = export_csv(&[], &path).unwrap_err();
        assert!(matches!(err, ScrapeError::NoData));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("books.csv");

        let err = export_csv(&books(), &path).unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }

    /// Accepts `limit` bytes, then fails every write
    struct ShortWriter {
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.limit == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.limit);
            self.limit -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = write_csv(&books(), ShortWriter { limit: 10 }).unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.csv");
        std::fs::write(&path, "#,Title\n1,Trunc").unwrap();

        let failure = write_csv(&books(), ShortWriter { limit: 10 }).unwrap_err();
        let err = discard_partial(&path, failure);

        assert!(matches!(err, ScrapeError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_default_export_path() {
        let now = Local.with_ymd_and_hms(2024, 1, 31, 14, 25, 0).unwrap();
        let path = default_export_path(Path::new("out"), "books", now);
        assert_eq!(path, Path::new("out").join("books_20240131_142500.csv"));
    }
}
