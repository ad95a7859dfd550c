//! Append-only CSV sink.

use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::debug;

use crate::models::{IrisgenError, Result, SampleRow};

/// Outcome of one append.
#[derive(Debug, Clone)]
pub struct AppendReport {
    /// Data rows written (header excluded)
    pub rows_written: usize,

    /// Whether the header record was written (file created by this call)
    pub header_written: bool,
}

/// Append a batch of rows to the CSV file at `path`.
///
/// Creates the containing directory on first use. The column header is
/// written only when the file did not previously exist; every later
/// invocation strictly appends data rows, so re-running with the same
/// timestamp yields additional duplicate-timestamp rows. Partial-row
/// atomicity is not guaranteed: a crash mid-write may leave a truncated
/// last row, but already-flushed content is never rewritten.
pub fn append_batch(path: &Path, rows: &[SampleRow]) -> Result<AppendReport> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| IrisgenError::io("creating output directory", e))?;
    }

    // Probe before opening: create(true) below would make the file exist.
    let file_exists = path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| IrisgenError::io("opening output file", e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_exists {
        writer.write_record(SampleRow::HEADER)?;
    }

    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .flush()
        .map_err(|e| IrisgenError::io("flushing output file", e))?;

    debug!(
        rows = rows.len(),
        header = !file_exists,
        path = %path.display(),
        "Batch appended"
    );

    Ok(AppendReport {
        rows_written: rows.len(),
        header_written: !file_exists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_batch;
    use chrono::{DateTime, FixedOffset};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn batch(seed: u64, rows: usize, logical_ts: &str) -> Vec<SampleRow> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_batch(&mut rng, rows, ts(logical_ts))
    }

    #[test]
    fn test_new_file_gets_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("iris.csv");

        let report = append_batch(&path, &batch(1, 100, "2024-12-14T00:01:00+00:00")).unwrap();
        assert_eq!(report.rows_written, 100);
        assert!(report.header_written);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 101);
        assert_eq!(
            lines[0],
            "sepal_length,sepal_width,petal_length,petal_width,label,generated_at"
        );
    }

    #[test]
    fn test_second_append_does_not_duplicate_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iris.csv");

        append_batch(&path, &batch(1, 100, "2024-12-14T00:01:00+00:00")).unwrap();
        let report = append_batch(&path, &batch(2, 100, "2024-12-14T00:02:00+00:00")).unwrap();
        assert!(!report.header_written);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 201);
        assert_eq!(
            content.matches("sepal_length,sepal_width").count(),
            1,
            "header must appear exactly once"
        );
    }

    #[test]
    fn test_data_rows_carry_label_and_timestamp_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iris.csv");

        append_batch(&path, &batch(3, 5, "2024-12-14T00:01:00+00:00")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        for line in content.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 6, "unexpected row: {line}");
            assert!(["setosa", "versicolor", "virginica"].contains(&fields[4]));
            assert!(fields[5].starts_with("2024-12-14T00:01:00"));
        }
    }

    #[test]
    fn test_unwritable_path_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();

        // A regular file where the output directory should be makes
        // directory creation fail regardless of process privileges.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("iris.csv");

        let err = append_batch(&path, &batch(4, 10, "2024-12-14T00:01:00+00:00")).unwrap_err();
        assert!(matches!(err, IrisgenError::Io { .. }));
    }

    #[test]
    fn test_failed_append_leaves_prior_content_intact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("iris.csv");

        append_batch(&path, &batch(5, 100, "2024-12-14T00:01:00+00:00")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        assert!(append_batch(&blocker.join("iris.csv"), &batch(6, 100, "2024-12-14T00:02:00+00:00")).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
