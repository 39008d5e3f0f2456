//! CSV-to-table bulk loading.
//!
//! One-off migration tooling: read a cleaned CSV export whole into memory,
//! append its rows to a table named after the file, and abort on the first
//! error. No retries, no row skipping, no partial recovery.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use sqlx::PgPool;

use pulse_db::Dataset;

/// Load one CSV file into `table` (or a table named after the file stem).
///
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Fails fast on any read, parse, or database error.
pub(crate) async fn run_load(
    pool: &PgPool,
    file: &Path,
    table: Option<&str>,
) -> anyhow::Result<u64> {
    let dataset = read_csv(file)?;
    let derived;
    let table = match table {
        Some(t) => t,
        None => {
            derived = table_name_from_path(file)?;
            &derived
        }
    };

    tracing::info!(
        file = %file.display(),
        table,
        rows = dataset.rows.len(),
        "appending dataset"
    );

    let inserted = pulse_db::bulk_append(pool, table, &dataset)
        .await
        .with_context(|| format!("loading {} into '{table}'", file.display()))?;
    Ok(inserted)
}

/// Load every `*.csv` in `dir`, in name order. Returns total rows inserted.
///
/// # Errors
///
/// Fails fast on the first file that cannot be read or loaded.
pub(crate) async fn run_load_all(pool: &PgPool, dir: &Path) -> anyhow::Result<u64> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("no CSV files found in {}", dir.display());
    }

    let mut total = 0u64;
    for file in &files {
        total += run_load(pool, file, None).await?;
    }
    Ok(total)
}

/// Read a CSV file whole into a [`Dataset`].
///
/// # Errors
///
/// Fails on missing files and CSV parse errors, including ragged rows.
pub(crate) fn read_csv(path: &Path) -> anyhow::Result<Dataset> {
    let file =
        File::open(path).with_context(|| format!("opening CSV file {}", path.display()))?;
    dataset_from_reader(file).with_context(|| format!("parsing CSV file {}", path.display()))
}

/// Parse CSV bytes into a [`Dataset`], header first, empty fields as NULL.
fn dataset_from_reader<R: Read>(reader: R) -> anyhow::Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("reading CSV record")?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Dataset { columns, rows })
}

/// Derive a destination table name from the file stem, verbatim.
fn table_name_from_path(path: &Path) -> anyhow::Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("cannot derive table name from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dataset_from_reader_preserves_header_order() {
        let csv = "User Name,Comment Text,Likes\nalice,love it,3\nbob,,0\n";
        let dataset = dataset_from_reader(csv.as_bytes()).expect("dataset");
        assert_eq!(
            dataset.columns,
            vec!["User Name", "Comment Text", "Likes"]
        );
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[0][1].as_deref(), Some("love it"));
    }

    #[test]
    fn dataset_from_reader_maps_empty_fields_to_null() {
        let csv = "a,b\n1,\n";
        let dataset = dataset_from_reader(csv.as_bytes()).expect("dataset");
        assert_eq!(dataset.rows[0][0].as_deref(), Some("1"));
        assert!(dataset.rows[0][1].is_none());
    }

    #[test]
    fn dataset_from_reader_handles_quoted_commas() {
        let csv = "text,date\n\"arrived, on time\",2024-06-01\n";
        let dataset = dataset_from_reader(csv.as_bytes()).expect("dataset");
        assert_eq!(dataset.rows[0][0].as_deref(), Some("arrived, on time"));
    }

    #[test]
    fn dataset_from_reader_rejects_ragged_rows() {
        // Pre-cleaned inputs are assumed; a short row is a hard error.
        let csv = "a,b,c\n1,2\n";
        assert!(dataset_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn table_name_comes_from_file_stem() {
        let path = PathBuf::from("/data/dataset_tiktok-hashtag_cleaned.xlsx_csv.csv");
        assert_eq!(
            table_name_from_path(&path).expect("name"),
            "dataset_tiktok-hashtag_cleaned.xlsx_csv"
        );
    }

    #[test]
    fn read_csv_fails_on_missing_file() {
        let err = read_csv(Path::new("/nonexistent/file.csv")).expect_err("missing file");
        assert!(err.to_string().contains("opening CSV file"));
    }
}
