//! Append-only bulk insert of a tabular dataset into a named table.
//!
//! Column names come verbatim from the dataset header, order preserved.
//! Every column is TEXT; empty source fields arrive as NULL. No dedup, no
//! upsert, no schema validation. Any failure propagates to the caller.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::DbError;

// Postgres caps bind parameters at u16::MAX per statement.
const MAX_BIND_PARAMS: usize = 65_535;
const MAX_ROWS_PER_BATCH: usize = 500;

/// An in-memory tabular dataset, typically read from a cleaned CSV export.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names, verbatim from the source header.
    pub columns: Vec<String>,
    /// Row values in header order. `None` marks an empty source field.
    pub rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Check that every row matches the header width.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::EmptyDataset`] for a header-less dataset, or
    /// [`DbError::RowWidthMismatch`] naming the first offending row.
    pub fn validate(&self) -> Result<(), DbError> {
        if self.columns.is_empty() {
            return Err(DbError::EmptyDataset);
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(DbError::RowWidthMismatch {
                    row: i + 1,
                    found: row.len(),
                    expected: self.columns.len(),
                });
            }
        }
        Ok(())
    }
}

/// Append every row of `dataset` to `table`, creating the table with TEXT
/// columns if it does not exist yet. Returns the number of rows inserted.
///
/// All inserts run inside a single transaction; if any batch fails the
/// entire load is rolled back.
///
/// # Errors
///
/// Returns [`DbError`] if the dataset is malformed or any statement fails.
pub async fn bulk_append(pool: &PgPool, table: &str, dataset: &Dataset) -> Result<u64, DbError> {
    dataset.validate()?;

    let mut tx = pool.begin().await?;

    let column_defs = dataset
        .columns
        .iter()
        .map(|c| format!("{} TEXT", quote_ident(c)))
        .collect::<Vec<_>>()
        .join(", ");
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {} ({column_defs})",
        quote_ident(table)
    ))
    .execute(&mut *tx)
    .await?;

    let column_list = dataset
        .columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");

    let mut inserted = 0u64;
    for batch in dataset.rows.chunks(batch_size(dataset.columns.len())) {
        // push_values appends the VALUES keyword and the placeholder tuples.
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "INSERT INTO {} ({column_list}) ",
            quote_ident(table)
        ));
        builder.push_values(batch, |mut b, row| {
            for value in row {
                b.push_bind(value.as_deref());
            }
        });
        let result = builder.build().execute(&mut *tx).await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Rows per INSERT, bounded by the bind-parameter cap and a batch ceiling.
fn batch_size(columns: usize) -> usize {
    (MAX_BIND_PARAMS / columns.max(1)).clamp(1, MAX_ROWS_PER_BATCH)
}

/// Double-quote an identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
