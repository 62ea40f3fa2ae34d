//! Bulk insert and CSV import

use crate::errors::{from_rusqlite, io_error, Result};
use qualtrack_core::render::fields_from_csv;
use qualtrack_core::RecordFields;
use rusqlite::Connection;
use std::path::Path;

/// Insert every row in one transaction, returning the assigned ids in order
pub fn insert_all(conn: &mut Connection, rows: &[RecordFields]) -> Result<Vec<i64>> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let mut ids = Vec::with_capacity(rows.len());
    {
        let mut stmt = tx
            .prepare(
                "INSERT INTO qualifications (faculty, qualification, status, date)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(from_rusqlite)?;

        for row in rows {
            stmt.execute(rusqlite::params![
                row.faculty,
                row.qualification,
                row.status,
                row.date
            ])
            .map_err(from_rusqlite)?;
            ids.push(tx.last_insert_rowid());
        }
    }
    tx.commit().map_err(from_rusqlite)?;
    Ok(ids)
}

/// Import records from a CSV file
///
/// Any `id` column is ignored; the store assigns fresh ids. Blank rows are
/// skipped. Returns the ids of the inserted rows.
pub fn import_csv_file(path: &Path, conn: &mut Connection) -> Result<Vec<i64>> {
    let file = std::fs::File::open(path).map_err(|e| io_error("open_csv", e))?;
    let rows: Vec<RecordFields> = fields_from_csv(file)?
        .into_iter()
        .filter(|f| !f.is_blank())
        .collect();

    let ids = insert_all(conn, &rows)?;
    tracing::info!(
        path = %path.display(),
        row_count = ids.len(),
        "imported records from CSV"
    );
    Ok(ids)
}
