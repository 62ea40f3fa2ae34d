//! SQLite repository implementation
//!
//! `QualificationRepo` owns its connection; callers construct one explicitly
//! and pass it by reference to whatever needs the store.

use crate::errors::{from_rusqlite, Result};
use crate::{db, schema, seed};
use qualtrack_core::{QualificationRecord, RecordFields};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT id, faculty, qualification, status, date FROM qualifications";

/// Repository for qualification records
pub struct QualificationRepo {
    conn: Connection,
}

impl QualificationRepo {
    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (or create) the database file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_connection(db::open(path)?))
    }

    /// Open a private in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(db::open_in_memory()?))
    }

    /// Open, ensure the schema and seed an empty table
    ///
    /// This is the startup sequence of every entry point.
    pub fn bootstrap<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut repo = Self::open(path)?;
        repo.initialize()?;
        repo.seed_if_empty()?;
        Ok(repo)
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Ensure the table exists; safe to call repeatedly
    pub fn initialize(&self) -> Result<()> {
        schema::initialize(&self.conn)
    }

    /// Insert the sample records if the table is empty
    pub fn seed_if_empty(&mut self) -> Result<usize> {
        seed::seed_if_empty(&mut self.conn)
    }

    /// Number of stored records
    pub fn count(&self) -> Result<i64> {
        schema::count_rows(&self.conn)
    }

    /// Every record, in insertion order
    pub fn load_all(&self) -> Result<Vec<QualificationRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], record_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// A single record by id
    pub fn get(&self, id: i64) -> Result<Option<QualificationRecord>> {
        self.conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                record_from_row,
            )
            .optional()
            .map_err(from_rusqlite)
    }

    /// Overwrite the four mutable fields of the row with this id
    ///
    /// Returns the number of rows changed; an absent id changes nothing and
    /// is not an error.
    pub fn update_row(&self, id: i64, fields: &RecordFields) -> Result<usize> {
        let affected = self
            .conn
            .execute(
                "UPDATE qualifications
                 SET faculty = ?1, qualification = ?2, status = ?3, date = ?4
                 WHERE id = ?5",
                rusqlite::params![
                    fields.faculty,
                    fields.qualification,
                    fields.status,
                    fields.date,
                    id
                ],
            )
            .map_err(|e| from_rusqlite(e).with_op("update_row").with_record_id(id))?;
        tracing::debug!(record_id = id, affected, "update_row");
        Ok(affected)
    }

    /// Delete the row with this id; an absent id deletes nothing
    pub fn delete_row(&self, id: i64) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM qualifications WHERE id = ?1", [id])
            .map_err(|e| from_rusqlite(e).with_op("delete_row").with_record_id(id))?;
        tracing::debug!(record_id = id, affected, "delete_row");
        Ok(affected)
    }

    /// Insert a new row and return its assigned id
    pub fn insert_row(&self, fields: &RecordFields) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO qualifications (faculty, qualification, status, date)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    fields.faculty,
                    fields.qualification,
                    fields.status,
                    fields.date
                ],
            )
            .map_err(|e| from_rusqlite(e).with_op("insert_row"))?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(record_id = id, "insert_row");
        Ok(id)
    }

    /// Apply a full-row update for every edited record in one transaction
    ///
    /// Returns the total number of rows changed.
    pub fn save_all(&mut self, rows: &[QualificationRecord]) -> Result<usize> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let mut affected = 0;
        {
            let mut stmt = tx
                .prepare(
                    "UPDATE qualifications
                     SET faculty = ?1, qualification = ?2, status = ?3, date = ?4
                     WHERE id = ?5",
                )
                .map_err(from_rusqlite)?;

            for row in rows {
                affected += stmt
                    .execute(rusqlite::params![
                        row.faculty,
                        row.qualification,
                        row.status,
                        row.date,
                        row.id
                    ])
                    .map_err(|e| from_rusqlite(e).with_op("save_all").with_record_id(row.id))?;
            }
        }
        tx.commit().map_err(from_rusqlite)?;
        tracing::debug!(rows = rows.len(), affected, "save_all");
        Ok(affected)
    }

    /// Insert many rows in one transaction, returning their ids in order
    pub fn insert_all(&mut self, rows: &[RecordFields]) -> Result<Vec<i64>> {
        seed::insert_all(&mut self.conn, rows)
    }

    /// Import rows from a CSV file, returning their new ids
    pub fn import_csv_file(&mut self, path: &Path) -> Result<Vec<i64>> {
        seed::import_csv_file(path, &mut self.conn)
    }
}

/// Columns are nullable; rows added outside the app may hold NULLs
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<QualificationRecord> {
    Ok(QualificationRecord {
        id: row.get(0)?,
        faculty: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        qualification: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        status: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        date: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
