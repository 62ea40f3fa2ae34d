//! Table schema
//!
//! A single flat table; `CREATE TABLE IF NOT EXISTS` makes initialization
//! safe to run on every start.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Name of the only table
pub const TABLE: &str = "qualifications";

const CREATE_QUALIFICATIONS: &str = "CREATE TABLE IF NOT EXISTS qualifications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    faculty TEXT,
    qualification TEXT,
    status TEXT,
    date TEXT
)";

/// Ensure the `qualifications` table exists
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_QUALIFICATIONS, [])
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Number of rows currently stored
pub fn count_rows(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM qualifications", [], |row| row.get(0))
        .map_err(from_rusqlite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        assert_eq!(count_rows(&conn).unwrap(), 0);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        initialize(&conn).unwrap();
        initialize(&conn).unwrap();
    }

    #[test]
    fn test_count_without_table_fails() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(count_rows(&conn).is_err());
    }
}
