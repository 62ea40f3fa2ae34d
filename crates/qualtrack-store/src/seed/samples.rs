//! Sample records inserted on first run

use crate::errors::Result;
use crate::schema::count_rows;
use crate::seed::importer::insert_all;
use qualtrack_core::RecordFields;
use rusqlite::Connection;

const SAMPLES: [(&str, &str, &str, &str); 7] = [
    (
        "Natural Sciences",
        "Bachelor of Science in Computer Science (NQF Level 7 – 360 credits)",
        "DHET Submitted",
        "2024-07-10",
    ),
    (
        "EMS",
        "Bachelor of Commerce in Accounting (NQF Level 7 – 360 credits)",
        "DHET Approved",
        "2025-03-03",
    ),
    (
        "EMS",
        "Bachelor of Commerce in Economics (NQF Level 7 – 360 credits)",
        "SAQA Registration",
        "2025-04-10",
    ),
    (
        "CHS",
        "Bachelor of Arts Honours in Sport and Exercise Science (NQF Level 8 – 120 credits)",
        "CHE Recommendation Approval",
        "2025-01-31",
    ),
    (
        "Arts",
        "Master of Arts Quality Assurance (NQF Level 9 – 180 credits)",
        "Not Submitted",
        "",
    ),
    (
        "Law",
        "Master of Laws in Human Rights Advocacy Law (NQF Level 9 – 180 credits)",
        "CHE Submitted",
        "2024-11-10",
    ),
    (
        "Arts",
        "Doctor of Philosophy in Anthropology (NQF Level 10 – minimum 360 credits)",
        "SAQA Registration",
        "2024-11-30",
    ),
];

/// The fixed sample set, in insertion order
pub fn sample_records() -> Vec<RecordFields> {
    SAMPLES
        .iter()
        .map(|(faculty, qualification, status, date)| {
            RecordFields::new(*faculty, *qualification, *status, *date)
        })
        .collect()
}

/// Insert the sample set if the table has no rows
///
/// The row count is the only trigger: a table that still holds any row is
/// left alone, even if every sample was deleted. Returns the number
/// of rows inserted.
pub fn seed_if_empty(conn: &mut Connection) -> Result<usize> {
    let existing = count_rows(conn)?;
    if existing > 0 {
        tracing::debug!(existing, "table not empty, skipping seed");
        return Ok(0);
    }

    let ids = insert_all(conn, &sample_records())?;
    tracing::info!(row_count = ids.len(), "seeded sample records");
    Ok(ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::initialize;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn test_seed_empty_table() {
        let mut conn = setup();
        assert_eq!(seed_if_empty(&mut conn).unwrap(), 7);
        assert_eq!(count_rows(&conn).unwrap(), 7);
    }

    #[test]
    fn test_seed_is_noop_when_rows_exist() {
        let mut conn = setup();
        seed_if_empty(&mut conn).unwrap();
        assert_eq!(seed_if_empty(&mut conn).unwrap(), 0);
        assert_eq!(count_rows(&conn).unwrap(), 7);
    }

    #[test]
    fn test_sample_statuses() {
        let statuses: Vec<String> = sample_records().into_iter().map(|f| f.status).collect();
        assert_eq!(statuses[4], "Not Submitted");
        assert_eq!(statuses.iter().filter(|s| *s == "SAQA Registration").count(), 2);
    }
}
