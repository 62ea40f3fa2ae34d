//! CSV export and import
//!
//! Export writes the header `id,faculty,qualification,status,date` followed by
//! one line per record. Import reads the same layout; columns are matched by
//! header name so column order in hand-edited files does not matter.

use std::io::Read;

use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::{ExError, ExErrorKind, QualTrackError, Result};
use crate::model::{QualificationRecord, RecordFields};

/// Column header of exported CSV files
pub const CSV_HEADER: [&str; 5] = ["id", "faculty", "qualification", "status", "date"];

/// Serialize records to UTF-8 CSV with a header row
///
/// The header is written even when `rows` is empty.
pub fn to_csv(rows: &[QualificationRecord]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_error)?;

    for row in rows {
        let id = row.id.to_string();
        writer
            .write_record([
                id.as_str(),
                row.faculty.as_str(),
                row.qualification.as_str(),
                row.status.as_str(),
                row.date.as_str(),
            ])
            .map_err(csv_error)?;
    }

    writer.into_inner().map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("csv_export")
            .with_message(e.to_string())
    })
}

#[derive(Debug, Deserialize)]
struct CsvRecordLine {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    faculty: String,
    #[serde(default)]
    qualification: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    date: String,
}

/// Parse exported CSV back into records; every row must carry an `id`
pub fn from_csv<R: Read>(reader: R) -> Result<Vec<QualificationRecord>> {
    read_rows::<CsvRecordLine, R>(reader, &CSV_HEADER)?
        .into_iter()
        .map(|(line, row)| match row.id {
            Some(id) => Ok(QualificationRecord::new(
                id,
                RecordFields {
                    faculty: row.faculty,
                    qualification: row.qualification,
                    status: row.status,
                    date: row.date,
                },
            )),
            None => Err(QualTrackError::MalformedCsv {
                line,
                reason: "missing id".to_string(),
            }
            .into()),
        })
        .collect()
}

/// Parse CSV into insertable fields
///
/// An `id` column, if present, is never read, so it may hold anything.
pub fn fields_from_csv<R: Read>(reader: R) -> Result<Vec<RecordFields>> {
    Ok(read_rows::<RecordFields, R>(reader, &CSV_HEADER[1..])?
        .into_iter()
        .map(|(_, fields)| fields)
        .collect())
}

/// Deserialize every data row, paired with the line it starts on
fn read_rows<T, R>(reader: R, required: &[&str]) -> Result<Vec<(u64, T)>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(QualTrackError::MissingCsvColumn {
                column: column.to_string(),
            }
            .into());
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| malformed(e.position().map(|p| p.line()), &e))?;
        let line = record.position().map(|p| p.line());
        let row = record
            .deserialize::<T>(Some(&headers))
            .map_err(|e| malformed(line, &e))?;
        rows.push((line.unwrap_or(0), row));
    }
    Ok(rows)
}

fn malformed(line: Option<u64>, err: &csv::Error) -> ExError {
    QualTrackError::MalformedCsv {
        line: line.unwrap_or(0),
        reason: err.to_string(),
    }
    .into()
}

/// Convert a csv crate error into the error facility
pub fn csv_error(err: csv::Error) -> ExError {
    let kind = if err.is_io_error() {
        ExErrorKind::Io
    } else {
        ExErrorKind::Serialization
    };
    ExError::new(kind).with_op("csv").with_message(err.to_string())
}
