use serde::{Deserialize, Serialize};

use super::status::StatusKind;

/// One row of the `qualifications` table
///
/// `id` is assigned by the store on insertion and never changes; the other
/// four fields are free text and are overwritten together on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationRecord {
    /// Store-assigned primary key
    pub id: i64,

    /// Faculty label (e.g. "EMS", "Law")
    pub faculty: String,

    /// Qualification description, with NQF level and credits embedded as text
    pub qualification: String,

    /// Approval status label (e.g. "DHET Submitted", "Not Submitted")
    pub status: String,

    /// Status date, usually `YYYY-MM-DD`, may be empty
    pub date: String,
}

impl QualificationRecord {
    /// Build a record from an id and its mutable fields
    pub fn new(id: i64, fields: RecordFields) -> Self {
        Self {
            id,
            faculty: fields.faculty,
            qualification: fields.qualification,
            status: fields.status,
            date: fields.date,
        }
    }

    /// The mutable part of this record
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            faculty: self.faculty.clone(),
            qualification: self.qualification.clone(),
            status: self.status.clone(),
            date: self.date.clone(),
        }
    }

    /// Classify the free-text status
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(&self.status)
    }
}

/// The four mutable fields of a record, used for inserts and full-row updates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFields {
    pub faculty: String,
    pub qualification: String,
    pub status: String,
    pub date: String,
}

impl RecordFields {
    pub fn new(
        faculty: impl Into<String>,
        qualification: impl Into<String>,
        status: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            faculty: faculty.into(),
            qualification: qualification.into(),
            status: status.into(),
            date: date.into(),
        }
    }

    /// True when every field is empty after trimming (an untouched add-row form)
    pub fn is_blank(&self) -> bool {
        [&self.faculty, &self.qualification, &self.status, &self.date]
            .iter()
            .all(|f| f.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_fields_are_inverse() {
        let fields = RecordFields::new("Law", "LLM", "CHE Submitted", "2024-11-10");
        let record = QualificationRecord::new(6, fields.clone());

        assert_eq!(record.id, 6);
        assert_eq!(record.fields(), fields);
    }

    #[test]
    fn test_is_blank() {
        assert!(RecordFields::default().is_blank());
        assert!(RecordFields::new(" ", "", "\t", "").is_blank());
        assert!(!RecordFields::new("", "", "", "2024-01-01").is_blank());
    }

    #[test]
    fn test_record_fields_deserialize_with_missing_keys() {
        let fields: RecordFields = serde_json::from_str(r#"{"status":"DHET Approved"}"#).unwrap();
        assert_eq!(fields.status, "DHET Approved");
        assert!(fields.faculty.is_empty());
    }
}
