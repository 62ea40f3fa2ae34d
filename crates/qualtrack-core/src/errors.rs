use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, record id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    record_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record ID context
    pub fn with_record_id(mut self, id: i64) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(record_id) = self.record_id {
            write!(f, " (record_id: {})", record_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the tracker before they reach the error facility
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QualTrackError {
    /// No record with this id exists
    #[error("Record not found: {id}")]
    RecordNotFound { id: i64 },

    /// A record id could not be parsed from user input
    #[error("Invalid record id: {raw:?}")]
    InvalidRecordId { raw: String },

    /// A required CSV column is missing from the header row
    #[error("CSV header is missing column '{column}'")]
    MissingCsvColumn { column: String },

    /// A CSV data row could not be read
    #[error("Malformed CSV at line {line}: {reason}")]
    MalformedCsv { line: u64, reason: String },
}

impl From<QualTrackError> for ExError {
    fn from(err: QualTrackError) -> Self {
        match err {
            QualTrackError::RecordNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_record_id(id)
                .with_message("Record not found"),

            QualTrackError::InvalidRecordId { ref raw } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_record_id")
                .with_message(format!("Invalid record id: {:?}", raw)),

            QualTrackError::MissingCsvColumn { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("csv_import")
                .with_message(err.to_string()),

            QualTrackError::MalformedCsv { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("csv_import")
                .with_message(err.to_string()),
        }
    }
}

/// Parse a record id from user input (form field, path segment, CLI arg)
pub fn parse_record_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| {
            QualTrackError::InvalidRecordId {
                raw: raw.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(ExErrorKind::Persistence.code(), "ERR_PERSISTENCE");
        assert_eq!(ExErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("update_row")
            .with_record_id(7)
            .with_message("disk I/O error");

        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "[ERR_PERSISTENCE] in operation 'update_row': disk I/O error (record_id: 7)"
        );
    }

    #[test]
    fn test_record_not_found_converts_to_not_found() {
        let err: ExError = QualTrackError::RecordNotFound { id: 42 }.into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.record_id(), Some(42));
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id(" 5 ").unwrap(), 5);

        let err = parse_record_id("five").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
