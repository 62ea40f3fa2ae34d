#![allow(clippy::unwrap_used, clippy::expect_used)]

use qualtrack_core::errors::{ExError, ExErrorKind, QualTrackError};
use qualtrack_core::logging_facility::test_capture::init_test_capture;
use qualtrack_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use qualtrack_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, record_id = 3);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(start_events.len(), 1, "Should have exactly one start event");
    assert_eq!(start_events[0].fields.get("record_id"), Some(&"3".to_string()));
    assert!(start_events[0].fields.contains_key("component"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, row_count = 7);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
    assert_eq!(end_events[0].fields.get("row_count"), Some(&"7".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = QualTrackError::RecordNotFound { id: 9 };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].fields.get("err.code"),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("database is locked");
    log_op_error!(op_name, err, duration_ms = 1, record_id = 2);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = &capture.events_for_op(op_name)[0];
    assert_eq!(
        event.fields.get("err.message"),
        Some(&"database is locked".to_string())
    );
}
