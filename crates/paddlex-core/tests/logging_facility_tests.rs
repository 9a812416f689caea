#![allow(clippy::unwrap_used, clippy::expect_used)]

use paddlex_core::errors::{ExError, ExErrorKind, PaddleXError};
use paddlex_core::logging_facility::test_capture::init_test_capture;
use paddlex_core::{log_op_end, log_op_error, log_op_start};
use paddlex_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)
            && e.event.as_deref() == Some(EVENT_START)),
        1
    );
}

#[test]
fn test_log_op_start_with_paddle_id() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_2";

    log_op_start!(op_name, paddle_id = "JOOLA-PERSEUS");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].paddle_id(), Some("JOOLA-PERSEUS"));
    assert!(events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_3";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].duration_ms(), Some(42));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = PaddleXError::PaddleNotFound {
        paddle_id: "X-1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.err_code(), Some("ERR_NOT_FOUND"));
    assert_eq!(event.err_kind(), Some("NotFound"));
    assert_eq!(event.level, tracing::Level::ERROR);
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_5";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 7, paddle_id = "X-2");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].err_code(), Some("ERR_PERSISTENCE"));
    assert_eq!(events[0].paddle_id(), Some("X-2"));
}

#[test]
fn test_boundary_single_start_and_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_6";

    log_op_start!(op_name, paddle_id = "X-3");
    log_op_end!(op_name, duration_ms = 1);

    let events = capture.events_for(op_name);
    let kinds: Vec<_> = events.iter().map(|e| e.event.clone().unwrap()).collect();
    assert_eq!(kinds, vec![EVENT_START.to_string(), EVENT_END.to_string()]);
}
