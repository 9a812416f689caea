//! Error handling for paddlex-store
//!
//! The store speaks `ExError`; these helpers build the common cases.

use paddlex_core::errors::{ExError, ExErrorKind, PaddleXError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// An applied migration whose SQL has since changed
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

pub fn already_exists(paddle_id: &str) -> ExError {
    ExError::from(PaddleXError::AlreadyExists {
        paddle_id: paddle_id.to_string(),
    })
    .with_op("create_paddle")
}

pub fn not_found(paddle_id: &str) -> ExError {
    ExError::from(PaddleXError::PaddleNotFound {
        paddle_id: paddle_id.to_string(),
    })
    .with_op("get_paddle")
}

/// The connection mutex was poisoned by a panicking holder
pub fn lock_poisoned(op: &str) -> ExError {
    ExError::from(PaddleXError::Internal {
        message: "database connection lock poisoned".to_string(),
    })
    .with_op(op.to_string())
}

/// The caller's deadline passed before the operation could finish
pub fn deadline_exceeded(op: &str) -> ExError {
    ExError::new(ExErrorKind::Timeout)
        .with_op(op.to_string())
        .with_message("deadline exceeded; nothing was written")
}

/// Create a database error from rusqlite::Error
///
/// A busy or locked database is reported as `Timeout`; it means the
/// busy timeout ran out while another connection held the lock.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = if is_busy(&err) {
        ExErrorKind::Timeout
    } else {
        ExErrorKind::Persistence
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

pub fn is_busy(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    )
}

/// True when `err` is a UNIQUE constraint violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
