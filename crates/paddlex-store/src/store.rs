//! Shared storage handle

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use paddlex_core::errors::ExError;
use paddlex_core::model::{Paddle, PaddleSummary};
use paddlex_core::rules::validation::validate_paddle_id;
use paddlex_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;

use crate::db;
use crate::errors::{deadline_exceeded, from_rusqlite, lock_poisoned, not_found, Result};
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;

/// One SQLite connection behind a mutex
///
/// Constructed once at startup and shared (usually through an `Arc`) by
/// everything that reads or writes paddles.
pub struct PaddleStore {
    conn: Mutex<Connection>,
}

impl PaddleStore {
    /// Wrap an existing connection as-is. No configuration or migrations.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Migrated in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Persist a validated paddle; returns its database key
    ///
    /// # Errors
    /// * `AlreadyExists` - the business identifier is taken
    /// * `Persistence` - the insert failed; nothing was written
    pub fn create(&self, paddle: &Paddle) -> Result<i64> {
        let op = "create_paddle";
        let start = Instant::now();
        log_op_start!(op, paddle_id = paddle.id.as_str());

        let result = self
            .lock(op)
            .and_then(|mut conn| SqliteRepo::create(&mut conn, paddle));
        finish(op, start, result)
    }

    /// Persist a validated paddle, giving up without writing anything once
    /// `deadline` passes
    ///
    /// Lock waits are bounded by the time left, and the commit is skipped if
    /// the deadline has gone by the time the rows are staged.
    ///
    /// # Errors
    /// * `Timeout` - the deadline passed; nothing was written
    /// * `AlreadyExists` - the business identifier is taken
    /// * `Persistence` - the insert failed; nothing was written
    pub fn create_until(&self, paddle: &Paddle, deadline: Instant) -> Result<i64> {
        let op = "create_paddle";
        let start = Instant::now();
        log_op_start!(op, paddle_id = paddle.id.as_str());

        let result = self.lock(op).and_then(|mut conn| {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(deadline_exceeded(op));
            }
            with_busy_timeout(&mut conn, remaining, |conn| {
                SqliteRepo::create_until(conn, paddle, deadline)
            })
        });
        finish(op, start, result)
    }

    /// # Errors
    /// * `InvalidInput` - blank identifier
    /// * `NotFound` - no paddle carries `paddle_id`
    pub fn get_by_id(&self, paddle_id: &str) -> Result<Paddle> {
        let op = "get_paddle";
        let start = Instant::now();
        log_op_start!(op, paddle_id = paddle_id);

        let result = validate_paddle_id(paddle_id)
            .map_err(ExError::from)
            .and_then(|()| self.lock(op))
            .and_then(|conn| SqliteRepo::get_by_id(&conn, paddle_id))
            .and_then(|found| found.ok_or_else(|| not_found(paddle_id)));
        finish(op, start, result)
    }

    /// Summaries of every paddle, ordered by specs key. Empty store gives an
    /// empty vector.
    pub fn list_all(&self) -> Result<Vec<PaddleSummary>> {
        self.list_paddles()
            .map(|paddles| paddles.into_iter().map(PaddleSummary::from).collect())
    }

    pub fn list_paddles(&self) -> Result<Vec<Paddle>> {
        let op = "list_paddles";
        let start = Instant::now();
        log_op_start!(op);

        let result = self
            .lock(op)
            .and_then(|conn| SqliteRepo::list_paddles(&conn));
        finish(op, start, result)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.lock("count_paddles")?;
        SqliteRepo::count(&conn)
    }

    fn lock(&self, op: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| lock_poisoned(op))
    }
}

/// Run `f` with a shorter busy timeout, restoring the default afterwards
fn with_busy_timeout<T>(
    conn: &mut Connection,
    timeout: Duration,
    f: impl FnOnce(&mut Connection) -> Result<T>,
) -> Result<T> {
    conn.busy_timeout(timeout).map_err(from_rusqlite)?;
    let result = f(conn);
    conn.busy_timeout(db::BUSY_TIMEOUT).map_err(from_rusqlite)?;
    result
}

fn finish<T>(op: &str, start: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}
