//! SQLite repository for paddles

#![allow(clippy::result_large_err)]

use std::time::Instant;

use crate::errors::{
    already_exists, deadline_exceeded, from_rusqlite, is_unique_violation, Result,
};
use crate::repo::hydration::{paddle_from_row, PADDLE_SELECT};
use paddlex_core::model::{Paddle, Performance, Specs};
use rusqlite::{Connection, OptionalExtension, Transaction};

pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert all three rows for `paddle` in one transaction
    ///
    /// Returns the database key of the new `paddles` row. Any failure rolls
    /// the whole paddle back.
    ///
    /// # Errors
    /// * `AlreadyExists` - the business identifier is already stored
    /// * `Persistence` - any other SQLite failure, including CHECK violations
    pub fn create(conn: &mut Connection, paddle: &Paddle) -> Result<i64> {
        Self::create_tx(conn, paddle, None)
    }

    /// Like [`SqliteRepo::create`], but never commits once `deadline` has
    /// passed
    ///
    /// # Errors
    /// * `Timeout` - the deadline passed before commit; the transaction is
    ///   rolled back
    pub fn create_until(conn: &mut Connection, paddle: &Paddle, deadline: Instant) -> Result<i64> {
        Self::create_tx(conn, paddle, Some(deadline))
    }

    fn create_tx(conn: &mut Connection, paddle: &Paddle, deadline: Option<Instant>) -> Result<i64> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let paddle_row_id = Self::insert_paddle_tx(&tx, paddle)?;
        let specs_row_id = Self::insert_specs_tx(&tx, paddle_row_id, &paddle.specs)?;
        Self::insert_performance_tx(&tx, specs_row_id, &paddle.performance)?;

        // Dropping `tx` here rolls all three inserts back.
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(deadline_exceeded("create_paddle"));
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(paddle_row_id)
    }

    pub fn insert_paddle_tx(tx: &Transaction, paddle: &Paddle) -> Result<i64> {
        tx.execute(
            "INSERT INTO paddles (paddle_id, brand, model, serial_code, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                paddle.id,
                paddle.metadata.brand,
                paddle.metadata.model,
                paddle.metadata.serial_code,
                chrono::Utc::now().timestamp(),
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                already_exists(&paddle.id)
            } else {
                from_rusqlite(e)
            }
        })?;

        Ok(tx.last_insert_rowid())
    }

    pub fn insert_specs_tx(tx: &Transaction, paddle_row_id: i64, specs: &Specs) -> Result<i64> {
        tx.execute(
            "INSERT INTO paddle_specs (paddle_id, shape, surface, average_weight, core,
                paddle_length, paddle_width, grip_length, grip_type, grip_circumference, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                paddle_row_id,
                specs.shape.as_str(),
                specs.surface,
                specs.average_weight,
                specs.core,
                specs.paddle_length,
                specs.paddle_width,
                specs.grip_length,
                specs.grip_type,
                specs.grip_circumference,
                chrono::Utc::now().timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(tx.last_insert_rowid())
    }

    pub fn insert_performance_tx(
        tx: &Transaction,
        specs_row_id: i64,
        performance: &Performance,
    ) -> Result<i64> {
        tx.execute(
            "INSERT INTO paddle_performance (paddle_spec_id, power, pop, spin,
                twist_weight, swing_weight, balance_point, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                specs_row_id,
                performance.power,
                performance.pop,
                performance.spin,
                performance.twist_weight,
                performance.swing_weight,
                performance.balance_point,
                chrono::Utc::now().timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(tx.last_insert_rowid())
    }

    /// Load one paddle by business identifier
    pub fn get_by_id(conn: &Connection, paddle_id: &str) -> Result<Option<Paddle>> {
        let sql = format!("{PADDLE_SELECT} WHERE p.paddle_id = ?1");
        conn.query_row(&sql, [paddle_id], paddle_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// All paddles, ordered by specs key
    pub fn list_paddles(conn: &Connection) -> Result<Vec<Paddle>> {
        let sql = format!("{PADDLE_SELECT} ORDER BY s.id");
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let paddles = stmt
            .query_map([], paddle_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(paddles)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM paddles", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
