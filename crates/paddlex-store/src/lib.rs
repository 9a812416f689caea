//! PaddleX Store - SQLite persistence for the paddle catalog
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed migrations for the three catalog tables
//! - `SqliteRepo`, the row-level insert and joined-read statements
//! - `PaddleStore`, the shared handle the server and CLI hold

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod store;

pub use errors::Result;
pub use store::PaddleStore;
