//! Row-level access to the three catalog tables

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
