//! Migration framework
//!
//! Embedded SQL applied once each, in order, with a SHA-256 checksum
//! recorded in `schema_version`.

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, apply_migrations};
