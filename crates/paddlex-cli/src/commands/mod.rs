pub mod import;
pub mod list;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use paddlex_store::PaddleStore;

/// Database file shared with the server's default `DB_NAME`
pub const DEFAULT_DB_PATH: &str = "pickleball_db.sqlite3";

#[derive(Debug, Args)]
pub struct DbArgs {
    /// SQLite database file
    #[arg(long = "db", default_value = DEFAULT_DB_PATH)]
    pub path: PathBuf,
}

impl DbArgs {
    pub fn open(&self) -> anyhow::Result<PaddleStore> {
        open_store(&self.path)
    }
}

fn open_store(path: &Path) -> anyhow::Result<PaddleStore> {
    PaddleStore::open(path).with_context(|| format!("failed to open {}", path.display()))
}
