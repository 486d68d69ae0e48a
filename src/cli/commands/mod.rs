pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod preview;
pub mod profile;
pub mod settings;
pub mod summary;

use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}
