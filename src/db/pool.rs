//! SQLite connection setup.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{path::PathBuf, str::FromStr, time::Duration};
use tracing::info;

use crate::error::MarketplaceError;

/// Opens a pool for `database_url`, creating the file if missing.
///
/// Foreign-key enforcement is switched on for every connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, MarketplaceError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

    info!(database_url, "database connected");
    Ok(pool)
}

/// File path behind a `sqlite:` URL; `None` for in-memory databases.
pub fn database_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
