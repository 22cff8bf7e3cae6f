//! Startup routine: create the schema once and report on the database file.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::db::{apply_schema, connect, database_file_path, list_tables};
use crate::error::MarketplaceError;
use crate::utils::logging::with_pretty_json_debug;

/// Outcome of [`initialize`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SchemaReport {
    pub database_url: String,
    /// Tables present after the schema was applied.
    pub tables: Vec<String>,
    /// `None` for in-memory databases.
    pub database_file: Option<PathBuf>,
    /// Size in bytes; `None` when the file does not exist.
    pub file_size: Option<u64>,
}

impl SchemaReport {
    pub fn file_exists(&self) -> bool {
        self.file_size.is_some()
    }
}

/// Connects, creates all tables if absent, closes the pool and inspects the database file.
pub async fn initialize(database_url: &str) -> Result<SchemaReport, MarketplaceError> {
    let pool = connect(database_url).await?;

    apply_schema(&pool).await?;
    let tables = list_tables(&pool).await?;
    info!(tables = tables.len(), "schema applied");

    // Closing checkpoints the WAL, so the size below reflects the created tables.
    pool.close().await;
    debug!("database pool closed");

    let database_file = database_file_path(database_url);
    let file_size = match &database_file {
        Some(path) => match tokio::fs::metadata(path).await {
            Ok(meta) => Some(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "database file not found after schema creation");
                None
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };

    let report = SchemaReport {
        database_url: database_url.to_string(),
        tables,
        database_file,
        file_size,
    };
    with_pretty_json_debug(&report, |json| debug!("schema report:\n{json}"));

    Ok(report)
}
