//! Repository functions, one per database operation.
//!
//! Every function takes a `&SqlitePool` and returns a `Result<T, MarketplaceError>`.
//! Relationship traversals (a user's cars, a car's sale, ...) are explicit
//! lookups on the foreign-key columns.

pub mod cars;
pub mod catalog;
pub mod photos;
pub mod sales;
pub mod users;

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::EntityKind;
use crate::error::MarketplaceError;

/// Deletes one row by primary key.
///
/// Rows still referenced elsewhere are rejected by the foreign-key constraint
/// (`ForeignKeyViolation`); nothing cascades.
pub async fn delete(
    pool: &SqlitePool,
    entity: EntityKind,
    id: i64,
) -> Result<(), MarketplaceError> {
    let sql = format!(
        "DELETE FROM {table} WHERE {column} = ?",
        table = entity.table(),
        column = entity.id_column()
    );

    let affected = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    debug!(entity = %entity, id, affected, "db delete applied");

    if affected == 0 {
        return Err(MarketplaceError::NotFound { entity, id });
    }
    Ok(())
}

pub(crate) fn found<T>(row: Option<T>, entity: EntityKind, id: i64) -> Result<T, MarketplaceError> {
    row.ok_or(MarketplaceError::NotFound { entity, id })
}
