use sqlx::SqlitePool;

use super::found;
use crate::db::models::{DbPhoto, EntityKind};
use crate::db::patch::PhotoCreate;
use crate::error::MarketplaceError;

pub async fn create_photo(pool: &SqlitePool, c: PhotoCreate) -> Result<i64, MarketplaceError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO photos (car_id, photo_url) VALUES (?, ?) RETURNING photo_id",
    )
    .bind(c.car_id)
    .bind(c.photo_url)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_photo(pool: &SqlitePool, id: i64) -> Result<DbPhoto, MarketplaceError> {
    let row = sqlx::query_as::<_, DbPhoto>(
        "SELECT photo_id, car_id, photo_url FROM photos WHERE photo_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found(row, EntityKind::Photo, id)
}

pub async fn photos_of_car(
    pool: &SqlitePool,
    car_id: i64,
) -> Result<Vec<DbPhoto>, MarketplaceError> {
    let rows = sqlx::query_as::<_, DbPhoto>(
        "SELECT photo_id, car_id, photo_url FROM photos WHERE car_id = ? ORDER BY photo_id",
    )
    .bind(car_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
