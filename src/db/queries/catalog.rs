//! Brand and model reference data.

use sqlx::SqlitePool;

use super::found;
use crate::db::models::{DbBrand, DbModel, EntityKind};
use crate::db::patch::{BrandCreate, ModelCreate};
use crate::error::MarketplaceError;

pub async fn create_brand(pool: &SqlitePool, c: BrandCreate) -> Result<i64, MarketplaceError> {
    let id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO brands (name, country)
        VALUES (?, ?)
        RETURNING brand_id
        ",
    )
    .bind(c.name)
    .bind(c.country)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_brand(pool: &SqlitePool, id: i64) -> Result<DbBrand, MarketplaceError> {
    let row = sqlx::query_as::<_, DbBrand>(
        "SELECT brand_id, name, country FROM brands WHERE brand_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found(row, EntityKind::Brand, id)
}

pub async fn find_brand_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<DbBrand>, MarketplaceError> {
    let row =
        sqlx::query_as::<_, DbBrand>("SELECT brand_id, name, country FROM brands WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?;

    Ok(row)
}

pub async fn create_model(pool: &SqlitePool, c: ModelCreate) -> Result<i64, MarketplaceError> {
    let id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO models (brand_id, name, year_start, year_end)
        VALUES (?, ?, ?, ?)
        RETURNING model_id
        ",
    )
    .bind(c.brand_id)
    .bind(c.name)
    .bind(c.year_start)
    .bind(c.year_end)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_model(pool: &SqlitePool, id: i64) -> Result<DbModel, MarketplaceError> {
    let row = sqlx::query_as::<_, DbModel>(
        r"
        SELECT model_id, brand_id, name, year_start, year_end
        FROM models
        WHERE model_id = ?
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found(row, EntityKind::Model, id)
}

pub async fn models_of_brand(
    pool: &SqlitePool,
    brand_id: i64,
) -> Result<Vec<DbModel>, MarketplaceError> {
    let rows = sqlx::query_as::<_, DbModel>(
        r"
        SELECT model_id, brand_id, name, year_start, year_end
        FROM models
        WHERE brand_id = ?
        ORDER BY model_id
        ",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
