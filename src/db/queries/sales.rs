use chrono::Utc;
use sqlx::SqlitePool;

use super::found;
use crate::db::models::{DbSale, EntityKind};
use crate::db::patch::SaleCreate;
use crate::error::MarketplaceError;

pub async fn create_sale(pool: &SqlitePool, c: SaleCreate) -> Result<i64, MarketplaceError> {
    let now = Utc::now();
    let id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO sales (seller_id, buyer_id, car_id, sale_price, sale_date, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING sale_id
        ",
    )
    .bind(c.seller_id)
    .bind(c.buyer_id)
    .bind(c.car_id)
    .bind(c.sale_price)
    .bind(c.sale_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_sale(pool: &SqlitePool, id: i64) -> Result<DbSale, MarketplaceError> {
    let row = sqlx::query_as::<_, DbSale>(
        r"
        SELECT sale_id, seller_id, buyer_id, car_id, sale_price, sale_date, created_at
        FROM sales
        WHERE sale_id = ?
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found(row, EntityKind::Sale, id)
}

/// The car's sale, if it has been sold. `sales.car_id` is unique, so at most one row.
pub async fn sale_of_car(
    pool: &SqlitePool,
    car_id: i64,
) -> Result<Option<DbSale>, MarketplaceError> {
    let row = sqlx::query_as::<_, DbSale>(
        r"
        SELECT sale_id, seller_id, buyer_id, car_id, sale_price, sale_date, created_at
        FROM sales
        WHERE car_id = ?
        ",
    )
    .bind(car_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn sales_sold_by(
    pool: &SqlitePool,
    seller_id: i64,
) -> Result<Vec<DbSale>, MarketplaceError> {
    let rows = sqlx::query_as::<_, DbSale>(
        r"
        SELECT sale_id, seller_id, buyer_id, car_id, sale_price, sale_date, created_at
        FROM sales
        WHERE seller_id = ?
        ORDER BY sale_id
        ",
    )
    .bind(seller_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn sales_bought_by(
    pool: &SqlitePool,
    buyer_id: i64,
) -> Result<Vec<DbSale>, MarketplaceError> {
    let rows = sqlx::query_as::<_, DbSale>(
        r"
        SELECT sale_id, seller_id, buyer_id, car_id, sale_price, sale_date, created_at
        FROM sales
        WHERE buyer_id = ?
        ORDER BY sale_id
        ",
    )
    .bind(buyer_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
