use sqlx::SqlitePool;

use super::found;
use crate::db::models::{DbCar, EntityKind};
use crate::db::patch::CarCreate;
use crate::error::MarketplaceError;

const CAR_SELECT: &str = r"
    SELECT car_id, user_id, brand_id, model_id, description, body_type, color,
        engine_displacement, engine_power, fuel_type, mileage, number_of_doors, year,
        vehicle_transmission, owners, drive_trains, wheel, price, acceleration, fuel_rate,
        vin, state_number
    FROM cars";

pub async fn create_car(pool: &SqlitePool, c: CarCreate) -> Result<i64, MarketplaceError> {
    let id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO cars (
            user_id, brand_id, model_id, description, body_type, color,
            engine_displacement, engine_power, fuel_type, mileage, number_of_doors, year,
            vehicle_transmission, owners, drive_trains, wheel, price, acceleration, fuel_rate,
            vin, state_number
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING car_id
        ",
    )
    .bind(c.user_id)
    .bind(c.brand_id)
    .bind(c.model_id)
    .bind(c.description)
    .bind(c.body_type)
    .bind(c.color)
    .bind(c.engine_displacement)
    .bind(c.engine_power)
    .bind(c.fuel_type)
    .bind(c.mileage)
    .bind(c.number_of_doors)
    .bind(c.year)
    .bind(c.vehicle_transmission)
    .bind(c.owners)
    .bind(c.drive_trains)
    .bind(c.wheel)
    .bind(c.price)
    .bind(c.acceleration)
    .bind(c.fuel_rate)
    .bind(c.vin)
    .bind(c.state_number)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_car(pool: &SqlitePool, id: i64) -> Result<DbCar, MarketplaceError> {
    let sql = format!("{CAR_SELECT} WHERE car_id = ?");
    let row = sqlx::query_as::<_, DbCar>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    found(row, EntityKind::Car, id)
}

pub async fn find_car_by_vin(
    pool: &SqlitePool,
    vin: &str,
) -> Result<Option<DbCar>, MarketplaceError> {
    let sql = format!("{CAR_SELECT} WHERE vin = ?");
    let row = sqlx::query_as::<_, DbCar>(&sql)
        .bind(vin)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn cars_of_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<DbCar>, MarketplaceError> {
    list_by(pool, "user_id", user_id).await
}

pub async fn cars_of_brand(
    pool: &SqlitePool,
    brand_id: i64,
) -> Result<Vec<DbCar>, MarketplaceError> {
    list_by(pool, "brand_id", brand_id).await
}

pub async fn cars_of_model(
    pool: &SqlitePool,
    model_id: i64,
) -> Result<Vec<DbCar>, MarketplaceError> {
    list_by(pool, "model_id", model_id).await
}

/// `column` is always one of the fixed foreign-key names above.
async fn list_by(
    pool: &SqlitePool,
    column: &'static str,
    id: i64,
) -> Result<Vec<DbCar>, MarketplaceError> {
    let sql = format!("{CAR_SELECT} WHERE {column} = ? ORDER BY car_id");
    let rows = sqlx::query_as::<_, DbCar>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
