//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

use sqlx::SqlitePool;

use crate::error::MarketplaceError;

/// SQLite schema includes:
/// - `users` table (marketplace accounts, unique login)
/// - `brands` / `models` tables (vehicle catalog)
/// - `cars` table (listings owned by a user)
/// - `sales` table (at most one sale per car)
/// - `photos` table (photo URLs attached to a car)
///
/// Foreign keys use the default NO ACTION policy. Decimal amounts are `REAL`.
pub const SQLITE_INIT: &str = r"
-- ---------------------------------------------------------------------------
-- Users
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    login TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NULL,
    phone TEXT NOT NULL,
    avatar_url TEXT NULL
);

-- ---------------------------------------------------------------------------
-- Catalog: brands and models
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS brands (
    brand_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    country TEXT NULL
);

CREATE TABLE IF NOT EXISTS models (
    model_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    brand_id INTEGER NOT NULL REFERENCES brands(brand_id),
    name TEXT NOT NULL,
    year_start INTEGER NULL,
    year_end INTEGER NULL
);

CREATE INDEX IF NOT EXISTS idx_models_brand_id ON models(brand_id);

-- ---------------------------------------------------------------------------
-- Listings
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS cars (
    car_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(user_id),
    brand_id INTEGER NOT NULL REFERENCES brands(brand_id),
    model_id INTEGER NOT NULL REFERENCES models(model_id),
    description TEXT NULL,
    body_type TEXT NOT NULL,
    color TEXT NOT NULL,
    engine_displacement REAL NOT NULL,
    engine_power REAL NOT NULL,
    fuel_type TEXT NOT NULL,
    mileage INTEGER NOT NULL,
    number_of_doors INTEGER NULL,
    year INTEGER NOT NULL,
    vehicle_transmission TEXT NOT NULL,
    owners INTEGER NOT NULL,
    drive_trains TEXT NOT NULL,
    wheel TEXT NOT NULL,
    price REAL NOT NULL,
    acceleration REAL NOT NULL,
    fuel_rate REAL NOT NULL,
    vin TEXT NULL UNIQUE, -- several NULLs allowed
    state_number TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_cars_user_id ON cars(user_id);
CREATE INDEX IF NOT EXISTS idx_cars_brand_id ON cars(brand_id);
CREATE INDEX IF NOT EXISTS idx_cars_model_id ON cars(model_id);

-- ---------------------------------------------------------------------------
-- Sales (one per car)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS sales (
    sale_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    seller_id INTEGER NOT NULL REFERENCES users(user_id),
    buyer_id INTEGER NOT NULL REFERENCES users(user_id),
    car_id INTEGER NOT NULL UNIQUE REFERENCES cars(car_id),
    sale_price REAL NULL,
    sale_date TEXT NULL, -- RFC3339
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_sales_seller_id ON sales(seller_id);
CREATE INDEX IF NOT EXISTS idx_sales_buyer_id ON sales(buyer_id);

-- ---------------------------------------------------------------------------
-- Photos
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS photos (
    photo_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    car_id INTEGER NOT NULL REFERENCES cars(car_id),
    photo_url TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_photos_car_id ON photos(car_id);
";

/// Executes every statement of [`SQLITE_INIT`]. Safe to run against an existing database.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), MarketplaceError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// User table names, sorted. Excludes SQLite internals such as `sqlite_sequence`.
pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, MarketplaceError> {
    let tables = sqlx::query_scalar::<_, String>(
        r"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ORDER BY name
        ",
    )
    .fetch_all(pool)
    .await?;

    Ok(tables)
}
