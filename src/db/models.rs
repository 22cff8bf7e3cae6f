use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Tables addressable by primary key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Brand,
    Model,
    Car,
    Sale,
    Photo,
}

impl EntityKind {
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Brand => "brands",
            EntityKind::Model => "models",
            EntityKind::Car => "cars",
            EntityKind::Sale => "sales",
            EntityKind::Photo => "photos",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            EntityKind::User => "user_id",
            EntityKind::Brand => "brand_id",
            EntityKind::Model => "model_id",
            EntityKind::Car => "car_id",
            EntityKind::Sale => "sale_id",
            EntityKind::Photo => "photo_id",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "user",
            EntityKind::Brand => "brand",
            EntityKind::Model => "model",
            EntityKind::Car => "car",
            EntityKind::Sale => "sale",
            EntityKind::Photo => "photo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub user_id: i64,
    pub login: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbBrand {
    pub brand_id: i64,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbModel {
    pub model_id: i64,
    pub brand_id: i64,
    pub name: String,
    /// First production year, if known.
    pub year_start: Option<i64>,
    pub year_end: Option<i64>,
}

/// A listing. `brand_id` and `model_id` are independent references; nothing
/// checks that the model belongs to the brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCar {
    pub car_id: i64,
    /// Owner.
    pub user_id: i64,
    pub brand_id: i64,
    pub model_id: i64,
    pub description: Option<String>,
    pub body_type: String,
    pub color: String,
    pub engine_displacement: f64,
    pub engine_power: f64,
    pub fuel_type: String,
    pub mileage: i64,
    pub number_of_doors: Option<i64>,
    pub year: i64,
    pub vehicle_transmission: String,
    /// Number of previous owners.
    pub owners: i64,
    pub drive_trains: String,
    /// Steering-wheel side.
    pub wheel: String,
    pub price: f64,
    pub acceleration: f64,
    pub fuel_rate: f64,
    pub vin: Option<String>,
    /// State registration number.
    pub state_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSale {
    pub sale_id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    pub car_id: i64,
    pub sale_price: Option<f64>,
    pub sale_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbPhoto {
    pub photo_id: i64,
    pub car_id: i64,
    pub photo_url: String,
}
