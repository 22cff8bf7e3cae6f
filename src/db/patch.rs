use serde::{Deserialize, Serialize};

// Re-export patch payload/envelope types from the neutral crate-private module.
// This keeps `car_marketplace::db::{MarketplacePatch, CarPatch}` stable,
// and also preserves `car_marketplace::db::patch::MarketplacePatch`.
pub use crate::patches::{CarPatch, DbPatchable, MarketplacePatch, SalePatch, UserPatch};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub login: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCreate {
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCreate {
    pub brand_id: i64,
    pub name: String,
    pub year_start: Option<i64>,
    pub year_end: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarCreate {
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
    pub owners: i64,
    pub drive_trains: String,
    pub wheel: String,
    pub price: f64,
    pub acceleration: f64,
    pub fuel_rate: f64,
    /// Must be unique when present.
    pub vin: Option<String>,
    pub state_number: Option<String>,
}

/// `created_at` is stamped by the DB layer at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub seller_id: i64,
    pub buyer_id: i64,
    pub car_id: i64,
    pub sale_price: Option<f64>,
    pub sale_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCreate {
    pub car_id: i64,
    pub photo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum MarketplaceCreate {
    User(UserCreate),
    Brand(BrandCreate),
    Model(ModelCreate),
    Car(CarCreate),
    Sale(SaleCreate),
    Photo(PhotoCreate),
}
