//! Crate-private patch types shared across the DB layer.
//!
//! The `db` module re-exports these so external paths remain stable
//! (e.g. `car_marketplace::db::MarketplacePatch`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Abstraction for applying a patch payload/envelope to the database.
#[async_trait]
pub trait DbPatchable {
    async fn apply_patch(&self, pool: &SqlitePool)
    -> Result<(), crate::error::MarketplaceError>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    /// `None` => do not change; `Some(v)` => update
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarPatch {
    /// New owner. `None` => do not change; `Some(v)` => update
    pub user_id: Option<i64>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i64>,
    pub owners: Option<i64>,
    pub price: Option<f64>,
    /// `None` => do not change; `Some(v)` => update
    pub vin: Option<String>,
    pub state_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalePatch {
    /// `None` => do not change; `Some(v)` => update
    pub sale_price: Option<f64>,
    pub sale_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum MarketplacePatch {
    User { id: i64, patch: UserPatch },
    Car { id: i64, patch: CarPatch },
    Sale { id: i64, patch: SalePatch },
}

impl MarketplacePatch {
    pub fn id(&self) -> i64 {
        match self {
            MarketplacePatch::User { id, .. }
            | MarketplacePatch::Car { id, .. }
            | MarketplacePatch::Sale { id, .. } => *id,
        }
    }
}
