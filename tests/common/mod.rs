#![allow(dead_code)]

use car_marketplace::db::{BrandCreate, CarCreate, ModelCreate, UserCreate};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs;

pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        SystemTime::now().hash(&mut hasher);
        tag.hash(&mut hasher);
        let db_file_name = format!("test_market_{tag}_{}.sqlite", hasher.finish());
        let path = std::env::temp_dir().join(db_file_name);
        let url = format!("sqlite:{}", path.to_str().unwrap());
        Self { path, url }
    }

    pub async fn cleanup(self) {
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = fs::remove_file(&wal_path).await;
        let _ = fs::remove_file(&shm_path).await;
        let _ = fs::remove_file(&self.path).await;
    }
}

pub fn user(login: &str) -> UserCreate {
    UserCreate {
        login: login.to_string(),
        password_hash: "argon2id$test".to_string(),
        first_name: "Ivan".to_string(),
        last_name: Some("Petrov".to_string()),
        phone: "+7 900 000-00-00".to_string(),
        avatar_url: None,
    }
}

pub fn brand(name: &str) -> BrandCreate {
    BrandCreate {
        name: name.to_string(),
        country: Some("Japan".to_string()),
    }
}

pub fn model(brand_id: i64, name: &str) -> ModelCreate {
    ModelCreate {
        brand_id,
        name: name.to_string(),
        year_start: Some(2018),
        year_end: None,
    }
}

pub fn car(user_id: i64, brand_id: i64, model_id: i64, vin: Option<&str>) -> CarCreate {
    CarCreate {
        user_id,
        brand_id,
        model_id,
        description: Some("One owner, garage kept".to_string()),
        body_type: "sedan".to_string(),
        color: "white".to_string(),
        engine_displacement: 2.5,
        engine_power: 181.0,
        fuel_type: "petrol".to_string(),
        mileage: 42_000,
        number_of_doors: Some(4),
        year: 2020,
        vehicle_transmission: "automatic".to_string(),
        owners: 1,
        drive_trains: "fwd".to_string(),
        wheel: "left".to_string(),
        price: 2_350_000.5,
        acceleration: 8.7,
        fuel_rate: 7.2,
        vin: vin.map(str::to_string),
        state_number: None,
    }
}
