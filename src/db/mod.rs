//! Database module: models, schema and queries for the marketplace store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `queries/`: one function per statement, grouped by table
//! - `actor.rs`: `DbActor` owning the pool, the application-facing API

pub mod actor;
pub mod models;
pub mod patch;
pub mod pool;
pub mod queries;
pub mod schema;

mod patch_impl;

pub use models::{DbBrand, DbCar, DbModel, DbPhoto, DbSale, DbUser, EntityKind};
pub use patch::{
    BrandCreate, CarCreate, CarPatch, DbPatchable, MarketplaceCreate, MarketplacePatch,
    ModelCreate, PhotoCreate, SaleCreate, SalePatch, UserCreate, UserPatch,
};
pub use pool::{connect, database_file_path};
pub use schema::{SQLITE_INIT, apply_schema, list_tables};

pub use actor::{DbActorHandle, spawn};
