pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod utils;

mod patches;

pub use bootstrap::{SchemaReport, initialize};
pub use error::MarketplaceError;
