mod marketplace;

pub use marketplace::MarketplaceError;

pub trait IsConstraintViolation {
    fn is_constraint_violation(&self) -> bool;
}
