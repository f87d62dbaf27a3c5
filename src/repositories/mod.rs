use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::errors::SchemaError;

pub mod catalog_repository;
pub mod customer_repository;
pub mod fleet_repository;
pub mod inventory_repository;
pub mod order_repository;
pub mod shipment_repository;
pub mod supplier_repository;
pub mod user_repository;

pub use catalog_repository::CatalogRepository;
pub use customer_repository::CustomerRepository;
pub use fleet_repository::FleetRepository;
pub use inventory_repository::InventoryRepository;
pub use order_repository::OrderRepository;
pub use shipment_repository::ShipmentRepository;
pub use supplier_repository::SupplierRepository;
pub use user_repository::UserRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Maps the error of an update by primary key; a missing row becomes
/// `NotFound` instead of a bare engine error.
pub(crate) fn update_error(entity: &str, key: impl std::fmt::Display, err: DbErr) -> SchemaError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => SchemaError::not_found(entity, key),
        other => SchemaError::from_db(other),
    }
}

/// Turns a zero-row delete into `NotFound`.
pub(crate) fn ensure_deleted(
    rows_affected: u64,
    entity: &str,
    key: impl std::fmt::Display,
) -> Result<(), SchemaError> {
    if rows_affected == 0 {
        Err(SchemaError::not_found(entity, key))
    } else {
        Ok(())
    }
}
