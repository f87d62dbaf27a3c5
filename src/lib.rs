//! Logistics Schema Library
//!
//! Persistent data model of a logistics back office: accounts, customers,
//! suppliers, catalog, warehouse stock, orders, fleet and shipment tracking,
//! with the repositories that read and write it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod password;
pub mod repositories;
pub mod validation;

pub use errors::{SchemaError, SchemaResult};
pub use validation::FullClean;

use std::sync::Arc;

use db::DbPool;
use repositories::{
    CatalogRepository, CustomerRepository, FleetRepository, InventoryRepository,
    OrderRepository, ShipmentRepository, SupplierRepository, UserRepository,
};

/// Every repository over one shared connection pool
#[derive(Debug)]
pub struct Repositories {
    pub users: UserRepository,
    pub customers: CustomerRepository,
    pub suppliers: SupplierRepository,
    pub catalog: CatalogRepository,
    pub inventory: InventoryRepository,
    pub orders: OrderRepository,
    pub fleet: FleetRepository,
    pub shipments: ShipmentRepository,
}

impl Repositories {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            customers: CustomerRepository::new(db.clone()),
            suppliers: SupplierRepository::new(db.clone()),
            catalog: CatalogRepository::new(db.clone()),
            inventory: InventoryRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            fleet: FleetRepository::new(db.clone()),
            shipments: ShipmentRepository::new(db),
        }
    }
}
