pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users_table;
mod m20240601_000002_create_customers_table;
mod m20240601_000003_create_suppliers_table;
mod m20240601_000004_create_categories_table;
mod m20240601_000005_create_products_table;
mod m20240601_000006_create_warehouses_table;
mod m20240601_000007_create_inventory_table;
mod m20240601_000008_create_orders_table;
mod m20240601_000009_create_order_items_table;
mod m20240601_000010_create_vehicles_table;
mod m20240601_000011_create_drivers_table;
mod m20240601_000012_create_shipments_table;
mod m20240601_000013_create_shipment_tracking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users_table::Migration),
            Box::new(m20240601_000002_create_customers_table::Migration),
            Box::new(m20240601_000003_create_suppliers_table::Migration),
            Box::new(m20240601_000004_create_categories_table::Migration),
            Box::new(m20240601_000005_create_products_table::Migration),
            Box::new(m20240601_000006_create_warehouses_table::Migration),
            Box::new(m20240601_000007_create_inventory_table::Migration),
            Box::new(m20240601_000008_create_orders_table::Migration),
            Box::new(m20240601_000009_create_order_items_table::Migration),
            Box::new(m20240601_000010_create_vehicles_table::Migration),
            Box::new(m20240601_000011_create_drivers_table::Migration),
            Box::new(m20240601_000012_create_shipments_table::Migration),
            Box::new(m20240601_000013_create_shipment_tracking_table::Migration),
        ]
    }
}
