//! Seed data script - populates the database with a small demo dataset
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 1 staff user and 1 driver account
//! - 3 customers, 1 supplier
//! - 2 categories with 5 products
//! - 2 warehouses with stock for every product
//! - 3 orders with items
//! - 1 vehicle and a shipment with tracking history

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;

use logistics_schema::config::{init_tracing, load_config};
use logistics_schema::db::{establish_connection_with_config, run_migrations, DbConfig};
use logistics_schema::entities::choices::{OrderStatus, ShipmentStatus, UserType, VehicleType};
use logistics_schema::entities::{customer, order, product, shipment, supplier, vehicle, warehouse};
use logistics_schema::repositories::user_repository::NewUser;
use logistics_schema::Repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = load_config()?;
    init_tracing(app_config.log_level(), app_config.log_json);

    info!("=== Logistics Schema Seed Data ===");

    let db = establish_connection_with_config(&DbConfig::from(&app_config)).await?;
    run_migrations(&db).await?;
    let repos = Repositories::new(Arc::new(db));

    info!("Creating accounts...");
    repos
        .users
        .create_user(NewUser {
            username: "dispatch".to_string(),
            email: "dispatch@example.com".to_string(),
            password: "dispatch-demo-password".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            user_type: UserType::Manager,
        })
        .await?;
    let driver_user = repos
        .users
        .create_user(NewUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "driver-demo-password".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            user_type: UserType::Driver,
        })
        .await?;
    let driver = repos
        .fleet
        .create_driver(
            driver_user.id,
            "DL-4471902",
            NaiveDate::from_ymd_opt(2028, 6, 30).unwrap_or_default(),
        )
        .await?;

    info!("Creating customers...");
    let customers_data = [
        ("Acme Retail", "orders@acme.example", "Springfield", "IL"),
        ("Northwind Traders", "buying@northwind.example", "Seattle", "WA"),
        ("Blue Harbor Foods", "ops@blueharbor.example", "Portland", "ME"),
    ];
    let mut customers = Vec::new();
    for (name, email, city, state) in customers_data {
        let model = repos
            .customers
            .create(customer::ActiveModel {
                name: Set(name.to_string()),
                email: Set(email.to_string()),
                phone: Set("+1-555-0100".to_string()),
                address: Set("100 Main St".to_string()),
                city: Set(city.to_string()),
                state: Set(state.to_string()),
                zip_code: Set("00000".to_string()),
                country: Set("USA".to_string()),
                ..Default::default()
            })
            .await?;
        customers.push(model);
    }
    info!("  Created {} customers", customers.len());

    repos
        .suppliers
        .create(supplier::ActiveModel {
            name: Set("Pacific Packaging Co".to_string()),
            contact_person: Set("Lee Park".to_string()),
            email: Set("sales@pacificpack.example".to_string()),
            phone: Set("+1-555-0199".to_string()),
            address: Set("9 Dock Rd".to_string()),
            city: Set("Oakland".to_string()),
            state: Set("CA".to_string()),
            zip_code: Set("94607".to_string()),
            country: Set("USA".to_string()),
            ..Default::default()
        })
        .await?;

    info!("Creating catalog...");
    let hardware = repos
        .catalog
        .create_category("Hardware", "Fasteners and tools")
        .await?;
    let packaging = repos
        .catalog
        .create_category("Packaging", "Boxes, tape and pallet wrap")
        .await?;
    let products_data = [
        ("Steel Bolt M8", "HW-BOLT-M8", hardware.id, dec!(0.05), "5x1x1", dec!(0.35)),
        ("Cordless Drill", "HW-DRILL-18V", hardware.id, dec!(1.80), "30x25x8", dec!(129.99)),
        ("Shipping Box L", "PK-BOX-L", packaging.id, dec!(0.60), "60x40x40", dec!(2.49)),
        ("Packing Tape", "PK-TAPE-48", packaging.id, dec!(0.20), "10x10x5", dec!(3.99)),
        ("Pallet Wrap", "PK-WRAP-500", packaging.id, dec!(2.50), "50x12x12", dec!(24.99)),
    ];
    let mut products = Vec::new();
    for (name, sku, category_id, weight, dimensions, price) in products_data {
        let model = repos
            .catalog
            .create_product(product::ActiveModel {
                name: Set(name.to_string()),
                sku: Set(sku.to_string()),
                category_id: Set(Some(category_id)),
                weight: Set(weight),
                dimensions: Set(dimensions.to_string()),
                price: Set(price),
                ..Default::default()
            })
            .await?;
        products.push(model);
    }
    info!("  Created {} products", products.len());

    info!("Creating warehouses and stock...");
    let mut warehouses = Vec::new();
    for (name, city, state) in [("Central DC", "Columbus", "OH"), ("West DC", "Reno", "NV")] {
        let model = repos
            .inventory
            .create_warehouse(warehouse::ActiveModel {
                name: Set(name.to_string()),
                address: Set("1 Logistics Pkwy".to_string()),
                city: Set(city.to_string()),
                state: Set(state.to_string()),
                zip_code: Set("00000".to_string()),
                country: Set("USA".to_string()),
                contact_person: Set("Floor Manager".to_string()),
                phone: Set("+1-555-0150".to_string()),
                email: Set(format!("{}@dc.example", city.to_lowercase())),
                ..Default::default()
            })
            .await?;
        warehouses.push(model);
    }
    for (index, product) in products.iter().enumerate() {
        for (slot, warehouse) in warehouses.iter().enumerate() {
            let quantity = ((index + 1) * 20 / (slot + 1)) as i32;
            repos
                .inventory
                .restock(product.id, warehouse.id, quantity)
                .await?;
        }
    }

    info!("Creating orders...");
    let now = Utc::now();
    let statuses = [OrderStatus::Pending, OrderStatus::Processing, OrderStatus::Shipped];
    let mut orders = Vec::new();
    for (index, (customer, status)) in customers.iter().zip(statuses).enumerate() {
        let created = repos
            .orders
            .create(order::ActiveModel {
                order_number: Set(format!("ORD-{:05}", index + 1)),
                customer_id: Set(customer.id),
                status: Set(status.to_string()),
                shipping_address: Set(customer.address.clone()),
                shipping_city: Set(customer.city.clone()),
                shipping_state: Set(customer.state.clone()),
                shipping_zip_code: Set(customer.zip_code.clone()),
                shipping_country: Set(customer.country.clone()),
                total_amount: Set(dec!(0)),
                ..Default::default()
            })
            .await?;
        for product in products.iter().skip(index).take(2) {
            repos
                .orders
                .add_item(created.id, product.id, (index + 2) as i32, product.price)
                .await?;
        }
        let total = repos.orders.items_total(created.id).await?;
        info!("  {} for {}: {}", created.order_number, customer.name, total);
        orders.push(created);
    }

    info!("Creating fleet and shipments...");
    let truck = repos
        .fleet
        .create_vehicle(vehicle::ActiveModel {
            vehicle_number: Set("TRK-001".to_string()),
            vehicle_type: Set(VehicleType::Truck.to_string()),
            make: Set("Volvo".to_string()),
            model_name: Set("VNL 860".to_string()),
            year: Set(2022),
            license_plate: Set("OH-7781K".to_string()),
            capacity: Set(dec!(18000.00)),
            ..Default::default()
        })
        .await?;
    if let Some(shipped) = orders.last() {
        let shipment = repos
            .shipments
            .create(shipment::ActiveModel {
                shipment_number: Set("SHP-00001".to_string()),
                order_id: Set(shipped.id),
                driver_id: Set(Some(driver.id)),
                vehicle_id: Set(Some(truck.id)),
                departure_time: Set(Some(now - Duration::hours(6))),
                estimated_arrival: Set(Some(now + Duration::hours(18))),
                status: Set(ShipmentStatus::InTransit.to_string()),
                ..Default::default()
            })
            .await?;
        for (location, status) in [
            ("Columbus, OH", "Departed facility"),
            ("Indianapolis, IN", "In transit"),
        ] {
            repos
                .shipments
                .add_tracking(shipment.id, location, status, "")
                .await?;
        }
    }

    info!("=== Seed Data Complete ===");
    Ok(())
}
