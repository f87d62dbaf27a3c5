#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::Set;
use uuid::Uuid;

use logistics_schema::db::{self, DbConfig, DbPool};
use logistics_schema::entities::{
    customer, driver, order, product, shipment, user, vehicle, warehouse,
};
use logistics_schema::repositories::user_repository::NewUser;
use logistics_schema::Repositories;

/// Fresh, fully migrated in-memory SQLite database with every repository.
pub struct TestApp {
    pub db: Arc<DbPool>,
    pub repos: Repositories,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let pool = db::establish_connection_with_config(&DbConfig::in_memory())
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let db = Arc::new(pool);
        Self {
            repos: Repositories::new(db.clone()),
            db,
        }
    }

    pub fn db(&self) -> &DbPool {
        &self.db
    }

    pub async fn customer(&self, email: &str) -> customer::Model {
        self.repos
            .customers
            .create(customer_form("Test Customer", email))
            .await
            .expect("create customer")
    }

    pub async fn product(&self, sku: &str, price: Decimal) -> product::Model {
        self.repos
            .catalog
            .create_product(product_form(sku, price))
            .await
            .expect("create product")
    }

    pub async fn warehouse(&self, name: &str) -> warehouse::Model {
        self.repos
            .inventory
            .create_warehouse(warehouse_form(name))
            .await
            .expect("create warehouse")
    }

    pub async fn order(&self, customer_id: Uuid, order_number: &str) -> order::Model {
        self.repos
            .orders
            .create(order_form(customer_id, order_number))
            .await
            .expect("create order")
    }

    pub async fn user(&self, username: &str) -> user::Model {
        self.repos
            .users
            .create_user(NewUser {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password: "correct horse battery staple".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                user_type: Default::default(),
            })
            .await
            .expect("create user")
    }

    pub async fn driver(&self, username: &str, license_number: &str) -> driver::Model {
        let user = self.user(username).await;
        self.repos
            .fleet
            .create_driver(user.id, license_number, license_expiry())
            .await
            .expect("create driver")
    }

    pub async fn vehicle(&self, vehicle_number: &str) -> vehicle::Model {
        self.repos
            .fleet
            .create_vehicle(vehicle_form(vehicle_number))
            .await
            .expect("create vehicle")
    }

    pub async fn shipment(&self, order_id: Uuid, shipment_number: &str) -> shipment::Model {
        self.repos
            .shipments
            .create(shipment_form(order_id, shipment_number))
            .await
            .expect("create shipment")
    }

    /// Customer plus one order, the most common parent chain.
    pub async fn order_with_customer(&self, order_number: &str) -> order::Model {
        let customer = self
            .customer(&format!("{}@customers.example", order_number.to_lowercase()))
            .await;
        self.order(customer.id, order_number).await
    }
}

pub fn license_expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 31).expect("valid date")
}

pub fn customer_form(name: &str, email: &str) -> customer::ActiveModel {
    customer::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set("555-0100".to_string()),
        address: Set("1 Test Way".to_string()),
        city: Set("Testville".to_string()),
        state: Set("TS".to_string()),
        zip_code: Set("12345".to_string()),
        country: Set("USA".to_string()),
        ..Default::default()
    }
}

pub fn product_form(sku: &str, price: Decimal) -> product::ActiveModel {
    product::ActiveModel {
        name: Set(format!("Product {}", sku)),
        sku: Set(sku.to_string()),
        weight: Set(Decimal::ONE),
        price: Set(price),
        ..Default::default()
    }
}

pub fn warehouse_form(name: &str) -> warehouse::ActiveModel {
    warehouse::ActiveModel {
        name: Set(name.to_string()),
        address: Set("2 Depot Rd".to_string()),
        city: Set("Testville".to_string()),
        state: Set("TS".to_string()),
        zip_code: Set("12345".to_string()),
        country: Set("USA".to_string()),
        contact_person: Set("Dock Lead".to_string()),
        phone: Set("555-0101".to_string()),
        email: Set("dock@example.com".to_string()),
        ..Default::default()
    }
}

pub fn order_form(customer_id: Uuid, order_number: &str) -> order::ActiveModel {
    order::ActiveModel {
        order_number: Set(order_number.to_string()),
        customer_id: Set(customer_id),
        shipping_address: Set("1 Test Way".to_string()),
        shipping_city: Set("Testville".to_string()),
        shipping_state: Set("TS".to_string()),
        shipping_zip_code: Set("12345".to_string()),
        shipping_country: Set("USA".to_string()),
        total_amount: Set(Decimal::ZERO),
        ..Default::default()
    }
}

pub fn vehicle_form(vehicle_number: &str) -> vehicle::ActiveModel {
    vehicle::ActiveModel {
        vehicle_number: Set(vehicle_number.to_string()),
        vehicle_type: Set("van".to_string()),
        make: Set("Ford".to_string()),
        model_name: Set("Transit".to_string()),
        year: Set(2021),
        license_plate: Set("TEST-123".to_string()),
        capacity: Set(Decimal::new(150_000, 2)),
        ..Default::default()
    }
}

pub fn shipment_form(order_id: Uuid, shipment_number: &str) -> shipment::ActiveModel {
    shipment::ActiveModel {
        shipment_number: Set(shipment_number.to_string()),
        order_id: Set(order_id),
        ..Default::default()
    }
}
