mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, Set};

use logistics_schema::entities::inventory;
use logistics_schema::SchemaError;

use common::{customer_form, order_form, product_form, shipment_form, vehicle_form, TestApp};

#[tokio::test]
async fn duplicate_customer_email_is_rejected() {
    let app = common::TestApp::new().await;
    app.customer("dup@example.com").await;

    let err = app
        .repos
        .customers
        .create(customer_form("Someone Else", "dup@example.com"))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
    assert!(err.is_constraint_violation());
}

#[tokio::test]
async fn duplicate_order_number_is_rejected() {
    let app = TestApp::new().await;
    let customer = app.customer("buyer@example.com").await;
    app.order(customer.id, "ORD-0001").await;

    let err = app
        .repos
        .orders
        .create(order_form(customer.id, "ORD-0001"))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_product_sku_is_rejected() {
    let app = TestApp::new().await;
    app.product("SKU-1", dec!(9.99)).await;

    let err = app
        .repos
        .catalog
        .create_product(product_form("SKU-1", dec!(1.00)))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_product_warehouse_pair_is_rejected() {
    let app = TestApp::new().await;
    let product = app.product("SKU-PAIR", dec!(5.00)).await;
    let main = app.warehouse("Main").await;
    let other = app.warehouse("Other").await;

    app.repos
        .inventory
        .set_stock(product.id, main.id, 3)
        .await
        .expect("first stock row");

    let err = inventory::ActiveModel {
        product_id: Set(product.id),
        warehouse_id: Set(main.id),
        quantity: Set(7),
        ..Default::default()
    }
    .insert(app.db())
    .await
    .map_err(SchemaError::from)
    .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));

    // Same product in another warehouse is a different pair.
    app.repos
        .inventory
        .set_stock(product.id, other.id, 1)
        .await
        .expect("second warehouse");
}

#[tokio::test]
async fn duplicate_shipment_number_is_rejected() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-SHIP").await;
    app.shipment(order.id, "SHP-1").await;

    let err = app
        .repos
        .shipments
        .create(shipment_form(order.id, "SHP-1"))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_driver_license_is_rejected() {
    let app = TestApp::new().await;
    app.driver("first", "LIC-42").await;
    let second = app.user("second").await;

    let err = app
        .repos
        .fleet
        .create_driver(second.id, "LIC-42", common::license_expiry())
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn user_has_at_most_one_driver_profile() {
    let app = TestApp::new().await;
    let driver = app.driver("solo", "LIC-1").await;

    let err = app
        .repos
        .fleet
        .create_driver(driver.user_id, "LIC-2", common::license_expiry())
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let app = TestApp::new().await;
    app.repos
        .catalog
        .create_category("Tools", "")
        .await
        .expect("first category");

    let err = app
        .repos
        .catalog
        .create_category("Tools", "again")
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_vehicle_number_is_rejected() {
    let app = TestApp::new().await;
    app.vehicle("VAN-7").await;

    let err = app
        .repos
        .fleet
        .create_vehicle(vehicle_form("VAN-7"))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = TestApp::new().await;
    app.user("taken").await;

    let err = app
        .repos
        .users
        .create_user(logistics_schema::repositories::user_repository::NewUser {
            username: "taken".to_string(),
            email: String::new(),
            password: "pw".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            user_type: Default::default(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::UniqueViolation(_));
}

#[tokio::test]
async fn missing_parent_is_an_integrity_violation() {
    let app = TestApp::new().await;

    let err = app
        .repos
        .orders
        .create(order_form(uuid::Uuid::new_v4(), "ORD-ORPHAN"))
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::IntegrityViolation(_));
}
