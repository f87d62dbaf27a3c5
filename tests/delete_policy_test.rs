mod common;

use rust_decimal_macros::dec;
use sea_orm::{EntityTrait, PaginatorTrait};

use logistics_schema::entities::{driver, inventory, order, order_item, shipment, shipment_tracking, user};

use common::TestApp;

#[tokio::test]
async fn deleting_driver_clears_shipment_reference() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-DRV").await;
    let driver = app.driver("trucker", "LIC-DRV").await;

    let mut form = common::shipment_form(order.id, "SHP-DRV");
    form.driver_id = sea_orm::Set(Some(driver.id));
    let shipment = app.repos.shipments.create(form).await.expect("shipment");
    assert_eq!(shipment.driver_id, Some(driver.id));

    app.repos.fleet.delete_driver(driver.id).await.expect("delete driver");

    let reloaded = app
        .repos
        .shipments
        .find_by_id(shipment.id)
        .await
        .unwrap()
        .expect("shipment survives");
    assert_eq!(reloaded.driver_id, None);

    // The user account outlives its driver profile.
    let account = user::Entity::find_by_id(driver.user_id)
        .one(app.db())
        .await
        .unwrap();
    assert!(account.is_some());
}

#[tokio::test]
async fn deleting_vehicle_clears_shipment_reference() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-VEH").await;
    let vehicle = app.vehicle("TRK-9").await;

    let mut form = common::shipment_form(order.id, "SHP-VEH");
    form.vehicle_id = sea_orm::Set(Some(vehicle.id));
    let shipment = app.repos.shipments.create(form).await.expect("shipment");

    app.repos
        .fleet
        .delete_vehicle(vehicle.id)
        .await
        .expect("delete vehicle");

    let reloaded = app
        .repos
        .shipments
        .find_by_id(shipment.id)
        .await
        .unwrap()
        .expect("shipment survives");
    assert_eq!(reloaded.vehicle_id, None);
}

#[tokio::test]
async fn deleting_user_removes_driver_profile_and_unassigns_shipments() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-USR").await;
    let driver = app.driver("leaving", "LIC-USR").await;

    let mut form = common::shipment_form(order.id, "SHP-USR");
    form.driver_id = sea_orm::Set(Some(driver.id));
    let shipment = app.repos.shipments.create(form).await.expect("shipment");

    app.repos.users.delete(driver.user_id).await.expect("delete user");

    assert!(app.repos.fleet.find_driver(driver.id).await.unwrap().is_none());
    let reloaded = app
        .repos
        .shipments
        .find_by_id(shipment.id)
        .await
        .unwrap()
        .expect("shipment survives");
    assert_eq!(reloaded.driver_id, None);
    assert_eq!(driver::Entity::find().count(app.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_order_removes_items_and_shipments() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-CASCADE").await;
    let product = app.product("SKU-CASCADE", dec!(4.50)).await;
    app.repos
        .orders
        .add_item(order.id, product.id, 2, dec!(4.50))
        .await
        .expect("item");
    let shipment = app.shipment(order.id, "SHP-CASCADE").await;
    app.repos
        .shipments
        .add_tracking(shipment.id, "Dock 1", "Packed", "")
        .await
        .expect("tracking");

    app.repos.orders.delete(order.id).await.expect("delete order");

    assert_eq!(order_item::Entity::find().count(app.db()).await.unwrap(), 0);
    assert_eq!(shipment::Entity::find().count(app.db()).await.unwrap(), 0);
    assert_eq!(
        shipment_tracking::Entity::find().count(app.db()).await.unwrap(),
        0
    );
    // The product is only referenced, never owned.
    assert!(app
        .repos
        .catalog
        .find_by_sku("SKU-CASCADE")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn deleting_shipment_removes_tracking_history() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-TRK").await;
    let shipment = app.shipment(order.id, "SHP-TRK").await;
    for location in ["A", "B", "C"] {
        app.repos
            .shipments
            .add_tracking(shipment.id, location, "Scanned", "")
            .await
            .expect("tracking");
    }

    app.repos
        .shipments
        .delete(shipment.id)
        .await
        .expect("delete shipment");

    assert!(app
        .repos
        .shipments
        .tracking_updates(shipment.id)
        .await
        .unwrap()
        .is_empty());
    assert!(app.repos.orders.find_by_id(order.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_customer_removes_orders() {
    let app = TestApp::new().await;
    let customer = app.customer("gone@example.com").await;
    app.order(customer.id, "ORD-G1").await;
    app.order(customer.id, "ORD-G2").await;

    app.repos
        .customers
        .delete(customer.id)
        .await
        .expect("delete customer");

    assert_eq!(order::Entity::find().count(app.db()).await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_product_or_warehouse_removes_stock_rows() {
    let app = TestApp::new().await;
    let kept = app.product("SKU-KEEP", dec!(1.00)).await;
    let dropped = app.product("SKU-DROP", dec!(1.00)).await;
    let main = app.warehouse("Main").await;
    let spare = app.warehouse("Spare").await;
    for product in [&kept, &dropped] {
        for warehouse in [&main, &spare] {
            app.repos
                .inventory
                .set_stock(product.id, warehouse.id, 5)
                .await
                .expect("stock");
        }
    }

    app.repos
        .catalog
        .delete_product(dropped.id)
        .await
        .expect("delete product");
    assert_eq!(inventory::Entity::find().count(app.db()).await.unwrap(), 2);

    app.repos
        .inventory
        .delete_warehouse(spare.id)
        .await
        .expect("delete warehouse");
    let remaining = app.repos.inventory.stock_for_product(kept.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].warehouse_id, main.id);
}

#[tokio::test]
async fn deleting_category_keeps_products_uncategorized() {
    let app = TestApp::new().await;
    let category = app
        .repos
        .catalog
        .create_category("Seasonal", "")
        .await
        .unwrap();
    let mut form = common::product_form("SKU-SEASON", dec!(3.00));
    form.category_id = sea_orm::Set(Some(category.id));
    let product = app.repos.catalog.create_product(form).await.unwrap();

    app.repos
        .catalog
        .delete_category(category.id)
        .await
        .expect("delete category");

    let reloaded = app
        .repos
        .catalog
        .find_product(product.id)
        .await
        .unwrap()
        .expect("product survives");
    assert_eq!(reloaded.category_id, None);
    let loose = app.repos.catalog.uncategorized_products().await.unwrap();
    assert_eq!(loose.len(), 1);
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() {
    let app = TestApp::new().await;
    let err = app
        .repos
        .orders
        .delete(uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, logistics_schema::SchemaError::NotFound(_)));
}
