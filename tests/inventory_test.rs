mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use sea_orm::Set;

use logistics_schema::repositories::inventory_repository::InventoryRepository;
use logistics_schema::SchemaError;

use common::TestApp;

#[tokio::test]
async fn set_stock_creates_then_overwrites_one_row() {
    let app = TestApp::new().await;
    let product = app.product("SKU-SET", dec!(1.00)).await;
    let warehouse = app.warehouse("Main").await;

    let first = app
        .repos
        .inventory
        .set_stock(product.id, warehouse.id, 12)
        .await
        .unwrap();
    let second = app
        .repos
        .inventory
        .set_stock(product.id, warehouse.id, 4)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.quantity, 4);
    assert_eq!(second.last_restock_date, None);
}

#[tokio::test]
async fn restock_adds_units_and_stamps_the_date() {
    let app = TestApp::new().await;
    let product = app.product("SKU-RESTOCK", dec!(1.00)).await;
    let warehouse = app.warehouse("Main").await;

    let created = app
        .repos
        .inventory
        .restock(product.id, warehouse.id, 5)
        .await
        .unwrap();
    assert_eq!(created.quantity, 5);
    assert!(created.last_restock_date.is_some());

    let topped_up = app
        .repos
        .inventory
        .restock(product.id, warehouse.id, 7)
        .await
        .unwrap();
    assert_eq!(topped_up.quantity, 12);

    let err = app
        .repos
        .inventory
        .restock(product.id, warehouse.id, 0)
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::InvalidInput(_));
}

#[tokio::test]
async fn transfer_moves_units_between_warehouses() {
    let app = TestApp::new().await;
    let product = app.product("SKU-MOVE", dec!(1.00)).await;
    let east = app.warehouse("East").await;
    let west = app.warehouse("West").await;
    app.repos
        .inventory
        .set_stock(product.id, east.id, 10)
        .await
        .unwrap();

    let (source, destination) = app
        .repos
        .inventory
        .transfer(product.id, east.id, west.id, 4)
        .await
        .expect("transfer");
    assert_eq!(source.quantity, 6);
    assert_eq!(destination.quantity, 4);
    assert_eq!(destination.warehouse_id, west.id);

    app.repos
        .inventory
        .transfer(product.id, west.id, east.id, 4)
        .await
        .expect("transfer back");
    assert_eq!(app.repos.inventory.total_stock(product.id).await.unwrap(), 10);
}

#[tokio::test]
async fn transfer_rejects_overdraw_and_leaves_stock_untouched() {
    let app = TestApp::new().await;
    let product = app.product("SKU-OVER", dec!(1.00)).await;
    let east = app.warehouse("East").await;
    let west = app.warehouse("West").await;
    app.repos
        .inventory
        .set_stock(product.id, east.id, 3)
        .await
        .unwrap();

    let err = app
        .repos
        .inventory
        .transfer(product.id, east.id, west.id, 5)
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::InvalidInput(_));

    let east_row = app
        .repos
        .inventory
        .find_stock(product.id, east.id)
        .await
        .unwrap()
        .expect("source row");
    assert_eq!(east_row.quantity, 3);
    assert!(app
        .repos
        .inventory
        .find_stock(product.id, west.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn transfer_rejects_same_warehouse_and_unstocked_source() {
    let app = TestApp::new().await;
    let product = app.product("SKU-SAME", dec!(1.00)).await;
    let east = app.warehouse("East").await;
    let west = app.warehouse("West").await;

    let same = app
        .repos
        .inventory
        .transfer(product.id, east.id, east.id, 1)
        .await
        .unwrap_err();
    assert_matches!(same, SchemaError::InvalidInput(_));

    let unstocked = app
        .repos
        .inventory
        .transfer(product.id, east.id, west.id, 1)
        .await
        .unwrap_err();
    assert_matches!(unstocked, SchemaError::InvalidInput(_));
}

#[tokio::test]
async fn low_stock_lists_rows_at_or_below_reorder_level() {
    let app = TestApp::new().await;
    let warehouse = app.warehouse("Main").await;

    let mut form = common::product_form("SKU-LOW", dec!(1.00));
    form.reorder_level = Set(5);
    let low = app.repos.catalog.create_product(form).await.unwrap();
    let plenty = app.product("SKU-PLENTY", dec!(1.00)).await;

    app.repos
        .inventory
        .set_stock(low.id, warehouse.id, 5)
        .await
        .unwrap();
    app.repos
        .inventory
        .set_stock(plenty.id, warehouse.id, 50)
        .await
        .unwrap();

    let flagged = app.repos.inventory.low_stock().await.unwrap();
    assert_eq!(flagged.len(), 1);
    let (stock, product) = &flagged[0];
    assert_eq!(product.sku, "SKU-LOW");
    assert_eq!(stock.label(product, &warehouse), "Product SKU-LOW - Main - 5");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_restocks_all_land() {
    let app = TestApp::new().await;
    let product = app.product("SKU-RUSH", dec!(1.00)).await;
    let warehouse = app.warehouse("Dock").await;
    app.repos
        .inventory
        .set_stock(product.id, warehouse.id, 0)
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..40 {
        let repo = InventoryRepository::new(app.db.clone());
        let (product_id, warehouse_id) = (product.id, warehouse.id);
        handles.push(tokio::spawn(async move {
            repo.restock(product_id, warehouse_id, 1).await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("restock");
    }

    let row = app
        .repos
        .inventory
        .find_stock(product.id, warehouse.id)
        .await
        .unwrap()
        .expect("stock row");
    assert_eq!(row.quantity, 40);
}

#[tokio::test]
async fn restock_past_column_limit_is_rejected() {
    let app = TestApp::new().await;
    let product = app.product("SKU-FULL", dec!(1.00)).await;
    let warehouse = app.warehouse("Main").await;
    app.repos
        .inventory
        .set_stock(product.id, warehouse.id, i32::MAX)
        .await
        .unwrap();

    let err = app
        .repos
        .inventory
        .restock(product.id, warehouse.id, 1)
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::InvalidInput(_));

    let row = app
        .repos
        .inventory
        .find_stock(product.id, warehouse.id)
        .await
        .unwrap()
        .expect("stock row");
    assert_eq!(row.quantity, i32::MAX);
    assert_eq!(row.last_restock_date, None);
}

#[tokio::test]
async fn transfer_into_full_destination_rolls_back() {
    let app = TestApp::new().await;
    let product = app.product("SKU-BRIM", dec!(1.00)).await;
    let east = app.warehouse("East").await;
    let west = app.warehouse("West").await;
    app.repos
        .inventory
        .set_stock(product.id, east.id, 10)
        .await
        .unwrap();
    app.repos
        .inventory
        .set_stock(product.id, west.id, i32::MAX)
        .await
        .unwrap();

    let err = app
        .repos
        .inventory
        .transfer(product.id, east.id, west.id, 2)
        .await
        .unwrap_err();
    assert_matches!(err, SchemaError::InvalidInput(_));

    let east_row = app
        .repos
        .inventory
        .find_stock(product.id, east.id)
        .await
        .unwrap()
        .expect("source row");
    assert_eq!(east_row.quantity, 10);
}
