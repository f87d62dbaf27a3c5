mod common;

use rust_decimal_macros::dec;

use logistics_schema::entities::choices::OrderStatus;

use common::TestApp;

#[tokio::test]
async fn order_items_total_sums_line_totals() {
    let app = TestApp::new().await;
    let order = app.order_with_customer("ORD-TOTAL").await;
    let widget = app.product("SKU-W", dec!(29.99)).await;
    let gadget = app.product("SKU-G", dec!(5.00)).await;

    let line = app
        .repos
        .orders
        .add_item(order.id, widget.id, 2, dec!(29.99))
        .await
        .unwrap();
    assert_eq!(line.total_price().round_dp(2), dec!(59.98));
    assert_eq!(line.label(&widget), "Product SKU-W - 2");

    app.repos
        .orders
        .add_item(order.id, gadget.id, 3, dec!(5.00))
        .await
        .unwrap();

    let items = app.repos.orders.items(order.id).await.unwrap();
    assert_eq!(items.len(), 2);
    let total = app.repos.orders.items_total(order.id).await.unwrap();
    assert_eq!(total.round_dp(2), dec!(74.98));
}

#[tokio::test]
async fn lookups_by_number_and_customer() {
    let app = TestApp::new().await;
    let customer = app.customer("history@example.com").await;
    let first = app.order(customer.id, "ORD-H1").await;
    let second = app.order(customer.id, "ORD-H2").await;

    let found = app
        .repos
        .orders
        .find_by_number("ORD-H2")
        .await
        .unwrap()
        .expect("order by number");
    assert_eq!(found.id, second.id);
    assert_eq!(found.to_string(), "ORD-H2");
    assert!(app
        .repos
        .orders
        .find_by_number("ORD-NOPE")
        .await
        .unwrap()
        .is_none());

    let history = app
        .repos
        .customers
        .orders_for_customer(customer.id)
        .await
        .unwrap();
    let mut ids: Vec<_> = history.iter().map(|o| o.id).collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn status_counts_group_by_stored_value() {
    let app = TestApp::new().await;
    let customer = app.customer("counts@example.com").await;
    let a = app.order(customer.id, "ORD-C1").await;
    app.order(customer.id, "ORD-C2").await;
    let c = app.order(customer.id, "ORD-C3").await;

    app.repos
        .orders
        .set_status(a.id, &OrderStatus::Shipped.to_string())
        .await
        .unwrap();
    app.repos
        .orders
        .set_status(c.id, &OrderStatus::Shipped.to_string())
        .await
        .unwrap();

    let counts = app.repos.orders.status_counts().await.unwrap();
    assert_eq!(counts.get("pending"), Some(&1));
    assert_eq!(counts.get("shipped"), Some(&2));
    assert_eq!(counts.len(), 2);
}

#[tokio::test]
async fn recent_and_paging_respect_limits() {
    let app = TestApp::new().await;
    let customer = app.customer("pages@example.com").await;
    for n in 1..=5 {
        app.order(customer.id, &format!("ORD-P{}", n)).await;
    }

    assert_eq!(app.repos.orders.recent(3).await.unwrap().len(), 3);

    let (page, total) = app.repos.orders.find_all(2, 2).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn set_status_on_missing_order_is_not_found() {
    let app = TestApp::new().await;
    let err = app
        .repos
        .orders
        .set_status(uuid::Uuid::new_v4(), "pending")
        .await
        .unwrap_err();
    assert!(matches!(err, logistics_schema::SchemaError::NotFound(_)));
}

#[tokio::test]
async fn paging_rejects_zero_page_or_page_size() {
    let app = TestApp::new().await;
    let customer = app.customer("zero-page@example.com").await;
    app.order(customer.id, "ORD-Z1").await;

    let err = app.repos.orders.find_all(1, 0).await.unwrap_err();
    assert!(matches!(err, logistics_schema::SchemaError::InvalidInput(_)));

    let err = app.repos.orders.find_all(0, 10).await.unwrap_err();
    assert!(matches!(err, logistics_schema::SchemaError::InvalidInput(_)));

    let (first, total) = app.repos.orders.find_all(1, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(first.len(), 1);
}
