use serde_json::json;
use stockroom_client::orders::{NewOrder, OrderLine, OrderQuery};
use stockroom_client::Stockroom;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order_body(order_id: i64, status: &str) -> serde_json::Value {
    json!({
        "order_id": order_id,
        "customer_name": "Acme Hardware",
        "total_cost": 1250.75,
        "order_date": "2026-08-01T10:00:00Z",
        "status": status
    })
}

#[tokio::test]
async fn test_list_forwards_period_and_status_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("month", "8"))
        .and(query_param("year", "2026"))
        .and(query_param("status", "pending"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([order_body(1, "pending")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let query = OrderQuery {
        month: Some(8),
        year: Some(2026),
        status: Some("pending".to_string()),
    };

    let orders = stockroom.orders().list(&query).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer_name, "Acme Hardware");
    assert_eq!(orders[0].order_date.to_rfc3339(), "2026-08-01T10:00:00+00:00");
}

#[tokio::test]
async fn test_get_decodes_an_enveloped_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orders/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": order_body(42, "shipped")
        })))
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let order = stockroom.orders().get(42).await.unwrap();

    assert_eq!(order.order_id, 42);
    assert_eq!(order.status, "shipped");
}

#[tokio::test]
async fn test_create_posts_order_lines() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "customer_id": 3,
            "items": [
                { "sku": "SCR-10", "quantity": 5.0 },
                { "sku": "PNT-1", "quantity": 2.0 }
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_body(43, "pending")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let new_order = NewOrder {
        customer_id: 3,
        items: vec![
            OrderLine {
                sku: "SCR-10".to_string(),
                quantity: 5.0,
            },
            OrderLine {
                sku: "PNT-1".to_string(),
                quantity: 2.0,
            },
        ],
        note: None,
    };

    let order = stockroom.orders().create(&new_order).await.unwrap();
    assert_eq!(order.order_id, 43);
    assert_eq!(order.status, "pending");
}

#[tokio::test]
async fn test_set_status_patches_the_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/orders/42/status"))
        .and(body_json(json!({ "status": "shipped" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(42, "shipped")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let order = stockroom.orders().set_status(42, "shipped").await.unwrap();

    assert_eq!(order.status, "shipped");
}

#[tokio::test]
async fn test_delete_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/orders/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    stockroom.orders().delete(42).await.unwrap();
}
