use serde_json::json;
use stockroom_client::error::Error;
use stockroom_client::inventory::{InventoryQuery, NewInventoryItem};
use stockroom_client::Stockroom;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn item_body(sku: &str, quantity: f64) -> serde_json::Value {
    json!({
        "sku": sku,
        "name": "Wood Screw",
        "quantity": quantity,
        "unit_price": 0.15,
        "category": "Fasteners",
        "uom": "box",
        "conversion_qty": 100.0
    })
}

#[tokio::test]
async fn test_list_decodes_a_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_body("SCR-10", 40.0), item_body("SCR-12", 0.0)])),
        )
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let items = stockroom
        .inventory()
        .list(&InventoryQuery::default())
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sku, "SCR-10");
    assert_eq!(items[1].quantity, 0.0);
}

#[tokio::test]
async fn test_list_decodes_an_enveloped_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [item_body("SCR-10", 40.0)]
        })))
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let items = stockroom
        .inventory()
        .list(&InventoryQuery::default())
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category.as_deref(), Some("Fasteners"));
}

#[tokio::test]
async fn test_list_forwards_server_side_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .and(query_param("search", "screw"))
        .and(query_param("category", "Fasteners"))
        .and(query_param("low_stock", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let query = InventoryQuery {
        search: Some("screw".to_string()),
        category: Some("Fasteners".to_string()),
        low_stock: Some(true),
    };

    let items = stockroom.inventory().list(&query).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_create_posts_the_item_payload() {
    let mock_server = MockServer::start().await;

    let sku = format!("SKU-{}", Uuid::new_v4());
    Mock::given(method("POST"))
        .and(path("/api/inventory"))
        .and(body_json(json!({
            "sku": sku,
            "name": "Anchor Bolt",
            "quantity": 25.0,
            "unit_price": 1.2
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(item_body(&sku, 25.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let new_item = NewInventoryItem {
        sku: sku.clone(),
        name: "Anchor Bolt".to_string(),
        quantity: 25.0,
        unit_price: 1.2,
        category: None,
        supplier_id: None,
        uom: None,
        conversion_qty: None,
        description: None,
    };

    let created = stockroom.inventory().create(&new_item).await.unwrap();
    assert_eq!(created.sku, sku);
}

#[tokio::test]
async fn test_adjust_quantity_sends_a_signed_delta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/inventory/SCR-10/adjust"))
        .and(body_json(json!({ "delta": -2.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body("SCR-10", 38.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let item = stockroom
        .inventory()
        .adjust_quantity("SCR-10", -2.0)
        .await
        .unwrap();

    assert_eq!(item.quantity, 38.0);
}

#[tokio::test]
async fn test_upload_image_round_trips_the_item() {
    let mock_server = MockServer::start().await;

    let mut body = item_body("SCR-10", 40.0);
    body["image_url"] = json!("/media/scr-10.jpg");
    Mock::given(method("POST"))
        .and(path("/api/inventory/SCR-10/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let item = stockroom
        .inventory()
        .upload_image("SCR-10", vec![0xFF, 0xD8, 0xFF], "scr-10.jpg")
        .await
        .unwrap();

    assert_eq!(item.image_url.as_deref(), Some("/media/scr-10.jpg"));
}

#[tokio::test]
async fn test_delete_tolerates_an_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/inventory/SCR-10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    stockroom.inventory().delete("SCR-10").await.unwrap();
}

#[tokio::test]
async fn test_server_error_message_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let err = stockroom
        .inventory()
        .list(&InventoryQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "database offline");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_non_json_error_body_gets_a_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/inventory/GONE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>not found</html>"))
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let err = stockroom.inventory().get("GONE").await.unwrap_err();

    assert_eq!(err.to_string(), "request failed with status 404");
}

#[tokio::test]
async fn test_rejected_envelope_surfaces_the_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "sku already exists"
        })))
        .mount(&mock_server)
        .await;

    let stockroom = Stockroom::new(&mock_server.uri());
    let new_item = NewInventoryItem {
        sku: "SCR-10".to_string(),
        name: "Wood Screw".to_string(),
        quantity: 1.0,
        unit_price: 0.15,
        category: None,
        supplier_id: None,
        uom: None,
        conversion_qty: None,
        description: None,
    };

    let err = stockroom.inventory().create(&new_item).await.unwrap_err();
    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.to_string(), "sku already exists");
}
