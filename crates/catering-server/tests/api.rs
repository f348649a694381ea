//! End-to-end API tests against the embedded in-memory store.
//!
//! The database handle is a process-wide static, so every mutating step
//! runs inside the single `full_flow` test in a fixed order.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use catering_server::{
    db::{create_tables, init_db, initialize_default_data, SurrealdbCfg},
    routes,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::LazyLock;
use tokio::sync::OnceCell;
use tower::ServiceExt;

static INIT: OnceCell<()> = OnceCell::const_new();

// The embedded SurrealDB engine spawns its worker on the runtime that
// first touches the process-wide DB static; per-test runtimes would drop
// it mid-suite, so every test shares this one runtime instead.
static RT: LazyLock<tokio::runtime::Runtime> =
    LazyLock::new(|| tokio::runtime::Runtime::new().unwrap());

async fn test_app() -> Router {
    INIT.get_or_init(|| async {
        let cfg = SurrealdbCfg {
            endpoint: "mem://".to_string(),
            username: String::new(),
            password: String::new(),
            namespace: "catering_test".to_string(),
            database: "catering_test".to_string(),
        };
        init_db(cfg).await.unwrap();
        create_tables().await.unwrap();
        initialize_default_data().await.unwrap();
    })
    .await;

    routes::create_routes()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(test_app().await, Method::GET, uri, None).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(test_app().await, Method::POST, uri, Some(body)).await
}

async fn put(uri: &str, body: Value) -> (StatusCode, Value) {
    send(test_app().await, Method::PUT, uri, Some(body)).await
}

async fn delete(uri: &str) -> (StatusCode, Value) {
    send(test_app().await, Method::DELETE, uri, None).await
}

#[test]
fn health_endpoints() {
    RT.block_on(health_endpoints_impl())
}

async fn health_endpoints_impl() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get("/health/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}

#[test]
fn openapi_document_is_served() {
    RT.block_on(openapi_document_is_served_impl())
}

async fn openapi_document_is_served_impl() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].is_object());
}

#[test]
fn full_flow() {
    RT.block_on(full_flow_impl())
}

async fn full_flow_impl() {
    // Seeded catalog: three categories, eight manufacturing items.
    let (status, body) = get("/category").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["category_id"], 1);
    assert_eq!(body["data"][0]["name"], "Bhajiya Only");

    let (status, body) = get("/manufacturing-item").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);

    let (status, body) = get("/category/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 5);

    let (status, _) = get("/category/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Ad-hoc calculation: one item at variety 2, 100 guests. Every
    // ingredient of the item is credited the full item total.
    let (status, body) = post(
        "/calculation",
        json!({
            "guest_count": 100,
            "category_id": 1,
            "selections": { "1": { "selected": true, "variety": 2 } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingredient_totals"]["methi"], 20000.0);
    assert_eq!(body["ingredient_totals"]["besan"], 20000.0);
    assert_eq!(body["ingredient_totals"]["oil"], 20000.0);
    assert_eq!(body["ingredient_display"]["methi"], "20.00 kg");
    assert_eq!(body["equipment_totals"]["Stove"], 2.0);
    assert_eq!(body["equipment_totals"]["Kadai"], 4.0);
    assert_eq!(body["equipment_totals"]["Table"], 13.0);
    assert_eq!(body["equipment_totals"]["Plate"], 100.0);

    // Guest count must be positive, selection non-empty.
    let (status, _) = post(
        "/calculation",
        json!({
            "guest_count": 0,
            "category_id": 1,
            "selections": { "1": { "selected": true, "variety": 1 } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        "/calculation",
        json!({ "guest_count": 50, "category_id": 1, "selections": {} }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Create an order; totals are computed and stored as a snapshot.
    let (status, body) = post(
        "/order",
        json!({
            "client_name": "Ramesh Patel",
            "phone": "9876543210",
            "address": "12 MG Road, Surat",
            "event_date": "2026-11-20",
            "event_time": "19:00",
            "guest_count": 50,
            "event_type": "wedding",
            "category_id": 1,
            "selections": {
                "1": { "selected": true, "variety": 1 },
                "3": { "selected": true, "variety": 1 }
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["data"]["order_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "pending");
    // methi only from item 1, onion only from item 3, besan/oil from both
    assert_eq!(body["data"]["ingredient_totals"]["methi"], 5000.0);
    assert_eq!(body["data"]["ingredient_totals"]["onion"], 6000.0);
    assert_eq!(body["data"]["ingredient_totals"]["besan"], 11000.0);
    assert_eq!(body["data"]["ingredient_totals"]["oil"], 11000.0);
    assert_eq!(body["data"]["equipment_totals"]["Stove"], 1.0);
    assert_eq!(body["data"]["equipment_totals"]["Chair"], 50.0);

    let (status, body) = get(&format!("/order/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["client_name"], "Ramesh Patel");

    // Updating the guest count leaves the stored totals untouched.
    let (status, body) = put(
        &format!("/order/{order_id}"),
        json!({ "guest_count": 80, "status": "confirmed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["guest_count"], 80);
    assert_eq!(body["data"]["status"], "confirmed");
    assert_eq!(body["data"]["ingredient_totals"]["methi"], 5000.0);

    // Explicit recalculation re-derives both totals from the live catalog.
    let (status, body) = post(&format!("/order/{order_id}/recalculate"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["ingredient_totals"]["methi"], 8000.0);
    assert_eq!(body["data"]["ingredient_totals"]["besan"], 17600.0);
    assert_eq!(body["data"]["equipment_totals"]["Stove"], 2.0);
    assert_eq!(body["data"]["equipment_totals"]["Table"], 10.0);

    // Print view formats grams into kilograms past the threshold.
    let (status, body) = get(&format!("/order/{order_id}/print")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guest_count"], 80);
    let ingredients = body["ingredients"].as_array().unwrap();
    let methi = ingredients
        .iter()
        .find(|line| line["name"] == "methi")
        .unwrap();
    assert_eq!(methi["display"], "8.00 kg");
    let equipment = body["equipment"].as_array().unwrap();
    let stove = equipment.iter().find(|line| line["name"] == "Stove").unwrap();
    assert_eq!(stove["display"], "2 pcs");

    // Catalog CRUD: a new category gets the next sequential id.
    let (status, body) = post(
        "/category",
        json!({
            "name": "Trial Menu",
            "description": "one-off tasting",
            "items": [
                { "id": 1, "name": "Methi Bhajiya", "ingredients": ["methi", "besan"], "base_quantity": 60.0 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["category_id"], 4);

    let (status, body) = put("/category/4", json!({ "name": "Tasting Menu" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Tasting Menu");
    assert_eq!(body["data"]["description"], "one-off tasting");

    let (status, _) = delete("/category/4").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get("/category/4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Equipment table edits feed straight into the next calculation.
    let (status, body) = post(
        "/manufacturing-item",
        json!({ "name": "Serving Bowl", "units_per_batch": 2.0, "people_per_batch": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["item_id"], 9);

    let (status, body) = post(
        "/calculation",
        json!({
            "guest_count": 25,
            "category_id": 1,
            "selections": { "1": { "selected": true, "variety": 1 } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // ceil(25 / 10) batches at 2 units each
    assert_eq!(body["equipment_totals"]["Serving Bowl"], 6.0);

    let (status, _) = put(
        "/manufacturing-item/9",
        json!({ "people_per_batch": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unit counts must be positive too, on create and on update.
    let (status, _) = post(
        "/manufacturing-item",
        json!({ "name": "Ladle", "units_per_batch": 0.0, "people_per_batch": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(
        "/manufacturing-item/9",
        json!({ "units_per_batch": -1.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = delete("/manufacturing-item/9").await;
    assert_eq!(status, StatusCode::OK);

    // Malformed embedded menu items are rejected before they can poison
    // later calculations.
    let (status, _) = post(
        "/category",
        json!({
            "name": "Broken Menu",
            "items": [
                { "id": 1, "name": "ghost dish", "ingredients": ["besan"], "base_quantity": -5.0 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(
        "/category/1",
        json!({
            "items": [
                { "id": 1, "name": "", "ingredients": ["besan"], "base_quantity": 100.0 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Payload validation failures surface as 400s.
    let (status, _) = post(
        "/order",
        json!({
            "client_name": "",
            "phone": "1",
            "address": "x",
            "event_date": "2026-11-20",
            "event_time": "19:00",
            "guest_count": 10,
            "category_id": 1,
            "selections": { "1": { "selected": true, "variety": 1 } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Export carries every collection plus counts.
    let (status, body) = get("/admin/export").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 1);
    assert_eq!(body["total_categories"], 3);
    assert_eq!(body["total_manufacturing_items"], 8);

    // Re-seeding restores the catalog but keeps orders.
    let (status, _) = post("/admin/seed", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get("/category").await;
    assert_eq!(body["total"], 3);
    let (_, body) = get("/order").await;
    assert_eq!(body["total"], 1);

    let (status, _) = delete(&format!("/order/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&format!("/order/{order_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Clear-all empties every table.
    let (status, _) = send(test_app().await, Method::DELETE, "/admin/clear-all", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = get("/category").await;
    assert_eq!(body["total"], 0);
    let (_, body) = get("/manufacturing-item").await;
    assert_eq!(body["total"], 0);
}
