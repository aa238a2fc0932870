//! Integration tests for the catalog HTTP API
//!
//! Requests go through the full router (logging, auth, validation, handlers,
//! error responses) via `tower::ServiceExt::oneshot`; no socket is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use catalog::{build_router, seed_products, ServerConfig, ServerState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";

fn create_test_app() -> (Router, Arc<ServerState>) {
    let state = Arc::new(ServerState::new(ServerConfig::with_api_key(API_KEY)));
    (build_router(state.clone()), state)
}

fn request(method: Method, uri: &str, key: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(value).expect("serialize body"))
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request build")
}

async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(req).await.expect("request execution");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body extraction")
        .to_bytes();
    (status, bytes.to_vec())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, req).await;
    let body = serde_json::from_slice(&bytes).expect("json deserialization");
    (status, body)
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    send(app, request(method, uri, Some(API_KEY), body)).await
}

fn desk_lamp() -> Value {
    json!({
        "name": "Desk Lamp",
        "description": "LED lamp with dimmer",
        "price": 35,
        "category": "home",
        "inStock": true
    })
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect()
}

fn unauthorized() -> Value {
    json!({ "error": "Unauthorized. API key missing or invalid." })
}

fn product_not_found() -> Value {
    json!({ "error": "Product not found" })
}

#[tokio::test]
async fn root_serves_welcome_text_without_key() {
    let (app, _) = create_test_app();

    let (status, body) = send_raw(&app, request(Method::GET, "/", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Welcome to the Product API! Go to /api/products to see all products."
    );
}

#[tokio::test]
async fn api_requests_without_valid_key_are_rejected() {
    let (app, state) = create_test_app();
    let lamp = desk_lamp();

    let cases: Vec<(Method, &str, Option<&Value>)> = vec![
        (Method::GET, "/api/products", None),
        (Method::GET, "/api/products/1", None),
        (Method::POST, "/api/products", Some(&lamp)),
        (Method::PUT, "/api/products/1", Some(&lamp)),
        (Method::DELETE, "/api/products/1", None),
        (Method::GET, "/api/does-not-exist", None),
        (Method::PATCH, "/api/products/1", Some(&lamp)),
        (Method::GET, "/api", None),
    ];

    for (method, uri, body) in cases {
        for key in [None, Some(""), Some("wrong-key"), Some("TEST-API-KEY")] {
            let (status, response) =
                send(&app, request(method.clone(), uri, key, body)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri} key={key:?}");
            assert_eq!(response, unauthorized());
        }
    }

    // Nothing was created, replaced or deleted
    assert_eq!(
        state.store.list(&Default::default()).unwrap(),
        seed_products()
    );
}

#[tokio::test]
async fn missing_configured_key_rejects_everything() {
    let state = Arc::new(ServerState::new(ServerConfig::default()));
    let app = build_router(state);

    let (status, body) = send(&app, request(Method::GET, "/api/products", Some(""), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, unauthorized());
}

#[tokio::test]
async fn list_returns_seed_products_in_order() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::GET, "/api/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": "1",
                "name": "Laptop",
                "description": "High-performance laptop with 16GB RAM",
                "price": 1200,
                "category": "electronics",
                "inStock": true
            },
            {
                "id": "2",
                "name": "Smartphone",
                "description": "Latest model with 128GB storage",
                "price": 800,
                "category": "electronics",
                "inStock": true
            },
            {
                "id": "3",
                "name": "Coffee Maker",
                "description": "Programmable coffee maker with timer",
                "price": 50,
                "category": "kitchen",
                "inStock": false
            }
        ])
    );
}

#[tokio::test]
async fn list_filters_compose() {
    let (app, _) = create_test_app();

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/products?category=electronics&minPrice=900",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Laptop"]);

    let (_, body) = call(&app, Method::GET, "/api/products?category=ELECTRONICS", None).await;
    assert_eq!(names(&body), ["Laptop", "Smartphone"]);

    let (_, body) = call(&app, Method::GET, "/api/products?maxPrice=800", None).await;
    assert_eq!(names(&body), ["Smartphone", "Coffee Maker"]);

    let (_, body) = call(&app, Method::GET, "/api/products?minPrice=50&maxPrice=50", None).await;
    assert_eq!(names(&body), ["Coffee Maker"]);

    let (_, body) = call(&app, Method::GET, "/api/products?name=PHONE", None).await;
    assert_eq!(names(&body), ["Smartphone"]);

    let (_, body) = call(&app, Method::GET, "/api/products?category=garden", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn empty_filter_values_are_ignored() {
    let (app, _) = create_test_app();

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/products?category=&minPrice=&maxPrice=&name=",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Laptop", "Smartphone", "Coffee Maker"]);
}

#[tokio::test]
async fn non_numeric_price_bounds_are_rejected() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::GET, "/api/products?minPrice=cheap", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Invalid minPrice filter: 'cheap' is not a number." })
    );

    let (status, body) = call(&app, Method::GET, "/api/products?maxPrice=NaN", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Invalid maxPrice filter: 'NaN' is not a number." })
    );
}

#[tokio::test]
async fn get_product_by_id() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::GET, "/api/products/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Smartphone");
    assert_eq!(body["price"], 800);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let (app, state) = create_test_app();
    let lamp = desk_lamp();

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(&lamp)),
        (Method::DELETE, None),
    ] {
        let (status, response) = call(&app, method.clone(), "/api/products/999", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(response, product_not_found());
    }

    assert_eq!(state.store.len().unwrap(), 3);
}

#[tokio::test]
async fn create_assigns_fresh_id_and_lists_record() {
    let (app, _) = create_test_app();
    let seed_ids: Vec<String> = seed_products().into_iter().map(|p| p.id).collect();

    let (status, created) = call(&app, Method::POST, "/api/products", Some(&desk_lamp())).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();
    assert!(!seed_ids.contains(&id));

    let mut expected = desk_lamp();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    let (_, listed) = call(&app, Method::GET, "/api/products", None).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed.last(), Some(&created));

    let (status, fetched) = call(&app, Method::GET, &format!("/api/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_accepts_in_stock_false() {
    let (app, _) = create_test_app();
    let mut body = desk_lamp();
    body["inStock"] = json!(false);

    let (status, created) = call(&app, Method::POST, "/api/products", Some(&body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["inStock"], false);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let (app, state) = create_test_app();
    let missing = json!({ "error": "All product fields are required." });
    let bad_price = json!({ "error": "Price must be a positive number." });

    let mut no_stock = desk_lamp();
    no_stock.as_object_mut().unwrap().remove("inStock");

    let mut empty_name = desk_lamp();
    empty_name["name"] = json!("");

    let mut zero_price = desk_lamp();
    zero_price["price"] = json!(0);

    let mut negative_price = desk_lamp();
    negative_price["price"] = json!(-3);

    let mut text_price = desk_lamp();
    text_price["price"] = json!("35");

    let cases = [
        (no_stock, &missing),
        (empty_name, &missing),
        (json!({}), &missing),
        (zero_price, &bad_price),
        (negative_price, &bad_price),
        (text_price, &bad_price),
    ];

    for (body, expected) in cases {
        let (status, response) = call(&app, Method::POST, "/api/products", Some(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(&response, expected, "{body}");
    }

    assert_eq!(state.store.len().unwrap(), 3);
}

#[tokio::test]
async fn create_without_json_body_is_missing_fields() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::POST, "/api/products", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "All product fields are required." }));

    // A JSON body sent as plain text is not parsed
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header("x-api-key", API_KEY)
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(serde_json::to_vec(&desk_lamp()).unwrap()))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "All product fields are required." }));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, state) = create_test_app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header("x-api-key", API_KEY)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Lamp\","))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Malformed JSON body:"));
    assert_eq!(state.store.len().unwrap(), 3);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (app, _) = create_test_app();
    let mut body = desk_lamp();
    body["description"] = json!("x".repeat(200 * 1024));

    let (status, response) = call(&app, Method::POST, "/api/products", Some(&body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response, json!({ "error": "request entity too large" }));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (app, _) = create_test_app();
    let replacement = json!({
        "name": "Espresso Machine",
        "description": "15 bar pump espresso machine",
        "price": 249.99,
        "category": "Kitchen",
        "inStock": true
    });

    let (status, updated) =
        call(&app, Method::PUT, "/api/products/3", Some(&replacement)).await;

    assert_eq!(status, StatusCode::OK);
    let mut expected = replacement.clone();
    expected["id"] = json!("3");
    assert_eq!(updated, expected);

    let (_, fetched) = call(&app, Method::GET, "/api/products/3", None).await;
    assert_eq!(fetched, expected);

    // Position in the collection is unchanged
    let (_, listed) = call(&app, Method::GET, "/api/products", None).await;
    assert_eq!(names(&listed), ["Laptop", "Smartphone", "Espresso Machine"]);
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::PUT, "/api/products/999", Some(&json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "All product fields are required." }));

    let mut no_stock = desk_lamp();
    no_stock.as_object_mut().unwrap().remove("inStock");
    let (status, _) = call(&app, Method::PUT, "/api/products/1", Some(&no_stock)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, laptop) = call(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(laptop["name"], "Laptop");
}

#[tokio::test]
async fn delete_succeeds_once_then_not_found() {
    let (app, _) = create_test_app();

    let (status, body) = call(&app, Method::DELETE, "/api/products/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");
    assert_eq!(body["product"]["id"], "2");
    assert_eq!(body["product"]["name"], "Smartphone");

    for _ in 0..3 {
        let (status, body) = call(&app, Method::DELETE, "/api/products/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, product_not_found());
    }

    let (_, listed) = call(&app, Method::GET, "/api/products", None).await;
    assert_eq!(names(&listed), ["Laptop", "Coffee Maker"]);
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let (app, _) = create_test_app();
    let route_not_found = json!({ "error": "Route not found" });

    let (status, body) = call(&app, Method::GET, "/api/orders", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, route_not_found);

    let (status, body) = call(&app, Method::PATCH, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, route_not_found);

    // Outside /api no key is needed to learn a route does not exist
    let (status, body) = send(&app, request(Method::GET, "/nowhere", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, route_not_found);
}
