use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use vehicle_search::config::environment::EnvironmentConfig;
use vehicle_search::repositories::InMemoryVehicleRepository;
use vehicle_search::routes::create_app_router;
use vehicle_search::state::AppState;

const INVALID_RANGE: &str = "Not valid search query parameter input";

// Función helper para crear la app de test
fn create_test_app() -> Router {
    let config = EnvironmentConfig::from_lookup(|name| match name {
        "VEHICLE_STORE" => Some("memory".to_string()),
        _ => None,
    })
    .unwrap();

    create_app_router(AppState::new(Arc::new(InMemoryVehicleRepository::new()), config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {} -> {}", uri, body);
    serde_json::from_str(&body).unwrap()
}

async fn post_vehicle(app: &Router, payload: Value) -> (StatusCode, String) {
    let request = Request::post("/vehicles")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

async fn insert(app: &Router, make: &str, model: &str, year: i32, color: &str) -> i64 {
    let (status, body) = post_vehicle(
        app,
        json!({
            "make": make, "model": model, "year": year,
            "color": color, "price": 2000, "miles": 30000
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "POST /vehicles -> {}", body);
    let value: Value = serde_json::from_str(&body).unwrap();
    value["ID"].as_i64().unwrap()
}

/// Único array de registros dentro del sobre `{label: [...]}`
fn records(body: &Value) -> (&String, &Vec<Value>) {
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    let (label, value) = object.iter().next().unwrap();
    (label, value.as_array().unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let body = get_json(&app, "/health").await;

    assert_eq!(body["service"], "vehicle-search");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_insert_then_search_by_make() {
    let app = create_test_app();

    let (status, body) = post_vehicle(
        &app,
        json!({"make": "Honda", "model": "Civic", "year": 2001, "color": "Red", "price": 2000, "miles": 30000}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"ID": 1}));

    let body = get_json(&app, "/searchbymake/Honda").await;
    let (label, vehicles) = records(&body);
    assert_eq!(label, "List of Vehicles with make of Honda - Showing all result(s)");
    assert_eq!(vehicles.len(), 1);

    let vehicle = &vehicles[0];
    assert_eq!(vehicle["ID"], json!(1));
    assert_eq!(vehicle["Make"], json!("Honda"));
    assert_eq!(vehicle["Model"], json!("Civic"));
    assert_eq!(vehicle["Year"], json!(2001));
    assert_eq!(vehicle["Color"], json!("Red"));
    assert_eq!(vehicle["Price"].as_f64(), Some(2000.0));
    assert_eq!(vehicle["Miles"], json!(30000));
}

#[tokio::test]
async fn test_insert_then_list_all() {
    let app = create_test_app();
    insert(&app, "Toyota", "Corolla", 2010, "Blue").await;
    let id = insert(&app, "Ford", "Focus", 2015, "Black").await;

    let body = get_json(&app, "/vehicles").await;
    let (label, vehicles) = records(&body);
    assert_eq!(label, "List of Vehicles");
    assert_eq!(vehicles.len(), 2);

    let fords: Vec<_> = vehicles.iter().filter(|v| v["Make"] == "Ford").collect();
    assert_eq!(fords.len(), 1);
    assert_eq!(fords[0]["ID"].as_i64(), Some(id));
}

#[tokio::test]
async fn test_insert_missing_field_is_rejected() {
    let app = create_test_app();

    let (status, _) = post_vehicle(
        &app,
        json!({"make": "Honda", "model": "Civic", "year": 2001, "color": "Red", "price": 2000}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body = get_json(&app, "/vehicles").await;
    let (_, vehicles) = records(&body);
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn test_insert_accepts_null_miles() {
    let app = create_test_app();

    let (status, _) = post_vehicle(
        &app,
        json!({"make": "Honda", "model": "Civic", "year": 2001, "color": "Red", "price": -5.5, "miles": null}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = get_json(&app, "/vehicles").await;
    let (_, vehicles) = records(&body);
    assert_eq!(vehicles[0]["Miles"], Value::Null);
    assert_eq!(vehicles[0]["Price"].as_f64(), Some(-5.5));
}

#[tokio::test]
async fn test_search_returns_only_matching_records() {
    let app = create_test_app();
    insert(&app, "Honda", "Civic", 2001, "Red").await;
    insert(&app, "Honda", "Accord", 1998, "Dark Red").await;
    insert(&app, "Toyota", "Camry", 2020, "Blue").await;

    let body = get_json(&app, "/searchbycolor/Red").await;
    let (_, vehicles) = records(&body);
    assert_eq!(vehicles.len(), 2);
    assert!(vehicles.iter().all(|v| v["Color"].as_str().unwrap().contains("Red")));

    let body = get_json(&app, "/searchbymodel/cord").await;
    let (label, vehicles) = records(&body);
    assert_eq!(label, "List of Vehicles with model of cord - Showing all result(s)");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["Model"], "Accord");

    let body = get_json(&app, "/searchbymake/honda").await;
    let (_, vehicles) = records(&body);
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn test_search_by_year_is_textual() {
    let app = create_test_app();
    insert(&app, "Honda", "Civic", 2001, "Red").await;
    insert(&app, "Honda", "Civic", 2002, "Red").await;
    insert(&app, "Honda", "Civic", 1999, "Red").await;
    insert(&app, "Honda", "Civic", 1920, "Red").await;

    let body = get_json(&app, "/searchbyyear/20").await;
    let (label, vehicles) = records(&body);
    assert_eq!(label, "List of Vehicles with year of 20 - Showing all result(s)");
    let years: Vec<i64> = vehicles.iter().map(|v| v["Year"].as_i64().unwrap()).collect();
    assert_eq!(years.len(), 3);
    assert!(years.contains(&2001));
    assert!(years.contains(&2002));
    assert!(years.contains(&1920));
}

#[tokio::test]
async fn test_paginated_search_slices_matches() {
    let app = create_test_app();
    for _ in 0..5 {
        insert(&app, "Honda", "Civic", 2001, "Red").await;
    }
    insert(&app, "Toyota", "Camry", 2020, "Blue").await;

    let full = get_json(&app, "/searchbymake/Honda").await;
    let (_, all_matches) = records(&full);
    assert_eq!(all_matches.len(), 5);

    let body = get_json(&app, "/searchbymake/Honda/s=1e=3").await;
    let (label, page) = records(&body);
    assert_eq!(label, "List of Vehicles with make of Honda - Showing 2 result(s)");
    assert_eq!(page, &all_matches[1..3].to_vec());

    let body = get_json(&app, "/searchbymake/Honda/s=3e=100").await;
    let (label, page) = records(&body);
    assert_eq!(label, "List of Vehicles with make of Honda - Showing 2 result(s)");
    assert_eq!(page, &all_matches[3..].to_vec());
}

#[tokio::test]
async fn test_paginated_search_out_of_range_is_empty() {
    let app = create_test_app();
    for _ in 0..5 {
        insert(&app, "Honda", "Civic", 2001, "Red").await;
    }

    let body = get_json(&app, "/searchbycolor/Red/s=10e=20").await;
    let (label, page) = records(&body);
    assert_eq!(label, "List of Vehicles with color of Red - Showing 0 result(s)");
    assert!(page.is_empty());

    let body = get_json(&app, "/searchbyyear/2001/s=4e=2").await;
    let (label, page) = records(&body);
    assert_eq!(label, "List of Vehicles with year of 2001 - Showing 0 result(s)");
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_paginated_search_rejects_non_digit_bounds() {
    let app = create_test_app();
    insert(&app, "Honda", "Civic", 2001, "Red").await;

    for uri in [
        "/searchbymake/Honda/s=abce=3",
        "/searchbymodel/Civic/s=-1e=3",
        "/searchbyyear/2001/s=1.5e=3",
        "/searchbycolor/Red/s=0e=x",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, INVALID_RANGE, "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_range_segment_is_not_found() {
    let app = create_test_app();

    let (status, _) = get(&app, "/searchbymake/Honda/page2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
