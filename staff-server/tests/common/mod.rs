//! Shared helpers: an in-memory app and request plumbing

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use staff_server::{Config, ServerState, build_app};
use tower::ServiceExt;

/// Fresh state backed by its own in-memory store
pub async fn test_state() -> ServerState {
    let config = Config::in_memory();
    ServerState::initialize(&config)
        .await
        .expect("in-memory store should start")
}

/// Fresh app backed by its own in-memory store
pub async fn test_app() -> Router {
    build_app(test_state().await)
}

/// Number of rows in `table`, read straight from the store
pub async fn count_rows(state: &ServerState, table: &'static str) -> u64 {
    state
        .db
        .db
        .query("SELECT count() FROM type::table($table) GROUP ALL")
        .bind(("table", table))
        .await
        .and_then(|mut r| r.take::<Option<Value>>(0))
        .expect("count query should succeed")
        .and_then(|row| row["count"].as_u64())
        .unwrap_or(0)
}

/// Send a request and decode the JSON response (Null for an empty body)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    dispatch(app, request).await
}

/// Send a raw body with an explicit content type
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .expect("request should build");

    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response should be JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Create an employee and return its id
pub async fn create_employee(app: &Router, body: Value) -> String {
    let (status, json) = post(app, "/employees", body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["_id"]
        .as_str()
        .expect("created employee should carry an _id")
        .to_string()
}
