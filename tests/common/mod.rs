#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use product_catalog::{
    db::{create_orm_conn, run_migrations},
    entity::products::Category,
    models::Product,
    routes::create_app,
    state::AppState,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn setup_app() -> anyhow::Result<Router> {
    Ok(create_app(setup_state().await?))
}

pub fn sample_product(name: &str, category: Category, available: bool) -> Product {
    Product {
        id: None,
        name: name.to_string(),
        description: format!("{name} for testing"),
        price: Decimal::new(1250, 2),
        available,
        category,
    }
}

pub fn product_body(product: &Product) -> Value {
    serde_json::to_value(product).expect("product json")
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    dispatch(app, builder.body(body).expect("request")).await
}

/// Send a raw body, with or without a content type.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    dispatch(app, builder.body(body.into()).expect("request")).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}
