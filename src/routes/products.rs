use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    routes::params::{ProductFilter, ProductQuery},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = Product,
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 400, description = "Missing or invalid fields"),
        (status = 413, description = "Body too large"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let mut product = Product::default();
    product.from_json(&payload)?;
    product_service::create(&state.orm, &mut product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("name" = Option<String>, Query, description = "Exact product name"),
        ("category" = Option<String>, Query, description = "Category name, e.g. FOOD"),
        ("available" = Option<String>, Query, description = "\"true\" (any case) for available, anything else for unavailable"),
    ),
    responses(
        (status = 200, description = "List products", body = [Product]),
        (status = 400, description = "Unknown category"),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = match query.into_filter()? {
        ProductFilter::Name(name) => product_service::find_by_name(&state.orm, &name).await?,
        ProductFilter::Category(category) => {
            product_service::find_by_category(&state.orm, category).await?
        }
        ProductFilter::Available(available) => {
            product_service::find_by_availability(&state.orm, available).await?
        }
        ProductFilter::All => product_service::all(&state.orm).await?,
    };

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> AppResult<Json<Product>> {
    let Path(id) = path?;
    tracing::info!(id, "request to read product");
    let product = find_or_404(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = path?;
    tracing::info!(id, "request to update product");
    let mut product = find_or_404(&state, id).await?;

    let Json(payload) = payload?;
    product.from_json(&payload)?;
    product.id = Some(id);
    product_service::update(&state.orm, &mut product).await?;

    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted product, or it did not exist"),
        (status = 400, description = "Invalid product ID")
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    tracing::info!(id, "request to delete product");
    if let Some(product) = product_service::find(&state.orm, id).await? {
        product_service::delete(&state.orm, &product).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn find_or_404(state: &AppState, id: i32) -> AppResult<Product> {
    match product_service::find(&state.orm, id).await? {
        Some(product) => Ok(product),
        None => Err(AppError::NotFound(format!(
            "Product with id '{id}' was not found."
        ))),
    }
}
