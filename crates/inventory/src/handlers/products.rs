//! Product endpoints.
//!
//! Thin JSON glue over the repository contract: predicates go in, decoded
//! entities come out. An empty search result is a valid 200 response,
//! distinct from an error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spazalink_core::product::{Product, ProductFilter};

use crate::{error::AppError, models::CreateProduct, state::AppState};

/// Search products with optional filters (GET /products).
pub async fn search_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.search_products(&filter).await?;
    Ok(Json(products))
}

/// Get a single product by ID (GET /products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.products.get_product(id).await? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new product (POST /products).
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = payload.into_product();
    let created = state.products.create_product(&product).await?;

    tracing::info!(product_id = %created.id, category = %created.category, "Created product");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Query parameters for the price calculation endpoint.
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub quantity: u32,
}

/// Price quote for a quantity of a product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Calculate price for a quantity (GET /products/{id}/price).
pub async fn calculate_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PriceQuery>,
) -> Result<Response, AppError> {
    let Some(product) = state.products.get_product(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let total_price = product.base_price * Decimal::from(query.quantity);
    Ok(Json(PriceQuote {
        product_id: id,
        quantity: query.quantity,
        unit_price: product.base_price,
        total_price,
    })
    .into_response())
}
