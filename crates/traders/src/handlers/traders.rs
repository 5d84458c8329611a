//! Trader endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use spazalink_core::trader::Trader;

use crate::{error::AppError, models::CreateTrader, state::AppState};

/// Register a new trader (POST /traders).
///
/// The stored trader always starts pending verification at Bronze tier;
/// the repository discards any caller-supplied status fields.
pub async fn create_trader(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrader>,
) -> Result<(StatusCode, Json<Trader>), AppError> {
    let trader = payload.into_trader();
    let created = state.traders.create_trader(&trader).await?;

    tracing::info!(trader_id = %created.id, area = %created.area, "Registered trader");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a single trader by ID (GET /traders/{id}).
pub async fn get_trader(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.traders.get_trader(id).await? {
        Some(trader) => Ok(Json(trader).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// List traders operating in an area (GET /traders/area/{area}).
///
/// Area is required and non-empty; an unscoped listing is rejected with
/// 400 before the store is touched.
pub async fn get_traders_by_area(
    State(state): State<AppState>,
    Path(area): Path<String>,
) -> Result<Json<Vec<Trader>>, AppError> {
    let traders = state.traders.get_traders_by_area(&area).await?;
    Ok(Json(traders))
}
