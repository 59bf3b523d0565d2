//! Utility bill endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::{NewUtilityBill, UtilityBill, UtilityBillRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /utility_bills
async fn list_bills(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UtilityBill>>, ApiError> {
    let bills = UtilityBillRepo::new(&state.pool).list().await?;
    Ok(Json(bills))
}

/// POST /utility_bills
async fn create_bill(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUtilityBill>,
) -> Result<(StatusCode, Json<UtilityBill>), ApiError> {
    let bill = UtilityBillRepo::new(&state.pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(bill)))
}

/// GET /utility_bills/{bill_id}
async fn get_bill(
    State(state): State<Arc<AppState>>,
    Path(bill_id): Path<i64>,
) -> Result<Json<UtilityBill>, ApiError> {
    let bill = UtilityBillRepo::new(&state.pool).get(bill_id).await?;
    Ok(Json(bill))
}

/// Utility bill routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/utility_bills", get(list_bills).post(create_bill))
        .route("/utility_bills/", get(list_bills).post(create_bill))
        .route("/utility_bills/{bill_id}", get(get_bill))
}
