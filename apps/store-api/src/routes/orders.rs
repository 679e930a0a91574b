//! Order endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use grocer_core::{Order, OrderStatus};
use grocer_ledger::{LedgerState, LineRequest};

use crate::error::ApiError;
use crate::routes::DeleteResponse;

fn default_customer_id() -> i64 {
    1
}

/// Request body for `POST /api/v1/orders`.
///
/// `customer_id` defaults to 1, matching the walk-in counter flow where
/// the client never asks who is buying.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default = "default_customer_id")]
    pub customer_id: i64,
    pub items: Vec<LineRequest>,
}

/// Request body for `PATCH /api/v1/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// `GET /api/v1/orders`
pub async fn list(State(state): State<LedgerState>) -> Json<Vec<Order>> {
    Json(state.with_ledger(|ledger| ledger.list_orders()))
}

/// `GET /api/v1/orders/{id}`
pub async fn get_one(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<Order>, ApiError> {
    let order = state.with_ledger(|ledger| ledger.get_order(id))?;
    Ok(Json(order))
}

/// `POST /api/v1/orders`
pub async fn create(
    State(state): State<LedgerState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order =
        state.with_ledger_mut(|ledger| ledger.place_order(body.customer_id, &body.items))?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `PATCH /api/v1/orders/{id}/status`
pub async fn update_status(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    let order = state.with_ledger_mut(|ledger| ledger.update_order_status(id, body.status))?;
    Ok(Json(order))
}

/// `DELETE /api/v1/orders/{id}`
///
/// Cancels the order, restores its stock, and removes the record.
pub async fn delete(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let order = state.with_ledger_mut(|ledger| ledger.cancel_order(id))?;
    info!(id = order.id, "Order cancelled via API");
    Ok(Json(DeleteResponse {
        message: format!("Order {} cancelled and stock restored", order.id),
        id,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
