//! Inventory endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use grocer_core::InventoryLevel;
use grocer_ledger::LedgerState;

use crate::error::ApiError;

/// Request body for `PUT /api/v1/inventory/{id}`.
#[derive(Debug, Deserialize)]
pub struct SetInventoryRequest {
    pub quantity: i64,
}

/// Response body for `PUT /api/v1/inventory/{id}`.
#[derive(Debug, Serialize)]
pub struct InventoryUpdateResponse {
    pub product_id: i64,
    pub inventory: i64,
    pub message: String,
}

/// `GET /api/v1/inventory`
pub async fn levels(State(state): State<LedgerState>) -> Json<Vec<InventoryLevel>> {
    Json(state.with_ledger(|ledger| ledger.inventory_levels()))
}

/// `PUT /api/v1/inventory/{id}`
///
/// Sets an absolute stock level; this is not a delta.
pub async fn set(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
    Json(body): Json<SetInventoryRequest>,
) -> Result<Json<InventoryUpdateResponse>, ApiError> {
    let product = state.with_ledger_mut(|ledger| ledger.set_inventory(id, body.quantity))?;
    Ok(Json(InventoryUpdateResponse {
        product_id: product.id,
        inventory: product.inventory,
        message: format!("Inventory for '{}' set to {}", product.name, product.inventory),
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
