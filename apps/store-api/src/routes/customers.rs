//! Customer directory endpoints.

use axum::extract::{Path, State};
use axum::Json;

use grocer_core::Customer;
use grocer_ledger::{CustomerPatch, LedgerState};

use crate::error::ApiError;
use crate::routes::DeleteResponse;

/// `GET /api/v1/customers`
pub async fn list(State(state): State<LedgerState>) -> Json<Vec<Customer>> {
    Json(state.with_ledger(|ledger| ledger.list_customers()))
}

/// `GET /api/v1/customers/{id}`
pub async fn get_one(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.with_ledger(|ledger| ledger.get_customer(id))?;
    Ok(Json(customer))
}

/// `PATCH /api/v1/customers/{id}`
pub async fn patch(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
    Json(body): Json<CustomerPatch>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.with_ledger_mut(|ledger| ledger.patch_customer(id, body))?;
    Ok(Json(customer))
}

/// `DELETE /api/v1/customers/{id}`
pub async fn delete(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let customer = state.with_ledger_mut(|ledger| ledger.delete_customer(id))?;
    Ok(Json(DeleteResponse {
        message: format!("Customer '{}' deleted", customer.name),
        id,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
