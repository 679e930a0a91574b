//! Product catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use grocer_core::Product;
use grocer_ledger::{LedgerState, NewProduct, ProductPatch};

use crate::error::ApiError;
use crate::routes::DeleteResponse;

/// `GET /api/v1/products`
pub async fn list(State(state): State<LedgerState>) -> Json<Vec<Product>> {
    let products = state.with_ledger(|ledger| ledger.list_products());
    debug!(count = products.len(), "Listing products");
    Json(products)
}

/// `GET /api/v1/products/{id}`
pub async fn get_one(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state.with_ledger(|ledger| ledger.get_product(id))?;
    Ok(Json(product))
}

/// `POST /api/v1/products`
pub async fn create(
    State(state): State<LedgerState>,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.with_ledger_mut(|ledger| ledger.create_product(body))?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PATCH /api/v1/products/{id}`
pub async fn patch(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
    Json(body): Json<ProductPatch>,
) -> Result<Json<Product>, ApiError> {
    let product = state.with_ledger_mut(|ledger| ledger.patch_product(id, body))?;
    Ok(Json(product))
}

/// `DELETE /api/v1/products/{id}`
pub async fn delete(
    State(state): State<LedgerState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let product = state.with_ledger_mut(|ledger| ledger.delete_product(id))?;
    Ok(Json(DeleteResponse {
        message: format!("Product '{}' deleted", product.name),
        id,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_and_get() {
        let state = LedgerState::seeded();

        let Json(products) = list(State(state.clone())).await;
        assert_eq!(products.len(), 6);

        let Json(product) = get_one(State(state.clone()), Path(3)).await.unwrap();
        assert_eq!(product.name, "Whole Milk");

        let err = get_one(State(state), Path(777)).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_create_returns_201() {
        let state = LedgerState::seeded();

        let (status, Json(product)) = create(
            State(state.clone()),
            Json(NewProduct {
                name: "Greek Yogurt".to_string(),
                category: "Dairy".to_string(),
                price_cents: 299,
                inventory: 20,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(product.id, 7);
    }

    #[tokio::test]
    async fn test_create_validation_error() {
        let state = LedgerState::seeded();

        let err = create(
            State(state),
            Json(NewProduct {
                name: "".to_string(),
                category: "Dairy".to_string(),
                price_cents: 299,
                inventory: 20,
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_patch_and_delete() {
        let state = LedgerState::seeded();

        let Json(product) = patch(
            State(state.clone()),
            Path(1),
            Json(ProductPatch {
                price_cents: Some(150),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(product.price_cents, 150);

        let Json(response) = delete(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(response.id, 1);
        assert!(response.message.contains("Honeycrisp Apple"));

        let err = get_one(State(state), Path(1)).await.unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }
}
