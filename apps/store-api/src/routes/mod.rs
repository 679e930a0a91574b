//! # Route Modules
//!
//! One module per resource, assembled into the `/api/v1` router here.
//!
//! ## Surface
//! ```text
//! GET    /health
//! GET    /api/v1/products              list catalog
//! POST   /api/v1/products              create product (201)
//! GET    /api/v1/products/{id}         get product
//! PATCH  /api/v1/products/{id}         partial update
//! DELETE /api/v1/products/{id}         remove product
//! GET    /api/v1/inventory             stock levels
//! PUT    /api/v1/inventory/{id}        set absolute stock
//! GET    /api/v1/orders                list orders
//! POST   /api/v1/orders                place order (201)
//! GET    /api/v1/orders/{id}           get order
//! PATCH  /api/v1/orders/{id}/status    transition status
//! DELETE /api/v1/orders/{id}           cancel order
//! GET    /api/v1/customers             list customers
//! GET    /api/v1/customers/{id}        get customer
//! PATCH  /api/v1/customers/{id}        partial update
//! DELETE /api/v1/customers/{id}        remove customer
//! ```

pub mod customers;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod products;

use axum::routing::{get, put};
use axum::Router;
use serde::Serialize;

use grocer_ledger::LedgerState;

/// Response body for DELETE endpoints.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i64,
}

/// Builds the full application router.
pub fn router(state: LedgerState) -> Router {
    let api = Router::new()
        .route(
            "/products",
            get(products::list).post(products::create),
        )
        .route(
            "/products/{id}",
            get(products::get_one)
                .patch(products::patch)
                .delete(products::delete),
        )
        .route("/inventory", get(inventory::levels))
        .route("/inventory/{id}", put(inventory::set))
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/{id}",
            get(orders::get_one).delete(orders::delete),
        )
        .route("/orders/{id}/status", axum::routing::patch(orders::update_status))
        .route("/customers", get(customers::list))
        .route(
            "/customers/{id}",
            get(customers::get_one)
                .patch(customers::patch)
                .delete(customers::delete),
        );

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .with_state(state)
}
