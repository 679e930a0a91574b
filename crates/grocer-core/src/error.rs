//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - Ledger/domain errors                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  store-api errors (in app)                                             │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → JSON response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, available stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are raised synchronously to the caller and never retried internally:
/// the ledger has no transient-failure modes to retry against.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist in the ledger
    /// - Product was deleted
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Order cannot be found.
    ///
    /// ## When This Occurs
    /// - Order id doesn't exist in the ledger
    /// - Order was removed by a cancellation
    #[error("Order not found: {0}")]
    OrderNotFound(i64),

    /// Customer cannot be found.
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    /// Insufficient stock to fill an order line.
    ///
    /// ## When This Occurs
    /// - Requested quantity exceeds the product's current inventory
    ///
    /// ## User Workflow
    /// ```text
    /// Place order (qty: 51)
    ///      │
    ///      ▼
    /// Check stock: available=50
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Honeycrisp Apple", available: 50, requested: 51 }
    ///      │
    ///      ▼
    /// UI shows: "Only 50 Honeycrisp Apple in stock"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Order status transition is not allowed.
    ///
    /// ## When This Occurs
    /// - Moving a completed order back to pending
    /// - Reviving a cancelled order
    ///
    /// The allowed transition graph is defined on [`OrderStatus`]:
    /// `pending → completed`, `pending → cancelled`, nothing leaves a
    /// terminal state. Same-status updates are treated as no-ops by the
    /// ledger and never reach this error.
    #[error("Order {order_id} cannot move from {from:?} to {to:?}")]
    InvalidStatusTransition {
        order_id: i64,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Collection has too many entries.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
