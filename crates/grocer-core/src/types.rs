//! # Domain Types
//!
//! Core domain types used throughout Grocer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  product_id     │       │
//! │  │  name           │   │  customer_id    │   │  name_snapshot  │       │
//! │  │  category       │   │  items          │   │  quantity       │       │
//! │  │  price_cents    │   │  total_cents    │   │  price_at_      │       │
//! │  │  inventory      │   │  status         │   │    purchase     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderStatus   │   │    Customer     │   │ InventoryLevel  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pending        │   │  id (i64)       │   │  product_id     │       │
//! │  │  Completed      │   │  name           │   │  inventory      │       │
//! │  │  Cancelled      │   │  email          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Order line items freeze the product name and price at order time
//! (`name_snapshot`, `price_at_purchase_cents`). An order's history is
//! therefore immune to later price changes and even product deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the store catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, stable for the lifetime of the product.
    pub id: i64,

    /// Display name shown in the catalog.
    pub name: String,

    /// Category grouping ("Fruits", "Dairy", etc.).
    pub category: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units currently in stock. Never negative.
    pub inventory: i64,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be filled from stock.
    pub fn can_fill(&self, quantity: i64) -> bool {
        self.inventory >= quantity
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
///
/// ## Transition Graph
/// ```text
///              ┌────────────┐
///      ┌───────│  Pending   │───────┐
///      │       └────────────┘       │
///      ▼                            ▼
/// ┌────────────┐             ┌────────────┐
/// │ Completed  │             │ Cancelled  │
/// └────────────┘             └────────────┘
///   (terminal)                 (terminal)
/// ```
/// Terminal states cannot be left. Same-status updates are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order has been placed and stock deducted; awaiting fulfilment.
    Pending,
    /// Order has been fulfilled.
    Completed,
    /// Order was cancelled and its stock restored.
    Cancelled,
}

impl OrderStatus {
    /// Checks whether a transition from `self` to `to` is allowed.
    ///
    /// Same-status "transitions" return true so callers can treat them
    /// as no-ops rather than errors.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self == to || self == OrderStatus::Pending
    }

    /// Checks whether this status is terminal (no transitions out).
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
/// Uses snapshot pattern to freeze product data at time of purchase.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: i64,

    /// Product name at time of purchase (frozen).
    pub name_snapshot: String,

    /// Quantity ordered. Always positive.
    pub quantity: i64,

    /// Unit price in cents at time of purchase (frozen).
    /// Later product price changes never touch this value.
    pub price_at_purchase_cents: i64,
}

impl OrderItem {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn price_at_purchase(&self) -> Money {
        Money::from_cents(self.price_at_purchase_cents)
    }

    /// Line total (price at purchase × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.price_at_purchase_cents * self.quantity
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier, assigned monotonically and never reused.
    pub id: i64,

    /// Customer who placed the order.
    pub customer_id: i64,

    /// Line items, in the order they were requested.
    pub items: Vec<OrderItem>,

    /// Total price in cents. Always equals the sum of line totals.
    pub total_cents: i64,

    /// Current lifecycle status.
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Recomputes the total from line items.
    ///
    /// The stored `total_cents` must always equal this value; the ledger
    /// enforces it at creation and items are immutable afterwards.
    pub fn computed_total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer in the store directory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// =============================================================================
// Inventory Level
// =============================================================================

/// Stock level projection for the inventory endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryLevel {
    pub product_id: i64,
    pub inventory: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_transitions() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Pending.can_transition_to(Pending));

        // Terminal states only allow the no-op transition
        assert!(Completed.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Completed));
    }

    #[test]
    fn test_order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            product_id: 1,
            name_snapshot: "Honeycrisp Apple".to_string(),
            quantity: 4,
            price_at_purchase_cents: 125,
        };
        assert_eq!(item.line_total_cents(), 500);
    }

    #[test]
    fn test_computed_total_matches_lines() {
        let order = Order {
            id: 1001,
            customer_id: 1,
            items: vec![
                OrderItem {
                    product_id: 1,
                    name_snapshot: "Honeycrisp Apple".to_string(),
                    quantity: 2,
                    price_at_purchase_cents: 125,
                },
                OrderItem {
                    product_id: 3,
                    name_snapshot: "Whole Milk".to_string(),
                    quantity: 1,
                    price_at_purchase_cents: 399,
                },
            ],
            total_cents: 649,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        assert_eq!(order.computed_total_cents(), order.total_cents);
    }

    #[test]
    fn test_can_fill() {
        let product = Product {
            id: 1,
            name: "Honeycrisp Apple".to_string(),
            category: "Fruits".to_string(),
            price_cents: 125,
            inventory: 50,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(product.can_fill(50));
        assert!(!product.can_fill(51));
    }
}
