//! # The Ledger
//!
//! All product, order, and customer state, plus every operation that
//! mutates it.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Lifecycle                                  │
//! │                                                                         │
//! │  1. PLACE                                                              │
//! │     └── place_order() → validate ALL lines, then deduct stock,         │
//! │         snapshot prices, append Order { status: Pending }              │
//! │                                                                         │
//! │  2. FULFIL                                                             │
//! │     └── update_order_status(Completed)                                 │
//! │                                                                         │
//! │  3. (OR) CANCEL                                                        │
//! │     ├── update_order_status(Cancelled) → restore stock, keep record    │
//! │     └── cancel_order() → restore stock, remove record                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two-Phase Order Placement
//! Placement validates every line (customer, quantity, product, stock)
//! before touching any inventory. A failure on the third line of a
//! three-line order therefore leaves the first two products' stock
//! untouched. Requested quantities are accumulated per product during
//! validation so duplicate lines cannot combine to oversell a product.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use grocer_core::validation::{
    validate_category, validate_email, validate_inventory, validate_order_lines,
    validate_price_cents, validate_product_name, validate_quantity,
};
use grocer_core::{
    CoreError, CoreResult, Customer, InventoryLevel, Money, Order, OrderItem, OrderStatus,
    Product, ValidationError, FIRST_ORDER_ID,
};

// =============================================================================
// Request Types
// =============================================================================

/// One requested line of a new order: a product and a quantity.
///
/// ## Wire Format
/// The original API contract spells the field `productId`; `product_id`
/// is accepted as an alias for Rust-side callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineRequest {
    #[serde(rename = "productId", alias = "product_id")]
    pub product_id: i64,
    pub quantity: i64,
}

/// Fields for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    /// Starting stock level. Defaults to zero.
    #[serde(default)]
    pub inventory: i64,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub inventory: Option<i64>,
}

/// Partial update for a customer. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Ledger
// =============================================================================

/// The in-memory inventory/order ledger.
///
/// ## Ownership
/// The ledger exclusively owns all three collections; no other component
/// mutates them directly. Order line items are owned by their parent
/// order and never shared.
///
/// ## Why an Explicit Object?
/// The collections are fields of a constructed value, not module-level
/// statics. Tests get isolation from fresh instances; the server injects
/// one shared instance behind a mutex (see [`crate::state::LedgerState`]).
#[derive(Debug)]
pub struct Ledger {
    products: Vec<Product>,
    orders: Vec<Order>,
    customers: Vec<Customer>,
    /// Next product id to hand out. Monotonic, never reused.
    next_product_id: i64,
    /// Next order id to hand out. Monotonic, never reused, even after
    /// cancellations remove earlier orders.
    next_order_id: i64,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            products: Vec::new(),
            orders: Vec::new(),
            customers: Vec::new(),
            next_product_id: 1,
            next_order_id: FIRST_ORDER_ID,
        }
    }

    /// Creates a ledger pre-populated with the demo catalog and customer
    /// directory from [`crate::seed`].
    pub fn seeded() -> Self {
        Ledger::from_parts(crate::seed::seed_products(), crate::seed::seed_customers())
    }

    /// Creates a ledger from existing collections.
    ///
    /// Id counters resume above the highest existing id so newly created
    /// entities never collide with seeded ones.
    pub fn from_parts(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        let next_product_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Ledger {
            products,
            orders: Vec::new(),
            customers,
            next_product_id,
            next_order_id: FIRST_ORDER_ID,
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Returns a snapshot copy of the product catalog. No side effects.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Gets a product by id.
    pub fn get_product(&self, product_id: i64) -> CoreResult<Product> {
        self.find_product(product_id).cloned()
    }

    /// Creates a new product with the next available id.
    pub fn create_product(&mut self, new: NewProduct) -> CoreResult<Product> {
        validate_product_name(&new.name)?;
        validate_category(&new.category)?;
        validate_price_cents(new.price_cents)?;
        validate_inventory(new.inventory)?;

        let now = Utc::now();
        let product = Product {
            id: self.next_product_id,
            name: new.name.trim().to_string(),
            category: new.category.trim().to_string(),
            price_cents: new.price_cents,
            inventory: new.inventory,
            created_at: now,
            updated_at: now,
        };
        self.next_product_id += 1;
        self.products.push(product.clone());

        info!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Merges the provided fields into an existing product.
    ///
    /// Each provided field is validated before any of them is applied,
    /// so a rejected patch leaves the product untouched.
    pub fn patch_product(&mut self, product_id: i64, patch: ProductPatch) -> CoreResult<Product> {
        if let Some(ref name) = patch.name {
            validate_product_name(name)?;
        }
        if let Some(ref category) = patch.category {
            validate_category(category)?;
        }
        if let Some(price_cents) = patch.price_cents {
            validate_price_cents(price_cents)?;
        }
        if let Some(inventory) = patch.inventory {
            validate_inventory(inventory)?;
        }

        let product = self.find_product_mut(product_id)?;
        if let Some(name) = patch.name {
            product.name = name.trim().to_string();
        }
        if let Some(category) = patch.category {
            product.category = category.trim().to_string();
        }
        if let Some(price_cents) = patch.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(inventory) = patch.inventory {
            product.inventory = inventory;
        }
        product.updated_at = Utc::now();

        debug!(id = product_id, "Product patched");
        Ok(product.clone())
    }

    /// Removes a product from the catalog.
    ///
    /// Historical orders that reference the product are left in place:
    /// their line items carry name and price snapshots, so nothing
    /// dangles. Cancelling such an order later skips restoration for the
    /// removed product.
    pub fn delete_product(&mut self, product_id: i64) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;

        let product = self.products.remove(index);
        info!(id = product_id, name = %product.name, "Product deleted");
        Ok(product)
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// Returns the stock level of every product.
    pub fn inventory_levels(&self) -> Vec<InventoryLevel> {
        self.products
            .iter()
            .map(|p| InventoryLevel {
                product_id: p.id,
                inventory: p.inventory,
            })
            .collect()
    }

    /// Sets a product's stock level to an absolute quantity.
    pub fn set_inventory(&mut self, product_id: i64, quantity: i64) -> CoreResult<Product> {
        validate_inventory(quantity)?;

        let product = self.find_product_mut(product_id)?;
        product.inventory = quantity;
        product.updated_at = Utc::now();

        debug!(id = product_id, quantity, "Inventory set");
        Ok(product.clone())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Places a new order.
    ///
    /// ## Two Phases
    /// ```text
    /// Phase 1 (validate, no mutation):
    ///   ├── line count within bounds
    ///   ├── customer exists
    ///   └── per line: quantity valid, product exists,
    ///       accumulated quantity ≤ current stock
    /// Phase 2 (commit):
    ///   ├── deduct accumulated quantity per product
    ///   └── append Order { status: Pending } with frozen prices
    /// ```
    /// Any phase-1 failure returns before a single unit of stock moves.
    pub fn place_order(&mut self, customer_id: i64, lines: &[LineRequest]) -> CoreResult<Order> {
        validate_order_lines(lines.len())?;

        if !self.customers.iter().any(|c| c.id == customer_id) {
            return Err(CoreError::CustomerNotFound(customer_id));
        }

        // Phase 1: validate every line and freeze snapshots.
        // Quantities accumulate per product so duplicate lines for the
        // same product are checked against stock combined, not one by one.
        let mut requested: BTreeMap<i64, i64> = BTreeMap::new();
        let mut items = Vec::with_capacity(lines.len());
        let mut total = Money::zero();

        for line in lines {
            validate_quantity(line.quantity)?;
            let product = self.find_product(line.product_id)?;

            let so_far = requested.entry(line.product_id).or_insert(0);
            *so_far += line.quantity;
            if product.inventory < *so_far {
                return Err(CoreError::InsufficientStock {
                    product_id: product.id,
                    name: product.name.clone(),
                    available: product.inventory,
                    requested: *so_far,
                });
            }

            total += product.price().multiply_quantity(line.quantity);
            items.push(OrderItem {
                product_id: product.id,
                name_snapshot: product.name.clone(),
                quantity: line.quantity,
                price_at_purchase_cents: product.price_cents,
            });
        }

        // Phase 2: commit. Nothing below this point can fail.
        let now = Utc::now();
        for (&product_id, &quantity) in &requested {
            // Validated above; the product cannot have vanished since.
            if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
                product.inventory -= quantity;
                product.updated_at = now;
            }
        }

        let order = Order {
            id: self.next_order_id,
            customer_id,
            items,
            total_cents: total.cents(),
            status: OrderStatus::Pending,
            created_at: now,
        };
        self.next_order_id += 1;
        self.orders.push(order.clone());

        info!(
            id = order.id,
            customer_id,
            total = %order.total(),
            lines = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }

    /// Returns a snapshot copy of all orders. No side effects.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Gets an order by id.
    pub fn get_order(&self, order_id: i64) -> CoreResult<Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or(CoreError::OrderNotFound(order_id))
    }

    /// Updates an order's status along the allowed transition graph.
    ///
    /// ## Transitions
    /// - `pending → completed`: fulfilment
    /// - `pending → cancelled`: cancellation that keeps the record;
    ///   stock is restored exactly as [`Ledger::cancel_order`] would
    /// - same status: no-op, returns the order unchanged
    /// - anything else: [`CoreError::InvalidStatusTransition`]
    pub fn update_order_status(
        &mut self,
        order_id: i64,
        new_status: OrderStatus,
    ) -> CoreResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or(CoreError::OrderNotFound(order_id))?;

        let from = self.orders[index].status;
        if from == new_status {
            return Ok(self.orders[index].clone());
        }
        if !from.can_transition_to(new_status) {
            return Err(CoreError::InvalidStatusTransition {
                order_id,
                from,
                to: new_status,
            });
        }

        if new_status == OrderStatus::Cancelled {
            let lines: Vec<(i64, i64)> = self.orders[index]
                .items
                .iter()
                .map(|i| (i.product_id, i.quantity))
                .collect();
            self.restore_stock(&lines);
        }

        self.orders[index].status = new_status;
        info!(id = order_id, from = ?from, to = ?new_status, "Order status updated");
        Ok(self.orders[index].clone())
    }

    /// Cancels an order: restores stock and removes the record.
    ///
    /// An order already in `cancelled` status had its stock restored when
    /// it entered that state, so removal skips restoration to avoid
    /// crediting the inventory twice.
    pub fn cancel_order(&mut self, order_id: i64) -> CoreResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or(CoreError::OrderNotFound(order_id))?;

        if self.orders[index].status != OrderStatus::Cancelled {
            let lines: Vec<(i64, i64)> = self.orders[index]
                .items
                .iter()
                .map(|i| (i.product_id, i.quantity))
                .collect();
            self.restore_stock(&lines);
        }

        let order = self.orders.remove(index);
        info!(id = order_id, "Order cancelled");
        Ok(order)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Returns a snapshot copy of the customer directory.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    /// Gets a customer by id.
    pub fn get_customer(&self, customer_id: i64) -> CoreResult<Customer> {
        self.customers
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
            .ok_or(CoreError::CustomerNotFound(customer_id))
    }

    /// Merges the provided fields into an existing customer.
    pub fn patch_customer(
        &mut self,
        customer_id: i64,
        patch: CustomerPatch,
    ) -> CoreResult<Customer> {
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "name".to_string(),
                }
                .into());
            }
        }
        if let Some(ref email) = patch.email {
            validate_email(email)?;
        }

        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        if let Some(name) = patch.name {
            customer.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            customer.email = email.trim().to_string();
        }

        debug!(id = customer_id, "Customer patched");
        Ok(customer.clone())
    }

    /// Removes a customer from the directory.
    ///
    /// Existing orders keep their `customer_id` as a historical reference.
    pub fn delete_customer(&mut self, customer_id: i64) -> CoreResult<Customer> {
        let index = self
            .customers
            .iter()
            .position(|c| c.id == customer_id)
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        let customer = self.customers.remove(index);
        info!(id = customer_id, "Customer deleted");
        Ok(customer)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn find_product(&self, product_id: i64) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(CoreError::ProductNotFound(product_id))
    }

    fn find_product_mut(&mut self, product_id: i64) -> CoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(CoreError::ProductNotFound(product_id))
    }

    /// Credits quantities back to product stock.
    ///
    /// Lines whose product has since been deleted are skipped: the
    /// catalog entry is gone and there is no stock row to credit.
    fn restore_stock(&mut self, lines: &[(i64, i64)]) {
        let now = Utc::now();
        for &(product_id, quantity) in lines {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
                product.inventory += quantity;
                product.updated_at = now;
            }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, quantity: i64) -> LineRequest {
        LineRequest {
            product_id,
            quantity,
        }
    }

    fn stock_of(ledger: &Ledger, product_id: i64) -> i64 {
        ledger.get_product(product_id).unwrap().inventory
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    #[test]
    fn test_place_order_deducts_stock_and_freezes_prices() {
        let mut ledger = Ledger::seeded();

        let order = ledger
            .place_order(1, &[line(1, 4), line(3, 2)])
            .unwrap();

        assert_eq!(order.id, FIRST_ORDER_ID);
        assert_eq!(order.status, OrderStatus::Pending);
        // 4 × $1.25 + 2 × $3.99 = $5.00 + $7.98
        assert_eq!(order.total_cents, 1298);
        assert_eq!(order.items[0].price_at_purchase_cents, 125);
        assert_eq!(order.items[0].name_snapshot, "Honeycrisp Apple");

        assert_eq!(stock_of(&ledger, 1), 46);
        assert_eq!(stock_of(&ledger, 3), 28);
    }

    #[test]
    fn test_order_ids_are_monotonic_and_never_reused() {
        let mut ledger = Ledger::seeded();

        let first = ledger.place_order(1, &[line(1, 1)]).unwrap();
        let second = ledger.place_order(1, &[line(1, 1)]).unwrap();
        assert_eq!(second.id, first.id + 1);

        // Cancelling the second order must not free its id for reuse
        ledger.cancel_order(second.id).unwrap();
        let third = ledger.place_order(1, &[line(1, 1)]).unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[test]
    fn test_place_order_exact_stock_boundary() {
        let mut ledger = Ledger::seeded();

        // Sourdough Bread has exactly 15 in stock
        let order = ledger.place_order(1, &[line(4, 15)]).unwrap();
        assert_eq!(order.items[0].quantity, 15);
        assert_eq!(stock_of(&ledger, 4), 0);
    }

    #[test]
    fn test_place_order_insufficient_stock_leaves_inventory_unchanged() {
        let mut ledger = Ledger::seeded();

        // Honeycrisp Apple has 50 in stock; request 51
        let err = ledger.place_order(1, &[line(1, 51)]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 50,
                requested: 51,
                ..
            }
        ));
        assert_eq!(stock_of(&ledger, 1), 50);
        assert!(ledger.list_orders().is_empty());
    }

    #[test]
    fn test_sequential_orders_against_shrinking_stock() {
        let mut ledger = Ledger::seeded();
        ledger.set_inventory(1, 15).unwrap();

        // First 10-unit order succeeds, leaving 5
        ledger.place_order(1, &[line(1, 10)]).unwrap();
        assert_eq!(stock_of(&ledger, 1), 5);

        // Second 10-unit order fails, stock unchanged by the failed attempt
        let err = ledger.place_order(1, &[line(1, 10)]).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert_eq!(stock_of(&ledger, 1), 5);
    }

    #[test]
    fn test_failing_later_line_mutates_nothing() {
        let mut ledger = Ledger::seeded();

        // First two lines are fine; the third asks for more milk than exists
        let err = ledger
            .place_order(1, &[line(1, 5), line(2, 5), line(3, 31)])
            .unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));

        // No partial deductions from the earlier lines
        assert_eq!(stock_of(&ledger, 1), 50);
        assert_eq!(stock_of(&ledger, 2), 120);
        assert_eq!(stock_of(&ledger, 3), 30);
        assert!(ledger.list_orders().is_empty());
    }

    #[test]
    fn test_duplicate_lines_are_checked_against_stock_combined() {
        let mut ledger = Ledger::seeded();
        ledger.set_inventory(1, 15).unwrap();

        // 10 + 10 = 20 > 15, even though each line alone would fit
        let err = ledger
            .place_order(1, &[line(1, 10), line(1, 10)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 15,
                requested: 20,
                ..
            }
        ));
        assert_eq!(stock_of(&ledger, 1), 15);
    }

    #[test]
    fn test_duplicate_lines_within_stock_both_apply() {
        let mut ledger = Ledger::seeded();

        let order = ledger.place_order(1, &[line(1, 10), line(1, 10)]).unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(stock_of(&ledger, 1), 30);
    }

    #[test]
    fn test_place_order_unknown_product() {
        let mut ledger = Ledger::seeded();
        let err = ledger.place_order(1, &[line(777, 1)]).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(777)));
    }

    #[test]
    fn test_place_order_unknown_customer() {
        let mut ledger = Ledger::seeded();
        let err = ledger.place_order(42, &[line(1, 1)]).unwrap_err();
        assert!(matches!(err, CoreError::CustomerNotFound(42)));
        assert_eq!(stock_of(&ledger, 1), 50);
    }

    #[test]
    fn test_place_order_rejects_bad_quantities() {
        let mut ledger = Ledger::seeded();

        let err = ledger.place_order(1, &[line(1, 0)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = ledger.place_order(1, &[line(1, -3)]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = ledger.place_order(1, &[]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_order_total_survives_later_price_change() {
        let mut ledger = Ledger::seeded();

        let order = ledger.place_order(1, &[line(1, 4)]).unwrap();
        assert_eq!(order.total_cents, 500);

        // Double the apple price after the fact
        ledger
            .patch_product(
                1,
                ProductPatch {
                    price_cents: Some(250),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = ledger.get_order(order.id).unwrap();
        assert_eq!(stored.items[0].price_at_purchase_cents, 125);
        assert_eq!(stored.total_cents, 500);
        assert_eq!(stored.computed_total_cents(), stored.total_cents);
    }

    // -------------------------------------------------------------------------
    // Cancellation
    // -------------------------------------------------------------------------

    #[test]
    fn test_place_then_cancel_round_trips_inventory() {
        let mut ledger = Ledger::seeded();
        let before: Vec<i64> = ledger.list_products().iter().map(|p| p.inventory).collect();

        let order = ledger
            .place_order(1, &[line(1, 4), line(2, 10), line(6, 3)])
            .unwrap();
        ledger.cancel_order(order.id).unwrap();

        let after: Vec<i64> = ledger.list_products().iter().map(|p| p.inventory).collect();
        assert_eq!(before, after);
        assert!(ledger.get_order(order.id).is_err());
    }

    #[test]
    fn test_cancel_unknown_order_leaves_ledger_unchanged() {
        let mut ledger = Ledger::seeded();
        let products_before = ledger.list_products().len();

        let err = ledger.cancel_order(9999).unwrap_err();
        assert!(matches!(err, CoreError::OrderNotFound(9999)));

        assert_eq!(ledger.list_products().len(), products_before);
        assert!(ledger.list_orders().is_empty());
    }

    #[test]
    fn test_cancel_after_status_cancelled_does_not_double_restore() {
        let mut ledger = Ledger::seeded();

        let order = ledger.place_order(1, &[line(1, 10)]).unwrap();
        assert_eq!(stock_of(&ledger, 1), 40);

        // Status update to cancelled restores the stock once
        ledger
            .update_order_status(order.id, OrderStatus::Cancelled)
            .unwrap();
        assert_eq!(stock_of(&ledger, 1), 50);

        // Removing the already-cancelled order must not credit it again
        ledger.cancel_order(order.id).unwrap();
        assert_eq!(stock_of(&ledger, 1), 50);
    }

    #[test]
    fn test_cancel_skips_deleted_product() {
        let mut ledger = Ledger::seeded();

        let order = ledger.place_order(1, &[line(1, 4), line(3, 2)]).unwrap();
        ledger.delete_product(1).unwrap();

        // Cancellation restores milk but silently skips the deleted apples
        ledger.cancel_order(order.id).unwrap();
        assert!(ledger.get_product(1).is_err());
        assert_eq!(stock_of(&ledger, 3), 30);
    }

    // -------------------------------------------------------------------------
    // Status Transitions
    // -------------------------------------------------------------------------

    #[test]
    fn test_pending_to_completed() {
        let mut ledger = Ledger::seeded();
        let order = ledger.place_order(1, &[line(1, 1)]).unwrap();

        let updated = ledger
            .update_order_status(order.id, OrderStatus::Completed)
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Completed);
        // Completion does not touch stock
        assert_eq!(stock_of(&ledger, 1), 49);
    }

    #[test]
    fn test_terminal_states_cannot_be_left() {
        let mut ledger = Ledger::seeded();
        let order = ledger.place_order(1, &[line(1, 1)]).unwrap();
        ledger
            .update_order_status(order.id, OrderStatus::Completed)
            .unwrap();

        let err = ledger
            .update_order_status(order.id, OrderStatus::Pending)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidStatusTransition {
                from: OrderStatus::Completed,
                to: OrderStatus::Pending,
                ..
            }
        ));

        let err = ledger
            .update_order_status(order.id, OrderStatus::Cancelled)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidStatusTransition { .. }));
    }

    #[test]
    fn test_cancelled_order_cannot_be_revived() {
        let mut ledger = Ledger::seeded();
        let order = ledger.place_order(1, &[line(1, 1)]).unwrap();
        ledger
            .update_order_status(order.id, OrderStatus::Cancelled)
            .unwrap();

        let err = ledger
            .update_order_status(order.id, OrderStatus::Pending)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidStatusTransition { .. }));
    }

    #[test]
    fn test_same_status_update_is_a_noop() {
        let mut ledger = Ledger::seeded();
        let order = ledger.place_order(1, &[line(1, 5)]).unwrap();

        let unchanged = ledger
            .update_order_status(order.id, OrderStatus::Pending)
            .unwrap();
        assert_eq!(unchanged.status, OrderStatus::Pending);
        assert_eq!(stock_of(&ledger, 1), 45);
    }

    #[test]
    fn test_status_update_unknown_order() {
        let mut ledger = Ledger::seeded();
        let err = ledger
            .update_order_status(9999, OrderStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, CoreError::OrderNotFound(9999)));
    }

    // -------------------------------------------------------------------------
    // Products & Inventory
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_product_assigns_fresh_id() {
        let mut ledger = Ledger::seeded();

        let product = ledger
            .create_product(NewProduct {
                name: "Greek Yogurt".to_string(),
                category: "Dairy".to_string(),
                price_cents: 299,
                inventory: 20,
            })
            .unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(ledger.list_products().len(), 7);
    }

    #[test]
    fn test_create_product_validates_fields() {
        let mut ledger = Ledger::seeded();

        let err = ledger
            .create_product(NewProduct {
                name: "".to_string(),
                category: "Dairy".to_string(),
                price_cents: 299,
                inventory: 20,
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = ledger
            .create_product(NewProduct {
                name: "Greek Yogurt".to_string(),
                category: "Dairy".to_string(),
                price_cents: -1,
                inventory: 20,
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_patch_product_merges_fields() {
        let mut ledger = Ledger::seeded();

        let patched = ledger
            .patch_product(
                1,
                ProductPatch {
                    price_cents: Some(150),
                    inventory: Some(60),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(patched.price_cents, 150);
        assert_eq!(patched.inventory, 60);
        // Untouched fields survive
        assert_eq!(patched.name, "Honeycrisp Apple");
        assert_eq!(patched.category, "Fruits");
    }

    #[test]
    fn test_patch_product_rejects_negative_inventory() {
        let mut ledger = Ledger::seeded();

        let err = ledger
            .patch_product(
                1,
                ProductPatch {
                    inventory: Some(-5),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(stock_of(&ledger, 1), 50);
    }

    #[test]
    fn test_delete_product_not_found() {
        let mut ledger = Ledger::seeded();
        let err = ledger.delete_product(777).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(777)));
    }

    #[test]
    fn test_delete_product_keeps_order_snapshots() {
        let mut ledger = Ledger::seeded();

        let order = ledger.place_order(1, &[line(4, 2)]).unwrap();
        ledger.delete_product(4).unwrap();

        let stored = ledger.get_order(order.id).unwrap();
        assert_eq!(stored.items[0].name_snapshot, "Sourdough Bread");
        assert_eq!(stored.items[0].price_at_purchase_cents, 550);
        assert_eq!(stored.total_cents, 1100);
    }

    #[test]
    fn test_set_inventory_absolute() {
        let mut ledger = Ledger::seeded();

        let product = ledger.set_inventory(2, 200).unwrap();
        assert_eq!(product.inventory, 200);

        let err = ledger.set_inventory(2, -1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = ledger.set_inventory(777, 10).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(777)));
    }

    #[test]
    fn test_inventory_levels_projection() {
        let ledger = Ledger::seeded();
        let levels = ledger.inventory_levels();
        assert_eq!(levels.len(), 6);
        assert_eq!(levels[0].product_id, 1);
        assert_eq!(levels[0].inventory, 50);
    }

    /// The ledger-wide invariant: no sequence of operations may drive any
    /// product's inventory below zero.
    #[test]
    fn test_inventory_never_negative_across_mixed_operations() {
        let mut ledger = Ledger::seeded();

        let o1 = ledger.place_order(1, &[line(1, 50)]).unwrap();
        let _ = ledger.place_order(1, &[line(1, 1)]).unwrap_err();
        ledger.cancel_order(o1.id).unwrap();
        let o2 = ledger.place_order(2, &[line(2, 120), line(5, 40)]).unwrap();
        let _ = ledger.place_order(1, &[line(2, 1)]).unwrap_err();
        ledger
            .update_order_status(o2.id, OrderStatus::Cancelled)
            .unwrap();

        for product in ledger.list_products() {
            assert!(
                product.inventory >= 0,
                "negative inventory for {}",
                product.name
            );
        }
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    #[test]
    fn test_customer_directory() {
        let mut ledger = Ledger::seeded();

        assert_eq!(ledger.list_customers().len(), 2);
        assert_eq!(ledger.get_customer(1).unwrap().name, "John Doe");
        assert!(matches!(
            ledger.get_customer(42).unwrap_err(),
            CoreError::CustomerNotFound(42)
        ));

        let patched = ledger
            .patch_customer(
                1,
                CustomerPatch {
                    email: Some("john.doe@example.com".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(patched.email, "john.doe@example.com");
        assert_eq!(patched.name, "John Doe");

        ledger.delete_customer(2).unwrap();
        assert_eq!(ledger.list_customers().len(), 1);
    }

    #[test]
    fn test_patch_customer_rejects_bad_email() {
        let mut ledger = Ledger::seeded();
        let err = ledger
            .patch_customer(
                1,
                CustomerPatch {
                    email: Some("nonsense".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(ledger.get_customer(1).unwrap().email, "john@example.com");
    }

    #[test]
    fn test_line_request_accepts_both_field_spellings() {
        let wire: LineRequest = serde_json::from_str(r#"{"productId": 3, "quantity": 2}"#).unwrap();
        assert_eq!(wire.product_id, 3);

        let rust: LineRequest =
            serde_json::from_str(r#"{"product_id": 3, "quantity": 2}"#).unwrap();
        assert_eq!(rust.product_id, 3);
    }
}
