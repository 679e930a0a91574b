//! # Seed Data
//!
//! The demo catalog and customer directory a fresh ledger starts with.
//!
//! ## Catalog
//! ```text
//! ┌────┬───────────────────┬──────────┬────────┬───────┐
//! │ id │ name              │ category │ price  │ stock │
//! ├────┼───────────────────┼──────────┼────────┼───────┤
//! │  1 │ Honeycrisp Apple  │ Fruits   │ $1.25  │   50  │
//! │  2 │ Organic Banana    │ Fruits   │ $0.35  │  120  │
//! │  3 │ Whole Milk        │ Dairy    │ $3.99  │   30  │
//! │  4 │ Sourdough Bread   │ Bakery   │ $5.50  │   15  │
//! │  5 │ Eggs (Dozen)      │ Dairy    │ $4.25  │   40  │
//! │  6 │ Chicken Breast    │ Meat     │ $8.99  │   25  │
//! └────┴───────────────────┴──────────┴────────┴───────┘
//! ```

use chrono::Utc;
use grocer_core::{Customer, Product};

fn product(id: i64, name: &str, category: &str, price_cents: i64, inventory: i64) -> Product {
    let now = Utc::now();
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        inventory,
        created_at: now,
        updated_at: now,
    }
}

/// The six-product demo catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(1, "Honeycrisp Apple", "Fruits", 125, 50),
        product(2, "Organic Banana", "Fruits", 35, 120),
        product(3, "Whole Milk", "Dairy", 399, 30),
        product(4, "Sourdough Bread", "Bakery", 550, 15),
        product(5, "Eggs (Dozen)", "Dairy", 425, 40),
        product(6, "Chicken Breast", "Meat", 899, 25),
    ]
}

/// The two-customer demo directory.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        Customer {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
