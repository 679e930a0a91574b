//! # grocer-ledger: In-Memory Ledger for Grocer
//!
//! This crate provides the stateful core of Grocer: the inventory/order
//! ledger. It owns the product catalog, the order book, and the customer
//! directory, and applies every mutation to them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Grocer Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (place_order)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   grocer-ledger (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  LedgerState  │    │    Ledger     │    │    seed      │  │   │
//! │  │   │  (state.rs)   │    │  (ledger.rs)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<Mutex<_>> │───►│ products      │◄───│ 6 products   │  │   │
//! │  │   │ shared handle │    │ orders        │    │ 2 customers  │  │   │
//! │  │   │               │    │ customers     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Process memory only - nothing survives a restart                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`ledger`] - The Ledger itself and its operations
//! - [`seed`] - The demo catalog and customer directory
//! - [`state`] - Mutex-wrapped shared handle for concurrent callers
//!
//! ## Usage
//!
//! ```rust
//! use grocer_ledger::{Ledger, LineRequest};
//!
//! let mut ledger = Ledger::seeded();
//!
//! let order = ledger
//!     .place_order(
//!         1,
//!         &[LineRequest { product_id: 1, quantity: 4 }],
//!     )
//!     .unwrap();
//!
//! assert_eq!(order.total_cents, 500); // 4 × $1.25
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod ledger;
pub mod seed;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use ledger::{CustomerPatch, Ledger, LineRequest, NewProduct, ProductPatch};
pub use state::LedgerState;
