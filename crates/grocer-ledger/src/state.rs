//! # Shared Ledger State
//!
//! A cloneable handle to a single ledger, shared between concurrent
//! request handlers.
//!
//! ## Locking Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Concurrent Access                                 │
//! │                                                                         │
//! │   handler A ──┐                                                         │
//! │   handler B ──┼──► LedgerState (clone of Arc) ──► Mutex ──► Ledger     │
//! │   handler C ──┘                                                         │
//! │                                                                         │
//! │   One operation = one lock acquisition. A multi-line order is           │
//! │   validated and committed under a single hold, so no interleaved        │
//! │   request can observe a half-placed order or oversell stock.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `std::sync::Mutex` is deliberate: every operation is a short,
//! in-memory computation that never awaits while holding the lock.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// Thread-safe shared handle to the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    inner: Arc<Mutex<Ledger>>,
}

impl LedgerState {
    /// Creates a handle around an empty ledger.
    pub fn new() -> Self {
        LedgerState {
            inner: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    /// Creates a handle around a pre-seeded ledger.
    pub fn seeded() -> Self {
        LedgerState {
            inner: Arc::new(Mutex::new(Ledger::seeded())),
        }
    }

    /// Creates a handle around an existing ledger.
    pub fn from_ledger(ledger: Ledger) -> Self {
        LedgerState {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Runs a read-only closure against the ledger.
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        let ledger = self.inner.lock().expect("Ledger mutex poisoned");
        f(&ledger)
    }

    /// Runs a mutating closure against the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.inner.lock().expect("Ledger mutex poisoned");
        f(&mut ledger)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        LedgerState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LineRequest;
    use std::thread;

    #[test]
    fn test_clones_share_one_ledger() {
        let state = LedgerState::seeded();
        let clone = state.clone();

        state.with_ledger_mut(|ledger| {
            ledger
                .place_order(
                    1,
                    &[LineRequest {
                        product_id: 1,
                        quantity: 10,
                    }],
                )
                .unwrap();
        });

        let stock = clone.with_ledger(|ledger| ledger.get_product(1).unwrap().inventory);
        assert_eq!(stock, 40);
    }

    #[test]
    fn test_concurrent_orders_never_oversell() {
        let state = LedgerState::seeded();
        state.with_ledger_mut(|ledger| {
            ledger.set_inventory(1, 10).unwrap();
        });

        // 20 threads each try to buy one unit of a 10-unit stock
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    state.with_ledger_mut(|ledger| {
                        ledger
                            .place_order(
                                1,
                                &[LineRequest {
                                    product_id: 1,
                                    quantity: 1,
                                }],
                            )
                            .is_ok()
                    })
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 10);
        let stock = state.with_ledger(|ledger| ledger.get_product(1).unwrap().inventory);
        assert_eq!(stock, 0);
    }
}
