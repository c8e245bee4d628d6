//! # Diagnostics
//!
//! Soft failures of the vending machine.
//!
//! A rejected coin, an unknown product id or a short balance are expected
//! outcomes, not errors. The machine reports them to a [`DiagnosticSink`] and
//! carries on, returning `None` or a sentinel to the caller.
//!
//! ```text
//! ┌──────────────────────┐   report()   ┌─────────────────────────┐
//! │    VendingMachine    │ ───────────► │ DiagnosticSink (trait)  │
//! │ Catalog, CottonCandy │              └─────────────────────────┘
//! └──────────────────────┘                 ▲                 ▲
//!                                   ┌──────┴──────┐  ┌───────┴───────┐
//!                                   │ TracingSink │  │ RecordingSink │
//!                                   └─────────────┘  └───────────────┘
//! ```

use crate::product::{format_plain, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// A non-fatal condition observed while operating the machine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Inserted amount is not an accepted denomination
    InvalidDenomination { amount: i32 },

    /// Purchase requested for an id missing from the catalog
    ProductNotFound { id: ProductId },

    /// Balance does not cover the product price
    InsufficientFunds {
        id: ProductId,
        balance: f64,
        price: f64,
    },

    /// Attempt to set the balance below zero
    NegativeBalance { attempted: f64 },

    /// Two catalog entries share an id
    DuplicateProductId { id: ProductId, name: String },

    /// Cotton candy flavor was blank
    BlankFlavor,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidDenomination { amount } => {
                write!(f, "Invalid denomination: {}", amount)
            }
            Diagnostic::ProductNotFound { id } => write!(f, "Product not found for ID: {}", id),
            Diagnostic::InsufficientFunds { id, balance, price } => write!(
                f,
                "Insufficient funds for product ID: {} (balance {}, price {})",
                id,
                format_plain(*balance),
                format_plain(*price)
            ),
            Diagnostic::NegativeBalance { .. } => write!(f, "Balance cannot be negative."),
            Diagnostic::DuplicateProductId { id, name } => write!(
                f,
                "Duplicate ID found: {} for product '{}'. Vending machine may not function correctly.",
                id, name
            ),
            Diagnostic::BlankFlavor => write!(f, "Cotton candy flavor cannot be null or empty."),
        }
    }
}

/// Receiver for soft failures.
///
/// Implement this trait to route diagnostics somewhere other than the log,
/// e.g. a display panel or a test assertion.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per observed condition
    fn report(&self, diagnostic: &Diagnostic);
}

/// Type alias for a shared sink (dynamic dispatch)
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Default sink: emits every diagnostic as a `warn!` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!(diagnostic = ?diagnostic, "{}", diagnostic);
    }
}

/// A captured diagnostic with the time it was reported
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    pub at: DateTime<Utc>,
    pub diagnostic: Diagnostic,
}

/// Sink that keeps everything it receives in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning the sink already wrapped in an `Arc`
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// All diagnostics received so far, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().iter().map(|r| r.diagnostic.clone()).collect()
    }

    /// Full records including timestamps
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DiagnosticRecord>> {
        // A poisoned lock only means a panicking reader; the data is still usable.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(DiagnosticRecord {
            at: Utc::now(),
            diagnostic: diagnostic.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(
            Diagnostic::InvalidDenomination { amount: 3 }.to_string(),
            "Invalid denomination: 3"
        );
        assert_eq!(
            Diagnostic::ProductNotFound { id: 99 }.to_string(),
            "Product not found for ID: 99"
        );
        assert_eq!(
            Diagnostic::InsufficientFunds {
                id: 3,
                balance: 20.0,
                price: 30.0
            }
            .to_string(),
            "Insufficient funds for product ID: 3 (balance 20.0, price 30.0)"
        );
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.report(&Diagnostic::BlankFlavor);
        sink.report(&Diagnostic::NegativeBalance { attempted: -5.0 });

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.diagnostics(),
            vec![
                Diagnostic::BlankFlavor,
                Diagnostic::NegativeBalance { attempted: -5.0 }
            ]
        );

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_shared_sink_as_trait_object() {
        let recorder = RecordingSink::shared();
        let sink: SharedSink = recorder.clone();

        sink.report(&Diagnostic::ProductNotFound { id: 7 });
        TracingSink.report(&Diagnostic::ProductNotFound { id: 7 });

        assert_eq!(recorder.records().len(), 1);
    }
}
