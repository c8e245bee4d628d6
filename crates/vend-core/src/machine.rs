//! # Vending Machine
//!
//! Session ledger and purchase flow.
//!
//! ```text
//!            add_currency(d), d accepted
//!   ┌──────┐ ─────────────────────────► ┌────────┐
//!   │ Idle │                            │ Funded │ ◄─┐ add_currency / purchase
//!   │ b = 0│ ◄───────────────────────── │ b > 0  │ ──┘ (b stays > 0)
//!   └──────┘  end_session, or purchase  └────────┘
//!             that spends exactly b
//! ```
//!
//! Every failure on this path is soft: rejected coins, unknown ids and short
//! balances are reported to the machine's [`DiagnosticSink`] and the call
//! returns `None` or leaves the balance alone.
//!
//! The machine is single-actor. Mutating calls take `&mut self`; an embedding
//! that shares one machine between callers has to put it behind a mutex.

use crate::catalog::Catalog;
use crate::diagnostics::{Diagnostic, SharedSink, TracingSink};
use crate::product::{format_plain, BoxedProduct, Product, ProductId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Coin and note values the machine accepts
pub const DENOMINATIONS: [i32; 10] = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

/// True if `amount` is one of [`DENOMINATIONS`]
pub fn is_accepted_denomination(amount: i32) -> bool {
    DENOMINATIONS.contains(&amount)
}

/// Bookkeeping for the interval between two `end_session` calls
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Total accepted currency
    pub inserted: f64,
    /// Number of completed purchases
    pub purchases: u32,
}

impl Session {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            inserted: 0.0,
            purchases: 0,
        }
    }
}

/// A vending machine with a fixed catalog and a single running balance
pub struct VendingMachine {
    catalog: Catalog,
    balance: f64,
    session: Session,
    sink: SharedSink,
}

impl VendingMachine {
    /// Build a machine that logs diagnostics through [`TracingSink`]
    pub fn new(products: Vec<BoxedProduct>) -> Self {
        Self::with_sink(products, Arc::new(TracingSink))
    }

    /// Build a machine reporting diagnostics (including duplicate ids) to `sink`
    pub fn with_sink(products: Vec<BoxedProduct>, sink: SharedSink) -> Self {
        let catalog = Catalog::with_sink(products, sink.as_ref());
        Self::from_catalog(catalog, sink)
    }

    /// Wrap an existing catalog
    pub fn from_catalog(catalog: Catalog, sink: SharedSink) -> Self {
        let session = Session::start();
        info!(session = %session.id, products = catalog.len(), "vending machine ready");
        Self {
            catalog,
            balance: 0.0,
            session,
            sink,
        }
    }

    /// Insert money. Amounts outside [`DENOMINATIONS`] are reported and ignored.
    pub fn add_currency(&mut self, amount: i32) {
        if !is_accepted_denomination(amount) {
            self.sink.report(&Diagnostic::InvalidDenomination { amount });
            return;
        }
        self.set_balance(self.balance + f64::from(amount));
        self.session.inserted += f64::from(amount);
        debug!(session = %self.session.id, amount, balance = self.balance, "currency accepted");
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Overwrite the balance. Negative and NaN values are reported and the old
    /// balance kept.
    pub fn set_balance(&mut self, balance: f64) {
        if balance.is_nan() || balance < 0.0 {
            self.sink
                .report(&Diagnostic::NegativeBalance { attempted: balance });
            return;
        }
        self.balance = balance;
    }

    /// Buy one unit of product `id`.
    ///
    /// Returns `None` for an unknown id or when the balance does not cover the
    /// price; in both cases the balance is untouched. Stock is unlimited, so the
    /// product stays in the catalog.
    pub fn purchase(&mut self, id: ProductId) -> Option<&dyn Product> {
        let Some(index) = self.catalog.position(id) else {
            self.sink.report(&Diagnostic::ProductNotFound { id });
            return None;
        };
        let price = self.catalog.get(index)?.price();

        // Negated so that a NaN price never counts as affordable
        if !(self.balance >= price) {
            self.sink.report(&Diagnostic::InsufficientFunds {
                id,
                balance: self.balance,
                price,
            });
            return None;
        }

        self.set_balance(self.balance - price);
        self.session.purchases += 1;
        debug!(
            session = %self.session.id,
            id,
            price = %format_plain(price),
            balance = self.balance,
            "purchase completed"
        );
        self.catalog.get(index)
    }

    /// Return the remaining balance as change and start a new session
    pub fn end_session(&mut self) -> f64 {
        let change = self.balance;
        self.set_balance(0.0);

        let finished = std::mem::replace(&mut self.session, Session::start());
        let duration_ms = (Utc::now() - finished.started_at).num_milliseconds();
        info!(
            session = %finished.id,
            inserted = finished.inserted,
            purchases = finished.purchases,
            change,
            duration_ms,
            "session ended"
        );
        change
    }

    /// See [`Catalog::describe`]
    pub fn describe(&self, id: ProductId) -> String {
        self.catalog.describe(id)
    }

    /// See [`Catalog::list_all`]
    pub fn list_all(&self) -> Vec<String> {
        self.catalog.list_all()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session currently in progress
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl std::fmt::Debug for VendingMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendingMachine")
            .field("catalog", &self.catalog)
            .field("balance", &self.balance)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::variants::{MintDrops, Size, Snickers, Taco};

    fn machine() -> (VendingMachine, Arc<RecordingSink>) {
        let sink = RecordingSink::shared();
        let products: Vec<BoxedProduct> = vec![
            Box::new(Snickers::new(1, 20.0, "Snickers", Size::Large)),
            Box::new(MintDrops::new(3, 30.0, "Mint Drops", 4).unwrap()),
            Box::new(Taco::new(4, 60.0, "Taco")),
        ];
        (VendingMachine::with_sink(products, sink.clone()), sink)
    }

    #[test]
    fn test_accepted_denominations() {
        for d in DENOMINATIONS {
            let (mut vm, sink) = machine();
            vm.add_currency(d);
            assert_eq!(vm.balance(), f64::from(d));
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn test_rejected_denominations() {
        let (mut vm, sink) = machine();
        vm.add_currency(10);
        for amount in [0, 3, 7, 15, 25, 999, 2000, -5] {
            vm.add_currency(amount);
        }
        assert_eq!(vm.balance(), 10.0);
        assert_eq!(sink.len(), 8);
        assert_eq!(
            sink.diagnostics()[0],
            Diagnostic::InvalidDenomination { amount: 0 }
        );
    }

    #[test]
    fn test_purchase_success() {
        let (mut vm, _) = machine();
        vm.add_currency(100);

        let product = vm.purchase(4).unwrap();
        assert_eq!(product.id(), 4);
        assert_eq!(product.use_item(), "You enjoy the Taco.");
        assert_eq!(vm.balance(), 40.0);

        // unlimited stock
        assert!(vm.catalog().find_by_id(4).is_some());
        assert_eq!(vm.session().purchases, 1);
    }

    #[test]
    fn test_purchase_exact_balance_returns_to_idle() {
        let (mut vm, _) = machine();
        vm.add_currency(20);
        assert!(vm.purchase(1).is_some());
        assert_eq!(vm.balance(), 0.0);
    }

    #[test]
    fn test_purchase_insufficient_funds() {
        let (mut vm, sink) = machine();
        vm.add_currency(20);

        assert!(vm.purchase(3).is_none());
        assert_eq!(vm.balance(), 20.0);
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::InsufficientFunds {
                id: 3,
                balance: 20.0,
                price: 30.0
            }]
        );
    }

    #[test]
    fn test_purchase_unknown_id() {
        let (mut vm, sink) = machine();
        vm.add_currency(50);

        assert!(vm.purchase(42).is_none());
        assert_eq!(vm.balance(), 50.0);
        assert_eq!(sink.diagnostics(), vec![Diagnostic::ProductNotFound { id: 42 }]);
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let (mut vm, _) = machine();
        vm.add_currency(50);
        let first_session = vm.session().id;

        assert_eq!(vm.end_session(), 50.0);
        assert_eq!(vm.end_session(), 0.0);
        assert_eq!(vm.balance(), 0.0);
        assert_ne!(vm.session().id, first_session);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let (mut vm, sink) = machine();
        vm.add_currency(5);
        vm.set_balance(-1.0);

        assert_eq!(vm.balance(), 5.0);
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::NegativeBalance { attempted: -1.0 }]
        );
    }

    #[test]
    fn test_nan_balance_rejected() {
        let (mut vm, sink) = machine();
        vm.set_balance(f64::NAN);

        assert_eq!(vm.balance(), 0.0);
        assert!(matches!(
            sink.diagnostics().as_slice(),
            [Diagnostic::NegativeBalance { attempted }] if attempted.is_nan()
        ));
        assert!(vm.purchase(4).is_none());
        assert_eq!(vm.end_session(), 0.0);
    }

    #[test]
    fn test_nan_price_is_never_affordable() {
        let sink = RecordingSink::shared();
        let products: Vec<BoxedProduct> = vec![Box::new(Taco::new(9, f64::NAN, "Mystery Taco"))];
        let mut vm = VendingMachine::with_sink(products, sink.clone());
        vm.add_currency(1000);

        assert!(vm.purchase(9).is_none());
        assert_eq!(vm.balance(), 1000.0);
        assert!(matches!(
            sink.diagnostics().as_slice(),
            [Diagnostic::InsufficientFunds { id: 9, .. }]
        ));
    }

    #[test]
    fn test_purchase_returns_first_of_duplicate_ids() {
        let sink = RecordingSink::shared();
        let products: Vec<BoxedProduct> = vec![
            Box::new(Taco::new(5, 10.0, "First Taco")),
            Box::new(Taco::new(5, 99.0, "Second Taco")),
        ];
        let mut vm = VendingMachine::with_sink(products, sink.clone());
        vm.add_currency(20);

        assert_eq!(vm.purchase(5).map(|p| p.name().to_string()), Some("First Taco".to_string()));
        assert_eq!(vm.balance(), 10.0);
    }

    #[test]
    fn test_describe_and_list() {
        let (vm, _) = machine();
        assert_eq!(vm.describe(100), "Product not found.");
        assert_eq!(vm.describe(3), "Mint Drops (Cooling: Intense) costs 30.0 SEK.");
        assert_eq!(vm.list_all().len(), 3);
    }
}
