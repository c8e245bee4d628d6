//! # vend-core
//!
//! Core types for the vend-machine vending engine.
//!
//! This crate provides:
//! - `Product` trait and `ProductBase` for the shared product contract
//! - `Snickers`, `CottonCandy`, `MintDrops` and `Taco` variants
//! - `Catalog` for lookups, descriptions and listings
//! - `VendingMachine` for the cash balance and purchase flow
//! - `DiagnosticSink` for soft failures, `VendError` for hard ones
//!
//! ## Example
//!
//! ```rust
//! use vend_core::{BoxedProduct, Product, Size, Snickers, Taco, VendingMachine};
//!
//! let products: Vec<BoxedProduct> = vec![
//!     Box::new(Snickers::new(1, 20.0, "Snickers", Size::Large)),
//!     Box::new(Taco::new(4, 60.0, "Taco")),
//! ];
//! let mut vm = VendingMachine::new(products);
//!
//! vm.add_currency(100);
//! let taco = vm.purchase(4).expect("affordable");
//! assert_eq!(taco.use_item(), "You enjoy the Taco.");
//! assert_eq!(vm.end_session(), 40.0);
//! ```

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod machine;
pub mod product;
pub mod variants;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogConfig, ProductSpec, PRODUCT_NOT_FOUND};
pub use diagnostics::{
    Diagnostic, DiagnosticRecord, DiagnosticSink, RecordingSink, SharedSink, TracingSink,
};
pub use error::{VendError, VendResult};
pub use machine::{is_accepted_denomination, Session, VendingMachine, DENOMINATIONS};
pub use product::{BoxedProduct, Product, ProductBase, ProductId, ProductKind, CURRENCY_LABEL};
pub use variants::{CoolingLevel, CottonCandy, MintDrops, Size, Snickers, Taco};
