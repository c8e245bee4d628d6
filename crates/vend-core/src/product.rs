//! # Product Types
//!
//! The shared product contract for the vending machine.
//!
//! Every item the machine sells implements [`Product`]. The fields common to
//! all of them live in [`ProductBase`]; each variant in [`crate::variants`]
//! adds one attribute of its own and its own wording for `examine`, `use_item`
//! and `summary`.
//!
//! ## Validation asymmetry
//!
//! `ProductBase::new` stores price and name exactly as given. The rules
//! (price > 0, name not blank) are only enforced by `set_price` and
//! `set_name`. Callers building products from untrusted input should go
//! through the setters.

use crate::error::{VendError, VendResult};
use std::fmt;

/// Identifier of a product within one catalog
pub type ProductId = i32;

/// Currency label printed after every price
pub const CURRENCY_LABEL: &str = "SEK";

/// Closed set of product kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Snickers,
    CottonCandy,
    MintDrops,
    Taco,
}

impl ProductKind {
    /// Tag used in summaries and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Snickers => "Snickers",
            ProductKind::CottonCandy => "CottonCandy",
            ProductKind::MintDrops => "MintDrops",
            ProductKind::Taco => "Taco",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBase {
    id: ProductId,
    price: f64,
    name: String,
}

impl ProductBase {
    /// Create the shared fields without validating them
    pub fn new(id: ProductId, price: f64, name: impl Into<String>) -> Self {
        Self {
            id,
            price,
            name: name.into(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn set_id(&mut self, id: ProductId) {
        self.id = id;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Update the price; zero, negative and NaN prices are rejected
    pub fn set_price(&mut self, price: f64) -> VendResult<()> {
        if price.is_nan() || price <= 0.0 {
            return Err(VendError::invalid("Price can not be negative or 0"));
        }
        self.price = price;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Update the name; blank names are rejected
    pub fn set_name(&mut self, name: impl Into<String>) -> VendResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VendError::invalid("Product name can not be null or blank"));
        }
        self.name = name;
        Ok(())
    }
}

/// Contract shared by all product variants.
///
/// Implementors only provide access to their [`ProductBase`] and their three
/// texts; the accessors and base mutators come for free.
pub trait Product: fmt::Debug + Send + Sync {
    fn base(&self) -> &ProductBase;

    fn base_mut(&mut self) -> &mut ProductBase;

    /// Which variant this is
    fn kind(&self) -> ProductKind;

    /// Human-readable description shown before buying
    fn examine(&self) -> String;

    /// Message shown when the product is consumed
    fn use_item(&self) -> String;

    /// One-line record for listings
    fn summary(&self) -> String;

    fn id(&self) -> ProductId {
        self.base().id()
    }

    fn price(&self) -> f64 {
        self.base().price()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn set_id(&mut self, id: ProductId) {
        self.base_mut().set_id(id);
    }

    fn set_price(&mut self, price: f64) -> VendResult<()> {
        self.base_mut().set_price(price)
    }

    fn set_name(&mut self, name: String) -> VendResult<()> {
        self.base_mut().set_name(name)
    }
}

/// Type alias for an owned product (dynamic dispatch)
pub type BoxedProduct = Box<dyn Product>;

/// Shortest decimal that round-trips, always with a fractional part
/// (`20.0`, `25.5`, `19.99`).
///
/// Exponent notation only starts at `1e16` and below `1e-4`, so `1e7` renders
/// as `10000000.0` and `1e-4` as `0.0001`, where a JVM `Double.toString` prints
/// `1.0E7` and `1.0E-4`. Amounts from 0.001 up to (not including) 1e7 render
/// the same either way.
pub fn format_plain(amount: f64) -> String {
    format!("{:?}", amount)
}

/// Price fixed to two decimals (`60.00`)
pub fn format_fixed(amount: f64) -> String {
    format!("{:.2}", amount)
}
