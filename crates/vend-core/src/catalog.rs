//! # Catalog
//!
//! Ordered, read-only product assortment of a vending machine.
//! Catalogs are built in code or loaded from `config/products.toml`.
//!
//! Ids are expected to be unique but this is not enforced: duplicates are
//! reported to the diagnostic sink and kept. Lookups scan in insertion order,
//! so a duplicated id always resolves to its first entry.

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::VendResult;
use crate::product::{BoxedProduct, Product, ProductId};
use crate::variants::{CottonCandy, MintDrops, Size, Snickers, Taco};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Returned by [`Catalog::describe`] for an unknown id
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";

/// Product catalog owned by a machine
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<BoxedProduct>,
}

impl Catalog {
    /// Build a catalog, logging duplicate ids through [`TracingSink`]
    pub fn new(products: Vec<BoxedProduct>) -> Self {
        Self::with_sink(products, &TracingSink)
    }

    /// Build a catalog, reporting each duplicate id to `sink`. Never fails.
    pub fn with_sink(products: Vec<BoxedProduct>, sink: &dyn DiagnosticSink) -> Self {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id()) {
                sink.report(&Diagnostic::DuplicateProductId {
                    id: product.id(),
                    name: product.name().to_string(),
                });
            }
        }
        debug!(products = products.len(), "catalog built");
        Self { products }
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str, sink: &dyn DiagnosticSink) -> VendResult<Self> {
        let config: CatalogConfig = toml::from_str(toml_str)?;
        config.build(sink)
    }

    /// First product with the given id, in insertion order
    pub fn find_by_id(&self, id: ProductId) -> Option<&dyn Product> {
        self.products
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    /// Index of the first product with the given id
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    /// Product at `index` in catalog order
    pub fn get(&self, index: usize) -> Option<&dyn Product> {
        self.products.get(index).map(|p| p.as_ref())
    }

    /// The product's `examine()` text, or [`PRODUCT_NOT_FOUND`]
    pub fn describe(&self, id: ProductId) -> String {
        self.find_by_id(id)
            .map(|p| p.examine())
            .unwrap_or_else(|| PRODUCT_NOT_FOUND.to_string())
    }

    /// Summary line of every product, in catalog order
    pub fn list_all(&self) -> Vec<String> {
        self.products.iter().map(|p| p.summary()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Product> {
        self.products.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Declarative product entry as found in `products.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductSpec {
    Snickers {
        id: ProductId,
        price: f64,
        name: String,
        size: Size,
    },
    CottonCandy {
        id: ProductId,
        price: f64,
        name: String,
        flavor: String,
    },
    MintDrops {
        id: ProductId,
        price: f64,
        name: String,
        cooling_level: i32,
    },
    Taco {
        id: ProductId,
        price: f64,
        name: String,
        #[serde(default)]
        spicy: bool,
    },
}

impl ProductSpec {
    /// Construct the product this entry describes
    pub fn build(self, sink: &dyn DiagnosticSink) -> VendResult<BoxedProduct> {
        Ok(match self {
            ProductSpec::Snickers {
                id,
                price,
                name,
                size,
            } => Box::new(Snickers::new(id, price, name, size)),
            ProductSpec::CottonCandy {
                id,
                price,
                name,
                flavor,
            } => Box::new(CottonCandy::new_reporting(id, price, name, flavor, sink)),
            ProductSpec::MintDrops {
                id,
                price,
                name,
                cooling_level,
            } => Box::new(MintDrops::new(id, price, name, cooling_level)?),
            ProductSpec::Taco {
                id,
                price,
                name,
                spicy,
            } => Box::new(Taco::with_spicy(id, price, name, spicy)),
        })
    }
}

/// Top-level layout of `products.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<ProductSpec>,
}

impl CatalogConfig {
    /// Build every entry in file order; the first invalid entry aborts
    pub fn build(self, sink: &dyn DiagnosticSink) -> VendResult<Catalog> {
        let products = self
            .products
            .into_iter()
            .map(|spec| spec.build(sink))
            .collect::<VendResult<Vec<_>>>()?;
        Ok(Catalog::with_sink(products, sink))
    }
}
