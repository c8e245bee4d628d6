//! # Product Variants
//!
//! The four kinds of product the machine sells. Each one wraps a
//! [`ProductBase`] and adds a single attribute:
//!
//! | Variant       | Attribute                    | Price format |
//! |---------------|------------------------------|--------------|
//! | `Snickers`    | [`Size`]                     | plain        |
//! | `CottonCandy` | flavor (soft-validated text) | plain        |
//! | `MintDrops`   | [`CoolingLevel`] (1-5)       | plain        |
//! | `Taco`        | spicy flag                   | two decimals |
//!
//! The wording of `examine`, `use_item` and `summary` differs per variant and
//! is kept that way on purpose; listings and receipts match on it.

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{VendError, VendResult};
use crate::product::{
    format_fixed, format_plain, Product, ProductBase, ProductId, ProductKind, CURRENCY_LABEL,
};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Size
// =============================================================================

/// Candy bar size. The display label differs from the symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Size {
    Small,
    Medium,
    Large,
    XL,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::XL];

    /// Symbolic name (`SMALL`, `XL`)
    pub fn name(&self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
            Size::XL => "XL",
        }
    }

    /// Display label (`small`, `extra large`)
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::XL => "extra large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = VendError;

    /// Accepts the symbolic name (spaces read as underscores) or the label,
    /// ignoring case and surrounding whitespace. Only the empty string counts
    /// as blank; whitespace-only input is an unknown size.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(VendError::invalid("value must not be null/blank"));
        }
        let normalized = value.trim();

        let symbolic = normalized.replace(' ', "_").to_uppercase();
        Size::ALL
            .into_iter()
            .find(|s| s.name() == symbolic)
            .or_else(|| {
                Size::ALL
                    .into_iter()
                    .find(|s| s.label().eq_ignore_ascii_case(normalized))
            })
            .ok_or_else(|| VendError::invalid(format!("Unknown size: {}", value)))
    }
}

impl TryFrom<String> for Size {
    type Error = VendError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Cooling level
// =============================================================================

/// How strong a mint feels, ordered from 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoolingLevel {
    Mild,
    Smooth,
    Strong,
    Intense,
    Extreme,
}

impl CoolingLevel {
    /// Map 1..=5 onto the enumeration
    pub fn from_level(level: i32) -> VendResult<Self> {
        match level {
            1 => Ok(CoolingLevel::Mild),
            2 => Ok(CoolingLevel::Smooth),
            3 => Ok(CoolingLevel::Strong),
            4 => Ok(CoolingLevel::Intense),
            5 => Ok(CoolingLevel::Extreme),
            _ => Err(VendError::invalid("Cooling level must be between 1 and 5.")),
        }
    }

    /// Inverse of [`CoolingLevel::from_level`]
    pub fn level(&self) -> i32 {
        *self as i32 + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoolingLevel::Mild => "Mild",
            CoolingLevel::Smooth => "Smooth",
            CoolingLevel::Strong => "Strong",
            CoolingLevel::Intense => "Intense",
            CoolingLevel::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for CoolingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Snickers
// =============================================================================

/// Candy bar sold in one of four sizes
#[derive(Debug, Clone, PartialEq)]
pub struct Snickers {
    base: ProductBase,
    size: Size,
}

impl Snickers {
    pub fn new(id: ProductId, price: f64, name: impl Into<String>, size: Size) -> Self {
        Self {
            base: ProductBase::new(id, price, name),
            size,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl Product for Snickers {
    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Snickers
    }

    fn examine(&self) -> String {
        format!(
            "{} ({}), costs {} {}.",
            self.name(),
            self.size.label(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }

    fn use_item(&self) -> String {
        format!("You enjoy the crunchy {} Snickers.", self.size.label())
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Product: {}, Name: \"{}\", Size: {}, Price: {} {}",
            self.id(),
            self.kind(),
            self.name(),
            self.size.label(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }
}

// =============================================================================
// Cotton candy
// =============================================================================

/// Placeholder shown when a cotton candy never received a valid flavor
const UNKNOWN_FLAVOR: &str = "UNKNOWN";

/// Spun sugar with a free-text flavor.
///
/// Blank flavors are not errors: they are reported to a [`DiagnosticSink`]
/// and the previous flavor is kept. A cotton candy built with a blank flavor
/// has none until one is set.
#[derive(Debug, Clone, PartialEq)]
pub struct CottonCandy {
    base: ProductBase,
    flavor: Option<String>,
}

impl CottonCandy {
    /// Build a cotton candy, logging a blank flavor through [`TracingSink`]
    pub fn new(
        id: ProductId,
        price: f64,
        name: impl Into<String>,
        flavor: impl Into<String>,
    ) -> Self {
        Self::new_reporting(id, price, name, flavor, &TracingSink)
    }

    /// Build a cotton candy, sending a blank-flavor diagnostic to `sink`
    pub fn new_reporting(
        id: ProductId,
        price: f64,
        name: impl Into<String>,
        flavor: impl Into<String>,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let mut candy = Self {
            base: ProductBase::new(id, price, name),
            flavor: None,
        };
        candy.set_flavor_reporting(flavor, sink);
        candy
    }

    pub fn flavor(&self) -> Option<&str> {
        self.flavor.as_deref()
    }

    pub fn set_flavor(&mut self, flavor: impl Into<String>) {
        self.set_flavor_reporting(flavor, &TracingSink);
    }

    pub fn set_flavor_reporting(&mut self, flavor: impl Into<String>, sink: &dyn DiagnosticSink) {
        let flavor = flavor.into();
        if flavor.trim().is_empty() {
            sink.report(&Diagnostic::BlankFlavor);
            return;
        }
        self.flavor = Some(flavor);
    }

    fn flavor_text(&self) -> &str {
        self.flavor.as_deref().unwrap_or(UNKNOWN_FLAVOR)
    }
}

impl Product for CottonCandy {
    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn kind(&self) -> ProductKind {
        ProductKind::CottonCandy
    }

    fn examine(&self) -> String {
        format!(
            "{} ({} flavor) costs {} {}.",
            self.name(),
            self.flavor_text(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }

    fn use_item(&self) -> String {
        format!("You enjoy the fluffy {} cotton candy.", self.flavor_text())
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Product: {}, Name: \"{}\", Flavor: {}, Price: {} {}",
            self.id(),
            self.kind(),
            self.name(),
            self.flavor_text(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }
}

// =============================================================================
// Mint drops
// =============================================================================

/// Mints with a cooling level between 1 and 5
#[derive(Debug, Clone, PartialEq)]
pub struct MintDrops {
    base: ProductBase,
    cooling_level: CoolingLevel,
}

impl MintDrops {
    /// Fails with `InvalidArgument` when `level` is outside 1..=5
    pub fn new(id: ProductId, price: f64, name: impl Into<String>, level: i32) -> VendResult<Self> {
        Ok(Self {
            base: ProductBase::new(id, price, name),
            cooling_level: CoolingLevel::from_level(level)?,
        })
    }

    pub fn cooling_level(&self) -> CoolingLevel {
        self.cooling_level
    }

    /// On error the previous level is kept
    pub fn set_cooling_level(&mut self, level: i32) -> VendResult<()> {
        self.cooling_level = CoolingLevel::from_level(level)?;
        Ok(())
    }
}

impl Product for MintDrops {
    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn kind(&self) -> ProductKind {
        ProductKind::MintDrops
    }

    fn examine(&self) -> String {
        format!(
            "{} (Cooling: {}) costs {} {}.",
            self.name(),
            self.cooling_level.label(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }

    fn use_item(&self) -> String {
        format!(
            "You feel a {} mint sensation.",
            self.cooling_level.label().to_lowercase()
        )
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Product: {}, Name: \"{}\", Cooling: {}, Price: {} {}",
            self.id(),
            self.kind(),
            self.name(),
            self.cooling_level.label(),
            format_plain(self.price()),
            CURRENCY_LABEL
        )
    }
}

// =============================================================================
// Taco
// =============================================================================

/// Prepared food, optionally spicy. Prices render with two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Taco {
    base: ProductBase,
    is_spicy: bool,
}

impl Taco {
    /// A mild taco
    pub fn new(id: ProductId, price: f64, name: impl Into<String>) -> Self {
        Self::with_spicy(id, price, name, false)
    }

    pub fn with_spicy(id: ProductId, price: f64, name: impl Into<String>, is_spicy: bool) -> Self {
        Self {
            base: ProductBase::new(id, price, name),
            is_spicy,
        }
    }

    pub fn is_spicy(&self) -> bool {
        self.is_spicy
    }

    pub fn set_spicy(&mut self, spicy: bool) {
        self.is_spicy = spicy;
    }
}

impl Product for Taco {
    fn base(&self) -> &ProductBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProductBase {
        &mut self.base
    }

    fn kind(&self) -> ProductKind {
        ProductKind::Taco
    }

    fn examine(&self) -> String {
        let spice = if self.is_spicy {
            "is spicy and "
        } else {
            "is not spicy and "
        };
        format!(
            "{} {}costs {} {}.",
            self.name(),
            spice,
            format_fixed(self.price()),
            CURRENCY_LABEL
        )
    }

    fn use_item(&self) -> String {
        let spice = if self.is_spicy { "spicy " } else { "" };
        format!("You enjoy the {}{}.", spice, self.name())
    }

    fn summary(&self) -> String {
        format!(
            "ID: {}, Product: {}, Name: \"{}\", Spicy: {}, Price: {} {}",
            self.id(),
            self.kind(),
            self.name(),
            self.is_spicy,
            format_fixed(self.price()),
            CURRENCY_LABEL
        )
    }
}
