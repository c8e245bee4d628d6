//! # Vending Error Types
//!
//! Hard failures for the vending machine.
//!
//! Only malformed input on a product (price, name, cooling level, size) is
//! surfaced as an error. Operational problems such as a rejected coin or an
//! unknown product id are reported through [`crate::diagnostics`] instead and
//! never show up here.

use thiserror::Error;

/// Core error type for product and catalog construction
#[derive(Debug, Error)]
pub enum VendError {
    /// Malformed value passed to a product constructor or mutator
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors (missing file, unreadable path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog TOML could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

impl VendError {
    /// Shorthand for building an [`VendError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        VendError::InvalidArgument(message.into())
    }

    /// Returns true if this error rejects a product value
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VendError::InvalidArgument(_))
    }
}

/// Result type alias for vending operations
pub type VendResult<T> = Result<T, VendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_kind() {
        assert!(VendError::invalid("Price can not be negative or 0").is_invalid_argument());
        assert!(!VendError::Configuration("missing".into()).is_invalid_argument());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VendError::invalid("Cooling level must be between 1 and 5.").to_string(),
            "Invalid argument: Cooling level must be between 1 and 5."
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("products = [").unwrap_err();
        let err: VendError = parse_err.into();
        assert!(matches!(err, VendError::CatalogParse(_)));
    }
}
