//! # Demo Configuration
//!
//! Environment-driven settings and catalog loading for the demo binary.

use std::path::{Path, PathBuf};
use vend_core::{
    BoxedProduct, Catalog, CottonCandy, DiagnosticSink, MintDrops, Size, Snickers, Taco,
    VendError, VendResult,
};

/// Where the demo looks for a catalog when `VEND_CATALOG` is unset
const CATALOG_PATHS: [&str; 3] = [
    "config/products.toml",
    "../config/products.toml",
    "../../config/products.toml",
];

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Explicit catalog file (`VEND_CATALOG`)
    pub catalog_path: Option<PathBuf>,
    /// Log output format (`VEND_LOG_FORMAT`)
    pub log_format: LogFormat,
}

impl DemoConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            catalog_path: std::env::var("VEND_CATALOG").ok().map(PathBuf::from),
            log_format: std::env::var("VEND_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
        }
    }

    /// Load the catalog named by `VEND_CATALOG`, else the first default path
    /// that exists, else the built-in assortment.
    pub fn load_catalog(&self, sink: &dyn DiagnosticSink) -> VendResult<Catalog> {
        if let Some(path) = &self.catalog_path {
            return load_catalog_file(path, sink);
        }

        for path in CATALOG_PATHS {
            let path = Path::new(path);
            if path.is_file() {
                return load_catalog_file(path, sink);
            }
        }

        tracing::warn!("No product catalog found, using built-in assortment");
        Ok(Catalog::with_sink(default_assortment()?, sink))
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn load_catalog_file(path: &Path, sink: &dyn DiagnosticSink) -> VendResult<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        VendError::Configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let catalog = Catalog::from_toml(&content, sink)?;
    tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// The four-product assortment the demo ships with
pub fn default_assortment() -> VendResult<Vec<BoxedProduct>> {
    let products: Vec<BoxedProduct> = vec![
        Box::new(Snickers::new(1, 20.0, "Snickers", Size::Large)),
        Box::new(CottonCandy::new(2, 50.0, "Cotton Candy", "Strawberry")),
        Box::new(MintDrops::new(3, 30.0, "Mint Drops", 4)?),
        Box::new(Taco::new(4, 60.0, "Taco")),
    ];
    Ok(products)
}
