//! # vend-demo
//!
//! Plays a short scripted session against a stocked vending machine.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a different assortment
//! export VEND_CATALOG=config/products.toml
//!
//! # Optional: structured logs
//! export VEND_LOG_FORMAT=json
//!
//! vend-demo
//! ```

use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vend_core::{SharedSink, TracingSink, VendingMachine};
use vend_demo::{walkthrough, DemoConfig, LogFormat};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }

    print_banner();

    let sink: SharedSink = Arc::new(TracingSink);
    let catalog = config
        .load_catalog(sink.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;
    info!("Products loaded: {}", catalog.len());

    let mut vm = VendingMachine::from_catalog(catalog, sink);

    let stdout = std::io::stdout();
    walkthrough::run(&mut vm, &walkthrough::SCRIPT, &mut stdout.lock())?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Vend-Machine RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
