//! # vend-demo
//!
//! Console demo for vend-machine-rs.
//!
//! This crate provides:
//! - Environment-driven configuration (`VEND_CATALOG`, `VEND_LOG_FORMAT`)
//! - Catalog loading from `config/products.toml` with a built-in fallback
//! - The scripted customer walkthrough printed by the `vend-demo` binary

pub mod config;
pub mod walkthrough;

pub use config::{default_assortment, DemoConfig, LogFormat};
pub use walkthrough::{run, Visit, SCRIPT};
