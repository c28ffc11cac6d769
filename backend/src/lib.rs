//! # Datacleaner - client, product and service export cleaning
//!
//! Reads the client, product and service exports of the shop, normalizes
//! names, phone numbers, postal codes and identifiers, and writes one
//! consolidated `dataCleaned.json`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │ xlsx / csv   │────▶│   Parser    │────▶│  Transform  │────▶│ dataCleaned.json │
//! │ (4 sources)  │     │ (raw rows)  │     │ (normalize) │     │  (one document)  │
//! └──────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datacleaner::{clean_data, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let data = clean_data(&Config::default()).await.unwrap();
//!     println!("Cleaned {} clients", data.clients.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Raw rows, records and the output document
//! - [`parser`] - Delimited-text and xlsx readers
//! - [`transform`] - Formatters, normalizers, pipeline and writer
//! - [`config`] - Fixed input/output layout
//! - [`logs`] - Console logging
//! - [`api`] - Read-only web front for the cleaned document

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{OutputError, PipelineError, ServerError, SourceError};

// =============================================================================
// Re-exports - Models and configuration
// =============================================================================

pub use config::Config;
pub use models::{CleanedData, Client, Product, RawRow, Service};

// =============================================================================
// Re-exports - Readers
// =============================================================================

pub use parser::source::{Source, SourceFormat};
pub use parser::spreadsheet::{read_workbook_file, SheetRows};
pub use parser::{parse_bytes_auto, parse_delimited, read_delimited_file, ParseResult};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::format::{ensure_id, format_name, format_phone, format_postal_code, parse_amount};
pub use transform::pipeline::{assemble, clean_data, merge_products, read_sources, SourceRows};
pub use transform::{normalize_client, normalize_product, normalize_service, write_document};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
