//! Pipeline driver.
//!
//! `read all sources → normalize → merge products → write`. Any failure
//! ends the run before the output file is touched.
//!
//! # Example
//!
//! ```rust,ignore
//! use datacleaner::{clean_data, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let data = clean_data(&Config::default()).await.unwrap();
//!     println!("{} products", data.products.len());
//! }
//! ```

use crate::config::Config;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_success_indent};
use crate::models::{CleanedData, Product, RawRow};
use crate::parser::source::Source;

use super::normalize::{normalize_all, normalize_client, normalize_product, normalize_service};
use super::output::write_document;

/// Rows loaded from every input, before normalization.
#[derive(Debug, Clone, Default)]
pub struct SourceRows {
    pub clients: Vec<RawRow>,
    pub spreadsheet_products: Vec<RawRow>,
    pub text_products: Vec<RawRow>,
    pub services: Vec<RawRow>,
}

/// Read the four inputs concurrently. The first failure wins.
pub async fn read_sources(config: &Config) -> PipelineResult<SourceRows> {
    log_info("📖 Reading sources...");

    let (clients, spreadsheet_products, text_products, services) = tokio::try_join!(
        config.clients.read(),
        config.spreadsheet_products.read(),
        config.text_products.read(),
        config.services.read(),
    )?;

    let rows = SourceRows {
        clients,
        spreadsheet_products,
        text_products,
        services,
    };

    for (source, count) in config.sources().into_iter().zip(rows.counts()) {
        log_row_count(source, count);
    }

    Ok(rows)
}

impl SourceRows {
    /// Row counts in [`Config::sources`] order.
    pub fn counts(&self) -> [usize; 4] {
        [
            self.clients.len(),
            self.spreadsheet_products.len(),
            self.text_products.len(),
            self.services.len(),
        ]
    }
}

fn log_row_count(source: &Source, count: usize) {
    log_success_indent(format!("{}: {} rows", source.path.display(), count), 1);
}

/// Normalize every collection and assemble the document.
///
/// Spreadsheet products come first, text products after; no deduplication.
pub fn assemble(rows: &SourceRows) -> CleanedData {
    let clients = normalize_all(&rows.clients, normalize_client);
    let products = merge_products(
        normalize_all(&rows.spreadsheet_products, normalize_product),
        normalize_all(&rows.text_products, normalize_product),
    );
    let services = normalize_all(&rows.services, normalize_service);

    CleanedData {
        clients,
        products,
        services,
    }
}

/// Concatenate two product collections, preserving source order.
pub fn merge_products(mut first: Vec<Product>, second: Vec<Product>) -> Vec<Product> {
    first.extend(second);
    first
}

/// Run the whole cleaning pass and write `config.output`.
pub async fn clean_data(config: &Config) -> PipelineResult<CleanedData> {
    let rows = read_sources(config).await?;

    log_info("🧹 Normalizing records...");
    let data = assemble(&rows);
    log_info_indent(format!("{} clients", data.clients.len()), 1);
    log_info_indent(
        format!(
            "{} products ({} spreadsheet + {} text)",
            data.products.len(),
            rows.spreadsheet_products.len(),
            rows.text_products.len()
        ),
        1,
    );
    log_info_indent(format!("{} services", data.services.len()), 1);

    write_document(&config.output, &data)?;
    log_success(format!("Cleaned data saved to {}", config.output.display()));

    Ok(data)
}
