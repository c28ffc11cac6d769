//! Cleaning steps.
//!
//! - Format: field-level formatters
//! - Normalize: raw rows to typed records
//! - Output: JSON writer
//! - Pipeline: the full run

pub mod format;
pub mod normalize;
pub mod output;
pub mod pipeline;

pub use format::*;
pub use normalize::{normalize_all, normalize_client, normalize_product, normalize_service};
pub use output::{to_json, write_document};
pub use pipeline::*;
