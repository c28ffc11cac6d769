//! Record normalizers: one raw row in, one typed record out.
//!
//! Every column is treated as optional. Absent and empty cells behave the
//! same way and no cross-field validation is done.

use crate::models::{Client, Product, RawRow, Service};

use super::format::{ensure_id, format_name, format_phone, format_postal_code, parse_amount};

/// Source column names, as found in the input headers.
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "nom";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "telephone";
    pub const POSTAL_CODE: &str = "codePostal";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "prix";
    pub const RATE: &str = "tarif";
    pub const COLOR: &str = "couleur";
}

pub fn normalize_client(row: &RawRow) -> Client {
    Client {
        id: ensure_id(row.text(columns::ID)),
        name: format_name(row.text(columns::NAME)),
        email: row.text(columns::EMAIL).trim().to_string(),
        phone: format_phone(row.text(columns::PHONE)),
        postal_code: format_postal_code(row.text(columns::POSTAL_CODE)),
    }
}

pub fn normalize_product(row: &RawRow) -> Product {
    Product {
        id: ensure_id(row.text(columns::ID)),
        name: format_name(row.text(columns::NAME)),
        description: row.text(columns::DESCRIPTION).trim().to_string(),
        price: parse_amount(row.text(columns::PRICE)),
    }
}

pub fn normalize_service(row: &RawRow) -> Service {
    Service {
        id: ensure_id(row.text(columns::ID)),
        name: format_name(row.text(columns::NAME)),
        rate: parse_amount(row.text(columns::RATE)),
        color_tag: row.text(columns::COLOR).trim().to_string(),
    }
}

/// Normalize a whole collection, keeping source order.
pub fn normalize_all<T>(rows: &[RawRow], normalize: fn(&RawRow) -> T) -> Vec<T> {
    rows.iter().map(normalize).collect()
}
