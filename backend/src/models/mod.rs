//! Domain models for the cleaning pipeline.
//!
//! - [`RawRow`] - one row as produced by a source reader
//! - [`Client`], [`Product`], [`Service`] - normalized records
//! - [`CleanedData`] - the assembled output document
//!
//! Serialized field names keep the French labels of the source files
//! (`nom`, `prix`, `codePostal`, ...).

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

// =============================================================================
// Raw Row
// =============================================================================

/// Column name to raw cell text.
///
/// Any column may be absent: spreadsheet rows omit empty cells and short
/// delimited lines omit trailing columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any previous value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Raw value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Raw value of a column, `""` when absent.
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A cleaned client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "codePostal")]
    pub postal_code: String,
}

/// A cleaned product, from either product source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    pub description: String,
    /// Never negative; 0 when the source value was absent or unparsable.
    #[serde(rename = "prix", serialize_with = "serialize_amount")]
    pub price: f64,
}

/// A cleaned service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    /// Never negative; 0 when the source value was absent or unparsable.
    #[serde(rename = "tarif", serialize_with = "serialize_amount")]
    pub rate: f64,
    #[serde(rename = "couleur")]
    pub color_tag: String,
}

// =============================================================================
// Assembled Document
// =============================================================================

/// The document written to `dataCleaned.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedData {
    pub clients: Vec<Client>,
    #[serde(rename = "produits")]
    pub products: Vec<Product>,
    pub services: Vec<Service>,
}

/// Whole amounts are written as JSON integers (`12`, not `12.0`).
fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_row_absent_columns() {
        let row: RawRow = [("nom", "Alice"), ("email", "")].into_iter().collect();
        assert_eq!(row.get("nom"), Some("Alice"));
        assert_eq!(row.get("email"), Some(""));
        assert_eq!(row.get("telephone"), None);
        assert_eq!(row.text("telephone"), "");
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_document_uses_french_labels() {
        let doc = CleanedData {
            clients: vec![Client {
                id: "c1".into(),
                name: "Jean".into(),
                email: "j@x.ca".into(),
                phone: "514-555-1234".into(),
                postal_code: "H1A 1A1".into(),
            }],
            products: vec![Product {
                id: "p1".into(),
                name: "Creme".into(),
                description: "Hydratante".into(),
                price: 42.5,
            }],
            services: vec![Service {
                id: "s1".into(),
                name: "Soin".into(),
                rate: 80.0,
                color_tag: "#ff0000".into(),
            }],
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "clients": [{
                    "id": "c1", "nom": "Jean", "email": "j@x.ca",
                    "telephone": "514-555-1234", "codePostal": "H1A 1A1"
                }],
                "produits": [{ "id": "p1", "nom": "Creme", "description": "Hydratante", "prix": 42.5 }],
                "services": [{ "id": "s1", "nom": "Soin", "tarif": 80, "couleur": "#ff0000" }]
            })
        );
    }

    #[test]
    fn test_whole_amount_written_as_integer() {
        let product = Product {
            id: "p".into(),
            name: String::new(),
            description: String::new(),
            price: 0.0,
        };
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains("\"prix\":0}"), "{text}");
    }

    #[test]
    fn test_document_reads_back() {
        let text = r#"{"clients":[],"produits":[{"id":"p","nom":"A","description":"","prix":3}],"services":[]}"#;
        let doc: CleanedData = serde_json::from_str(text).unwrap();
        assert_eq!(doc.products[0].price, 3.0);
        assert!(doc.clients.is_empty());
    }
}
