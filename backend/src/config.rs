//! Run configuration.
//!
//! Input and output names are fixed; a run always works on the current
//! directory. [`Config::in_dir`] roots the same layout elsewhere.

use std::path::{Path, PathBuf};

use crate::parser::source::Source;

/// Clients export. Read as delimited text despite its extension.
pub const CLIENTS_FILE: &str = "Clients.xlsx";

/// Product catalogue workbook.
pub const SPREADSHEET_PRODUCTS_FILE: &str = "ella_bache_produits_complet.xlsx";

/// Additional products.
pub const TEXT_PRODUCTS_FILE: &str = "Produits.csv";

pub const SERVICES_FILE: &str = "Services.csv";

/// Cleaned document.
pub const OUTPUT_FILE: &str = "dataCleaned.json";

/// Default port of the `serve` command.
pub const DEFAULT_PORT: u16 = 3000;

/// Where a run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub clients: Source,
    /// Products listed first in the output
    pub spreadsheet_products: Source,
    /// Products appended after the spreadsheet ones
    pub text_products: Source,
    pub services: Source,
    pub output: PathBuf,
}

impl Config {
    /// Same file names, inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            clients: Source::text(dir.join(CLIENTS_FILE)),
            spreadsheet_products: Source::spreadsheet(dir.join(SPREADSHEET_PRODUCTS_FILE)),
            text_products: Source::text(dir.join(TEXT_PRODUCTS_FILE)),
            services: Source::text(dir.join(SERVICES_FILE)),
            output: dir.join(OUTPUT_FILE),
        }
    }

    /// All inputs, in read order.
    pub fn sources(&self) -> [&Source; 4] {
        [
            &self.clients,
            &self.spreadsheet_products,
            &self.text_products,
            &self.services,
        ]
    }
}

impl Default for Config {
    /// Files of the current directory, by bare name.
    fn default() -> Self {
        Self::in_dir("")
    }
}
