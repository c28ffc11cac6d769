//! xlsx reader.
//!
//! Only the first sheet (by position) is read. The first non-empty row is the
//! header row; every following row with at least one non-empty cell becomes a
//! [`RawRow`]. Empty cells are left out of the row. When a header repeats,
//! the first column carrying it keeps the name and later ones are ignored.

use std::collections::HashSet;
use std::path::Path;

use umya_spreadsheet::reader::xlsx;
use umya_spreadsheet::Worksheet;

use crate::error::{SourceError, SourceResult};
use crate::models::RawRow;

/// Rows of a sheet plus its header names.
#[derive(Debug, Clone)]
pub struct SheetRows {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Open a workbook and read its first sheet.
pub fn read_workbook_file(path: &Path) -> SourceResult<SheetRows> {
    std::fs::metadata(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let book = xlsx::read(path).map_err(|e| SourceError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet = book
        .get_sheet_collection()
        .first()
        .ok_or_else(|| SourceError::NoSheets(path.to_path_buf()))?;

    Ok(sheet_rows(sheet))
}

/// Convert a worksheet to header-keyed rows.
pub fn sheet_rows(sheet: &Worksheet) -> SheetRows {
    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let sheet_name = sheet.get_name().to_string();

    let header_row = (1..=max_row).find(|&row| {
        (1..=max_col).any(|col| !cell_text(sheet, col, row).trim().is_empty())
    });

    let Some(header_row) = header_row else {
        return SheetRows {
            sheet_name,
            headers: Vec::new(),
            rows: Vec::new(),
        };
    };

    let headers: Vec<String> = (1..=max_col)
        .map(|col| cell_text(sheet, col, header_row).trim().to_string())
        .collect();

    let mut seen = HashSet::new();
    let columns: Vec<(&String, u32)> = headers
        .iter()
        .zip(1..=max_col)
        .filter(|&(header, _)| !header.is_empty() && seen.insert(header))
        .collect();

    let mut rows = Vec::new();
    for row in (header_row + 1)..=max_row {
        let raw: RawRow = columns
            .iter()
            .map(|&(header, col)| (header.clone(), cell_text(sheet, col, row)))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        if !raw.is_empty() {
            rows.push(raw);
        }
    }

    SheetRows {
        sheet_name,
        headers,
        rows,
    }
}

fn cell_text(sheet: &Worksheet, col: u32, row: u32) -> String {
    sheet
        .get_cell((col, row))
        .map(|cell| cell.get_value().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_products(path: &Path) {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut("A1").set_value("id");
        sheet.get_cell_mut("B1").set_value("nom");
        sheet.get_cell_mut("C1").set_value("description");
        sheet.get_cell_mut("D1").set_value("prix");

        sheet.get_cell_mut("A2").set_value("E-1");
        sheet.get_cell_mut("B2").set_value("huile SÈCHE");
        sheet.get_cell_mut("D2").set_value_number(24.5);

        // Row 3 left blank on purpose.
        sheet.get_cell_mut("B4").set_value("Baume");
        sheet.get_cell_mut("D4").set_value_number(18);
        umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
    }

    #[test]
    fn test_reads_first_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("produits.xlsx");
        write_products(&path);

        let result = read_workbook_file(&path).unwrap();
        assert_eq!(result.headers, vec!["id", "nom", "description", "prix"]);
        assert_eq!(result.rows.len(), 2);

        let first = &result.rows[0];
        assert_eq!(first.get("id"), Some("E-1"));
        assert_eq!(first.get("nom"), Some("huile SÈCHE"));
        assert_eq!(first.get("description"), None);
        assert_eq!(first.get("prix").map(|p| p.parse::<f64>().unwrap()), Some(24.5));

        let second = &result.rows[1];
        assert_eq!(second.get("id"), None);
        assert_eq!(second.get("prix").map(|p| p.parse::<f64>().unwrap()), Some(18.0));
    }

    #[test]
    fn test_missing_workbook() {
        let dir = tempdir().unwrap();
        let err = read_workbook_file(&dir.path().join("absent.xlsx")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_corrupt_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, "id,nom\n1,pas un classeur\n").unwrap();

        let err = read_workbook_file(&path).unwrap_err();
        assert!(matches!(err, SourceError::Workbook { .. }));
    }

    #[test]
    fn test_repeated_header_keeps_first_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doublons.xlsx");
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut("A1").set_value("nom");
        sheet.get_cell_mut("B1").set_value("nom");
        sheet.get_cell_mut("C1").set_value("prix");
        sheet.get_cell_mut("A2").set_value("first");
        sheet.get_cell_mut("B2").set_value("second");
        sheet.get_cell_mut("C2").set_value("12");
        sheet.get_cell_mut("B3").set_value("only second");
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let result = read_workbook_file(&path).unwrap();
        assert_eq!(result.headers, vec!["nom", "nom", "prix"]);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].get("nom"), Some("first"));
        assert_eq!(result.rows[0].get("prix"), Some("12"));
    }

    #[test]
    fn test_empty_sheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vide.xlsx");
        let book = umya_spreadsheet::new_file();
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let result = read_workbook_file(&path).unwrap();
        assert!(result.headers.is_empty());
        assert!(result.rows.is_empty());
    }
}
