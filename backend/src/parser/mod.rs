//! Source readers.
//!
//! - delimited text (this module): encoding detection, comma-delimited rows
//! - [`spreadsheet`]: first sheet of an xlsx workbook
//! - [`source`]: one async interface over both
//!
//! Both readers return [`RawRow`]s keyed by the header row.

pub mod source;
pub mod spreadsheet;

use std::path::Path;

use crate::error::{SourceError, SourceResult};
use crate::models::RawRow;

/// Delimiter of every text source.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// One row per data line
    pub rows: Vec<RawRow>,
    /// Detected encoding
    pub encoding: String,
    /// Column headers
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without BOM) is taken as is; anything else goes
/// through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if std::str::from_utf8(body).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Decoding is lossy: invalid sequences become U+FFFD. A UTF-8 BOM is
/// stripped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let codec = match encoding.to_lowercase().as_str() {
        // WHATWG treats the ISO-8859-1 label as windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252
        }
        other => encoding_rs::Encoding::for_label(other.as_bytes()).unwrap_or(encoding_rs::UTF_8),
    };
    codec.decode(bytes).0.into_owned()
}

/// Parse delimited text with a header row.
///
/// Headers are trimmed; cell values are kept verbatim. Lines shorter than the
/// header leave the trailing columns absent, extra cells are ignored, and
/// columns with an empty header are dropped.
pub fn parse_delimited(content: &str, delimiter: u8) -> Result<(Vec<String>, Vec<RawRow>), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), value))
            .collect();
        rows.push(row);
    }

    Ok((headers, rows))
}

/// Parse delimited bytes with encoding auto-detection.
pub fn parse_bytes_auto(bytes: &[u8]) -> Result<ParseResult, csv::Error> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let (headers, rows) = parse_delimited(&content, DEFAULT_DELIMITER)?;

    Ok(ParseResult {
        rows,
        encoding,
        headers,
    })
}

/// Read and parse a delimited-text file.
pub fn read_delimited_file(path: &Path) -> SourceResult<ParseResult> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes_auto(&bytes).map_err(|source| SourceError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
