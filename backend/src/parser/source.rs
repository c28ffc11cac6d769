//! One interface over both readers.
//!
//! A [`Source`] pairs a path with the reader used for it. The file format is
//! chosen explicitly, not from the extension: `Clients.xlsx` is read as
//! delimited text.

use std::path::{Path, PathBuf};

use crate::error::{SourceError, SourceResult};
use crate::logs::log_warning;
use crate::models::RawRow;

use super::read_delimited_file;
use super::spreadsheet::read_workbook_file;

/// Reader used for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceFormat {
    /// Comma-delimited text with a header row
    Text,
    /// xlsx workbook, first sheet
    Spreadsheet,
}

impl SourceFormat {
    /// Guess the reader from a file extension (`.xlsx`/`.xlsm` → spreadsheet).
    pub fn from_extension(path: &Path) -> Self {
        if has_spreadsheet_extension(path) {
            SourceFormat::Spreadsheet
        } else {
            SourceFormat::Text
        }
    }
}

fn has_spreadsheet_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "xlsx" | "xlsm"))
}

/// A file and the reader that loads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl Source {
    pub fn text(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Text,
        }
    }

    pub fn spreadsheet(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: SourceFormat::Spreadsheet,
        }
    }

    /// Read all rows on the calling thread.
    pub fn read_blocking(&self) -> SourceResult<Vec<RawRow>> {
        match self.format {
            SourceFormat::Text => {
                if has_spreadsheet_extension(&self.path) {
                    log_warning(format!(
                        "{} has a spreadsheet extension but is read as delimited text",
                        self.path.display()
                    ));
                }
                Ok(read_delimited_file(&self.path)?.rows)
            }
            SourceFormat::Spreadsheet => Ok(read_workbook_file(&self.path)?.rows),
        }
    }

    /// Read all rows on a blocking task.
    ///
    /// The file handle is opened and released inside the task.
    pub async fn read(&self) -> SourceResult<Vec<RawRow>> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.read_blocking())
            .await
            .map_err(|e| SourceError::Task {
                path: self.path.clone(),
                message: e.to_string(),
            })?
    }
}
