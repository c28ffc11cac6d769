//! Output writer.
//!
//! The document is written to a temporary file next to the target and
//! renamed over it, so readers never see a half-written file. The file keeps
//! the permissions of the one it replaces; a new file gets the usual
//! umask-filtered mode.

use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{OutputError, OutputResult};
use crate::models::CleanedData;

/// Pretty-printed JSON, two-space indent.
pub fn to_json(data: &CleanedData) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write the document, replacing any existing file at `path`.
pub fn write_document(path: &Path, data: &CleanedData) -> OutputResult<()> {
    let json = to_json(data)?;
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(io_err)?;
    if let Ok(existing) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    file.write_all(json.as_bytes()).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}
