// File I/O — delimited text and Excel workbooks

use std::fmt;
use std::path::Path;

use restock_engine::RawTable;

pub mod delimited;
pub mod xlsx;

/// Load one input file into a raw text table, dispatching on extension.
///
/// All-or-nothing per file: on success every row comes from a single
/// successful decode; on failure nothing is returned. "Loaded zero rows"
/// is not a failure — an empty file yields an empty table.
pub fn load(path: &Path) -> Result<RawTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xlsx" | "xls" | "xlsm" | "xlsb" | "ods") => xlsx::import(path),
        _ => delimited::import(path),
    }
}

#[derive(Debug)]
pub enum LoadError {
    /// File read error.
    Io { path: String, message: String },
    /// Every candidate encoding failed to decode the file.
    Undecodable { path: String },
    /// Spreadsheet open/read error.
    Workbook { path: String, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Undecodable { path } => {
                write!(
                    f,
                    "cannot decode {path}: no candidate encoding produced a parseable table"
                )
            }
            Self::Workbook { path, message } => {
                write!(f, "cannot read workbook {path}: {message}")
            }
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dispatches_unknown_extension_to_delimited() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        let table = load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 1), "2");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
