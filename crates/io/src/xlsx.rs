// Excel workbook import (xlsx, xls, xlsm, xlsb, ods)
//
// One-way conversion: every cell is rendered as text. Numeric typing happens
// later, explicitly, at the normalization boundary — never here.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use restock_engine::RawTable;

use crate::LoadError;

/// Import the first worksheet of a workbook as an all-text table.
pub fn import(path: &Path) -> Result<RawTable, LoadError> {
    let workbook_err = |message: String| LoadError::Workbook {
        path: path.display().to_string(),
        message,
    };

    let mut workbook =
        open_workbook_auto(path).map_err(|e| workbook_err(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| workbook_err("workbook contains no sheets".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| workbook_err(e.to_string()))?;

    let mut rows = Vec::with_capacity(range.height());
    for row in range.rows() {
        rows.push(row.iter().map(cell_text).collect());
    }
    Ok(RawTable::from_rows(rows))
}

/// Render a cell as the text a user would see. Integral floats drop their
/// fractional part so identifiers survive the numeric round-trip.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => {
            if *b {
                "TRUE".into()
            } else {
                "FALSE".into()
            }
        }
        // Error cells contribute nothing; normalization maps them to
        // empty key / zero quantity downstream anyway.
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
