use crate::error::PlanError;

/// The in-memory result of loading one file: every cell is text, row order
/// preserved, no schema validation beyond the column-count contract.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at (row, col). Out-of-bounds reads yield the empty string:
    /// short rows are data-quality degradation, not a structural failure.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Widest row in the table.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Data rows, skipping the leading header row when one is present.
    pub fn data_rows(&self, has_header: bool) -> &[Vec<String>] {
        if has_header && !self.rows.is_empty() {
            &self.rows[1..]
        } else {
            &self.rows
        }
    }

    /// Column-count contract: every mapped index must be addressable.
    /// An empty table passes — it contributes nothing, which is not an error.
    pub fn ensure_width(&self, required: usize, context: &str) -> Result<(), PlanError> {
        let found = self.width();
        if !self.is_empty() && found < required {
            return Err(PlanError::ColumnContract {
                context: context.to_string(),
                required,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn out_of_bounds_cell_is_empty() {
        let t = table(&[&["a", "b"], &["c"]]);
        assert_eq!(t.cell(0, 1), "b");
        assert_eq!(t.cell(1, 1), "");
        assert_eq!(t.cell(9, 0), "");
    }

    #[test]
    fn width_is_widest_row() {
        let t = table(&[&["a"], &["b", "c", "d"], &["e", "f"]]);
        assert_eq!(t.width(), 3);
        assert_eq!(RawTable::new().width(), 0);
    }

    #[test]
    fn data_rows_skips_header() {
        let t = table(&[&["h1", "h2"], &["a", "b"]]);
        assert_eq!(t.data_rows(true).len(), 1);
        assert_eq!(t.data_rows(false).len(), 2);
        assert!(RawTable::new().data_rows(true).is_empty());
    }

    #[test]
    fn ensure_width_contract() {
        let t = table(&[&["a", "b", "c"]]);
        assert!(t.ensure_width(3, "master").is_ok());
        let err = t.ensure_width(4, "master").unwrap_err();
        assert!(err.to_string().contains("requires 4"));
        // Empty tables pass: nothing loaded is not a structural failure
        assert!(RawTable::new().ensure_width(10, "sales").is_ok());
    }
}
