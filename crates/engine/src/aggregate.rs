use std::collections::BTreeMap;

use crate::config::SourceColumns;
use crate::error::PlanError;
use crate::model::{AggregatedSource, SourceTotals};
use crate::normalize::{normalize_key, normalize_number};
use crate::table::RawTable;

/// Concatenate all tables of one logical source and sum quantity (and fee,
/// when mapped) per normalized key.
///
/// Zero input tables yield an empty aggregate, never an error: downstream
/// joins treat it as "nothing recorded anywhere for any key."
pub fn aggregate_source(
    tables: &[RawTable],
    columns: &SourceColumns,
    has_header: bool,
    context: &str,
) -> Result<AggregatedSource, PlanError> {
    let mut totals: BTreeMap<String, SourceTotals> = BTreeMap::new();

    for (i, table) in tables.iter().enumerate() {
        table.ensure_width(columns.required_width(), &format!("{context} file {}", i + 1))?;

        for row in table.data_rows(has_header) {
            let key = normalize_key(row.get(columns.match_key).map(String::as_str).unwrap_or(""));
            let entry = totals.entry(key).or_default();
            entry.quantity +=
                normalize_number(row.get(columns.quantity).map(String::as_str).unwrap_or(""));
            if let Some(fee_col) = columns.fee {
                entry.fee += normalize_number(row.get(fee_col).map(String::as_str).unwrap_or(""));
            }
        }
    }

    Ok(AggregatedSource::from_totals(totals))
}
