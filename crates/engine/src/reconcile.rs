use crate::config::{JoinKey, MasterConfig};
use crate::error::PlanError;
use crate::model::{AggregatedSource, ReconciledRecord, SourceTotals};
use crate::normalize::{normalize_key, normalize_number};
use crate::table::RawTable;

/// One aggregated source paired with the master key column it joins on.
#[derive(Clone, Copy)]
pub struct SourceJoin<'a> {
    pub table: &'a AggregatedSource,
    pub join_on: JoinKey,
}

/// Left-join every aggregated source onto the master table.
///
/// Output has exactly one record per master data row, in master order —
/// reconciliation never drops, duplicates, or reorders master rows. A master
/// key with no match in a source resolves to zero quantities for that source.
/// Empty normalized keys join like any other key: a blank master key matches
/// the aggregate of all blank-keyed source rows.
pub fn reconcile(
    master: &RawTable,
    config: &MasterConfig,
    sales: SourceJoin,
    fulfillment: SourceJoin,
    depot: SourceJoin,
) -> Result<Vec<ReconciledRecord>, PlanError> {
    let cols = &config.columns;
    master.ensure_width(cols.required_width(), "master")?;

    let rows = master.data_rows(config.has_header);
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let cell = |col: usize| row.get(col).map(String::as_str).unwrap_or("");

        let sku_id = normalize_key(cell(cols.sku_id));
        let inbound_code = normalize_key(cell(cols.inbound_code));

        let lookup = |join: SourceJoin| -> SourceTotals {
            let key = match join.join_on {
                JoinKey::SkuId => &sku_id,
                JoinKey::InboundCode => &inbound_code,
            };
            join.table.get(key).unwrap_or_default()
        };

        let s = lookup(sales);
        let f = lookup(fulfillment);
        let d = lookup(depot);

        out.push(ReconciledRecord {
            shop: cell(cols.shop).to_string(),
            product_code: cell(cols.product_code).to_string(),
            product_name: cell(cols.product_name).to_string(),
            option_name: cell(cols.option_name).to_string(),
            unit_cost: normalize_number(cell(cols.unit_cost)),
            sku_id,
            inbound_code,
            sales_qty: s.quantity,
            fulfillment_stock: f.quantity,
            depot_stock: d.quantity,
            storage_fee: s.fee + f.fee + d.fee,
        });
    }

    Ok(out)
}
