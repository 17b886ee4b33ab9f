use crate::model::{ComputedRecord, PlanSummary};

/// Fold computed rows into run-scoped counts and monetary totals.
pub fn compute_summary(rows: &[ComputedRecord]) -> PlanSummary {
    let mut summary = PlanSummary {
        rows: rows.len(),
        ..PlanSummary::default()
    };

    for r in rows {
        if r.purchase_qty > 0 {
            summary.purchase_lines += 1;
            summary.purchase_units += r.purchase_qty;
            summary.purchase_cost += r.purchase_cost;
        }
        if r.excess_qty > 0 {
            summary.excess_lines += 1;
            summary.excess_units += r.excess_qty;
            summary.excess_value += r.excess_value;
        }
        if r.transfer_qty > 0 {
            summary.transfer_lines += 1;
            summary.transfer_units += r.transfer_qty;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::compute;
    use crate::config::PolicyParams;
    use crate::model::ReconciledRecord;

    fn record(sales: f64, stock: f64, cost: f64) -> ReconciledRecord {
        ReconciledRecord {
            shop: "S1".into(),
            product_code: "P".into(),
            product_name: "W".into(),
            option_name: String::new(),
            unit_cost: cost,
            sku_id: "A".into(),
            inbound_code: "IN".into(),
            sales_qty: sales,
            fulfillment_stock: stock,
            depot_stock: 0.0,
            storage_fee: 0.0,
        }
    }

    #[test]
    fn summary_totals() {
        let policy = PolicyParams {
            safety_multiple: 2.0,
            minimum_floor: 0.0,
            redundancy_multiple: 4.0,
            transfer_safety_multiple: 0.0,
        };
        let rows = compute(
            &[
                record(5.0, 0.0, 10.0),  // purchase 10 @ 100
                record(5.0, 0.0, 2.0),   // purchase 10 @ 20
                record(1.0, 50.0, 1.0),  // excess 46 @ 46
                record(0.0, 0.0, 10.0),  // nothing
            ],
            &policy,
        );
        let summary = compute_summary(&rows);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.purchase_lines, 2);
        assert_eq!(summary.purchase_units, 20);
        assert_eq!(summary.purchase_cost, 120.0);
        assert_eq!(summary.excess_lines, 1);
        assert_eq!(summary.excess_units, 46);
        assert_eq!(summary.excess_value, 46.0);
        assert_eq!(summary.transfer_lines, 0);
    }
}
