use crate::config::PolicyParams;
use crate::model::{ComputedRecord, ReconciledRecord};

/// Apply the stock policy to every reconciled record. Row-wise, pure, and
/// order-preserving; inputs are fully normalized upstream, so this stage
/// cannot fail.
pub fn compute(records: &[ReconciledRecord], policy: &PolicyParams) -> Vec<ComputedRecord> {
    records.iter().map(|r| compute_record(r, policy)).collect()
}

fn compute_record(r: &ReconciledRecord, policy: &PolicyParams) -> ComputedRecord {
    let total_stock = r.fulfillment_stock + r.depot_stock;

    // The absolute floor applies only to records registered for inbound
    // handling, never universally.
    let floor_eligible = !r.inbound_code.is_empty();

    let mut safety_target = r.sales_qty * policy.safety_multiple;
    if floor_eligible {
        safety_target = safety_target.max(policy.minimum_floor);
    }
    let purchase_qty = finalize_qty(safety_target - total_stock);
    let purchase_cost = purchase_qty as f64 * r.unit_cost;

    let redundancy_threshold = r.sales_qty * policy.redundancy_multiple;
    let excess_qty = finalize_qty(total_stock - redundancy_threshold);
    let excess_value = excess_qty as f64 * r.unit_cost;

    let mut transfer_target = r.sales_qty * policy.transfer_safety_multiple;
    if floor_eligible {
        transfer_target = transfer_target.max(policy.minimum_floor);
    }
    // Transfers rebalance depot stock into the fulfillment center, so only
    // fulfillment stock offsets the target.
    let transfer_qty = finalize_qty(transfer_target - r.fulfillment_stock);

    ComputedRecord {
        record: r.clone(),
        total_stock,
        safety_target,
        purchase_qty,
        purchase_cost,
        redundancy_threshold,
        excess_qty,
        excess_value,
        transfer_target,
        transfer_qty,
    }
}

/// Finalize a recommended quantity: floor (never round, to avoid
/// over-recommending) and clamp surplus to zero. Intermediates stay signed
/// until this point.
fn finalize_qty(value: f64) -> i64 {
    let floored = value.floor();
    if floored <= 0.0 {
        0
    } else {
        floored as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sales: f64, fulfillment: f64, depot: f64, inbound: &str) -> ReconciledRecord {
        ReconciledRecord {
            shop: "S1".into(),
            product_code: "P-1".into(),
            product_name: "Widget".into(),
            option_name: "Red".into(),
            unit_cost: 10.0,
            sku_id: "A1".into(),
            inbound_code: inbound.into(),
            sales_qty: sales,
            fulfillment_stock: fulfillment,
            depot_stock: depot,
            storage_fee: 0.0,
        }
    }

    fn policy() -> PolicyParams {
        PolicyParams {
            safety_multiple: 2.0,
            minimum_floor: 5.0,
            redundancy_multiple: 4.0,
            transfer_safety_multiple: 2.0,
        }
    }

    #[test]
    fn purchase_scenario() {
        // sales 3, no stock anywhere, inbound code present:
        // safety_target = max(3*2, 5) = 6, purchase 6 units at cost 10.
        let rows = compute(&[record(3.0, 0.0, 0.0, "IN-1")], &policy());
        let r = &rows[0];
        assert_eq!(r.total_stock, 0.0);
        assert_eq!(r.safety_target, 6.0);
        assert_eq!(r.purchase_qty, 6);
        assert_eq!(r.purchase_cost, 60.0);
    }

    #[test]
    fn floor_applies_only_to_eligible_records() {
        let p = PolicyParams {
            safety_multiple: 3.0,
            minimum_floor: 5.0,
            redundancy_multiple: 4.0,
            transfer_safety_multiple: 2.0,
        };
        let eligible = compute(&[record(0.0, 0.0, 0.0, "IN-1")], &p);
        assert_eq!(eligible[0].safety_target, 5.0);
        assert_eq!(eligible[0].purchase_qty, 5);

        let ineligible = compute(&[record(0.0, 0.0, 0.0, "")], &p);
        assert_eq!(ineligible[0].safety_target, 0.0);
        assert_eq!(ineligible[0].purchase_qty, 0);
    }

    #[test]
    fn redundancy_scenario() {
        // sales 3, stock 20, redundancy multiple 4:
        // threshold 12, excess 8 worth 80.
        let rows = compute(&[record(3.0, 20.0, 0.0, "IN-1")], &policy());
        let r = &rows[0];
        assert_eq!(r.redundancy_threshold, 12.0);
        assert_eq!(r.excess_qty, 8);
        assert_eq!(r.excess_value, 80.0);
    }

    #[test]
    fn surplus_clamps_to_zero_at_finalization() {
        // Well stocked: no purchase, no excess, no transfer.
        let rows = compute(&[record(1.0, 6.0, 0.0, "")], &policy());
        let r = &rows[0];
        assert_eq!(r.purchase_qty, 0);
        assert_eq!(r.excess_qty, 0);
        assert_eq!(r.transfer_qty, 0);
        // Signed intermediates survive for diagnostics
        assert_eq!(r.safety_target, 2.0);
        assert_eq!(r.total_stock, 6.0);
    }

    #[test]
    fn quantities_floor_never_round() {
        // safety_target = 2.5 * 2 = 5, stock 0.2 → gap 4.8 → 4, not 5.
        let rows = compute(&[record(2.5, 0.2, 0.0, "")], &policy());
        assert_eq!(rows[0].purchase_qty, 4);
    }

    #[test]
    fn transfer_offsets_fulfillment_stock_only() {
        // target = 4*2 = 8; fulfillment holds 3, depot holds 100 → move 5.
        let rows = compute(&[record(4.0, 3.0, 100.0, "IN-1")], &policy());
        let r = &rows[0];
        assert_eq!(r.transfer_target, 8.0);
        assert_eq!(r.transfer_qty, 5);
    }

    #[test]
    fn transfer_floor_eligibility() {
        let rows = compute(&[record(0.0, 0.0, 50.0, "IN-1")], &policy());
        assert_eq!(rows[0].transfer_target, 5.0);
        assert_eq!(rows[0].transfer_qty, 5);

        let rows = compute(&[record(0.0, 0.0, 50.0, "")], &policy());
        assert_eq!(rows[0].transfer_qty, 0);
    }

    #[test]
    fn order_preserved() {
        let input = vec![
            record(1.0, 0.0, 0.0, ""),
            record(2.0, 0.0, 0.0, ""),
            record(3.0, 0.0, 0.0, ""),
        ];
        let rows = compute(&input, &policy());
        let sales: Vec<f64> = rows.iter().map(|r| r.record.sales_qty).collect();
        assert_eq!(sales, vec![1.0, 2.0, 3.0]);
    }
}
