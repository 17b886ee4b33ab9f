use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::PolicyParams;
use crate::table::RawTable;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Pre-loaded tables for one run: the master plus every file of each
/// logical source. Loading is the caller's concern; the engine only sees
/// tables.
pub struct PlanInput {
    pub master: RawTable,
    pub sales: Vec<RawTable>,
    pub fulfillment: Vec<RawTable>,
    pub depot: Vec<RawTable>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Summed value columns for one normalized key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SourceTotals {
    pub quantity: f64,
    pub fee: f64,
}

/// One row per distinct normalized key present in a logical source, with
/// quantity and fee summed across all rows and all files sharing that key.
/// The empty-string key (blank identifiers) is a legitimate bucket.
#[derive(Debug, Clone, Default)]
pub struct AggregatedSource {
    totals: BTreeMap<String, SourceTotals>,
}

impl AggregatedSource {
    pub fn from_totals(totals: BTreeMap<String, SourceTotals>) -> Self {
        Self { totals }
    }

    pub fn get(&self, key: &str) -> Option<SourceTotals> {
        self.totals.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SourceTotals)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// A master row joined with every aggregated source. Exactly one per master
/// data row, in master order; unmatched joins are already coerced to zero.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledRecord {
    pub shop: String,
    pub product_code: String,
    pub product_name: String,
    pub option_name: String,
    pub unit_cost: f64,
    pub sku_id: String,
    pub inbound_code: String,
    pub sales_qty: f64,
    pub fulfillment_stock: f64,
    pub depot_stock: f64,
    pub storage_fee: f64,
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// A reconciled record extended with policy recommendations. The engine's
/// final per-row output, consumed by the report assembler.
#[derive(Debug, Clone, Serialize)]
pub struct ComputedRecord {
    #[serde(flatten)]
    pub record: ReconciledRecord,
    pub total_stock: f64,
    pub safety_target: f64,
    pub purchase_qty: i64,
    pub purchase_cost: f64,
    pub redundancy_threshold: f64,
    pub excess_qty: i64,
    pub excess_value: f64,
    pub transfer_target: f64,
    pub transfer_qty: i64,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSummary {
    pub rows: usize,
    pub purchase_lines: usize,
    pub purchase_units: i64,
    pub purchase_cost: f64,
    pub excess_lines: usize,
    pub excess_units: i64,
    pub excess_value: f64,
    pub transfer_lines: usize,
    pub transfer_units: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
    pub policy: PolicyParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    pub meta: PlanMeta,
    pub summary: PlanSummary,
    pub rows: Vec<ComputedRecord>,
}
