use crate::aggregate::aggregate_source;
use crate::compute::compute;
use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::model::{PlanInput, PlanMeta, PlanResult};
use crate::reconcile::{reconcile, SourceJoin};
use crate::summary::compute_summary;

/// Run one plan: aggregate each source, reconcile onto the master, apply the
/// stock policy, and summarize.
///
/// Single-threaded and batch-oriented. Each stage produces an independent
/// table handed to the next; a structural failure halts before any partial
/// result is produced.
pub fn run(config: &PlanConfig, input: &PlanInput) -> Result<PlanResult, PlanError> {
    let src = &config.sources;

    let sales = aggregate_source(&input.sales, &src.sales.columns, src.sales.has_header, "sales")?;
    let fulfillment = aggregate_source(
        &input.fulfillment,
        &src.fulfillment.columns,
        src.fulfillment.has_header,
        "fulfillment",
    )?;
    let depot = aggregate_source(&input.depot, &src.depot.columns, src.depot.has_header, "depot")?;

    let reconciled = reconcile(
        &input.master,
        &config.master,
        SourceJoin { table: &sales, join_on: src.sales.join_on },
        SourceJoin { table: &fulfillment, join_on: src.fulfillment.join_on },
        SourceJoin { table: &depot, join_on: src.depot.join_on },
    )?;

    let rows = compute(&reconciled, &config.policy);
    let summary = compute_summary(&rows);

    Ok(PlanResult {
        meta: PlanMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            policy: config.policy,
        },
        summary,
        rows,
    })
}
