//! `restock run` / `restock validate` — config-driven planning runs.

use std::path::{Path, PathBuf};

use restock_engine::model::PlanInput;
use restock_engine::{PlanConfig, RawTable};

use crate::exit_codes::{EXIT_PLAN_INVALID_CONFIG, EXIT_PLAN_LOAD, EXIT_PLAN_RUNTIME};
use crate::CliError;

fn plan_err(code: u8, message: impl Into<String>) -> CliError {
    CliError {
        code,
        message: message.into(),
    }
}

/// Run a plan: load every input, reconcile, compute, report.
///
/// A structural failure on any listed file halts the run before a partial
/// result is produced — it is preferable to report nothing than to report a
/// table reconciled against incomplete data.
pub fn cmd_run(
    config_path: &Path,
    json_output: bool,
    output_file: Option<&Path>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| plan_err(EXIT_PLAN_RUNTIME, format!("cannot read config: {e}")))?;

    let config = PlanConfig::from_toml(&config_str)
        .map_err(|e| plan_err(EXIT_PLAN_INVALID_CONFIG, e.to_string()))?;

    // Resolve data-file paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let load = |file: &str| -> Result<RawTable, CliError> {
        restock_io::load(&base_dir.join(file))
            .map_err(|e| plan_err(EXIT_PLAN_LOAD, e.to_string()))
    };

    let load_all = |files: &[String]| -> Result<Vec<RawTable>, CliError> {
        files.iter().map(|f| load(f)).collect()
    };

    let input = PlanInput {
        master: load(&config.master.file)?,
        sales: load_all(&config.sources.sales.files)?,
        fulfillment: load_all(&config.sources.fulfillment.files)?,
        depot: load_all(&config.sources.depot.files)?,
    };

    let result = restock_engine::run(&config, &input)
        .map_err(|e| plan_err(EXIT_PLAN_RUNTIME, e.to_string()))?;

    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| plan_err(EXIT_PLAN_RUNTIME, format!("JSON serialization error: {e}")))?;

    // --output wins over the config's [output] path
    let output_path: Option<PathBuf> = output_file
        .map(Path::to_path_buf)
        .or_else(|| config.output.json.as_ref().map(|f| base_dir.join(f)));

    if let Some(ref path) = output_path {
        std::fs::write(path, &json_str)
            .map_err(|e| plan_err(EXIT_PLAN_RUNTIME, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{} records — purchase {} lines ({} units, {:.2}), redundant {} lines ({} units, {:.2}), transfer {} lines ({} units)",
        s.rows,
        s.purchase_lines,
        s.purchase_units,
        s.purchase_cost,
        s.excess_lines,
        s.excess_units,
        s.excess_value,
        s.transfer_lines,
        s.transfer_units,
    );

    Ok(())
}

/// Parse and validate a plan config without running it.
pub fn cmd_validate(config_path: &Path) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| plan_err(EXIT_PLAN_RUNTIME, format!("cannot read config: {e}")))?;

    let config = PlanConfig::from_toml(&config_str)
        .map_err(|e| plan_err(EXIT_PLAN_INVALID_CONFIG, e.to_string()))?;

    let file_count: usize = config.sources.iter().map(|(_, s)| s.files.len()).sum();
    eprintln!(
        "config OK: \"{}\" — master {} + {} source file(s)",
        config.name, config.master.file, file_count,
    );
    Ok(())
}
