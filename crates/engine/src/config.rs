use serde::{Deserialize, Serialize};

use crate::error::PlanError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub master: MasterConfig,
    pub sources: SourcesConfig,
    pub policy: PolicyParams,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Master
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MasterConfig {
    pub file: String,
    #[serde(default = "default_true")]
    pub has_header: bool,
    pub columns: MasterColumns,
}

/// Semantic field → zero-based column position within the master layout.
/// Declared once, externally; never inferred from headers.
#[derive(Debug, Clone, Deserialize)]
pub struct MasterColumns {
    pub shop: usize,
    pub product_code: usize,
    pub product_name: usize,
    pub option_name: usize,
    pub unit_cost: usize,
    pub sku_id: usize,
    pub inbound_code: usize,
}

impl MasterColumns {
    /// Minimum table width this mapping can address.
    pub fn required_width(&self) -> usize {
        1 + [
            self.shop,
            self.product_code,
            self.product_name,
            self.option_name,
            self.unit_cost,
            self.sku_id,
            self.inbound_code,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    pub fn key_index(&self, key: JoinKey) -> usize {
        match key {
            JoinKey::SkuId => self.sku_id,
            JoinKey::InboundCode => self.inbound_code,
        }
    }
}

/// Which master key column a source joins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    SkuId,
    InboundCode,
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkuId => write!(f, "sku_id"),
            Self::InboundCode => write!(f, "inbound_code"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// The three logical sources. Each section is declared even when its file
/// list is empty, so column mappings always live in config, not in code.
#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    pub sales: SourceConfig,
    pub fulfillment: SourceConfig,
    pub depot: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default = "default_true")]
    pub has_header: bool,
    pub join_on: JoinKey,
    pub columns: SourceColumns,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceColumns {
    pub match_key: usize,
    pub quantity: usize,
    #[serde(default)]
    pub fee: Option<usize>,
}

impl SourceColumns {
    pub fn required_width(&self) -> usize {
        1 + self
            .match_key
            .max(self.quantity)
            .max(self.fee.unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Run-scoped stock-policy parameters, applied uniformly to every record.
/// Range enforcement is the caller's concern; the engine assumes validated
/// input.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PolicyParams {
    /// Sales-equivalent multiple a record should hold in stock.
    pub safety_multiple: f64,
    /// Absolute floor quantity, applied only to floor-eligible records.
    pub minimum_floor: f64,
    /// Sales-equivalent multiple above which stock is flagged excess.
    pub redundancy_multiple: f64,
    /// Sales-equivalent multiple backing inter-warehouse transfers.
    pub transfer_safety_multiple: f64,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: Option<String>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl PlanConfig {
    pub fn from_toml(input: &str) -> Result<Self, PlanError> {
        let config: PlanConfig =
            toml::from_str(input).map_err(|e| PlanError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.master.file.trim().is_empty() {
            return Err(PlanError::ConfigValidation(
                "master file must not be empty".into(),
            ));
        }

        for (name, source) in self.sources.iter() {
            if source.files.iter().any(|f| f.trim().is_empty()) {
                return Err(PlanError::ConfigValidation(format!(
                    "source '{name}': blank file entry"
                )));
            }
        }

        Ok(())
    }
}

impl SourcesConfig {
    /// Iterate the sources in their fixed order, with their names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SourceConfig)> {
        [
            ("sales", &self.sales),
            ("fulfillment", &self.fulfillment),
            ("depot", &self.depot),
        ]
        .into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
