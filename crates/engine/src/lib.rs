//! `restock-engine` — Replenishment reconciliation and stock-policy engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns computed
//! recommendations. No CLI or IO dependencies.

pub mod aggregate;
pub mod compute;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod summary;
pub mod table;

pub use config::PlanConfig;
pub use engine::run;
pub use error::PlanError;
pub use model::{PlanInput, PlanResult};
pub use table::RawTable;
