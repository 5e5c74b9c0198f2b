//! Hold or Sell - year-by-year projection of keeping a mortgaged home as a rental
//! versus selling it today and investing the proceeds
//!
//! This library provides:
//! - Fixed-rate amortization (level payment, remaining balance, payments made)
//! - The per-year projection engine and its result rows
//! - Input repair ("clamp, don't reject") and query-string state
//! - Table, CSV and chart-series rendering of results
//! - Batch and sensitivity runs

pub mod error;
pub mod mortgage;
pub mod projection;
pub mod report;
pub mod runner;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result};
pub use projection::{
    project, BetterOption, ProjectionConfig, ProjectionEngine, ProjectionResult,
    ProjectionSummary, YearResult,
};
pub use runner::ScenarioRunner;
pub use scenario::{RawInputs, ScenarioInputs};
