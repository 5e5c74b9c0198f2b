//! Scenario runner for batch and sensitivity projections
//!
//! Every run is independent and pure, so batches fan out across threads.

use rayon::prelude::*;

use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionSummary};
use crate::scenario::{bounds, ScenarioInputs};

/// Runs many projections against the same reference date
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::as_of(today));
///
/// for (rate, summary) in runner.appreciation_sweep(&inputs, &[0.0, 3.0, 6.0]) {
///     println!("{rate}%: {}", summary.better_option);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, inputs: &ScenarioInputs) -> ProjectionResult {
        self.engine.project(inputs)
    }

    /// Run projections for several input snapshots; output order matches input order
    pub fn run_batch(&self, scenarios: &[ScenarioInputs]) -> Vec<ProjectionResult> {
        scenarios.par_iter().map(|inputs| self.engine.project(inputs)).collect()
    }

    /// Re-run one scenario under different home appreciation rates (%)
    ///
    /// Rates are clamped to the same range the input form allows.
    pub fn appreciation_sweep(
        &self,
        inputs: &ScenarioInputs,
        rates: &[f64],
    ) -> Vec<(f64, ProjectionSummary)> {
        let field = bounds::HOME_APPRECIATION;
        rates
            .par_iter()
            .filter_map(|&rate| {
                let rate = rate.clamp(field.min, field.max);
                let scenario = ScenarioInputs {
                    home_appreciation: rate,
                    ..inputs.clone()
                };
                self.engine.project(&scenario).summary().map(|summary| (rate, summary))
            })
            .collect()
    }
}
