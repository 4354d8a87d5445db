//! Scenario runner for side-by-side projections
//!
//! Each projection is a pure function of its inputs, so batches fan out
//! across the rayon thread pool with no coordination.

use rayon::prelude::*;
use serde::Serialize;

use crate::inputs::{PropertyInputs, Scenario};
use crate::projection::{ProjectionEngine, ProjectionResult};

/// A projection tagged with the scenario that produced it
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: String,
    pub inputs: PropertyInputs,
    pub result: ProjectionResult,
}

/// One-line comparison of a scenario's headline numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSummaryRow {
    pub name: String,
    pub market_value: f64,
    pub total_cash_required: f64,
    pub monthly_mortgage: f64,
    pub year1_cash_flow: f64,
    pub year1_roi: f64,
    pub mid_term_net_worth: f64,
    pub term_end_net_worth: f64,
    pub term_end_cash_flow: f64,
    pub average_annual_roi: f64,
}

impl ScenarioResult {
    pub fn summary_row(&self) -> ScenarioSummaryRow {
        let summary = &self.result.summary;
        let derived = &self.result.derived;

        ScenarioSummaryRow {
            name: self.name.clone(),
            market_value: derived.market_value,
            total_cash_required: derived.total_cash_required,
            monthly_mortgage: derived.monthly_mortgage,
            year1_cash_flow: summary.year1.with_leverage.annual_cash_flow,
            year1_roi: summary.year1.with_leverage.roi,
            mid_term_net_worth: summary.mid_term.net_worth,
            term_end_net_worth: summary.term_end.net_worth,
            term_end_cash_flow: summary.term_end.cumulative_cash_flow,
            average_annual_roi: summary.average_annual_roi,
        }
    }
}

/// Runs projections for one or many scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Inputs used when a scenario does not supply its own
    base_inputs: PropertyInputs,
}

impl ScenarioRunner {
    /// Create runner using the default inputs as the base
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner around a specific base case
    pub fn with_base(base_inputs: PropertyInputs) -> Self {
        Self { base_inputs }
    }

    pub fn base_inputs(&self) -> &PropertyInputs {
        &self.base_inputs
    }

    /// Project the base case
    pub fn run_base(&self) -> ProjectionResult {
        ProjectionEngine::new(self.base_inputs).project()
    }

    /// Project the base case with a modification applied
    pub fn run_variant<F>(&self, modify: F) -> ProjectionResult
    where
        F: FnOnce(&mut PropertyInputs),
    {
        let mut inputs = self.base_inputs;
        modify(&mut inputs);
        ProjectionEngine::new(inputs).project()
    }

    /// Run a single named scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioResult {
        ScenarioResult {
            name: scenario.name.clone(),
            inputs: scenario.inputs,
            result: ProjectionEngine::new(scenario.inputs).project(),
        }
    }

    /// Run many scenarios in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        log::info!("running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }
}
