//! Core projection engine for monthly property wealth projections

use super::points::{ProjectionPoint, ProjectionResult, ProjectionSummary, MID_TERM_MONTH};
use super::state::{GrowthFactors, ProjectionState};
use super::year_one::Year1Results;
use crate::inputs::{DerivedValues, PropertyInputs};

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    inputs: PropertyInputs,
    derived: DerivedValues,
    factors: GrowthFactors,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given inputs
    pub fn new(inputs: PropertyInputs) -> Self {
        Self {
            derived: DerivedValues::from_inputs(&inputs),
            factors: GrowthFactors::from_inputs(&inputs),
            inputs,
        }
    }

    pub fn inputs(&self) -> &PropertyInputs {
        &self.inputs
    }

    pub fn derived(&self) -> &DerivedValues {
        &self.derived
    }

    /// Run the projection from purchase through the final scheduled payment.
    ///
    /// Produces `term_months + 1` points. Single forward pass: balance,
    /// value and rent are rolled forward incrementally rather than recomputed
    /// from closed forms each month.
    pub fn project(&self) -> ProjectionResult {
        let total_months = self.inputs.term_months();
        let mut points = Vec::with_capacity(total_months as usize + 1);
        let mut state = ProjectionState::at_purchase(&self.inputs, &self.derived);

        points.push(self.calculate_month(&mut state));
        for _month in 1..=total_months {
            state.advance_month(&self.factors, self.derived.monthly_mortgage);
            points.push(self.calculate_month(&mut state));
        }

        log::debug!(
            "projected {} months: final balance {:.2}, net worth {:.2}",
            total_months,
            state.mortgage_balance,
            state.equity() + state.cumulative_cash_flow,
        );

        let summary = self.summarize(&points);

        ProjectionResult {
            derived: self.derived,
            points,
            summary,
        }
    }

    /// Cash flow and equity for the month the state currently sits at
    fn calculate_month(&self, state: &mut ProjectionState) -> ProjectionPoint {
        let rent = state.monthly_rent;
        let value = state.property_value;
        let balance = state.mortgage_balance;

        // Expenses track current rent and value, not the starting ones
        let vacancy_loss = rent * self.factors.vacancy;
        let management_fee = rent * self.factors.management;
        let maintenance = value * self.factors.monthly_maintenance;
        let total_expenses =
            vacancy_loss + self.inputs.insurance_tax_monthly + management_fee + maintenance;

        let mortgage = state.effective_payment(self.derived.monthly_mortgage);
        let monthly_cash_flow = rent - total_expenses - mortgage;
        state.cumulative_cash_flow += monthly_cash_flow;

        let equity = state.equity();
        let equity_percent = if value > 0.0 { equity / value * 100.0 } else { 0.0 };

        let appreciation_gained = value - self.derived.market_value;
        let principal_paid = self.derived.loan_amount - balance;

        ProjectionPoint {
            month: state.month,
            year: state.year(),
            label: format!("{}.{:02}", state.year(), state.month_in_year()),
            monthly_rent: rent,
            property_value: value,
            mortgage_balance: balance,
            equity,
            equity_percent,
            net_worth: value - balance + state.cumulative_cash_flow,
            monthly_cash_flow,
            cumulative_cash_flow: state.cumulative_cash_flow,
            total_equity_built: self.derived.down_payment + appreciation_gained + principal_paid,
        }
    }

    fn summarize(&self, points: &[ProjectionPoint]) -> ProjectionSummary {
        let last = points.len() - 1;
        let mid = (MID_TERM_MONTH as usize).min(last);
        let term_end = points[last].clone();

        let invested = self.derived.total_cash_required;
        let years = self.inputs.mortgage_term_years as f64;
        let average_annual_roi = if invested > 0.0 && years > 0.0 {
            (term_end.net_worth - invested) / invested / years * 100.0
        } else {
            0.0
        };

        ProjectionSummary {
            year1: Year1Results::calculate(&self.inputs, &self.derived),
            mid_term: points[mid].clone(),
            term_end,
            average_annual_roi,
        }
    }
}

/// Run a projection for the given inputs
pub fn generate_projection(inputs: &PropertyInputs) -> ProjectionResult {
    ProjectionEngine::new(*inputs).project()
}
