//! Running state carried month to month through a projection

use crate::amortization::{amortize_month, monthly_rate};
use crate::inputs::{DerivedValues, PropertyInputs};

/// Per-month constants, computed once per projection
#[derive(Debug, Clone, Copy)]
pub struct GrowthFactors {
    /// Property value multiplier applied every month
    pub monthly_appreciation: f64,
    /// Rent multiplier applied at each 12-month boundary
    pub yearly_rent_growth: f64,
    pub monthly_interest: f64,
    pub vacancy: f64,
    pub management: f64,
    /// Share of property value spent on maintenance each month
    pub monthly_maintenance: f64,
}

impl GrowthFactors {
    pub fn from_inputs(inputs: &PropertyInputs) -> Self {
        Self {
            monthly_appreciation: (1.0 + inputs.appreciation_rate / 100.0).powf(1.0 / 12.0),
            yearly_rent_growth: 1.0 + inputs.rent_growth_rate / 100.0,
            monthly_interest: monthly_rate(inputs.mortgage_rate),
            vacancy: inputs.vacancy_rate / 100.0,
            management: inputs.property_management_percent / 100.0,
            monthly_maintenance: inputs.maintenance_percent / 100.0 / 12.0,
        }
    }
}

/// State of the investment at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current month (0 = purchase)
    pub month: u32,

    /// Current monthly rent (steps up once a year)
    pub monthly_rent: f64,

    /// Current property value (compounds monthly)
    pub property_value: f64,

    /// Outstanding loan principal
    pub mortgage_balance: f64,

    /// Net cash flow accumulated since month 0
    pub cumulative_cash_flow: f64,
}

impl ProjectionState {
    /// Initialize state at purchase
    pub fn at_purchase(inputs: &PropertyInputs, derived: &DerivedValues) -> Self {
        Self {
            month: 0,
            monthly_rent: inputs.monthly_rent,
            property_value: derived.market_value,
            mortgage_balance: derived.loan_amount,
            cumulative_cash_flow: 0.0,
        }
    }

    /// 1-based year of the current month
    pub fn year(&self) -> u32 {
        self.month / 12 + 1
    }

    /// 1-based month within the current year
    pub fn month_in_year(&self) -> u32 {
        self.month % 12 + 1
    }

    /// Advance to next month: pay the mortgage, then grow value and rent
    pub fn advance_month(&mut self, factors: &GrowthFactors, payment: f64) {
        self.month += 1;

        if self.mortgage_balance > 0.0 {
            let (_, principal) =
                amortize_month(self.mortgage_balance, factors.monthly_interest, payment);
            self.mortgage_balance = (self.mortgage_balance - principal).max(0.0);
        }

        self.property_value *= factors.monthly_appreciation;

        // Leases renew annually
        if self.month % 12 == 0 {
            self.monthly_rent *= factors.yearly_rent_growth;
        }
    }

    /// Scheduled payment while the loan is outstanding, nothing after payoff
    pub fn effective_payment(&self, payment: f64) -> f64 {
        if self.mortgage_balance > 0.0 {
            payment
        } else {
            0.0
        }
    }

    pub fn equity(&self) -> f64 {
        self.property_value - self.mortgage_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rent_steps_at_year_boundary() {
        let inputs = PropertyInputs::default();
        let derived = DerivedValues::from_inputs(&inputs);
        let factors = GrowthFactors::from_inputs(&inputs);
        let mut state = ProjectionState::at_purchase(&inputs, &derived);

        for _ in 0..11 {
            state.advance_month(&factors, derived.monthly_mortgage);
            assert_eq!(state.monthly_rent, 1_100.0);
        }
        state.advance_month(&factors, derived.monthly_mortgage);
        assert_eq!(state.month, 12);
        assert_relative_eq!(state.monthly_rent, 1_133.0, max_relative = 1e-12);
    }

    #[test]
    fn test_value_compounds_to_annual_rate() {
        let inputs = PropertyInputs::default();
        let derived = DerivedValues::from_inputs(&inputs);
        let factors = GrowthFactors::from_inputs(&inputs);
        let mut state = ProjectionState::at_purchase(&inputs, &derived);

        for _ in 0..12 {
            state.advance_month(&factors, derived.monthly_mortgage);
        }
        assert_relative_eq!(state.property_value, 85_000.0 * 1.04, max_relative = 1e-12);
    }

    #[test]
    fn test_timing_fields() {
        let inputs = PropertyInputs::default();
        let derived = DerivedValues::from_inputs(&inputs);
        let mut state = ProjectionState::at_purchase(&inputs, &derived);
        assert_eq!((state.year(), state.month_in_year()), (1, 1));

        state.month = 11;
        assert_eq!((state.year(), state.month_in_year()), (1, 12));
        state.month = 12;
        assert_eq!((state.year(), state.month_in_year()), (2, 1));
        state.month = 360;
        assert_eq!((state.year(), state.month_in_year()), (31, 1));
    }

    #[test]
    fn test_no_payment_after_payoff() {
        let inputs = PropertyInputs::default();
        let derived = DerivedValues::from_inputs(&inputs);
        let mut state = ProjectionState::at_purchase(&inputs, &derived);

        assert_eq!(state.effective_payment(500.0), 500.0);
        state.mortgage_balance = 0.0;
        assert_eq!(state.effective_payment(500.0), 0.0);
    }
}
