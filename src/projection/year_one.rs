//! First-year return analysis and the "three engines" breakdown
//!
//! Computed independently of the monthly projection loop: year-1 results
//! assume the starting rent and market value hold for the whole year.

use serde::{Deserialize, Serialize};

use crate::amortization::{amortize_month, monthly_rate};
use crate::inputs::{DerivedValues, MonthlyExpenses, PropertyInputs};

/// One component of total return with its share of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineShare {
    pub value: f64,
    /// Percentage of the summed total; 0 when the total is exactly 0
    pub percent: f64,
}

/// Cash flow, appreciation and principal paydown as parts of total return
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeEngines {
    pub cash_flow: EngineShare,
    pub appreciation: EngineShare,
    pub principal_paydown: EngineShare,
}

impl ThreeEngines {
    pub fn new(cash_flow: f64, appreciation: f64, principal_paydown: f64) -> Self {
        let total = cash_flow + appreciation + principal_paydown;
        let share = |value: f64| EngineShare {
            value,
            percent: if total != 0.0 { value / total * 100.0 } else { 0.0 },
        };

        Self {
            cash_flow: share(cash_flow),
            appreciation: share(appreciation),
            principal_paydown: share(principal_paydown),
        }
    }

    /// Sum of the three component values
    pub fn total(&self) -> f64 {
        self.cash_flow.value + self.appreciation.value + self.principal_paydown.value
    }
}

/// Year 1 if the property were bought outright
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnleveragedYear1 {
    pub net_monthly: f64,
    pub annual_cash_flow: f64,
    pub appreciation: f64,
    pub total_return: f64,
    /// Total return over market value (%)
    pub roi: f64,
}

/// Year 1 with the mortgage in place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeveragedYear1 {
    pub net_monthly: f64,
    pub annual_cash_flow: f64,
    pub appreciation: f64,
    pub principal_paydown: f64,
    pub total_return: f64,
    /// Total return over down payment (%)
    pub roi: f64,
    pub engines: ThreeEngines,
}

/// Side-by-side year-1 results with and without leverage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Year1Results {
    pub no_leverage: UnleveragedYear1,
    pub with_leverage: LeveragedYear1,
}

impl Year1Results {
    pub fn calculate(inputs: &PropertyInputs, derived: &DerivedValues) -> Self {
        let rent = inputs.monthly_rent;
        let market_value = derived.market_value;
        let expenses = MonthlyExpenses::at(rent, market_value, inputs);
        let appreciation = market_value * (inputs.appreciation_rate / 100.0);

        // All-cash purchase
        let net_monthly = rent - expenses.total;
        let annual_cash_flow = net_monthly * 12.0;
        let total_return = annual_cash_flow + appreciation;
        let no_leverage = UnleveragedYear1 {
            net_monthly,
            annual_cash_flow,
            appreciation,
            total_return,
            roi: if market_value > 0.0 {
                total_return / market_value * 100.0
            } else {
                0.0
            },
        };

        // Financed purchase
        let net_monthly = rent - expenses.total - derived.monthly_mortgage;
        let annual_cash_flow = net_monthly * 12.0;
        let principal_paydown = first_year_principal(inputs, derived);
        let total_return = annual_cash_flow + appreciation + principal_paydown;
        let with_leverage = LeveragedYear1 {
            net_monthly,
            annual_cash_flow,
            appreciation,
            principal_paydown,
            total_return,
            roi: if derived.down_payment > 0.0 {
                total_return / derived.down_payment * 100.0
            } else {
                0.0
            },
            engines: ThreeEngines::new(annual_cash_flow, appreciation, principal_paydown),
        };

        Self {
            no_leverage,
            with_leverage,
        }
    }
}

/// Principal repaid over the first 12 scheduled payments
fn first_year_principal(inputs: &PropertyInputs, derived: &DerivedValues) -> f64 {
    let rate = monthly_rate(inputs.mortgage_rate);
    let mut balance = derived.loan_amount;
    let mut paid = 0.0;

    for _ in 0..12 {
        if balance <= 0.0 {
            break;
        }
        let (_, principal) = amortize_month(balance, rate, derived.monthly_mortgage);
        paid += principal;
        balance -= principal;
    }

    paid
}
