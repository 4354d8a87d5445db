//! Property purchase inputs

use serde::{Deserialize, Serialize};

/// Raw inputs for a single rental property projection.
///
/// Rates are percentages on a 0-100 scale (7.5 means 7.5%); currency fields
/// are plain units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInputs {
    // Property basics
    /// Price actually paid
    pub purchase_price: f64,

    /// How far below market value the price sits (%)
    pub below_market_percent: f64,

    /// Starting monthly rent
    pub monthly_rent: f64,

    // Growth rates
    /// Annual property appreciation (%)
    pub appreciation_rate: f64,

    /// Annual rent increase (%)
    pub rent_growth_rate: f64,

    // Financing
    /// Down payment as % of purchase price
    pub down_payment_percent: f64,

    /// One-time closing costs
    pub closing_costs: f64,

    /// Annual mortgage interest rate (%)
    pub mortgage_rate: f64,

    /// Mortgage term in years
    pub mortgage_term_years: u32,

    // Operating expenses
    /// Vacancy allowance as % of rent
    pub vacancy_rate: f64,

    /// Fixed monthly insurance plus property tax
    pub insurance_tax_monthly: f64,

    /// Property management fee as % of rent
    pub property_management_percent: f64,

    /// Annual maintenance as % of property value
    pub maintenance_percent: f64,
}

impl PropertyInputs {
    /// Number of monthly payments over the mortgage term, saturating at
    /// `u32::MAX` for absurdly long terms
    pub fn term_months(&self) -> u32 {
        self.mortgage_term_years.saturating_mul(12)
    }
}

impl Default for PropertyInputs {
    fn default() -> Self {
        Self {
            purchase_price: 85_000.0,
            below_market_percent: 0.0,
            monthly_rent: 1_100.0,
            appreciation_rate: 4.0,
            rent_growth_rate: 3.0,
            down_payment_percent: 25.0,
            closing_costs: 8_000.0,
            mortgage_rate: 7.5,
            mortgage_term_years: 30,
            vacancy_rate: 8.0,
            insurance_tax_monthly: 200.0,
            property_management_percent: 0.0,
            maintenance_percent: 0.0,
        }
    }
}
