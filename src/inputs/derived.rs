//! Financing quantities and operating expenses derived from the raw inputs

use serde::{Deserialize, Serialize};

use super::PropertyInputs;
use crate::amortization::monthly_payment;

/// One-shot financing values computed from the inputs (no iteration)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedValues {
    /// Purchase price grossed up by the below-market discount
    pub market_value: f64,

    /// market_value - purchase_price
    pub instant_equity: f64,

    /// purchase_price * down payment %
    pub down_payment: f64,

    /// purchase_price - down_payment
    pub loan_amount: f64,

    /// Scheduled principal and interest payment
    pub monthly_mortgage: f64,

    /// Cash needed to close (down payment + closing costs)
    pub total_cash_required: f64,
}

impl DerivedValues {
    /// Derive financing values from inputs.
    ///
    /// A below-market discount of 100% or more is not rejected: the market
    /// value becomes infinite or negative and flows through unchanged.
    pub fn from_inputs(inputs: &PropertyInputs) -> Self {
        let market_value = if inputs.below_market_percent > 0.0 {
            inputs.purchase_price / (1.0 - inputs.below_market_percent / 100.0)
        } else {
            inputs.purchase_price
        };

        let down_payment = inputs.purchase_price * (inputs.down_payment_percent / 100.0);
        let loan_amount = inputs.purchase_price - down_payment;
        let monthly_mortgage =
            monthly_payment(loan_amount, inputs.mortgage_rate, inputs.mortgage_term_years);

        Self {
            market_value,
            instant_equity: market_value - inputs.purchase_price,
            down_payment,
            loan_amount,
            monthly_mortgage,
            total_cash_required: down_payment + inputs.closing_costs,
        }
    }
}

/// Breakdown of monthly operating expenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpenses {
    pub vacancy: f64,
    pub insurance_tax: f64,
    pub management: f64,
    pub maintenance: f64,
    pub total: f64,
}

impl MonthlyExpenses {
    /// Expenses at the given (possibly grown) rent and property value
    pub fn at(current_rent: f64, current_value: f64, inputs: &PropertyInputs) -> Self {
        let vacancy = current_rent * (inputs.vacancy_rate / 100.0);
        let insurance_tax = inputs.insurance_tax_monthly;
        let management = current_rent * (inputs.property_management_percent / 100.0);
        let maintenance = current_value * (inputs.maintenance_percent / 100.0) / 12.0;

        Self {
            vacancy,
            insurance_tax,
            management,
            maintenance,
            total: vacancy + insurance_tax + management + maintenance,
        }
    }
}
