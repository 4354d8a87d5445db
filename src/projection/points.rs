//! Projection output structures

use serde::{Deserialize, Serialize};

use super::year_one::Year1Results;
use crate::inputs::DerivedValues;

/// Month whose point is reported as the mid-term snapshot (year 15)
pub const MID_TERM_MONTH: u32 = 180;

/// One month of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    // Timing
    /// Month index, 0 = purchase
    pub month: u32,
    /// 1-based year number
    pub year: u32,
    /// "{year}.{month in year:02}", e.g. "1.01", "2.06"
    pub label: String,

    // Chart lines
    pub monthly_rent: f64,
    pub property_value: f64,
    pub mortgage_balance: f64,
    /// property_value - mortgage_balance
    pub equity: f64,
    pub equity_percent: f64,
    /// property_value - mortgage_balance + cumulative_cash_flow
    pub net_worth: f64,

    // Tooltips
    /// Net cash flow this month (can be negative)
    pub monthly_cash_flow: f64,
    /// Running total since month 0, not floored
    pub cumulative_cash_flow: f64,
    /// down payment + appreciation gained + principal paid
    pub total_equity_built: f64,
}

/// Headline numbers pulled from a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    /// Standalone year-1 return analysis
    pub year1: Year1Results,
    /// Point at month 180, or the last point for shorter terms
    pub mid_term: ProjectionPoint,
    /// Point at the final scheduled payment
    pub term_end: ProjectionPoint,
    /// Average yearly gain in net worth over the cash put in (%)
    pub average_annual_roi: f64,
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Financing values the projection was built from
    pub derived: DerivedValues,

    /// Monthly points, month 0 through the end of the term
    pub points: Vec<ProjectionPoint>,

    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Point for a given month, if inside the term
    pub fn point_at(&self, month: u32) -> Option<&ProjectionPoint> {
        self.points.get(month as usize)
    }

    /// Points on exact year boundaries (months 0, 12, 24, ...)
    pub fn yearly_points(&self) -> impl Iterator<Item = &ProjectionPoint> {
        self.points.iter().filter(|p| p.month % 12 == 0)
    }

    /// Total net cash flow over the whole projection
    pub fn total_cash_flow(&self) -> f64 {
        self.points.last().map(|p| p.cumulative_cash_flow).unwrap_or(0.0)
    }
}
