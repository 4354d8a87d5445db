//! Rental Projection - amortization and wealth projection engine for rental property purchases
//!
//! This library provides:
//! - Closed-form mortgage payment and remaining-balance calculations
//! - Derived financing values (market value, down payment, loan, cash to close)
//! - Month-by-month projections of value, balance, equity and cash flow
//! - Year-1 returns with and without leverage, split into the "three engines"
//! - Display sampling/rounding and shareable query-string encoding
//! - Batch scenario runs

pub mod amortization;
pub mod display;
pub mod error;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod share;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use inputs::{DerivedValues, MonthlyExpenses, PropertyInputs, Scenario};
pub use projection::{
    generate_projection, ProjectionEngine, ProjectionPoint, ProjectionResult, ProjectionSummary,
};
pub use scenario::ScenarioRunner;
