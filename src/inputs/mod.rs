//! Property inputs, derived financing values and scenario loading

mod data;
mod derived;
pub mod loader;
pub mod ranges;

pub use data::PropertyInputs;
pub use derived::{DerivedValues, MonthlyExpenses};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
pub use ranges::{range_for, InputRange, INPUT_RANGES};
