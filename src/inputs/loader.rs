//! Load named scenarios from a CSV file
//!
//! Columns are `name` followed by any subset of the snake_case input field
//! names. Missing columns and empty cells fall back to the defaults.

use super::PropertyInputs;
use crate::error::{ProjectionError, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A labelled set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: PropertyInputs,
}

impl Scenario {
    pub fn new(name: impl Into<String>, inputs: PropertyInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

/// Raw CSV row; every input column is optional
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    purchase_price: Option<f64>,
    #[serde(default)]
    below_market_percent: Option<f64>,
    #[serde(default)]
    monthly_rent: Option<f64>,
    #[serde(default)]
    appreciation_rate: Option<f64>,
    #[serde(default)]
    rent_growth_rate: Option<f64>,
    #[serde(default)]
    down_payment_percent: Option<f64>,
    #[serde(default)]
    closing_costs: Option<f64>,
    #[serde(default)]
    mortgage_rate: Option<f64>,
    #[serde(default)]
    mortgage_term_years: Option<u32>,
    #[serde(default)]
    vacancy_rate: Option<f64>,
    #[serde(default)]
    insurance_tax_monthly: Option<f64>,
    #[serde(default)]
    property_management_percent: Option<f64>,
    #[serde(default)]
    maintenance_percent: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        let d = PropertyInputs::default();

        let inputs = PropertyInputs {
            purchase_price: self.purchase_price.unwrap_or(d.purchase_price),
            below_market_percent: self.below_market_percent.unwrap_or(d.below_market_percent),
            monthly_rent: self.monthly_rent.unwrap_or(d.monthly_rent),
            appreciation_rate: self.appreciation_rate.unwrap_or(d.appreciation_rate),
            rent_growth_rate: self.rent_growth_rate.unwrap_or(d.rent_growth_rate),
            down_payment_percent: self.down_payment_percent.unwrap_or(d.down_payment_percent),
            closing_costs: self.closing_costs.unwrap_or(d.closing_costs),
            mortgage_rate: self.mortgage_rate.unwrap_or(d.mortgage_rate),
            mortgage_term_years: self.mortgage_term_years.unwrap_or(d.mortgage_term_years),
            vacancy_rate: self.vacancy_rate.unwrap_or(d.vacancy_rate),
            insurance_tax_monthly: self.insurance_tax_monthly.unwrap_or(d.insurance_tax_monthly),
            property_management_percent: self
                .property_management_percent
                .unwrap_or(d.property_management_percent),
            maintenance_percent: self.maintenance_percent.unwrap_or(d.maintenance_percent),
        };

        Scenario::new(self.name, inputs)
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    if scenarios.is_empty() {
        return Err(ProjectionError::EmptyScenarioFile);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_columns_fall_back_to_defaults() {
        let data = "\
name,purchase_price,mortgage_rate,mortgage_term_years
base,,,
cheap,60000,6.5,15
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].inputs, PropertyInputs::default());

        let cheap = &scenarios[1].inputs;
        assert_eq!(cheap.purchase_price, 60_000.0);
        assert_eq!(cheap.mortgage_rate, 6.5);
        assert_eq!(cheap.mortgage_term_years, 15);
        assert_eq!(cheap.monthly_rent, PropertyInputs::default().monthly_rent);
    }

    #[test]
    fn test_unparseable_cell_is_an_error() {
        let data = "name,monthly_rent\nbad,lots\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_header_only_is_an_error() {
        let data = "name,monthly_rent\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::EmptyScenarioFile));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenarios("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }
}
