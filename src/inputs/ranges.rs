//! Supported input ranges
//!
//! These mirror the bounds interactive callers put on their controls. The
//! engine never enforces them; callers decide whether a violation is a
//! warning or a hard error.

use super::PropertyInputs;
use crate::error::ProjectionError;

/// Inclusive bounds and step size for one input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    /// snake_case field name
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    const fn new(field: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self { field, min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Bounds for every field, in input declaration order
pub const INPUT_RANGES: [InputRange; 13] = [
    InputRange::new("purchase_price", 50_000.0, 300_000.0, 5_000.0),
    InputRange::new("below_market_percent", 0.0, 40.0, 5.0),
    InputRange::new("monthly_rent", 500.0, 3_000.0, 50.0),
    InputRange::new("appreciation_rate", 0.0, 10.0, 0.5),
    InputRange::new("rent_growth_rate", 0.0, 6.0, 0.5),
    InputRange::new("down_payment_percent", 0.0, 100.0, 5.0),
    // No control for closing costs; bound it generously
    InputRange::new("closing_costs", 0.0, 50_000.0, 500.0),
    InputRange::new("mortgage_rate", 4.0, 12.0, 0.25),
    InputRange::new("mortgage_term_years", 10.0, 30.0, 5.0),
    InputRange::new("vacancy_rate", 0.0, 20.0, 1.0),
    InputRange::new("insurance_tax_monthly", 0.0, 500.0, 25.0),
    InputRange::new("property_management_percent", 0.0, 15.0, 1.0),
    InputRange::new("maintenance_percent", 0.0, 5.0, 0.5),
];

/// Look up the range for a field by its snake_case name
pub fn range_for(field: &str) -> Option<&'static InputRange> {
    INPUT_RANGES.iter().find(|r| r.field == field)
}

impl PropertyInputs {
    /// Field values paired with their snake_case names, in declaration order
    pub fn named_values(&self) -> [(&'static str, f64); 13] {
        [
            ("purchase_price", self.purchase_price),
            ("below_market_percent", self.below_market_percent),
            ("monthly_rent", self.monthly_rent),
            ("appreciation_rate", self.appreciation_rate),
            ("rent_growth_rate", self.rent_growth_rate),
            ("down_payment_percent", self.down_payment_percent),
            ("closing_costs", self.closing_costs),
            ("mortgage_rate", self.mortgage_rate),
            ("mortgage_term_years", self.mortgage_term_years as f64),
            ("vacancy_rate", self.vacancy_rate),
            ("insurance_tax_monthly", self.insurance_tax_monthly),
            ("property_management_percent", self.property_management_percent),
            ("maintenance_percent", self.maintenance_percent),
        ]
    }

    /// Every field that falls outside its supported range (NaN included)
    pub fn check_ranges(&self) -> Vec<ProjectionError> {
        self.named_values()
            .iter()
            .zip(INPUT_RANGES.iter())
            .filter(|((_, value), range)| !range.contains(*value))
            .map(|((field, value), range)| ProjectionError::OutOfRange {
                field: *field,
                value: *value,
                min: range.min,
                max: range.max,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        assert!(PropertyInputs::default().check_ranges().is_empty());
    }

    #[test]
    fn test_ranges_align_with_named_values() {
        let names: Vec<_> = PropertyInputs::default()
            .named_values()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        let range_names: Vec<_> = INPUT_RANGES.iter().map(|r| r.field).collect();
        assert_eq!(names, range_names);
    }

    #[test]
    fn test_reports_each_violation() {
        let inputs = PropertyInputs {
            below_market_percent: 100.0,
            mortgage_term_years: 0,
            vacancy_rate: f64::NAN,
            ..Default::default()
        };
        let errors = inputs.check_ranges();
        let fields: Vec<_> = errors
            .iter()
            .map(|e| match e {
                ProjectionError::OutOfRange { field, .. } => *field,
                other => panic!("unexpected error {other}"),
            })
            .collect();
        assert_eq!(
            fields,
            vec!["below_market_percent", "mortgage_term_years", "vacancy_rate"]
        );
    }

    #[test]
    fn test_range_lookup() {
        let rate = range_for("mortgage_rate").unwrap();
        assert_eq!((rate.min, rate.max, rate.step), (4.0, 12.0, 0.25));
        assert!(range_for("nope").is_none());
    }

    #[test]
    fn test_error_message() {
        let err = ProjectionError::OutOfRange {
            field: "mortgage_rate",
            value: 15.0,
            min: 4.0,
            max: 12.0,
        };
        assert_eq!(
            err.to_string(),
            "mortgage_rate = 15 is outside the supported range [4, 12]"
        );
    }
}
