//! Presentation helpers: chart sampling, display rounding and number formatting
//!
//! Nothing here feeds back into the projection; rounding is applied only to
//! values on their way out.

use crate::projection::ProjectionPoint;

/// Formatting settings supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Prefix for currency amounts, e.g. "$" or "€"
    pub currency_symbol: String,
    /// Digit group separator for full currency amounts
    pub thousands_separator: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thousands_separator: ',',
        }
    }
}

/// Thin a monthly series for charting.
///
/// Keeps every 3rd point, every year boundary and the final point, so a
/// 361-point series shrinks to about 120 points without losing yearly values.
pub fn sample_points(points: &[ProjectionPoint]) -> Vec<ProjectionPoint> {
    let last = points.len().saturating_sub(1);
    points
        .iter()
        .enumerate()
        .filter(|(index, point)| point.month % 12 == 0 || index % 3 == 0 || *index == last)
        .map(|(_, point)| point.clone())
        .collect()
}

/// Round to a precision that suits the magnitude
pub fn round_for_display(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        (value / 1_000.0).round() * 1_000.0
    } else if magnitude >= 10_000.0 {
        (value / 100.0).round() * 100.0
    } else if magnitude >= 1_000.0 {
        (value / 10.0).round() * 10.0
    } else {
        value.round()
    }
}

/// Compact axis label: "$1.2M", "$85K", "$500"
pub fn format_axis_value(value: f64, format: &DisplayFormat) -> String {
    let symbol = &format.currency_symbol;
    if value >= 1_000_000.0 {
        format!("{}{:.1}M", symbol, value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{}{:.0}K", symbol, value / 1_000.0)
    } else {
        format!("{}{}", symbol, value)
    }
}

/// Whole-unit currency amount with digit grouping: "$1,234,567", "-$250"
pub fn format_currency(value: f64, format: &DisplayFormat) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(format.thousands_separator);
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, format.currency_symbol, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::PropertyInputs;
    use crate::projection::generate_projection;

    #[test]
    fn test_sampling_full_term() {
        let result = generate_projection(&PropertyInputs::default());
        let sampled = sample_points(&result.points);
        let months: Vec<u32> = sampled.iter().map(|p| p.month).collect();

        assert!(months.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(months.first(), Some(&0));
        assert_eq!(months.last(), Some(&360));
        for year in 0..=30 {
            assert!(months.contains(&(year * 12)));
        }
        assert!(sampled.len() >= 120 && sampled.len() <= 140);
    }

    #[test]
    fn test_sampling_keeps_last_point_off_grid() {
        let result = generate_projection(&PropertyInputs::default());
        // 0..=100: 100 is neither a multiple of 3 nor of 12
        let sampled = sample_points(&result.points[..101]);
        assert_eq!(sampled.last().map(|p| p.month), Some(100));
        assert_eq!(sample_points(&[]).len(), 0);
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(1_234_567.0), 1_235_000.0);
        assert_eq!(round_for_display(54_321.0), 54_300.0);
        assert_eq!(round_for_display(1_234.0), 1_230.0);
        assert_eq!(round_for_display(445.75), 446.0);
        assert_eq!(round_for_display(-54_321.0), -54_300.0);
        assert_eq!(round_for_display(-12.4), -12.0);
    }

    #[test]
    fn test_format_axis_value() {
        let usd = DisplayFormat::default();
        assert_eq!(format_axis_value(1_240_000.0, &usd), "$1.2M");
        assert_eq!(format_axis_value(85_000.0, &usd), "$85K");
        assert_eq!(format_axis_value(500.0, &usd), "$500");

        let eur = DisplayFormat {
            currency_symbol: "€".to_string(),
            thousands_separator: '.',
        };
        assert_eq!(format_axis_value(2_000_000.0, &eur), "€2.0M");
    }

    #[test]
    fn test_format_currency() {
        let usd = DisplayFormat::default();
        assert_eq!(format_currency(1_234_567.4, &usd), "$1,234,567");
        assert_eq!(format_currency(999.5, &usd), "$1,000");
        assert_eq!(format_currency(-250.0, &usd), "-$250");
        assert_eq!(format_currency(0.0, &usd), "$0");
        assert_eq!(format_currency(100_000.0, &usd), "$100,000");
    }
}
