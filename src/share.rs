//! Shareable query strings
//!
//! Inputs that differ from the defaults are written as short two-letter
//! query parameters (`pp=90000&mi=6.5`). Reading a query starts from the
//! defaults, so missing or garbled parameters simply keep their default.
//! Values are form-decoded first, so `6%2E5` reads as 6.5.

use crate::inputs::PropertyInputs;

/// Short query key for each input, in the order keys are emitted
pub const SHARE_KEYS: [(&str, &str); 13] = [
    ("purchase_price", "pp"),
    ("below_market_percent", "bm"),
    ("monthly_rent", "mr"),
    ("appreciation_rate", "ar"),
    ("rent_growth_rate", "rg"),
    ("down_payment_percent", "dp"),
    ("closing_costs", "cc"),
    ("vacancy_rate", "vr"),
    ("insurance_tax_monthly", "it"),
    ("property_management_percent", "pm"),
    ("maintenance_percent", "mt"),
    ("mortgage_rate", "mi"),
    ("mortgage_term_years", "my"),
];

fn field_value(inputs: &PropertyInputs, key: &str) -> Option<String> {
    let value = match key {
        "pp" => inputs.purchase_price,
        "bm" => inputs.below_market_percent,
        "mr" => inputs.monthly_rent,
        "ar" => inputs.appreciation_rate,
        "rg" => inputs.rent_growth_rate,
        "dp" => inputs.down_payment_percent,
        "cc" => inputs.closing_costs,
        "vr" => inputs.vacancy_rate,
        "it" => inputs.insurance_tax_monthly,
        "pm" => inputs.property_management_percent,
        "mt" => inputs.maintenance_percent,
        "mi" => inputs.mortgage_rate,
        "my" => return Some(inputs.mortgage_term_years.to_string()),
        _ => return None,
    };
    Some(value.to_string())
}

/// Apply one query parameter; returns false when the key is unknown or the
/// value does not parse
fn apply_param(inputs: &mut PropertyInputs, key: &str, raw: &str) -> bool {
    // Whole years only; a fractional term such as "12.5" is rejected
    if key == "my" {
        return match raw.parse::<u32>() {
            Ok(years) => {
                inputs.mortgage_term_years = years;
                true
            }
            Err(_) => false,
        };
    }

    let slot = match key {
        "pp" => &mut inputs.purchase_price,
        "bm" => &mut inputs.below_market_percent,
        "mr" => &mut inputs.monthly_rent,
        "ar" => &mut inputs.appreciation_rate,
        "rg" => &mut inputs.rent_growth_rate,
        "dp" => &mut inputs.down_payment_percent,
        "cc" => &mut inputs.closing_costs,
        "vr" => &mut inputs.vacancy_rate,
        "it" => &mut inputs.insurance_tax_monthly,
        "pm" => &mut inputs.property_management_percent,
        "mt" => &mut inputs.maintenance_percent,
        "mi" => &mut inputs.mortgage_rate,
        _ => return false,
    };

    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => {
            *slot = value;
            true
        }
        _ => false,
    }
}

/// Encode the non-default inputs as a query string (without the leading `?`).
/// All-default inputs encode to an empty string.
pub fn to_query(inputs: &PropertyInputs) -> String {
    let defaults = PropertyInputs::default();

    SHARE_KEYS
        .iter()
        .filter_map(|(_, key)| {
            let value = field_value(inputs, key)?;
            let default = field_value(&defaults, key)?;
            (value != default).then(|| format!("{}={}", key, value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string, falling back to defaults for anything missing or
/// unparseable. A leading `?` is accepted.
pub fn from_query(query: &str) -> PropertyInputs {
    let mut inputs = PropertyInputs::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for (key, raw) in form_urlencoded::parse(query.as_bytes()) {
        if !apply_param(&mut inputs, &key, raw.trim()) {
            log::debug!("ignoring query parameter {}={:?}", key, raw);
        }
    }

    inputs
}

/// Full share link for `base`, with a query only when something differs
/// from the defaults
pub fn share_url(base: &str, inputs: &PropertyInputs) -> String {
    let query = to_query(inputs);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}
