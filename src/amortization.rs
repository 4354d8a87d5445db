//! Fixed-rate mortgage amortization
//!
//! Closed-form payment and balance formulas, plus the single-month step the
//! projection loop uses to roll a balance forward incrementally.

/// Convert an annual percentage rate (e.g. 7.5) to a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Calculate the level monthly payment for a fully amortizing loan.
///
/// `M = P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and
/// `n = term_years * 12`.
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate_percent` - Annual interest rate on a 0-100 scale
/// * `term_years` - Loan term in years
///
/// # Returns
/// * `f64` - Monthly principal and interest payment (0 when principal <= 0)
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }

    let rate = monthly_rate(annual_rate_percent);
    let payments = f64::from(term_years) * 12.0;

    if rate == 0.0 {
        return principal / payments;
    }

    let growth = (1.0 + rate).powf(payments);
    if growth.is_infinite() {
        // Term long enough that the payment is pure interest
        return principal * rate;
    }
    principal * rate * growth / (growth - 1.0)
}

/// Remaining balance after `months_paid` scheduled payments.
///
/// `B = P * ((1+r)^n - (1+r)^p) / ((1+r)^n - 1)`, floored at zero.
pub fn remaining_balance(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
    months_paid: u32,
) -> f64 {
    let total_payments = u64::from(term_years) * 12;
    if principal <= 0.0 || u64::from(months_paid) >= total_payments {
        return 0.0;
    }

    let rate = monthly_rate(annual_rate_percent);
    let n = total_payments as f64;
    let p = f64::from(months_paid);

    if rate == 0.0 {
        return principal - (principal / n) * p;
    }

    let growth_n = (1.0 + rate).powf(n);
    let balance = if growth_n.is_infinite() {
        // Same formula divided through by (1+r)^n
        principal * (1.0 - (1.0 + rate).powf(p - n)) / (1.0 - (1.0 + rate).powf(-n))
    } else {
        let growth_p = (1.0 + rate).powf(p);
        principal * (growth_n - growth_p) / (growth_n - 1.0)
    };

    balance.max(0.0)
}

/// Split one month's payment into (interest, principal).
///
/// Principal is capped at the outstanding balance so the final payment never
/// overshoots.
pub fn amortize_month(balance: f64, monthly_rate: f64, payment: f64) -> (f64, f64) {
    let interest = balance * monthly_rate;
    let principal = (payment - interest).min(balance);
    (interest, principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_standard_thirty_year_payment() {
        // 63,750 at 7.5% over 30 years
        let payment = monthly_payment(63_750.0, 7.5, 30);
        assert_abs_diff_eq!(payment, 445.749, epsilon = 0.001);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let payment = monthly_payment(36_000.0, 0.0, 10);
        assert_eq!(payment, 300.0);

        assert_eq!(remaining_balance(36_000.0, 0.0, 10, 0), 36_000.0);
        assert_eq!(remaining_balance(36_000.0, 0.0, 10, 60), 18_000.0);
        assert_eq!(remaining_balance(36_000.0, 0.0, 10, 120), 0.0);
    }

    #[test]
    fn test_non_positive_principal() {
        assert_eq!(monthly_payment(0.0, 7.5, 30), 0.0);
        assert_eq!(monthly_payment(-5_000.0, 7.5, 30), 0.0);
        assert_eq!(remaining_balance(0.0, 7.5, 30, 12), 0.0);
    }

    #[test]
    fn test_balance_endpoints() {
        let principal = 250_000.0;
        assert_relative_eq!(
            remaining_balance(principal, 6.25, 30, 0),
            principal,
            max_relative = 1e-12
        );
        assert_eq!(remaining_balance(principal, 6.25, 30, 360), 0.0);
        assert_eq!(remaining_balance(principal, 6.25, 30, 500), 0.0);
    }

    #[test]
    fn test_stepping_matches_closed_form() {
        let principal = 120_000.0;
        let rate = monthly_rate(5.0);
        let payment = monthly_payment(principal, 5.0, 15);

        let mut balance = principal;
        for month in 1..=180 {
            let (_, paid) = amortize_month(balance, rate, payment);
            balance = (balance - paid).max(0.0);
            let expected = remaining_balance(principal, 5.0, 15, month);
            assert_abs_diff_eq!(balance, expected, epsilon = principal * 1e-6);
        }
    }

    #[test]
    fn test_huge_terms_do_not_overflow() {
        let years = 400_000_000;
        let interest_only = 63_750.0 * monthly_rate(7.5);

        assert_abs_diff_eq!(
            monthly_payment(63_750.0, 7.5, years),
            interest_only,
            epsilon = 1e-9
        );
        assert_eq!(monthly_payment(63_750.0, 0.0, years), 63_750.0 / 4_800_000_000.0);
        let per_month = 63_750.0 / 4_800_000_000.0;
        assert_eq!(
            remaining_balance(63_750.0, 0.0, years, u32::MAX),
            63_750.0 - per_month * f64::from(u32::MAX)
        );
        assert_eq!(remaining_balance(63_750.0, 7.5, u32::MAX, 0), 63_750.0);
        assert!(remaining_balance(63_750.0, 7.5, years, 12).is_finite());
    }

    #[test]
    fn test_final_step_capped_at_balance() {
        let (interest, principal) = amortize_month(100.0, 0.01, 500.0);
        assert_eq!(interest, 1.0);
        assert_eq!(principal, 100.0);
    }
}
