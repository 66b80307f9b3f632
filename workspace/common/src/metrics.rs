//! Derived figures shown on the dashboard.
//!
//! Every function is total: empty inputs and zero denominators yield `0`
//! instead of a division fault or `NaN`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Completed share of all orders, in percent.
pub fn success_rate(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// Denominator for a bar chart: the largest value, never below 1.
pub fn bar_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(1.0, f64::max)
}

/// Width of a bar relative to the chart maximum, in percent (0..=100).
pub fn relative_width(value: f64, max: f64) -> f64 {
    let max = max.max(1.0);
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// `part` as a percentage of `whole`.
pub fn share_percentage(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Average revenue per registered user, rounded to kopecks.
pub fn average_per_user(revenue: Decimal, users: i64) -> Decimal {
    if users <= 0 {
        return Decimal::ZERO;
    }
    (revenue / Decimal::from(users)).round_dp(2)
}

pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate_with_empty_total_is_zero() {
        assert_eq!(success_rate(0, 0), 0.0);
        assert_eq!(success_rate(5, 0), 0.0);
        assert!(!success_rate(0, 0).is_nan());
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(success_rate(3, 4), 75.0);
        assert_eq!(success_rate(10, 10), 100.0);
    }

    #[test]
    fn test_all_zero_bars_have_zero_width() {
        let values = [0.0, 0.0, 0.0];
        let max = bar_max(values);
        assert_eq!(max, 1.0);
        for value in values {
            assert_eq!(relative_width(value, max), 0.0);
        }
    }

    #[test]
    fn test_bar_widths_relative_to_largest() {
        let values = [50.0, 200.0, 100.0];
        let max = bar_max(values);
        assert_eq!(relative_width(50.0, max), 25.0);
        assert_eq!(relative_width(200.0, max), 100.0);
        assert_eq!(relative_width(100.0, max), 50.0);
    }

    #[test]
    fn test_bar_width_of_empty_chart_and_negatives() {
        assert_eq!(bar_max(Vec::new()), 1.0);
        assert_eq!(relative_width(-20.0, 10.0), 0.0);
        // A zero max from the caller is still floored
        assert_eq!(relative_width(0.5, 0.0), 50.0);
    }

    #[test]
    fn test_share_percentage() {
        assert_eq!(share_percentage(1, 4), 25.0);
        assert_eq!(share_percentage(1, 0), 0.0);
    }

    #[test]
    fn test_average_per_user() {
        assert_eq!(average_per_user(Decimal::from(500), 42), Decimal::new(1190, 2));
        assert_eq!(average_per_user(Decimal::from(500), 0), Decimal::ZERO);
    }
}
