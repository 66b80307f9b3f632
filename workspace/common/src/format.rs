//! Locale-aware formatting of timestamps, dates and amounts.

use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Glyph appended to currency amounts.
pub const CURRENCY_GLYPH: &str = "₽";

/// Locale used to render dates, resolved from the viewer's language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLocale(Locale);

impl Default for DisplayLocale {
    fn default() -> Self {
        DisplayLocale(Locale::ru_RU)
    }
}

impl DisplayLocale {
    /// Resolves a BCP 47 tag such as `ru-RU`, `en` or `en_GB`.
    ///
    /// Unsupported languages fall back to Russian, the dashboard's home locale.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('-', "_");
        let mut parts = normalized.split('_');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        let locale = match (language.as_str(), region.as_str()) {
            ("ru", _) => Locale::ru_RU,
            ("uk", _) => Locale::uk_UA,
            ("en", "GB") => Locale::en_GB,
            ("en", _) => Locale::en_US,
            ("de", _) => Locale::de_DE,
            ("fr", _) => Locale::fr_FR,
            _ => {
                tracing::debug!("No date locale for '{}', using ru_RU", tag);
                Locale::ru_RU
            }
        };
        DisplayLocale(locale)
    }

    pub fn locale(&self) -> Locale {
        self.0
    }
}

/// Date and time, e.g. `05.03.2024 14:30` for Russian.
pub fn format_timestamp(timestamp: &NaiveDateTime, locale: DisplayLocale) -> String {
    timestamp
        .and_utc()
        .format_localized("%x %H:%M", locale.locale())
        .to_string()
}

/// Date only, e.g. `05.03.2024` for Russian.
pub fn format_date(timestamp: &NaiveDateTime, locale: DisplayLocale) -> String {
    timestamp
        .and_utc()
        .format_localized("%x", locale.locale())
        .to_string()
}

/// Short day and month name for chart axes.
pub fn format_day_month(date: &NaiveDate, locale: DisplayLocale) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized("%e %b", locale.locale())
        .to_string()
        .trim()
        .to_string()
}

/// Bare amount without trailing zeros, e.g. `300` or `12.5`.
pub fn format_amount(amount: &Decimal) -> String {
    amount.normalize().to_string()
}

/// Amount followed by the currency glyph, e.g. `500₽`.
pub fn format_currency(amount: &Decimal) -> String {
    format!("{}{}", format_amount(amount), CURRENCY_GLYPH)
}

pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_fifth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_locale_resolution() {
        assert_eq!(DisplayLocale::from_tag("ru-RU").locale(), Locale::ru_RU);
        assert_eq!(DisplayLocale::from_tag("ru").locale(), Locale::ru_RU);
        assert_eq!(DisplayLocale::from_tag("en-gb").locale(), Locale::en_GB);
        assert_eq!(DisplayLocale::from_tag("en").locale(), Locale::en_US);
        assert_eq!(DisplayLocale::from_tag("zz-ZZ"), DisplayLocale::default());
        assert_eq!(DisplayLocale::from_tag(""), DisplayLocale::default());
    }

    #[test]
    fn test_russian_timestamp() {
        let locale = DisplayLocale::from_tag("ru-RU");
        assert_eq!(format_timestamp(&march_fifth(), locale), "05.03.2024 14:30");
        assert_eq!(format_date(&march_fifth(), locale), "05.03.2024");
    }

    #[test]
    fn test_day_month_starts_with_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let formatted = format_day_month(&date, DisplayLocale::default());
        assert!(formatted.starts_with('5'), "got {}", formatted);
    }

    #[test]
    fn test_currency_is_bare_amount_with_glyph() {
        assert_eq!(format_currency(&Decimal::from(500)), "500₽");
        assert_eq!(format_currency(&Decimal::new(12050, 2)), "120.5₽");
        assert_eq!(format_currency(&Decimal::ZERO), "0₽");
        assert_eq!(format_amount(&Decimal::new(30000, 2)), "300");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(66.666, 1), "66.7%");
        assert_eq!(format_percent(0.0, 0), "0%");
    }
}
