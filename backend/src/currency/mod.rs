//! Currency text formatting - static locale and currency convention tables.
//!
//! Renders a coerced amount as locale-shaped currency text. This is the one
//! place in the crate where bad input surfaces as an error: an unknown
//! locale tag or currency code is returned to the caller as [`FormatError`]
//! rather than degraded to zero.

use crate::core::coerce::to_number;
use serde_json::Value;
use thiserror::Error;

/// Locale used when the caller supplies none
pub const DEFAULT_LOCALE: &str = "en-US";

/// Currency used when the caller supplies none
pub const DEFAULT_CURRENCY: &str = "USD";

/// Number-shaping conventions for a single locale.
#[derive(Debug, Clone)]
struct LocaleConvention {
    tag: &'static str,
    decimal_separator: char,
    group_separator: char,
    /// true: symbol prefixes the number; false: symbol follows, spaced
    symbol_first: bool,
}

/// Display conventions for a single currency.
#[derive(Debug, Clone)]
struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    minor_units: usize,
}

/// Supported locale conventions.
const LOCALES: &[LocaleConvention] = &[
    LocaleConvention { tag: "en-US", decimal_separator: '.', group_separator: ',',        symbol_first: true },
    LocaleConvention { tag: "en-GB", decimal_separator: '.', group_separator: ',',        symbol_first: true },
    LocaleConvention { tag: "de-DE", decimal_separator: ',', group_separator: '.',        symbol_first: false },
    LocaleConvention { tag: "fr-FR", decimal_separator: ',', group_separator: '\u{a0}',   symbol_first: false },
    LocaleConvention { tag: "ja-JP", decimal_separator: '.', group_separator: ',',        symbol_first: true },
];

/// Supported currencies.
const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", minor_units: 2 },
    CurrencyInfo { code: "EUR", symbol: "\u{20ac}", minor_units: 2 },
    CurrencyInfo { code: "GBP", symbol: "\u{a3}", minor_units: 2 },
    CurrencyInfo { code: "JPY", symbol: "\u{a5}", minor_units: 0 },
];

/// Errors that can occur while formatting currency text
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Optional locale and currency overrides for [`format_currency`]
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::FormatOptions;
///
/// let options = FormatOptions {
///     locale: Some("de-DE".to_string()),
///     currency: Some("EUR".to_string()),
/// };
/// assert_eq!(options.locale.as_deref(), Some("de-DE"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Display locale tag (defaults to [`DEFAULT_LOCALE`])
    pub locale: Option<String>,

    /// ISO currency code (defaults to [`DEFAULT_CURRENCY`])
    pub currency: Option<String>,
}

/// Format a loose amount as locale- and currency-shaped text
///
/// The amount is coerced first, so numeric text and malformed values flow
/// through the same rules as everywhere else (garbage formats as zero).
/// Unknown locale tags and currency codes are the caller's problem and come
/// back as [`FormatError`].
///
/// # Example
/// ```
/// use subscription_pricing_core_rs::{format_currency, FormatOptions};
/// use serde_json::json;
///
/// let text = format_currency(&json!(1234.56), &FormatOptions::default()).unwrap();
/// assert_eq!(text, "$1,234.56");
/// ```
pub fn format_currency(value: &Value, options: &FormatOptions) -> Result<String, FormatError> {
    let locale_tag = options.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
    let currency_code = options.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);

    let locale = lookup_locale(locale_tag)
        .ok_or_else(|| FormatError::UnknownLocale(locale_tag.to_string()))?;
    let currency = lookup_currency(currency_code)
        .ok_or_else(|| FormatError::UnknownCurrency(currency_code.to_string()))?;

    let amount = to_number(value);
    Ok(render(amount, locale, currency))
}

/// Look up a locale by tag (exact match).
fn lookup_locale(tag: &str) -> Option<&'static LocaleConvention> {
    LOCALES.iter().find(|locale| locale.tag == tag)
}

/// Look up a currency by code (exact match).
fn lookup_currency(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Shape a coerced amount with the given conventions.
fn render(amount: f64, locale: &LocaleConvention, currency: &CurrencyInfo) -> String {
    let rounded = format!("{:.*}", currency.minor_units, amount.abs());
    let (integer_part, fraction_part) = match rounded.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rounded.as_str(), None),
    };

    let mut number = group_digits(integer_part, locale.group_separator);
    if let Some(fraction) = fraction_part {
        number.push(locale.decimal_separator);
        number.push_str(fraction);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if locale.symbol_first {
        format!("{}{}{}", sign, currency.symbol, number)
    } else {
        format!("{}{}\u{a0}{}", sign, number, currency.symbol)
    }
}

/// Insert the locale's group separator every three integer digits.
fn group_digits(digits: &str, separator: char) -> String {
    let total = digits.chars().count();
    let mut grouped = String::with_capacity(total + total / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (total - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_locale_and_currency() {
        let text = format_currency(&json!(130), &FormatOptions::default()).unwrap();
        assert_eq!(text, "$130.00");
    }

    #[test]
    fn test_grouping_thousands() {
        let text = format_currency(&json!(1234567.89), &FormatOptions::default()).unwrap();
        assert_eq!(text, "$1,234,567.89");
    }

    #[test]
    fn test_german_euro_shape() {
        let options = FormatOptions {
            locale: Some("de-DE".to_string()),
            currency: Some("EUR".to_string()),
        };
        let text = format_currency(&json!(1234.5), &options).unwrap();
        assert_eq!(text, "1.234,50\u{a0}\u{20ac}");
    }

    #[test]
    fn test_yen_has_no_minor_units() {
        let options = FormatOptions {
            locale: Some("ja-JP".to_string()),
            currency: Some("JPY".to_string()),
        };
        let text = format_currency(&json!(1234.56), &options).unwrap();
        assert_eq!(text, "\u{a5}1,235");
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        let text = format_currency(&json!(-4.2), &FormatOptions::default()).unwrap();
        assert_eq!(text, "-$4.20");
    }

    #[test]
    fn test_amount_is_coerced_first() {
        let text = format_currency(&json!(" 12.5 "), &FormatOptions::default()).unwrap();
        assert_eq!(text, "$12.50");

        let text = format_currency(&json!("garbage"), &FormatOptions::default()).unwrap();
        assert_eq!(text, "$0.00");
    }

    #[test]
    fn test_unknown_locale_is_an_error() {
        let options = FormatOptions {
            locale: Some("xx-XX".to_string()),
            currency: None,
        };
        assert_eq!(
            format_currency(&json!(1), &options),
            Err(FormatError::UnknownLocale("xx-XX".to_string()))
        );
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        let options = FormatOptions {
            locale: None,
            currency: Some("XTS".to_string()),
        };
        assert_eq!(
            format_currency(&json!(1), &options),
            Err(FormatError::UnknownCurrency("XTS".to_string()))
        );
    }
}
