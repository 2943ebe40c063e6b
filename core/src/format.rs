//! Locale-aware price display.
//!
//! The format is a plain value handed to whoever renders prices; nothing in
//! the process holds a current locale.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol and separators used to display a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormat {
    pub currency: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl PriceFormat {
    /// `R$ 1.234,56`
    pub const fn pt_br() -> Self {
        Self {
            currency: "R$",
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// `$ 1,234.56`
    pub const fn en_us() -> Self {
        Self {
            currency: "$",
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }

    /// Look up a preset by BCP 47 tag; `_` is accepted in place of `-`.
    pub fn for_locale(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" => Some(Self::pt_br()),
            "en-us" => Some(Self::en_us()),
            _ => None,
        }
    }

    /// Two decimals, halves rounded away from zero, thousands grouped.
    pub fn format(&self, value: Decimal) -> String {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let cents = rounded.mantissa().unsigned_abs();
        let sign = if rounded.is_sign_negative() && cents > 0 { "-" } else { "" };
        format!(
            "{sign}{} {}{}{:02}",
            self.currency,
            group_thousands(cents / 100, self.grouping_separator),
            self.decimal_separator,
            cents % 100
        )
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

fn group_thousands(value: u128, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
