use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// A monetary field as it arrives from a vendor feed or import row.
///
/// Vendor adapters deliver prices as bare numbers or as display strings
/// ("$1,299.00", "N/A"); a field missing from the payload is
/// `Option<RawMoney>::None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMoney {
    Number(f64),
    Text(String),
}

impl From<f64> for RawMoney {
    fn from(value: f64) -> Self {
        RawMoney::Number(value)
    }
}

impl From<&str> for RawMoney {
    fn from(value: &str) -> Self {
        RawMoney::Text(value.to_string())
    }
}

/// Outcome of normalizing a raw monetary field.
///
/// `Malformed` stays distinct from `Absent` so callers can report data
/// quality; both carry no usable value for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedMoney {
    Present(Decimal),
    Absent,
    Malformed,
}

impl ParsedMoney {
    /// The parsed value, if any.
    pub fn value(self) -> Option<Decimal> {
        match self {
            ParsedMoney::Present(value) => Some(value),
            ParsedMoney::Absent | ParsedMoney::Malformed => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, ParsedMoney::Present(_))
    }
}

/// Symbols stripped before numeric parsing, alongside commas and whitespace.
const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Normalize a raw monetary field to a decimal.
///
/// `None`, empty strings, and the literal token "N/A" are `Absent`;
/// anything else that fails numeric parsing is `Malformed` and logged.
/// Never panics.
pub fn parse_money(raw: Option<&RawMoney>) -> ParsedMoney {
    let Some(raw) = raw else {
        return ParsedMoney::Absent;
    };

    match raw {
        RawMoney::Number(n) => match Decimal::from_f64(*n) {
            Some(value) => ParsedMoney::Present(value),
            None => {
                tracing::warn!("Unparseable numeric price: {}", n);
                ParsedMoney::Malformed
            }
        },
        RawMoney::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
                return ParsedMoney::Absent;
            }

            let cleaned: String = trimmed
                .chars()
                .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
                .collect();

            match Decimal::from_str(&cleaned) {
                Ok(value) => ParsedMoney::Present(value),
                Err(_) => {
                    tracing::warn!("Unparseable price string: {:?}", s);
                    ParsedMoney::Malformed
                }
            }
        }
    }
}

/// Normalize a vendor acquisition cost.
///
/// Zero is a valid cost (a free or promotional item); a negative cost is
/// not usable.
pub fn parse_cost(raw: Option<&RawMoney>) -> Option<Decimal> {
    match parse_money(raw).value() {
        Some(value) if value < Decimal::ZERO => {
            tracing::warn!("Negative vendor cost {} treated as absent", value);
            None
        }
        other => other,
    }
}

/// Normalize a suggested or advertised price (MSRP or MAP).
///
/// A zero or negative suggested price is not usable.
pub fn parse_suggested_price(raw: Option<&RawMoney>) -> Option<Decimal> {
    parse_money(raw).value().filter(|value| *value > Decimal::ZERO)
}
