//! KSH amount handling.
//!
//! The canonical representation of money everywhere in the crate is `i64`
//! whole Kenyan shillings. Clients are not that disciplined: booking forms
//! send plain numbers while the contract flow sends pre-formatted strings
//! like `"KSH 15,000"`. Conversion happens once, at payload deserialization,
//! so everything past the API boundary works with integers only.

use serde::{Deserialize, Deserializer};

/// Parses a human-formatted KSH amount into whole shillings.
///
/// Strips currency prefixes, thousands separators, and whitespace, keeping
/// only digits and an optional leading minus. Returns `None` when no digits
/// remain or the value overflows.
#[must_use]
pub fn parse_kes(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Accepts a JSON number or a formatted string for an amount field.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawAmount {
    fn into_kes<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            RawAmount::Integer(value) => Ok(value),
            #[allow(clippy::cast_possible_truncation)]
            RawAmount::Float(value) => Ok(value.round() as i64),
            RawAmount::Text(text) => parse_kes(&text)
                .ok_or_else(|| E::custom(format!("cannot parse {text:?} as a KSH amount"))),
        }
    }
}

/// Deserializes an amount field from either a number or a formatted string.
///
/// # Errors
/// Fails when a string value contains no parseable amount.
pub fn deserialize_kes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?.into_kes()
}

/// Optional variant of [`deserialize_kes`] for partial-update payloads.
///
/// # Errors
/// Fails when a present string value contains no parseable amount.
pub fn deserialize_kes_opt<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::into_kes)
        .transpose()
}
