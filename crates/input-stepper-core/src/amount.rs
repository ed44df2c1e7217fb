//! Integer parsing and clamping for stepper values.

use std::fmt;

/// A value handed to the stepper before normalization.
///
/// Values arrive either as text (input content, attributes) or as integers
/// (arithmetic from increase/decrease). Both are parsed the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAmount {
    Text(String),
    Int(i64),
}

impl RawAmount {
    /// Parses this value as a base-10 integer. See [`parse_amount`].
    pub fn parse(&self) -> Option<i64> {
        match self {
            RawAmount::Text(text) => parse_amount(text),
            RawAmount::Int(value) => Some(*value),
        }
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_owned())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl From<&String> for RawAmount {
    fn from(value: &String) -> Self {
        RawAmount::Text(value.clone())
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Int(value)
    }
}

impl From<i32> for RawAmount {
    fn from(value: i32) -> Self {
        RawAmount::Int(value.into())
    }
}

impl From<u32> for RawAmount {
    fn from(value: u32) -> Self {
        RawAmount::Int(value.into())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Text(text) => write!(f, "{text:?}"),
            RawAmount::Int(value) => write!(f, "{value}"),
        }
    }
}

/// Parses the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted and
/// the longest run of ASCII digits is consumed; anything after the digits is
/// ignored (`"12px"` parses as 12). Returns `None` when no digit follows the
/// sign. Values outside `i64` saturate.
pub fn parse_amount(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits {
        seen_digit = true;
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}

/// Clamps `value` against the upper limit first, then the lower one.
///
/// The order is observable when `min > max`: the result is then `min`.
/// A `None` limit does not constrain.
pub fn clamp_amount(value: i64, min: Option<i64>, max: Option<i64>) -> i64 {
    let mut amount = value;
    if let Some(max) = max {
        if amount >= max {
            amount = max;
        }
    }
    if let Some(min) = min {
        if amount <= min {
            amount = min;
        }
    }
    amount
}
