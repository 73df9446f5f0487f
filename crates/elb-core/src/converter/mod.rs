//! Bidirectional Arabic/Elbonian converter.
//!
//! A `Converter` is built once from a raw string. Surrounding whitespace is
//! dropped, the rest is classified as a decimal integer or a numeral and
//! validated; both representations are then available without further
//! failure.

pub mod explain;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::convert::{numeral_value, to_numeral_string, MAX_VALUE, MIN_VALUE};
use crate::error::ConvertError;
use crate::numeral;

pub use explain::{explain, Explanation, Term};

/// Which representation the converter was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Arabic,
    Numeral,
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Form::Arabic => "arabic",
            Form::Numeral => "numeral",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Converter {
    input: String,
    form: Form,
    value: u16,
}

impl Converter {
    pub fn new(raw: &str) -> Result<Self, ConvertError> {
        let input = raw.trim();
        let _span = debug_span!("converter_new", input).entered();

        if is_decimal(input) {
            let value = check_bounds(input)?;
            debug!(value, "arabic input");
            return Ok(Self {
                input: input.to_string(),
                form: Form::Arabic,
                value,
            });
        }

        let symbols = numeral::validate(input).map_err(|reason| {
            debug!(%reason, "rejected numeral");
            ConvertError::MalformedNumber {
                input: input.to_string(),
                reason,
            }
        })?;
        let value = numeral_value(&symbols);
        debug!(value, symbol_count = symbols.len(), "numeral input");
        Ok(Self {
            input: input.to_string(),
            form: Form::Numeral,
            value,
        })
    }

    /// Build from an integer; the stored input is its decimal string.
    pub fn from_value(n: i64) -> Result<Self, ConvertError> {
        let input = n.to_string();
        let value = in_bounds(n).ok_or_else(|| ConvertError::ValueOutOfBounds {
            input: input.clone(),
        })?;
        Ok(Self {
            input,
            form: Form::Arabic,
            value,
        })
    }

    /// The trimmed input exactly as supplied.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn to_arabic(&self) -> u16 {
        self.value
    }

    /// The numeral form. A numeral input is returned unchanged.
    pub fn to_numeral(&self) -> String {
        match self.form {
            Form::Numeral => self.input.clone(),
            Form::Arabic => to_numeral_string(self.value),
        }
    }
}

/// An optionally signed, non-empty run of ASCII digits.
fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a decimal string known to be syntactically valid. Overflow can
/// only come from magnitude, so it is reported as out of bounds too.
fn check_bounds(input: &str) -> Result<u16, ConvertError> {
    input
        .parse::<i64>()
        .ok()
        .and_then(in_bounds)
        .ok_or_else(|| {
            debug!("value out of bounds");
            ConvertError::ValueOutOfBounds {
                input: input.to_string(),
            }
        })
}

fn in_bounds(n: i64) -> Option<u16> {
    u16::try_from(n)
        .ok()
        .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input)
    }
}

impl FromStr for Converter {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Converter {
    type Error = ConvertError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Converter {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Converter> for String {
    fn from(c: Converter) -> Self {
        c.input
    }
}
