//! Display text and keypad digit keys
//!
//! The display is kept as text rather than a number because it must hold
//! in-progress input such as `"12."` that no `f64` can represent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, parse_operand};
use crate::core::{CalcError, CalcResult};

/// A digit key (`0`-`9`) or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct DigitKey(char);

impl DigitKey {
    /// The decimal point key
    pub const DECIMAL_POINT: Self = Self('.');

    /// The digit keys `0` through `9`, indexed by value
    pub const DIGITS: [Self; 10] = [
        Self('0'),
        Self('1'),
        Self('2'),
        Self('3'),
        Self('4'),
        Self('5'),
        Self('6'),
        Self('7'),
        Self('8'),
        Self('9'),
    ];

    /// Creates a key from a character
    pub fn new(ch: char) -> CalcResult<Self> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Self(ch))
        } else {
            Err(CalcError::InvalidKey(ch.to_string()))
        }
    }

    /// Creates a key for a single decimal digit
    pub fn digit(d: u8) -> CalcResult<Self> {
        char::from_digit(u32::from(d), 10)
            .map(Self)
            .ok_or_else(|| CalcError::InvalidKey(d.to_string()))
    }

    /// Returns the character this key inserts
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns true for the decimal point key
    #[must_use]
    pub const fn is_decimal_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for DigitKey {
    type Error = CalcError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl From<DigitKey> for char {
    fn from(key: DigitKey) -> Self {
        key.0
    }
}

impl fmt::Display for DigitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text shown on the main readout
///
/// Never empty: clearing the last character falls back to `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(String);

impl Default for DisplayValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayValue {
    /// The initial `"0"` readout
    #[must_use]
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Readout for a computed number
    #[must_use]
    pub fn from_number(value: f64) -> Self {
        Self(format_number(value))
    }

    /// Readout showing `text` verbatim, such as a rounded result or a
    /// division-by-zero message
    ///
    /// Whether it counts as a message is decided by [`Self::is_message`].
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::zero()
        } else {
            Self(text)
        }
    }

    /// Returns the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the literal `"0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Returns true when the text does not read as a number
    #[must_use]
    pub fn is_message(&self) -> bool {
        self.parse().is_err()
    }

    /// Reads the text as a number
    pub fn parse(&self) -> CalcResult<f64> {
        parse_operand(&self.0)
    }

    /// Discards the current text and starts over with `key`
    pub fn start_with(&mut self, key: DigitKey) {
        self.0.clear();
        self.0.push(key.as_char());
    }

    /// Types `key`, replacing a lone `"0"` instead of appending to it
    pub fn push_key(&mut self, key: DigitKey) {
        if self.is_zero() {
            self.start_with(key);
        } else {
            self.0.push(key.as_char());
        }
    }

    /// Drops the last character, falling back to `"0"`
    pub fn backspace(&mut self) {
        if self.0.chars().count() > 1 {
            self.0.pop();
        } else {
            *self = Self::zero();
        }
    }

    /// Character count
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true when the text is empty, which the constructors never produce
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
