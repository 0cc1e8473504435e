//! Core calculator: arithmetic engine and keypad state machine
//!
//! Everything in here is free of presentation concerns. The state machine
//! consumes discrete [`InputEvent`]s and produces a [`Readout`]; rendering it
//! is left to the caller.

pub mod display;
pub mod history;
pub mod machine;
pub mod number;
pub mod operations;
pub mod state;

pub use display::{DigitKey, DisplayValue};
pub use history::HistoryLine;
pub use machine::{Calculator, InputEvent, Readout};
pub use operations::{ArithmeticEngine, Operator, Outcome, DIVISION_BY_ZERO_MESSAGE};
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Division by zero is deliberately absent: it is reported as
/// [`Outcome::DivisionByZero`] and shown in place of a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Display text could not be read as a number
    #[error("Invalid operand: {0:?} is not a number")]
    InvalidOperand(String),

    /// Operator symbol outside the four supported operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Key that is neither a digit nor a decimal point
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Button caption or element id with no keypad counterpart
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Rejected configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
