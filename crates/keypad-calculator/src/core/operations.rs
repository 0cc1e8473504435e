//! Arithmetic engine: the four basic operations over parsed operands
//!
//! Operands arrive as `f64` already; parsing display text is the caller's
//! job (see [`crate::core::number::parse_operand`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::CalcError;

/// Message shown in place of a number after dividing by zero
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Can't divide by zero";

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

/// Result of applying an operator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A numeric result, exactly as IEEE-754 arithmetic produced it
    Value(f64),
    /// The divisor was zero
    DivisionByZero,
}

impl Outcome {
    /// Returns the numeric result, if any
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::DivisionByZero => None,
        }
    }
}

/// Stateless arithmetic engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEngine;

impl ArithmeticEngine {
    /// Addition: x + y
    #[must_use]
    pub fn add(x: f64, y: f64) -> f64 {
        x + y
    }

    /// Subtraction: x - y
    #[must_use]
    pub fn subtract(x: f64, y: f64) -> f64 {
        x - y
    }

    /// Multiplication: x * y
    #[must_use]
    pub fn multiply(x: f64, y: f64) -> f64 {
        x * y
    }

    /// Division: x / y, or [`Outcome::DivisionByZero`] when y is zero
    #[must_use]
    pub fn divide(x: f64, y: f64) -> Outcome {
        if y == 0.0 {
            return Outcome::DivisionByZero;
        }
        Outcome::Value(x / y)
    }

    /// Applies `op` to the two operands
    #[must_use]
    pub fn operate(op: Operator, x: f64, y: f64) -> Outcome {
        let outcome = match op {
            Operator::Add => Outcome::Value(Self::add(x, y)),
            Operator::Subtract => Outcome::Value(Self::subtract(x, y)),
            Operator::Multiply => Outcome::Value(Self::multiply(x, y)),
            Operator::Divide => Self::divide(x, y),
        };
        trace!(%op, x, y, ?outcome, "operate");
        outcome
    }
}
