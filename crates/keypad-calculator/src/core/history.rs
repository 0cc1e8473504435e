//! History line shown above the main readout
//!
//! Only the single last operation is kept: either the pending `5 +` or the
//! just-completed `5 + 3 =`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Short annotation of the in-progress or just-completed expression
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryLine {
    /// Nothing to show
    #[default]
    Empty,
    /// An operator was chosen and awaits its second operand
    Pending {
        /// The captured first operand
        operand: String,
        /// The chosen operator
        operator: Operator,
    },
    /// Equals finalized a computation
    Completed {
        /// The first operand
        first: String,
        /// The applied operator
        operator: Operator,
        /// The second operand
        second: String,
    },
}

impl HistoryLine {
    /// Creates a pending line
    #[must_use]
    pub fn pending(operand: &str, operator: Operator) -> Self {
        Self::Pending {
            operand: operand.to_string(),
            operator,
        }
    }

    /// Creates a completed line
    #[must_use]
    pub fn completed(first: &str, operator: Operator, second: &str) -> Self {
        Self::Completed {
            first: first.to_string(),
            operator,
            second: second.to_string(),
        }
    }

    /// Returns true when nothing is shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for HistoryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Pending { operand, operator } => write!(f, "{operand} {operator}"),
            Self::Completed {
                first,
                operator,
                second,
            } => write!(f, "{first} {operator} {second} ="),
        }
    }
}
