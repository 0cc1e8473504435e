//! The single pending-calculation state

use serde::{Deserialize, Serialize};

use crate::core::{DisplayValue, HistoryLine, Operator};

/// In-progress calculation
///
/// Fields are only mutated by [`crate::core::Calculator`] transitions; the
/// presentation layer reads them through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text on the main readout
    pub(crate) display: DisplayValue,
    /// Operand captured before the pending operator
    pub(crate) first_operand: Option<DisplayValue>,
    /// Operator awaiting its second operand
    pub(crate) operator: Option<Operator>,
    /// Next digit starts a fresh number instead of appending
    pub(crate) waiting_for_second_operand: bool,
    /// Display holds a finalized result
    pub(crate) is_finished: bool,
    /// History line above the readout
    pub(crate) history: HistoryLine,
}

impl CalculatorState {
    /// Creates the start-of-session state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text on the main readout
    #[must_use]
    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    /// Operand captured before the pending operator
    #[must_use]
    pub fn first_operand(&self) -> Option<&DisplayValue> {
        self.first_operand.as_ref()
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after an operator press, until the next digit
    #[must_use]
    pub fn waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// True right after equals, until the next digit
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// History line above the readout
    #[must_use]
    pub fn history(&self) -> &HistoryLine {
        &self.history
    }

    /// Returns true when the next digit discards the display
    #[must_use]
    pub fn starts_fresh_number(&self) -> bool {
        self.waiting_for_second_operand || self.is_finished
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
