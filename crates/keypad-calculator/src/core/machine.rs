//! Keypad state machine
//!
//! Each [`InputEvent`] runs one transition to completion. Transitions that
//! need a number parse the display explicitly; when that fails the
//! transition returns the error and leaves the state as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::{
    ArithmeticEngine, CalcError, CalcResult, CalculatorState, DigitKey, DisplayValue, HistoryLine,
    Operator,
};

/// One user action on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit or the decimal point
    Digit(DigitKey),
    /// One of the four operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    AllClear,
    /// Backspace
    Clear,
    /// Negate the display
    ToggleSign,
}

impl InputEvent {
    /// Maps a button caption to its event
    ///
    /// Accepts `0`-`9`, `.`, the operator symbols (and their ASCII aliases),
    /// `=`, `AC`, `C` and `±` (or `+/-`).
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label {
            "=" => return Ok(Self::Equals),
            "AC" => return Ok(Self::AllClear),
            "C" => return Ok(Self::Clear),
            "±" | "+/-" => return Ok(Self::ToggleSign),
            _ => {}
        }

        let mut chars = label.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Ok(key) = DigitKey::new(ch) {
                return Ok(Self::Digit(key));
            }
        }

        label
            .parse::<Operator>()
            .map(Self::Operator)
            .map_err(|_| CalcError::UnknownButton(label.to_string()))
    }

    /// Returns the button caption for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(key) => key.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The two outputs the presentation layer renders after every transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Main numeric readout
    pub display: String,
    /// History line above it
    pub history: String,
}

/// Keypad calculator owning the session state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
}

impl Calculator {
    /// Creates a calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::new(),
            config,
        })
    }

    /// Returns the session state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Main readout text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display.as_str()
    }

    /// History line text
    #[must_use]
    pub fn history(&self) -> String {
        self.state.history.to_string()
    }

    /// Both outputs
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            display: self.display().to_string(),
            history: self.history(),
        }
    }

    /// Runs the transition for one input event
    pub fn press(&mut self, event: InputEvent) -> CalcResult<()> {
        let result = match event {
            InputEvent::Digit(key) => {
                self.digit(key);
                Ok(())
            }
            InputEvent::Operator(op) => self.operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::AllClear => {
                self.all_clear();
                Ok(())
            }
            InputEvent::Clear => {
                self.clear();
                Ok(())
            }
            InputEvent::ToggleSign => self.toggle_sign(),
        };

        match &result {
            Ok(()) => debug!(
                %event,
                display = %self.state.display,
                history = %self.state.history,
                "transition"
            ),
            Err(e) => warn!(%event, display = %self.state.display, error = %e, "transition rejected"),
        }
        result
    }

    /// Types a digit or decimal point
    pub fn digit(&mut self, key: DigitKey) {
        let state = &mut self.state;
        if state.starts_fresh_number() {
            state.display.start_with(key);
            state.waiting_for_second_operand = false;
            state.is_finished = false;
        } else {
            state.display.push_key(key);
        }
    }

    /// Chooses an operator, first folding in a pending operation whose
    /// second operand has been typed
    pub fn operator(&mut self, op: Operator) -> CalcResult<()> {
        let state = &self.state;
        let chained = match (state.operator, &state.first_operand) {
            (Some(pending), Some(first))
                if !state.waiting_for_second_operand && !first.is_message() =>
            {
                let outcome =
                    ArithmeticEngine::operate(pending, first.parse()?, state.display.parse()?);
                Some(self.config.render_running(outcome))
            }
            _ => None,
        };

        let first = match chained {
            Some(running) => {
                self.state.display = running.clone();
                running
            }
            None => {
                self.state.display.parse()?;
                self.state.display.clone()
            }
        };

        self.state.history = HistoryLine::pending(first.as_str(), op);
        self.state.first_operand = Some(first);
        self.state.operator = Some(op);
        self.state.waiting_for_second_operand = true;
        Ok(())
    }

    /// Evaluates the pending operation; ignored when none is pending
    pub fn equals(&mut self) -> CalcResult<()> {
        let state = &self.state;
        let (Some(op), Some(first)) = (state.operator, &state.first_operand) else {
            return Ok(());
        };

        let outcome = ArithmeticEngine::operate(op, first.parse()?, state.display.parse()?);
        let result = self.config.render_final(outcome);
        let history = HistoryLine::completed(first.as_str(), op, state.display.as_str());

        self.state.history = history;
        self.state.display = result.clone();
        self.state.first_operand = Some(result);
        self.state.operator = None;
        self.state.is_finished = true;
        Ok(())
    }

    /// Resets the whole session
    pub fn all_clear(&mut self) {
        self.state.reset();
    }

    /// Removes the last typed character; a finalized result is left alone
    pub fn clear(&mut self) {
        if self.state.is_finished {
            return;
        }
        self.state.display.backspace();
    }

    /// Negates the display; `"0"` is left alone
    pub fn toggle_sign(&mut self) -> CalcResult<()> {
        if self.state.display.is_zero() {
            return Ok(());
        }
        let toggled = DisplayValue::from_number(-self.state.display.parse()?);
        if self.state.is_finished {
            self.state.first_operand = Some(toggled.clone());
        }
        self.state.display = toggled;
        Ok(())
    }
}
