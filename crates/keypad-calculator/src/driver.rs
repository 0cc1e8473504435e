//! Unified Calculator Driver
//!
//! Scenario logic is written once against [`CalculatorDriver`] and run
//! against the bare state machine as well as the DOM-backed [`WasmDriver`].
//!
//! [`WasmDriver`]: crate::wasm::WasmDriver

use crate::core::{CalcResult, Calculator, InputEvent};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::CalculatorDriver;
/// use keypad_calculator::prelude::*;
///
/// fn add_five_and_three<D: CalculatorDriver>(driver: &mut D) {
///     driver.press_labels(&["5", "+", "3", "="]).unwrap();
///     assert_eq!(driver.display(), "8");
///     assert_eq!(driver.history(), "5 + 3 =");
/// }
///
/// add_five_and_three(&mut Calculator::new());
/// add_five_and_three(&mut WasmDriver::new());
/// ```
pub trait CalculatorDriver {
    /// Delivers one input event
    fn press(&mut self, event: InputEvent) -> CalcResult<()>;

    /// Current main readout
    fn display(&self) -> String;

    /// Current history line
    fn history(&self) -> String;

    /// Delivers events in order, stopping at the first rejected one
    fn press_all(&mut self, events: &[InputEvent]) -> CalcResult<()> {
        events.iter().try_for_each(|event| self.press(*event))
    }

    /// Delivers events given by their button captions
    fn press_labels(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels
            .iter()
            .try_for_each(|label| self.press(InputEvent::from_label(label)?))
    }

    /// Returns to the start-of-session state
    fn reset(&mut self) -> CalcResult<()> {
        self.press(InputEvent::AllClear)
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, event: InputEvent) -> CalcResult<()> {
        Self::press(self, event)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn history(&self) -> String {
        Self::history(self)
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies a single operation: `5 + 3 =`
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["5", "+", "3", "="])?;
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.history(), "5 + 3 =");

    driver.reset()?;
    driver.press_labels(&["9", "-", "4", "="])?;
    assert_eq!(driver.display(), "5");

    driver.reset()?;
    driver.press_labels(&["6", "×", "7", "="])?;
    assert_eq!(driver.display(), "42");

    driver.reset()?;
    driver.press_labels(&["2", "0", "÷", "4", "="])?;
    assert_eq!(driver.display(), "5");
    Ok(())
}

/// Verifies division by zero shows a message and the session survives it
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["6", "÷", "0", "="])?;
    assert_eq!(driver.display(), "Can't divide by zero");

    driver.press_labels(&["2", "+", "2", "="])?;
    assert_eq!(driver.display(), "4");
    Ok(())
}

/// Verifies chaining: `5 + 5 + 5 =`
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["5", "+", "5", "+"])?;
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.history(), "10 +");

    driver.press_labels(&["5", "="])?;
    assert_eq!(driver.display(), "15");
    assert_eq!(driver.history(), "10 + 5 =");
    Ok(())
}

/// Verifies sign toggling
pub fn verify_sign_toggle<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["9", "±"])?;
    assert_eq!(driver.display(), "-9");
    driver.press_labels(&["±"])?;
    assert_eq!(driver.display(), "9");
    Ok(())
}

/// Verifies all-clear from a busy state
pub fn verify_all_clear<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["7", "×", "8", "=", "+"])?;
    driver.press_labels(&["AC"])?;
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history(), "");
    Ok(())
}

/// Verifies backspace
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["1", "2", "C"])?;
    assert_eq!(driver.display(), "1");
    driver.press_labels(&["C"])?;
    assert_eq!(driver.display(), "0");
    Ok(())
}

/// Verifies a finalized result is read-only but replaced by new digits
pub fn verify_finalized_result<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.reset()?;
    driver.press_labels(&["4", "+", "4", "=", "C"])?;
    assert_eq!(driver.display(), "8");
    driver.press_labels(&["3"])?;
    assert_eq!(driver.display(), "3");
    Ok(())
}

/// Complete verification suite - runs all scenarios
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_division_by_zero(driver)?;
    verify_chaining(driver)?;
    verify_sign_toggle(driver)?;
    verify_all_clear(driver)?;
    verify_backspace(driver)?;
    verify_finalized_result(driver)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, DigitKey};

    #[test]
    fn test_calculator_is_a_driver() {
        let mut calc = Calculator::new();
        CalculatorDriver::press(&mut calc, InputEvent::Digit(DigitKey::new('4').unwrap()))
            .unwrap();
        assert_eq!(CalculatorDriver::display(&calc), "4");
        assert_eq!(CalculatorDriver::history(&calc), "");
    }

    #[test]
    fn test_press_all() {
        let mut calc = Calculator::new();
        let events = [
            InputEvent::Digit(DigitKey::new('2').unwrap()),
            InputEvent::Operator(crate::core::Operator::Multiply),
            InputEvent::Digit(DigitKey::new('3').unwrap()),
            InputEvent::Equals,
        ];
        calc.press_all(&events).unwrap();
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_press_labels_stops_at_unknown_button() {
        let mut calc = Calculator::new();
        let result = calc.press_labels(&["1", "sqrt", "2"]);
        assert_eq!(result, Err(CalcError::UnknownButton("sqrt".into())));
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::new();
        calc.press_labels(&["1", "+"]).unwrap();
        calc.reset().unwrap();
        assert_eq!(CalculatorDriver::display(&calc), "0");
        assert_eq!(CalculatorDriver::history(&calc), "");
    }

    // ===== Unified Scenario Tests =====

    #[test]
    fn test_unified_basic_arithmetic() {
        verify_basic_arithmetic(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_sign_toggle() {
        verify_sign_toggle(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_all_clear() {
        verify_all_clear(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_backspace() {
        verify_backspace(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_unified_finalized_result() {
        verify_finalized_result(&mut Calculator::new()).unwrap();
    }

    #[test]
    fn test_all_scenarios() {
        run_all_scenarios(&mut Calculator::new()).unwrap();
    }
}
