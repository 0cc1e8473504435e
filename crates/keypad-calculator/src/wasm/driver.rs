//! DOM-backed driver
//!
//! Clicks go through the mock page: the element id is resolved to an
//! [`InputEvent`] by the keypad, the calculator runs one transition, and both
//! outputs are written back into the page before the next click.

use super::dom::{DomEvent, MockDom, DISPLAY_ID, HISTORY_ID};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Calculator, InputEvent};
use crate::driver::CalculatorDriver;

/// Calculator wired to a mock page and keypad
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: Calculator,
    /// Mock DOM for testing
    dom: MockDom,
    /// Button layout
    keypad: Keypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a driver with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> CalcResult<Self> {
        Ok(Self::with_calculator(Calculator::with_config(config)?))
    }

    /// Mounts an existing calculator into a fresh page
    #[must_use]
    pub fn with_calculator(calculator: Calculator) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        let mut driver = Self {
            calculator,
            dom,
            keypad,
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a reference to the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Simulates clicking the element with the given id
    ///
    /// The click is recorded even when the id is not a keypad button.
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let event = self.keypad.handle_click(element_id)?;
        let result = self.calculator.press(event);
        self.sync_dom();
        result
    }

    /// Text of the display input
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_value(DISPLAY_ID).unwrap_or_default()
    }

    /// Text of the history line
    #[must_use]
    pub fn history_text(&self) -> &str {
        self.dom.get_element_text(HISTORY_ID).unwrap_or_default()
    }

    /// Writes both outputs into the page verbatim
    fn sync_dom(&mut self) {
        let readout = self.calculator.readout();
        self.dom.set_value(DISPLAY_ID, &readout.display);
        self.dom.set_element_text(HISTORY_ID, &readout.history);
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, event: InputEvent) -> CalcResult<()> {
        let id = self
            .keypad
            .button_for(event)
            .map(|btn| btn.id.clone())
            .ok_or_else(|| CalcError::UnknownButton(event.label()))?;
        self.click(&id)
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn history(&self) -> String {
        self.history_text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_all_scenarios, verify_all_clear, verify_backspace, verify_basic_arithmetic,
        verify_chaining, verify_division_by_zero, verify_finalized_result, verify_sign_toggle,
    };

    fn click_all(driver: &mut WasmDriver, ids: &[&str]) {
        for id in ids {
            driver.click(id).unwrap();
        }
    }

    #[test]
    fn test_new_driver_shows_initial_readout() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display_text(), "0");
        assert_eq!(driver.history_text(), "");
        assert_eq!(driver.keypad().button_count(), 19);
    }

    #[test]
    fn test_click_updates_page() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-1", "btn-2", "btn-add"]);
        assert_eq!(driver.display_text(), "12");
        assert_eq!(driver.history_text(), "12 +");
        assert_eq!(driver.dom().event_history().len(), 3);
    }

    #[test]
    fn test_click_unknown_element() {
        let mut driver = WasmDriver::new();
        driver.click("btn-7").unwrap();
        let err = driver.click("calc-display").unwrap_err();
        assert_eq!(err, CalcError::UnknownButton("calc-display".into()));
        assert_eq!(driver.display_text(), "7");
        assert_eq!(driver.dom().event_history().len(), 2);
    }

    #[test]
    fn test_page_matches_calculator_after_every_click() {
        let mut driver = WasmDriver::new();
        for id in ["btn-9", "btn-multiply", "btn-3", "btn-equals", "btn-toggle-sign"] {
            driver.click(id).unwrap();
            assert_eq!(driver.display_text(), driver.calculator().display());
            assert_eq!(driver.history_text(), driver.calculator().history());
        }
        assert_eq!(driver.display_text(), "-27");
        assert_eq!(driver.history_text(), "9 × 3 =");
    }

    #[test]
    fn test_division_by_zero_message_rendered() {
        let mut driver = WasmDriver::new();
        click_all(&mut driver, &["btn-8", "btn-divide", "btn-0", "btn-equals"]);
        assert_eq!(driver.display_text(), "Can't divide by zero");
        assert_eq!(driver.history_text(), "8 ÷ 0 =");
    }

    #[test]
    fn test_with_config() {
        let config = CalculatorConfig::new().with_divide_by_zero_message("Error");
        let mut driver = WasmDriver::with_config(config).unwrap();
        driver.press_labels(&["1", "÷", "0", "="]).unwrap();
        assert_eq!(driver.display_text(), "Error");
    }

    #[test]
    fn test_with_invalid_config() {
        let config = CalculatorConfig::new().with_max_result_len(0);
        assert!(WasmDriver::with_config(config).is_err());
    }

    #[test]
    fn test_with_calculator_syncs_existing_state() {
        let mut calc = Calculator::new();
        calc.press_labels(&["4", "+"]).unwrap();
        let driver = WasmDriver::with_calculator(calc);
        assert_eq!(driver.display_text(), "4");
        assert_eq!(driver.history_text(), "4 +");
    }

    #[test]
    fn test_driver_press_goes_through_page() {
        let mut driver = WasmDriver::new();
        driver.press_labels(&["2", "+", "2"]).unwrap();
        assert_eq!(driver.dom().event_history().len(), 3);
        assert_eq!(
            driver.dom().event_history()[1],
            DomEvent::click("btn-add")
        );
    }

    // ===== Unified Scenario Tests =====

    #[test]
    fn test_unified_basic_arithmetic() {
        verify_basic_arithmetic(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_sign_toggle() {
        verify_sign_toggle(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_all_clear() {
        verify_all_clear(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_backspace() {
        verify_backspace(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_unified_finalized_result() {
        verify_finalized_result(&mut WasmDriver::new()).unwrap();
    }

    #[test]
    fn test_all_scenarios() {
        run_all_scenarios(&mut WasmDriver::new()).unwrap();
    }
}
