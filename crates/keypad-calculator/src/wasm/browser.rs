//! Browser bindings
//!
//! The page forwards every button click here and renders the two outputs
//! returned by the getters. Compiled only with the `wasm` feature.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::CalculatorConfig;
use crate::core::{CalcError, Calculator, DigitKey, InputEvent, Operator};
use crate::wasm::keypad::Keypad;

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
        }
    }

    /// Create a calculator from a JSON configuration
    pub fn with_config_json(json: &str) -> Result<BrowserCalculator, String> {
        let config = CalculatorConfig::from_json(json).map_err(to_js_error)?;
        let calculator = Calculator::with_config(config).map_err(to_js_error)?;
        Ok(Self {
            calculator,
            keypad: Keypad::new(),
        })
    }

    /// Main readout
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// History line
    #[wasm_bindgen(getter)]
    pub fn history(&self) -> String {
        self.calculator.history()
    }

    /// Handle a keypad button click by element ID, returning the new display
    pub fn handle_button(&mut self, button_id: &str) -> Result<String, String> {
        let event = self.keypad.handle_click(button_id).map_err(to_js_error)?;
        self.dispatch(event)
    }

    /// Handle a button by its caption, returning the new display
    pub fn press_label(&mut self, label: &str) -> Result<String, String> {
        let event = InputEvent::from_label(label).map_err(to_js_error)?;
        self.dispatch(event)
    }

    /// Type a digit or the decimal point
    pub fn digit(&mut self, key: char) -> Result<String, String> {
        let key = DigitKey::new(key).map_err(to_js_error)?;
        self.dispatch(InputEvent::Digit(key))
    }

    /// Choose an operator by symbol
    pub fn operator(&mut self, symbol: &str) -> Result<String, String> {
        let op: Operator = symbol.parse().map_err(to_js_error)?;
        self.dispatch(InputEvent::Operator(op))
    }

    /// Evaluate the pending operation
    pub fn equals(&mut self) -> Result<String, String> {
        self.dispatch(InputEvent::Equals)
    }

    /// Reset everything
    pub fn all_clear(&mut self) -> Result<String, String> {
        self.dispatch(InputEvent::AllClear)
    }

    /// Remove the last typed character
    pub fn clear(&mut self) -> Result<String, String> {
        self.dispatch(InputEvent::Clear)
    }

    /// Negate the display
    pub fn toggle_sign(&mut self) -> Result<String, String> {
        self.dispatch(InputEvent::ToggleSign)
    }

    /// Session state as JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.calculator.state()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl BrowserCalculator {
    fn dispatch(&mut self, event: InputEvent) -> Result<String, String> {
        self.calculator.press(event).map_err(to_js_error)?;
        Ok(self.display())
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: CalcError) -> String {
    err.to_string()
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Keypad calculator WASM initialized".into());
}
