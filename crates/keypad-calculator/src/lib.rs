//! Keypad Calculator
//!
//! A four-function calculator driven by discrete button presses. A single
//! pending operation is kept at a time; pressing an operator while a
//! second operand has been typed folds the pending operation first, so
//! `5 + 5 + 5 =` shows `10` on the second `+` and `15` at the end.
//!
//! - [`core`]: arithmetic engine, display text, history line and the
//!   keypad state machine
//! - [`config`]: result width and rounding settings
//! - [`driver`]: one driver contract shared by every frontend
//! - [`wasm`]: mock page, keypad layout and browser bindings
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "2", "+", "7", "="] {
//!     calc.press(InputEvent::from_label(label).unwrap()).unwrap();
//! }
//! assert_eq!(calc.display(), "19");
//! assert_eq!(calc.history(), "12 + 7 =");
//!
//! // Dividing by zero is shown, not raised
//! calc.press_labels(&["AC", "4", "÷", "0", "="]).unwrap();
//! assert_eq!(calc.display(), "Can't divide by zero");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

/// Browser frontend; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{
        ArithmeticEngine, CalcError, CalcResult, Calculator, CalculatorState, DigitKey,
        DisplayValue, HistoryLine, InputEvent, Operator, Outcome, Readout,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;

    pub use crate::wasm::{DomElement, DomEvent, Keypad, KeypadButtonDef, MockDom, WasmDriver};
}
