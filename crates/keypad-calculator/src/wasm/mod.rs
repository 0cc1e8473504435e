//! Browser frontend
//!
//! The page is a thin presentation layer: it turns clicks into
//! [`InputEvent`](crate::core::InputEvent)s and renders the readout. The mock
//! DOM and [`WasmDriver`] exercise that contract natively.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID, KEYPAD_ID};
pub use driver::WasmDriver;
pub use keypad::{Keypad, KeypadButtonDef, MockDomKeypadExt};
