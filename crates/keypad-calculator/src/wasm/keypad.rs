//! Keypad layout for the browser calculator
//!
//! Each button maps to exactly one [`InputEvent`]. Element ids are stable so
//! click handlers and tests can address buttons directly.

use super::dom::{DomElement, MockDom, KEYPAD_ID};
use crate::core::{CalcError, CalcResult, DigitKey, InputEvent, Operator};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button delivers
    pub event: InputEvent,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button
    #[must_use]
    pub fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            id: element_id(event),
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub const fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Caption shown on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Styling class the page uses to group buttons
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.event {
            InputEvent::Digit(_) => "number-btn",
            InputEvent::Operator(Operator::Add) => "add",
            InputEvent::Operator(Operator::Subtract) => "subtract",
            InputEvent::Operator(Operator::Multiply) => "multiply",
            InputEvent::Operator(Operator::Divide) => "divide",
            InputEvent::Equals => "equals",
            InputEvent::AllClear => "allClear",
            InputEvent::Clear => "clear",
            InputEvent::ToggleSign => "toggle-sign",
        }
    }

    /// Returns true when the button covers the given column
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

fn element_id(event: InputEvent) -> String {
    match event {
        InputEvent::Digit(key) if key.is_decimal_point() => "btn-decimal".to_string(),
        InputEvent::Digit(key) => format!("btn-{key}"),
        InputEvent::Operator(op) => format!("btn-{}", op_name(op)),
        InputEvent::Equals => "btn-equals".to_string(),
        InputEvent::AllClear => "btn-all-clear".to_string(),
        InputEvent::Clear => "btn-clear".to_string(),
        InputEvent::ToggleSign => "btn-toggle-sign".to_string(),
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "add",
        Operator::Subtract => "subtract",
        Operator::Multiply => "multiply",
        Operator::Divide => "divide",
    }
}

/// Keypad layout definition
///
/// ```text
/// [ AC ] [ C ] [ ± ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ - ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [    0     ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| InputEvent::Digit(DigitKey::DIGITS[d]);
        let op = InputEvent::Operator;

        let buttons = vec![
            // Row 0: AC C ± ÷
            KeypadButtonDef::new(InputEvent::AllClear, 0, 0),
            KeypadButtonDef::new(InputEvent::Clear, 0, 1),
            KeypadButtonDef::new(InputEvent::ToggleSign, 0, 2),
            KeypadButtonDef::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(digit(7), 1, 0),
            KeypadButtonDef::new(digit(8), 1, 1),
            KeypadButtonDef::new(digit(9), 1, 2),
            KeypadButtonDef::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButtonDef::new(digit(4), 2, 0),
            KeypadButtonDef::new(digit(5), 2, 1),
            KeypadButtonDef::new(digit(6), 2, 2),
            KeypadButtonDef::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(digit(1), 3, 0),
            KeypadButtonDef::new(digit(2), 3, 1),
            KeypadButtonDef::new(digit(3), 3, 2),
            KeypadButtonDef::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButtonDef::new(digit(0), 4, 0).with_span(2),
            KeypadButtonDef::new(InputEvent::Digit(DigitKey::DECIMAL_POINT), 4, 2),
            KeypadButtonDef::new(InputEvent::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.iter().find(|b| b.covers(row, col))
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its caption; ASCII aliases such as `*` are accepted
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        let event = InputEvent::from_label(label).ok()?;
        self.button_for(event)
    }

    /// Finds the button that delivers an event
    #[must_use]
    pub fn button_for(&self, event: InputEvent) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Maps a click on an element to the event it delivers
    pub fn handle_click(&self, element_id: &str) -> CalcResult<InputEvent> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.event)
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.label())
                    .with_class(btn.css_class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string());
                if btn.span > 1 {
                    elem.with_attr("data-span", &btn.span.to_string())
                } else {
                    elem
                }
            })
            .collect()
    }
}

/// Extension trait for mounting a keypad into the page
pub trait MockDomKeypadExt {
    /// Appends one element per button to the keypad container
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        if self.get_element(KEYPAD_ID).is_none() {
            self.register_element(DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"));
        }
        for elem in keypad.create_dom_elements() {
            self.append_child(KEYPAD_ID, elem);
        }
    }
}
