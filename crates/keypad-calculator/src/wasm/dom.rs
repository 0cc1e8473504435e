//! Mock DOM for WASM Testing
//!
//! Stands in for the browser page so the presentation contract (one click,
//! one transition, two outputs rendered verbatim) can be exercised natively.

use std::collections::HashMap;

/// Element id of the main readout
pub const DISPLAY_ID: &str = "calc-display";

/// Element id of the history line
pub const HISTORY_ID: &str = "calc-history";

/// Element id of the keypad container
pub const KEYPAD_ID: &str = "calc-keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Ids of child elements
    pub children: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns true when a `#id` or `.class` selector matches
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            !id.is_empty() && self.id == id
        } else if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else {
            self.tag == selector
        }
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements in document order
    elements: Vec<DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page without its keypad buttons
    ///
    /// ```text
    /// div#calculator.calculator
    ///   p#calc-history.history-item
    ///   input#calc-display.input-item   value="0"
    ///   div#calc-keypad.keypad
    /// ```
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        dom.register_element(
            DomElement::new("div")
                .with_id("calculator")
                .with_class("calculator"),
        );
        dom.append_child(
            "calculator",
            DomElement::new("p")
                .with_id(HISTORY_ID)
                .with_class("history-item"),
        );
        dom.append_child(
            "calculator",
            DomElement::new("input")
                .with_id(DISPLAY_ID)
                .with_class("input-item")
                .with_attr("type", "text")
                .with_attr("readonly", "")
                .with_attr("value", "0"),
        );
        dom.append_child(
            "calculator",
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
        );
        dom
    }

    /// Registers an element at the end of the document; an element with an
    /// already registered id replaces the old one
    pub fn register_element(&mut self, element: DomElement) {
        match self
            .elements
            .iter_mut()
            .find(|e| !element.id.is_empty() && e.id == element.id)
        {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    /// Adds an element as the last child of `parent_id`
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if !child.id.is_empty() {
            if let Some(parent) = self.get_element_mut(parent_id) {
                parent.children.push(child.id.clone());
            }
        }
        self.register_element(child);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// First element matching a `#id`, `.class` or tag selector
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.matches(selector))
    }

    /// All elements matching a selector, in document order
    #[must_use]
    pub fn query_selector_all(&self, selector: &str) -> Vec<&DomElement> {
        self.elements.iter().filter(|e| e.matches(selector)).collect()
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Sets the `value` of an input element
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.attributes
                .insert("value".to_string(), value.to_string());
        }
    }

    /// Gets the `value` of an input element
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.get_element(id).and_then(|e| e.get_attr("value"))
    }
}
