//! Searchbox filter input
//!
//! Holds the typed text and turns each keystroke into a filter term. Input
//! shorter than the configured minimum yields `None` ("no filter"), never a
//! partial term.

use crate::config::SearchConfig;

#[derive(Clone, Debug)]
pub struct Searchbox {
    class_name: String,
    placeholder: String,
    min_chars: usize,
    value: String,
    focused: bool,
}

impl Searchbox {
    pub fn new(config: &SearchConfig, placeholder: impl Into<String>) -> Self {
        Self {
            class_name: config.class_name.clone(),
            placeholder: placeholder.into(),
            min_chars: config.min_chars,
            value: String::new(),
            focused: false,
        }
    }

    /// Replace the input text and return the resulting filter term
    pub fn input(&mut self, value: impl Into<String>) -> Option<String> {
        self.value = value.into();
        self.term().map(str::to_string)
    }

    /// Current filter term, if the input meets the threshold
    pub fn term(&self) -> Option<&str> {
        (self.value.chars().count() >= self.min_chars).then_some(self.value.as_str())
    }

    /// Clear the input text
    pub fn reset(&mut self) {
        self.value.clear();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
