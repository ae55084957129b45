//! Current-selection summary
//!
//! Shows what is selected: every selected label, a "no selection" message
//! when nothing is, or (multiple mode only, with counting enabled) a count
//! message once the selection grows past the configured threshold.

use nice_select_core::Item;

use crate::config::{SelectionConfig, COUNT_TOKEN};
use crate::sink::RenderSink;

/// What the summary currently displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionSummary {
    /// Nothing selected
    Empty(String),
    /// Count message with `{count}` substituted
    Count(String),
    /// Labels of the selected items
    Items(Vec<String>),
}

impl SelectionSummary {
    /// Modifier class for the summary element
    pub fn modifier_class(&self) -> &'static str {
        match self {
            SelectionSummary::Empty(_) => "no-selection",
            SelectionSummary::Count(_) => "count-selection",
            SelectionSummary::Items(_) => "show-selection",
        }
    }
}

/// Summary of the selected items
#[derive(Clone, Debug)]
pub struct CurrentSelection {
    multiple: bool,
    class_name: String,
    no_selection_message: String,
    show_count: bool,
    selection_count_message: String,
    min_show_count: usize,
    summary: SelectionSummary,
}

impl CurrentSelection {
    pub fn new(config: &SelectionConfig, multiple: bool) -> Self {
        Self {
            multiple,
            class_name: config.class_name.clone(),
            no_selection_message: config.no_selection_message.clone(),
            show_count: config.show_count,
            selection_count_message: config.selection_count_message.clone(),
            min_show_count: config.min_show_count,
            summary: SelectionSummary::Empty(config.no_selection_message.clone()),
        }
    }

    /// Recompute the summary from the selected items
    pub fn update(&mut self, selection: &[Item]) {
        self.summary = if selection.is_empty() {
            SelectionSummary::Empty(self.no_selection_message.clone())
        } else if self.multiple && self.show_count && selection.len() > self.min_show_count {
            SelectionSummary::Count(
                self.selection_count_message
                    .replacen(COUNT_TOKEN, &selection.len().to_string(), 1),
            )
        } else {
            SelectionSummary::Items(selection.iter().map(|item| item.text().to_string()).collect())
        };
    }

    pub fn reset(&mut self) {
        self.update(&[]);
    }

    pub fn summary(&self) -> &SelectionSummary {
        &self.summary
    }

    /// Base class followed by the modifier class
    pub fn classes(&self) -> [&str; 2] {
        [self.class_name.as_str(), self.summary.modifier_class()]
    }
}

impl RenderSink for CurrentSelection {
    fn sync_selection(&mut self, selected: &[Item]) {
        self.update(selected);
    }
}
