//! Dropdown list view
//!
//! Headless model of the option list inside the overlay. Each row mirrors
//! one item: its label, a selected marker, a disabled marker and whether it
//! is hidden by the active filter. Rows are correlated with items by
//! [`ItemId`], never by value, so duplicate values stay distinct.

use nice_select_core::{Item, ItemId};

use crate::config::DropdownConfig;
use crate::intent::SelectIntent;
use crate::sink::RenderSink;

/// One rendered row of the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub value: String,
    pub text: String,
    /// Row classes (selected/disabled markers)
    pub classes: Vec<String>,
    pub hidden: bool,
}

impl ItemView {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// List view of the dropdown overlay
#[derive(Clone, Debug)]
pub struct DropdownList {
    class_name: String,
    selected_class_name: String,
    disabled_class_name: String,
    rows: Vec<ItemView>,
}

impl DropdownList {
    pub fn new(config: &DropdownConfig) -> Self {
        Self {
            class_name: config.class_name.clone(),
            selected_class_name: config.selected_class_name.clone(),
            disabled_class_name: config.disabled_class_name.clone(),
            rows: Vec::new(),
        }
    }

    /// Container class name
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Discard all rows and build one per item
    pub fn rebuild(&mut self, items: &[Item]) {
        self.rows = items
            .iter()
            .map(|item| ItemView {
                id: item.id(),
                value: item.value().to_string(),
                text: item.text().to_string(),
                classes: Vec::new(),
                hidden: false,
            })
            .collect();
        self.sync(items);
    }

    /// Update markers of existing rows in place
    ///
    /// Items without a row are skipped.
    pub fn sync(&mut self, items: &[Item]) {
        for item in items {
            let Some(row) = self.rows.iter_mut().find(|row| row.id == item.id()) else {
                continue;
            };

            row.classes.clear();
            if item.is_disabled() {
                row.classes.push(self.disabled_class_name.clone());
            }
            if item.is_selected() {
                row.classes.push(self.selected_class_name.clone());
            }
            row.hidden = !item.is_visible();
        }
    }

    pub fn rows(&self) -> &[ItemView] {
        &self.rows
    }

    /// Rows not hidden by the filter
    pub fn visible_rows(&self) -> impl Iterator<Item = &ItemView> {
        self.rows.iter().filter(|row| !row.hidden)
    }

    pub fn row(&self, id: ItemId) -> Option<&ItemView> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Intent for a click on a row
    ///
    /// Hidden rows cannot be clicked. Disabled rows still produce an intent;
    /// the controller decides what selection means for them.
    pub fn click(&self, id: ItemId) -> Option<SelectIntent> {
        self.row(id)
            .filter(|row| !row.hidden)
            .map(|row| SelectIntent::Select(row.id))
    }

    /// Intent for a click on the first row with this value
    pub fn click_value(&self, value: &str) -> Option<SelectIntent> {
        let id = self.rows.iter().find(|row| row.value == value)?.id;
        self.click(id)
    }

    fn same_rows(&self, items: &[Item]) -> bool {
        self.rows.len() == items.len()
            && self.rows.iter().zip(items).all(|(row, item)| row.id == item.id())
    }
}

impl RenderSink for DropdownList {
    fn sync_items(&mut self, items: &[Item]) {
        if self.same_rows(items) {
            self.sync(items);
        } else {
            self.rebuild(items);
        }
    }
}
