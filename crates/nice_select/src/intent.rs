//! Intents dispatched into the controller
//!
//! Presentational collaborators translate user interaction into a
//! [`SelectIntent`] and hand it to
//! [`SelectionController::dispatch`](crate::controller::SelectionController::dispatch).
//! Intents arrive one at a time and run to completion.

use nice_select_core::ItemId;

/// Where a document-level click landed relative to the component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Inside the searchbox
    Searchbox,
    /// Elsewhere inside the component
    Inside,
    /// Outside the component
    Outside,
}

/// Something the user (or host code) asked the select to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectIntent {
    /// A list row was clicked
    Select(ItemId),
    /// Toggle the first item with this value
    SelectValue(String),
    /// Raw text typed into the searchbox (subject to its threshold)
    SearchInput(String),
    /// Apply a filter term directly; `None` clears the filter
    Filter(Option<String>),
    /// Clear both search and selection
    Reset,
    Open,
    Close,
    /// The trigger was clicked
    TriggerClick,
    /// A click anywhere in the document
    DocumentClick(ClickTarget),
    Enable,
    Disable,
}
