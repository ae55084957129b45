//! Selection controller
//!
//! The controller owns the [`ItemStore`] and every presentational
//! collaborator. It is the only mutator of selection state: intents come in
//! through [`SelectionController::dispatch`], are applied to the store, and a
//! synchronization pass pushes immutable snapshots back out.
//!
//! # Example
//!
//! ```rust
//! use nice_select::prelude::*;
//!
//! let source = SelectSource::new()
//!     .option(SourceOption::new("", "Choose a fruit"))
//!     .option(SourceOption::new("apple", "Apple"))
//!     .option(SourceOption::new("banana", "Banana"));
//!
//! let overrides = PartialSelectConfig::new().searchable(true);
//! let mut select = SelectionController::new(source, &overrides)?;
//! assert_eq!(select.placeholder(), "Choose a fruit");
//!
//! let banana = select.store().find_by_value("banana").unwrap().id();
//! select.dispatch(SelectIntent::Select(banana));
//! assert_eq!(select.selected()[0].text(), "Banana");
//!
//! select.dispatch(SelectIntent::SearchInput("app".into()));
//! assert_eq!(select.dropdown().visible_rows().count(), 1);
//! # Ok::<(), nice_select::SelectError>(())
//! ```

use std::fmt;

use nice_select_core::{Item, ItemDescriptor, ItemId, ItemStore, SelectSource};

use crate::config::{PartialSelectConfig, SelectConfig};
use crate::current_selection::CurrentSelection;
use crate::dropdown::DropdownList;
use crate::error::{Result, SelectError};
use crate::intent::{ClickTarget, SelectIntent};
use crate::overlay::{overlay_events, OverlayState};
use crate::searchbox::Searchbox;
use crate::sink::RenderSink;

/// Mediates between the item store and its render collaborators
pub struct SelectionController {
    source: SelectSource,
    config: SelectConfig,
    store: ItemStore,
    placeholder: String,
    tab_index: Option<i32>,
    overlay: OverlayState,
    dropdown: DropdownList,
    current_selection: Option<CurrentSelection>,
    searchbox: Option<Searchbox>,
    sinks: Vec<Box<dyn RenderSink>>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("disabled", &self.config.disabled)
            .field("overlay", &self.overlay)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl SelectionController {
    /// Enhance a native select source
    ///
    /// Explicit configuration is merged over the defaults; the source's
    /// `disabled`, `multiple`, `data-searchable` and `data-current` markers
    /// can then only promote the matching settings to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Unmounted`] when the source is not attached to
    /// a render host.
    pub fn new(mut source: SelectSource, overrides: &PartialSelectConfig) -> Result<Self> {
        if !source.mounted {
            return Err(SelectError::Unmounted);
        }

        let mut config = SelectConfig::default().extend(overrides);
        config.disabled |= source.disabled;
        config.multiple |= source.multiple;
        config.searchable |= source.searchable;
        config.show_selection |= source.show_selection;

        let placeholder = source
            .discover_placeholder()
            .unwrap_or_else(|| config.placeholder.clone());

        let tab_index = if config.disabled {
            None
        } else {
            Some(source.tab_index.unwrap_or(0))
        };

        tracing::debug!(
            multiple = config.multiple,
            disabled = config.disabled,
            searchable = config.searchable,
            show_selection = config.show_selection,
            "resolved select mode"
        );

        let store = ItemStore::import(&source, config.multiple);
        source.hidden = true;

        let current_selection = config
            .show_selection
            .then(|| CurrentSelection::new(&config.selection, config.multiple));
        let searchbox = config
            .searchable
            .then(|| Searchbox::new(&config.search, config.search_placeholder.clone()));

        let mut controller = Self {
            source,
            dropdown: DropdownList::new(&config.dropdown),
            config,
            store,
            placeholder,
            tab_index,
            overlay: OverlayState::Closed,
            current_selection,
            searchbox,
            sinks: Vec::new(),
        };

        controller.dropdown.rebuild(controller.store.items());
        controller.synchronize();
        Ok(controller)
    }

    /// Build from literal item descriptors
    ///
    /// A hidden source is materialized from the descriptors first, so the
    /// placeholder-value skipping policy applies here too.
    pub fn from_items(
        items: impl IntoIterator<Item = ItemDescriptor>,
        multiple: bool,
        overrides: &PartialSelectConfig,
    ) -> Result<Self> {
        Self::new(SelectSource::from_descriptors(items, multiple), overrides)
    }

    /// Build from a JSON array of item descriptors
    pub fn from_json(json: &str, multiple: bool, overrides: &PartialSelectConfig) -> Result<Self> {
        let items = ItemDescriptor::list_from_json(json)?;
        Self::from_items(items, multiple, overrides)
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Apply one intent
    pub fn dispatch(&mut self, intent: SelectIntent) {
        tracing::debug!(?intent, "dispatching select intent");

        match intent {
            SelectIntent::Select(id) => self.select_item(id),
            SelectIntent::SelectValue(value) => self.select_value(&value),
            SelectIntent::SearchInput(text) => self.search_input(text),
            SelectIntent::Filter(term) => self.apply_filter_term(term.as_deref()),
            SelectIntent::Reset => self.reset(),
            SelectIntent::Open => self.open(),
            SelectIntent::Close => self.close(),
            SelectIntent::TriggerClick => self.send_overlay_event(overlay_events::TRIGGER_CLICK),
            SelectIntent::DocumentClick(target) => self.document_click(target),
            SelectIntent::Enable => self.enable(),
            SelectIntent::Disable => self.disable(),
        }
    }

    /// Toggle an item's selection, then synchronize
    pub fn select_item(&mut self, id: ItemId) {
        self.store.toggle_selection(id);
        self.synchronize();
    }

    /// Toggle the first item with this value, then synchronize
    pub fn select_value(&mut self, value: &str) {
        self.store.toggle_by_value(value);
        self.synchronize();
    }

    /// Filter the items and refresh only the list view
    ///
    /// The selection summary is left untouched; filtering never changes it.
    pub fn apply_filter_term(&mut self, term: Option<&str>) {
        let items = self.store.filter(term);
        self.dropdown.sync(items);
        for sink in &mut self.sinks {
            sink.sync_items(items);
        }
    }

    /// Feed raw searchbox text through its threshold into the filter
    pub fn search_input(&mut self, text: impl Into<String>) {
        let Some(searchbox) = self.searchbox.as_mut() else {
            tracing::trace!("search input on a non-searchable select, ignoring");
            return;
        };
        let term = searchbox.input(text);
        self.apply_filter_term(term.as_deref());
    }

    /// Clear search and selection together
    pub fn reset(&mut self) {
        self.store.reset();
        if let Some(searchbox) = self.searchbox.as_mut() {
            searchbox.reset();
        }
        self.synchronize();
    }

    /// Push the current items and selection to every render collaborator
    ///
    /// Idempotent: repeated calls without an intervening mutation produce
    /// identical output.
    pub fn synchronize(&mut self) {
        let items = self.store.items();
        let selected: Vec<Item> = self.store.selected().into_iter().cloned().collect();

        if let Some(current) = self.current_selection.as_mut() {
            current.update(&selected);
        }
        self.dropdown.sync_items(items);
        for sink in &mut self.sinks {
            sink.sync_items(items);
            sink.sync_selection(&selected);
        }

        tracing::trace!(items = items.len(), selected = selected.len(), "synchronized select");
    }

    /// Attach another render sink and bring it up to date
    pub fn add_sink(&mut self, sink: impl RenderSink + 'static) {
        let mut sink: Box<dyn RenderSink> = Box::new(sink);
        let selected: Vec<Item> = self.store.selected().into_iter().cloned().collect();
        sink.sync_items(self.store.items());
        sink.sync_selection(&selected);
        self.sinks.push(sink);
    }

    // =========================================================================
    // Enabled state
    // =========================================================================

    pub fn enable(&mut self) {
        if self.config.disabled {
            self.config.disabled = false;
            self.tab_index = Some(self.source.tab_index.unwrap_or(0));
        }
    }

    pub fn disable(&mut self) {
        if !self.config.disabled {
            self.config.disabled = true;
            self.tab_index = None;
        }
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Show the overlay (no-op when disabled or already open)
    pub fn open(&mut self) {
        self.send_overlay_event(overlay_events::OPEN);
    }

    /// Hide the overlay (no-op when already closed)
    pub fn close(&mut self) {
        self.send_overlay_event(overlay_events::CLOSE);
    }

    fn document_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Searchbox => {
                if let Some(searchbox) = self.searchbox.as_mut() {
                    searchbox.focus();
                }
            }
            ClickTarget::Outside => self.send_overlay_event(overlay_events::OUTSIDE_CLICK),
            ClickTarget::Inside => {}
        }
    }

    fn send_overlay_event(&mut self, event: u32) {
        let Some(next) = self.overlay.on_event(event) else {
            tracing::trace!(state = ?self.overlay, event, "overlay transition rejected");
            return;
        };
        if next.is_open() && self.config.disabled {
            tracing::trace!("select is disabled, not opening");
            return;
        }

        tracing::debug!(from = ?self.overlay, to = ?next, "overlay transition");
        self.overlay = next;

        if let Some(searchbox) = self.searchbox.as_mut() {
            if next.is_open() {
                searchbox.focus();
            } else {
                searchbox.blur();
            }
        }
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Discard the enhanced select and hand back the native source
    ///
    /// The source becomes visible again and its options carry the final
    /// selection.
    pub fn destroy(self) -> SelectSource {
        let mut source = self.source;
        source.write_back(self.store.items());
        source.hidden = false;
        source
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn selected(&self) -> Vec<&Item> {
        self.store.selected()
    }

    /// Resolved configuration, including source promotions and the
    /// current enabled state
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn is_multiple(&self) -> bool {
        self.config.multiple
    }

    pub fn is_searchable(&self) -> bool {
        self.searchbox.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay
    }

    /// Trigger label
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Focus order index; `None` while disabled
    pub fn tab_index(&self) -> Option<i32> {
        self.tab_index
    }

    /// Container classes (`nice-select` plus state modifiers)
    pub fn container_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["nice-select"];
        if self.config.disabled {
            classes.push("disabled");
        }
        if self.config.multiple {
            classes.push("multiple");
        }
        if self.overlay.is_open() {
            classes.push("open");
        }
        classes
    }

    pub fn dropdown(&self) -> &DropdownList {
        &self.dropdown
    }

    pub fn current_selection(&self) -> Option<&CurrentSelection> {
        self.current_selection.as_ref()
    }

    pub fn searchbox(&self) -> Option<&Searchbox> {
        self.searchbox.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nice_select_core::SourceOption;

    fn fruits() -> SelectSource {
        SelectSource::new()
            .option(SourceOption::new("", "Choose a fruit"))
            .option(SourceOption::new("apple", "Apple"))
            .option(SourceOption::new("banana", "Banana").selected())
            .option(SourceOption::new("cherry", "Cherry").disabled())
    }

    fn select_with(overrides: PartialSelectConfig) -> SelectionController {
        SelectionController::new(fruits(), &overrides).unwrap()
    }

    fn id_of(select: &SelectionController, value: &str) -> ItemId {
        select.store().find_by_value(value).unwrap().id()
    }

    #[test]
    fn test_construct_imports_and_hides_source() {
        let select = select_with(PartialSelectConfig::default());
        assert_eq!(select.items().len(), 3);
        assert_eq!(select.placeholder(), "Choose a fruit");
        assert_eq!(select.tab_index(), Some(0));
        assert!(!select.is_open());
        assert!(select.current_selection().is_none());
        assert!(select.searchbox().is_none());
        assert_eq!(select.dropdown().rows().len(), 3);
        assert!(select.dropdown().rows()[1].has_class("selected"));
    }

    #[test]
    fn test_construct_unmounted_fails() {
        let err = SelectionController::new(fruits().detached(), &PartialSelectConfig::default())
            .unwrap_err();
        assert!(matches!(err, SelectError::Unmounted));
    }

    #[test]
    fn test_source_markers_promote() {
        let source = fruits()
            .multiple(true)
            .disabled(true)
            .searchable(true)
            .show_selection(true);
        let overrides = PartialSelectConfig::new()
            .multiple(false)
            .disabled(false)
            .searchable(false)
            .show_selection(false);

        let select = SelectionController::new(source, &overrides).unwrap();
        assert!(select.is_multiple());
        assert!(select.is_disabled());
        assert!(select.is_searchable());
        assert!(select.current_selection().is_some());
        assert_eq!(select.tab_index(), None);
        assert_eq!(select.container_classes(), vec!["nice-select", "disabled", "multiple"]);
    }

    #[test]
    fn test_config_mode_applies_without_source_marker() {
        let select = select_with(PartialSelectConfig::new().multiple(true));
        assert!(select.is_multiple());
        assert!(select.store().is_multiple());
    }

    #[test]
    fn test_placeholder_falls_back_to_config() {
        let source = SelectSource::new().option(SourceOption::new("a", "A"));
        let select =
            SelectionController::new(source.clone(), &PartialSelectConfig::default()).unwrap();
        assert_eq!(select.placeholder(), "Choose");

        let overrides = PartialSelectConfig::new().placeholder("Pick");
        let select = SelectionController::new(source, &overrides).unwrap();
        assert_eq!(select.placeholder(), "Pick");
    }

    #[test]
    fn test_source_tab_index() {
        let mut select =
            SelectionController::new(fruits().tab_index(4), &PartialSelectConfig::default())
                .unwrap();
        assert_eq!(select.tab_index(), Some(4));
        select.disable();
        assert_eq!(select.tab_index(), None);
        select.enable();
        assert_eq!(select.tab_index(), Some(4));
    }

    #[test]
    fn test_enabled_state_tracks_config() {
        let mut select = select_with(PartialSelectConfig::default());
        select.dispatch(SelectIntent::Disable);
        assert!(select.is_disabled());
        assert!(select.config().disabled);

        select.dispatch(SelectIntent::Enable);
        assert!(!select.is_disabled());
        assert!(!select.config().disabled);
        assert!(!select.container_classes().contains(&"disabled"));
    }

    #[test]
    fn test_disabled_blocks_open() {
        let mut select = select_with(PartialSelectConfig::default());
        select.disable();
        select.open();
        assert!(!select.is_open());
        select.dispatch(SelectIntent::TriggerClick);
        assert!(!select.is_open());

        select.enable();
        select.dispatch(SelectIntent::TriggerClick);
        assert!(select.is_open());
        assert!(select.container_classes().contains(&"open"));
    }

    #[test]
    fn test_disable_keeps_open_overlay() {
        let mut select = select_with(PartialSelectConfig::default());
        select.open();
        select.disable();
        assert!(select.is_open());
        select.close();
        assert!(!select.is_open());
    }

    #[test]
    fn test_open_close_noops() {
        let mut select = select_with(PartialSelectConfig::default());
        select.close();
        assert_eq!(select.overlay_state(), OverlayState::Closed);
        select.open();
        select.open();
        assert_eq!(select.overlay_state(), OverlayState::Open);
        select.dispatch(SelectIntent::TriggerClick);
        assert_eq!(select.overlay_state(), OverlayState::Closed);
    }

    #[test]
    fn test_document_clicks() {
        let mut select = select_with(PartialSelectConfig::new().searchable(true));
        select.open();
        assert!(select.searchbox().unwrap().is_focused());

        select.dispatch(SelectIntent::DocumentClick(ClickTarget::Inside));
        assert!(select.is_open());
        select.dispatch(SelectIntent::DocumentClick(ClickTarget::Searchbox));
        assert!(select.is_open());
        assert!(select.searchbox().unwrap().is_focused());

        select.dispatch(SelectIntent::DocumentClick(ClickTarget::Outside));
        assert!(!select.is_open());
        assert!(!select.searchbox().unwrap().is_focused());
    }

    #[test]
    fn test_search_input_respects_threshold() {
        let mut select = select_with(PartialSelectConfig::new().searchable(true));

        select.search_input("ch");
        assert_eq!(select.dropdown().visible_rows().count(), 3);

        select.search_input("che");
        let visible: Vec<_> = select.dropdown().visible_rows().map(|r| r.value.as_str()).collect();
        assert_eq!(visible, vec!["cherry"]);

        select.search_input("c");
        assert_eq!(select.dropdown().visible_rows().count(), 3);
    }

    #[test]
    fn test_search_input_without_searchbox_is_noop() {
        let mut select = select_with(PartialSelectConfig::default());
        select.search_input("apple");
        assert!(select.items().iter().all(Item::is_visible));
    }

    #[test]
    fn test_filter_does_not_touch_summary() {
        let mut select = select_with(PartialSelectConfig::new().show_selection(true));
        let before = select.current_selection().unwrap().summary().clone();
        select.apply_filter_term(Some("zzz"));
        assert_eq!(select.current_selection().unwrap().summary(), &before);
        assert_eq!(select.dropdown().visible_rows().count(), 0);
    }

    #[test]
    fn test_reset_clears_searchbox() {
        let mut select = SelectionController::new(
            fruits(),
            &PartialSelectConfig::new().searchable(true).min_chars(1),
        )
        .unwrap();
        select.dispatch(SelectIntent::SearchInput("a".into()));
        select.dispatch(SelectIntent::Reset);

        assert_eq!(select.searchbox().unwrap().value(), "");
        assert!(select.selected().is_empty());
        assert!(select.dropdown().rows().iter().all(|row| !row.hidden));
        assert!(select.dropdown().rows().iter().all(|row| !row.has_class("selected")));
    }

    #[test]
    fn test_destroy_writes_back_selection() {
        let mut select = select_with(PartialSelectConfig::default());
        let apple = id_of(&select, "apple");
        select.select_item(apple);

        let source = select.destroy();
        assert!(!source.hidden);
        let selected: Vec<_> = source
            .options
            .iter()
            .filter(|opt| opt.selected)
            .map(|opt| opt.text.as_str())
            .collect();
        assert_eq!(selected, vec!["Apple"]);
        // Placeholder option is untouched
        assert_eq!(source.options[0].value.as_deref(), Some(""));
    }

    #[test]
    fn test_destroy_keeps_duplicate_values_distinct() {
        let source = SelectSource::new()
            .option(SourceOption::new("a", "First"))
            .option(SourceOption::new("a", "Second"));
        let mut select = SelectionController::new(source, &PartialSelectConfig::default()).unwrap();
        let second = select.items()[1].id();
        select.dispatch(SelectIntent::Select(second));

        let source = select.destroy();
        let flags: Vec<_> = source
            .options
            .iter()
            .map(|opt| (opt.text.as_str(), opt.selected))
            .collect();
        assert_eq!(flags, vec![("First", false), ("Second", true)]);
    }

    #[test]
    fn test_from_json() {
        let select = SelectionController::from_json(
            r#"[
                {"value": "", "text": "Pick"},
                {"value": "x", "text": "X"},
                {"value": 7, "text": "Seven"}
            ]"#,
            true,
            &PartialSelectConfig::default(),
        )
        .unwrap();
        assert_eq!(select.items().len(), 2);
        assert_eq!(select.placeholder(), "Pick");
        assert!(select.is_multiple());

        let err = SelectionController::from_json("{", false, &PartialSelectConfig::default())
            .unwrap_err();
        assert!(matches!(err, SelectError::Core(_)));
    }
}
