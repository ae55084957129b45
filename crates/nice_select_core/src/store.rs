//! Item Store - canonical holder of item state
//!
//! The store owns an ordered list of [`Item`]s (insertion order is display
//! order) and a `multiple` flag fixed at construction. It is the only writer
//! of the `selected` and `visible` flags.
//!
//! # Invariants
//!
//! - Single mode: at most one item is selected at any time.
//! - Multiple mode: any subset of items may be selected.
//! - Visibility is recomputed from scratch on every [`ItemStore::filter`]
//!   call and never depends on selection.
//!
//! # Example
//!
//! ```rust
//! use nice_select_core::item::ItemDescriptor;
//! use nice_select_core::store::ItemStore;
//!
//! let mut store = ItemStore::initialize(
//!     vec![ItemDescriptor::new("a", "Apple"), ItemDescriptor::new("b", "Banana")],
//!     false,
//! );
//!
//! let apple = store.find_by_value("a").unwrap().id();
//! store.toggle_selection(apple);
//! assert_eq!(store.selected().len(), 1);
//!
//! store.filter(Some("ban"));
//! assert!(!store.items()[0].is_visible());
//! ```

use crate::item::{Item, ItemDescriptor, ItemId};
use crate::source::SelectSource;

/// Ordered collection of selectable items
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    multiple: bool,
}

impl ItemStore {
    /// Create an empty store
    pub fn new(multiple: bool) -> Self {
        Self {
            items: Vec::new(),
            multiple,
        }
    }

    /// Build a store from raw descriptors, preserving input order
    ///
    /// Missing descriptor fields are defaulted, never rejected.
    pub fn initialize(
        descriptors: impl IntoIterator<Item = ItemDescriptor>,
        multiple: bool,
    ) -> Self {
        let items: Vec<Item> = descriptors.into_iter().map(Item::from_descriptor).collect();
        let mut store = Self { items, multiple };
        store.enforce_exclusivity();
        store
    }

    /// Build a store from a JSON array of descriptors
    pub fn from_json(json: &str, multiple: bool) -> crate::Result<Self> {
        Ok(Self::initialize(ItemDescriptor::list_from_json(json)?, multiple))
    }

    /// Import the selectable options of a native source
    ///
    /// Placeholder options (value `""`, `"0"` or absent) are skipped.
    pub fn import(source: &SelectSource, multiple: bool) -> Self {
        let store = Self::initialize(source.selectable_descriptors(), multiple);
        tracing::trace!(
            imported = store.len(),
            skipped = source.options.len() - store.len(),
            multiple,
            "imported items from select source"
        );
        store
    }

    /// Single mode keeps only the first pre-selected item
    fn enforce_exclusivity(&mut self) {
        if self.multiple {
            return;
        }
        let mut seen = false;
        for item in &mut self.items {
            if item.selected {
                if seen {
                    item.selected = false;
                }
                seen = true;
            }
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Selected items in store order
    pub fn selected(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.selected).collect()
    }

    /// First item with the given value
    pub fn find_by_value(&self, value: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.value() == value)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Toggle the selection of an item
    ///
    /// - A selected target is deselected (in either mode).
    /// - In multiple mode an unselected target is added to the selection.
    /// - In single mode an unselected target becomes the only selected item.
    ///
    /// An unknown id is a no-op. Disabled items are *not* rejected here: the
    /// store stays permissive and disabled items are only marked visually.
    pub fn toggle_selection(&mut self, id: ItemId) -> &[Item] {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            tracing::trace!(%id, "toggle target not in store, ignoring");
            return &self.items;
        };

        let target = &self.items[index];
        if target.is_disabled() {
            tracing::debug!(value = target.value(), "toggling a disabled item");
        }

        if target.selected {
            self.items[index].selected = false;
        } else if self.multiple {
            self.items[index].selected = true;
        } else {
            for (i, item) in self.items.iter_mut().enumerate() {
                item.selected = i == index;
            }
        }

        &self.items
    }

    /// Toggle the first item with the given value (no-op when absent)
    pub fn toggle_by_value(&mut self, value: &str) -> &[Item] {
        match self.find_by_value(value).map(Item::id) {
            Some(id) => self.toggle_selection(id),
            None => {
                tracing::trace!(value, "toggle value not in store, ignoring");
                &self.items
            }
        }
    }

    /// Recompute visibility against a filter term
    ///
    /// `None` or an empty term shows every item; otherwise an item is visible
    /// when its label contains the term, ignoring case.
    pub fn filter(&mut self, term: Option<&str>) -> &[Item] {
        let term = term.unwrap_or_default();
        for item in &mut self.items {
            item.visible = item.matches(term);
        }
        &self.items
    }

    /// Show every item and clear every selection
    pub fn reset(&mut self) -> &[Item] {
        for item in &mut self.items {
            item.visible = true;
            item.selected = false;
        }
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceOption;

    fn store(items: &[(&str, &str, bool)], multiple: bool) -> ItemStore {
        ItemStore::initialize(
            items
                .iter()
                .map(|(value, text, selected)| {
                    ItemDescriptor::new(*value, *text).selected(*selected)
                }),
            multiple,
        )
    }

    fn id_of(store: &ItemStore, value: &str) -> ItemId {
        store.find_by_value(value).unwrap().id()
    }

    fn selection(store: &ItemStore) -> Vec<String> {
        store.selected().iter().map(|item| item.value().to_string()).collect()
    }

    #[test]
    fn test_initialize_preserves_order_and_defaults() {
        let store = ItemStore::initialize(
            vec![
                ItemDescriptor::new("b", "B"),
                ItemDescriptor::default(),
                ItemDescriptor::new("a", "A").disabled(true),
            ],
            false,
        );
        let values: Vec<_> = store.items().iter().map(Item::value).collect();
        assert_eq!(values, vec!["b", "", "a"]);
        assert!(store.items().iter().all(Item::is_visible));
        assert!(store.items()[2].is_disabled());
    }

    #[test]
    fn test_initialize_single_mode_keeps_first_selection() {
        let store = store(&[("a", "A", true), ("b", "B", true)], false);
        assert_eq!(selection(&store), vec!["a"]);

        let store = super::tests::store(&[("a", "A", true), ("b", "B", true)], true);
        assert_eq!(selection(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_import_skips_placeholders() {
        let source = SelectSource::new()
            .option(SourceOption::new("", "Choose"))
            .option(SourceOption::new("a", "A"))
            .option(SourceOption::new("0", "Zero-ish"));

        let store = ItemStore::import(&source, false);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].value(), "a");
    }

    #[test]
    fn test_single_mode_click_again_clears() {
        let mut store = store(&[("a", "A", false), ("b", "B", true)], false);
        let b = id_of(&store, "b");

        let items = store.toggle_selection(b);
        assert!(items.iter().all(|item| !item.is_selected()));
        assert!(store.selected().is_empty());
    }

    #[test]
    fn test_single_mode_select() {
        let mut store = store(&[("a", "A", false), ("b", "B", false)], false);
        let a = id_of(&store, "a");

        store.toggle_selection(a);
        assert_eq!(selection(&store), vec!["a"]);
    }

    #[test]
    fn test_single_mode_exclusive() {
        let mut store = store(&[("a", "A", true), ("b", "B", false)], false);
        let b = id_of(&store, "b");

        store.toggle_selection(b);
        assert_eq!(selection(&store), vec!["b"]);
    }

    #[test]
    fn test_multiple_mode_accumulates() {
        let mut store = store(&[("a", "A", false), ("b", "B", true)], true);
        let a = id_of(&store, "a");

        store.toggle_selection(a);
        assert_eq!(selection(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_single_mode_at_most_one_selected() {
        let mut store = store(
            &[("a", "A", false), ("b", "B", false), ("c", "C", false), ("d", "D", false)],
            false,
        );
        let ids: Vec<_> = store.items().iter().map(Item::id).collect();

        // Deterministic pseudo-random walk over toggles
        let mut seed = 17usize;
        for _ in 0..200 {
            seed = (seed * 31 + 7) % 1009;
            store.toggle_selection(ids[seed % ids.len()]);
            assert!(store.selected().len() <= 1);
        }
    }

    #[test]
    fn test_multiple_mode_toggle_is_involution() {
        let mut store = store(&[("a", "A", false), ("b", "B", true), ("c", "C", false)], true);

        for value in ["a", "b", "c"] {
            let before = selection(&store);
            let id = id_of(&store, value);
            store.toggle_selection(id);
            assert_ne!(selection(&store), before);
            store.toggle_selection(id);
            assert_eq!(selection(&store), before);
        }
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut store = store(&[("a", "A", true), ("b", "B", false)], false);
        let stranger = ItemStore::initialize(vec![ItemDescriptor::new("a", "A")], false);
        let foreign_id = stranger.items()[0].id();

        let before: Vec<Item> = store.items().to_vec();
        store.toggle_selection(foreign_id);
        assert_eq!(store.items(), before.as_slice());

        store.toggle_by_value("missing");
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_by_value_uses_first_match() {
        let mut store = store(&[("a", "First", false), ("a", "Second", false)], true);
        store.toggle_by_value("a");
        assert!(store.items()[0].is_selected());
        assert!(!store.items()[1].is_selected());
    }

    #[test]
    fn test_disabled_items_are_toggled() {
        let mut store = ItemStore::initialize(
            vec![ItemDescriptor::new("a", "A").disabled(true)],
            false,
        );
        store.toggle_by_value("a");
        assert!(store.items()[0].is_selected());
    }

    #[test]
    fn test_filter_case_insensitive() {
        let mut store = store(
            &[("1", "Zone", false), ("2", "Foo", false), ("3", "zonal", false)],
            false,
        );
        let visible: Vec<_> = store
            .filter(Some("zo"))
            .iter()
            .map(Item::is_visible)
            .collect();
        assert_eq!(visible, vec![true, false, true]);
    }

    #[test]
    fn test_filter_is_recomputed() {
        let mut fresh = store(&[("1", "Zone", false), ("2", "Foo", false)], false);
        let mut primed = fresh.clone();

        fresh.filter(Some("foo"));
        primed.filter(Some(""));
        primed.filter(Some("zo"));
        primed.filter(None);
        primed.filter(Some("foo"));

        let a: Vec<_> = fresh.items().iter().map(Item::is_visible).collect();
        let b: Vec<_> = primed.items().iter().map(Item::is_visible).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![false, true]);
    }

    #[test]
    fn test_filter_ignores_selection() {
        let mut store = store(&[("1", "Zone", true), ("2", "Foo", false)], false);
        store.filter(Some("foo"));
        assert!(!store.items()[0].is_visible());
        assert!(store.items()[0].is_selected());
    }

    #[test]
    fn test_filter_empty_shows_all() {
        let mut store = store(&[("1", "Zone", false), ("2", "Foo", false)], false);
        store.filter(Some("nothing"));
        assert!(store.items().iter().all(|item| !item.is_visible()));
        store.filter(None);
        assert!(store.items().iter().all(Item::is_visible));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = store(&[("a", "A", true), ("b", "B", true)], true);
        store.filter(Some("a"));

        for _ in 0..2 {
            store.reset();
            assert!(store.selected().is_empty());
            assert!(store.items().iter().all(Item::is_visible));
        }
    }

    #[test]
    fn test_from_json() {
        let store =
            ItemStore::from_json(r#"[{"value": "a", "text": "A"}, {"value": 2}]"#, false).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].value(), "2");
        assert_eq!(store.items()[1].text(), "");

        assert!(ItemStore::from_json("not json", false).is_err());
    }

    #[test]
    fn test_from_json_defaults_malformed_items() {
        let store = ItemStore::from_json(
            r#"[
                {"value": "a", "text": "A", "selected": 1},
                null,
                {"value": "c", "text": "C", "disabled": "true"}
            ]"#,
            true,
        )
        .unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.items()[0].is_selected());
        assert_eq!(store.items()[1].value(), "");
        assert!(!store.items()[1].is_selected());
        assert!(store.items()[2].is_disabled());
    }
}
