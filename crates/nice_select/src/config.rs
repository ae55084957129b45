//! Nice select configuration
//!
//! [`SelectConfig`] is the fully resolved configuration a controller runs
//! with. Callers describe only what they want to change with a
//! [`PartialSelectConfig`], whose fields are optional at every nesting level.
//!
//! Merging is total and deep: a value set in the overriding partial wins at
//! its own depth, and everything it leaves unset is kept.
//!
//! Partials deserialize from TOML or JSON using the widget's camelCase
//! option names (`showSelection`, `search.minChars`, ...):
//!
//! ```toml
//! searchable = true
//! placeholder = "Pick a country"
//!
//! [search]
//! minChars = 2
//!
//! [selection]
//! showCount = true
//! minShowCount = 5
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Placeholder token replaced by the selection count
pub const COUNT_TOKEN: &str = "{count}";

// =============================================================================
// Resolved configuration
// =============================================================================

/// Fully resolved select configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectConfig {
    pub disabled: bool,
    pub multiple: bool,
    pub searchable: bool,
    /// Show the current-selection summary
    pub show_selection: bool,
    /// Trigger label
    pub placeholder: String,
    /// Searchbox input placeholder
    pub search_placeholder: String,
    pub dropdown: DropdownConfig,
    pub search: SearchConfig,
    pub selection: SelectionConfig,
}

/// Class names used by the dropdown list view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownConfig {
    pub class_name: String,
    pub selected_class_name: String,
    pub disabled_class_name: String,
}

/// Searchbox settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    pub class_name: String,
    /// Minimum number of characters before a term is emitted
    pub min_chars: usize,
}

/// Current-selection summary settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    pub class_name: String,
    pub no_selection_message: String,
    /// Count message; the first `{count}` is substituted
    pub selection_count_message: String,
    pub show_count: bool,
    /// Count is shown only above this many selected items
    pub min_show_count: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            multiple: false,
            searchable: false,
            show_selection: false,
            placeholder: "Choose".to_string(),
            search_placeholder: "Search".to_string(),
            dropdown: DropdownConfig::default(),
            search: SearchConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            class_name: "dropdown".to_string(),
            selected_class_name: "selected".to_string(),
            disabled_class_name: "disabled".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            class_name: "searchbox".to_string(),
            min_chars: 3,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            class_name: "current".to_string(),
            no_selection_message: "Choose below ...".to_string(),
            selection_count_message: format!("{COUNT_TOKEN} items selected"),
            show_count: false,
            min_show_count: 3,
        }
    }
}

impl SelectConfig {
    /// Resolve a partial configuration over this one
    pub fn extend(&self, overrides: &PartialSelectConfig) -> SelectConfig {
        let dropdown = overrides.dropdown.clone().unwrap_or_default();
        let search = overrides.search.clone().unwrap_or_default();
        let selection = overrides.selection.clone().unwrap_or_default();

        SelectConfig {
            disabled: overrides.disabled.unwrap_or(self.disabled),
            multiple: overrides.multiple.unwrap_or(self.multiple),
            searchable: overrides.searchable.unwrap_or(self.searchable),
            show_selection: overrides.show_selection.unwrap_or(self.show_selection),
            placeholder: overrides
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
            search_placeholder: overrides
                .search_placeholder
                .clone()
                .unwrap_or_else(|| self.search_placeholder.clone()),
            dropdown: DropdownConfig {
                class_name: dropdown
                    .class_name
                    .unwrap_or_else(|| self.dropdown.class_name.clone()),
                selected_class_name: dropdown
                    .selected_class_name
                    .unwrap_or_else(|| self.dropdown.selected_class_name.clone()),
                disabled_class_name: dropdown
                    .disabled_class_name
                    .unwrap_or_else(|| self.dropdown.disabled_class_name.clone()),
            },
            search: SearchConfig {
                class_name: search
                    .class_name
                    .unwrap_or_else(|| self.search.class_name.clone()),
                min_chars: search.min_chars.unwrap_or(self.search.min_chars),
            },
            selection: SelectionConfig {
                class_name: selection
                    .class_name
                    .unwrap_or_else(|| self.selection.class_name.clone()),
                no_selection_message: selection
                    .no_selection_message
                    .unwrap_or_else(|| self.selection.no_selection_message.clone()),
                selection_count_message: selection
                    .selection_count_message
                    .unwrap_or_else(|| self.selection.selection_count_message.clone()),
                show_count: selection.show_count.unwrap_or(self.selection.show_count),
                min_show_count: selection
                    .min_show_count
                    .unwrap_or(self.selection.min_show_count),
            },
        }
    }
}

// =============================================================================
// Partial configuration
// =============================================================================

/// Caller-supplied configuration; unset fields keep their defaults
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSelectConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_selection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<PartialDropdownConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<PartialSearchConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<PartialSelectionConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialDropdownConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_class_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_chars: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialSelectionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_selection_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_count_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_show_count: Option<usize>,
}

/// Merge two optional nested partials
fn merge_nested<T: Clone>(
    base: &Option<T>,
    other: &Option<T>,
    merge: fn(&T, &T) -> T,
) -> Option<T> {
    match (base, other) {
        (Some(base), Some(other)) => Some(merge(base, other)),
        (None, Some(other)) => Some(other.clone()),
        (base, None) => base.clone(),
    }
}

impl PartialSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a partial configuration from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a partial configuration from JSON
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Merge another partial on top of this one
    ///
    /// Fields set in `other` override fields in `self` at every depth. Unset
    /// fields in `other` do not override.
    pub fn merge(&self, other: &PartialSelectConfig) -> PartialSelectConfig {
        PartialSelectConfig {
            disabled: other.disabled.or(self.disabled),
            multiple: other.multiple.or(self.multiple),
            searchable: other.searchable.or(self.searchable),
            show_selection: other.show_selection.or(self.show_selection),
            placeholder: other.placeholder.clone().or_else(|| self.placeholder.clone()),
            search_placeholder: other
                .search_placeholder
                .clone()
                .or_else(|| self.search_placeholder.clone()),
            dropdown: merge_nested(&self.dropdown, &other.dropdown, PartialDropdownConfig::merge),
            search: merge_nested(&self.search, &other.search, PartialSearchConfig::merge),
            selection: merge_nested(
                &self.selection,
                &other.selection,
                PartialSelectionConfig::merge,
            ),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = Some(searchable);
        self
    }

    pub fn show_selection(mut self, show: bool) -> Self {
        self.show_selection = Some(show);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    /// Set the searchbox minimum character threshold
    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.search.get_or_insert_with(Default::default).min_chars = Some(min_chars);
        self
    }

    /// Show a count message once more than `min_show_count` items are selected
    pub fn show_count(mut self, min_show_count: usize) -> Self {
        let selection = self.selection.get_or_insert_with(Default::default);
        selection.show_count = Some(true);
        selection.min_show_count = Some(min_show_count);
        self
    }

    pub fn no_selection_message(mut self, message: impl Into<String>) -> Self {
        self.selection
            .get_or_insert_with(Default::default)
            .no_selection_message = Some(message.into());
        self
    }
}

impl PartialDropdownConfig {
    pub fn merge(&self, other: &PartialDropdownConfig) -> PartialDropdownConfig {
        PartialDropdownConfig {
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
            selected_class_name: other
                .selected_class_name
                .clone()
                .or_else(|| self.selected_class_name.clone()),
            disabled_class_name: other
                .disabled_class_name
                .clone()
                .or_else(|| self.disabled_class_name.clone()),
        }
    }
}

impl PartialSearchConfig {
    pub fn merge(&self, other: &PartialSearchConfig) -> PartialSearchConfig {
        PartialSearchConfig {
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
            min_chars: other.min_chars.or(self.min_chars),
        }
    }
}

impl PartialSelectionConfig {
    pub fn merge(&self, other: &PartialSelectionConfig) -> PartialSelectionConfig {
        PartialSelectionConfig {
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
            no_selection_message: other
                .no_selection_message
                .clone()
                .or_else(|| self.no_selection_message.clone()),
            selection_count_message: other
                .selection_count_message
                .clone()
                .or_else(|| self.selection_count_message.clone()),
            show_count: other.show_count.or(self.show_count),
            min_show_count: other.min_show_count.or(self.min_show_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.placeholder, "Choose");
        assert_eq!(config.search_placeholder, "Search");
        assert_eq!(config.dropdown.selected_class_name, "selected");
        assert_eq!(config.search.min_chars, 3);
        assert_eq!(config.selection.selection_count_message, "{count} items selected");
        assert_eq!(config.selection.min_show_count, 3);
    }

    #[test]
    fn test_extend_empty_is_identity() {
        let config = SelectConfig::default();
        assert_eq!(config.extend(&PartialSelectConfig::default()), config);
    }

    #[test]
    fn test_extend_overrides_at_depth() {
        let partial = PartialSelectConfig::new().searchable(true).min_chars(1);
        let config = SelectConfig::default().extend(&partial);

        assert!(config.searchable);
        assert_eq!(config.search.min_chars, 1);
        // Sibling at the same depth keeps its default
        assert_eq!(config.search.class_name, "searchbox");
        assert_eq!(config.selection, SelectionConfig::default());
    }

    #[test]
    fn test_partial_merge() {
        let base = PartialSelectConfig::new()
            .placeholder("Base")
            .show_count(4)
            .no_selection_message("Nothing yet");
        let overlay = PartialSelectConfig::new().show_count(10).multiple(true);

        let merged = base.merge(&overlay);
        assert_eq!(merged.placeholder.as_deref(), Some("Base"));
        assert_eq!(merged.multiple, Some(true));

        let selection = merged.selection.unwrap();
        assert_eq!(selection.min_show_count, Some(10));
        assert_eq!(selection.show_count, Some(true));
        assert_eq!(selection.no_selection_message.as_deref(), Some("Nothing yet"));
    }

    #[test]
    fn test_partial_merge_keeps_base_when_other_unset() {
        let base = PartialSelectConfig::new().min_chars(2);
        let merged = base.merge(&PartialSelectConfig::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_from_toml() {
        let partial = PartialSelectConfig::from_toml(
            r#"
            searchable = true
            searchPlaceholder = "Filter..."

            [dropdown]
            selectedClassName = "is-active"

            [selection]
            showCount = true
            minShowCount = 5
            "#,
        )
        .unwrap();

        let config = SelectConfig::default().extend(&partial);
        assert!(config.searchable);
        assert_eq!(config.search_placeholder, "Filter...");
        assert_eq!(config.dropdown.selected_class_name, "is-active");
        assert_eq!(config.dropdown.class_name, "dropdown");
        assert!(config.selection.show_count);
        assert_eq!(config.selection.min_show_count, 5);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"multiple": true, "search": {"minChars": 0}}"#;
        let partial = PartialSelectConfig::from_json(json).unwrap();
        let config = SelectConfig::default().extend(&partial);
        assert!(config.multiple);
        assert_eq!(config.search.min_chars, 0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(PartialSelectConfig::from_toml("searchable = \"yes\"").is_err());
        assert!(PartialSelectConfig::from_json("[1, 2]").is_err());
    }
}
