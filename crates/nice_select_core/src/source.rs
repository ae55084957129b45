//! Native select control model
//!
//! [`SelectSource`] describes the externally-owned control that a nice select
//! enhances: its option records plus the attribute markers that can promote
//! controller settings (`multiple`, `disabled`, `data-searchable`,
//! `data-current`, `data-placeholder`, `tabindex`).
//!
//! Options whose value is empty, the literal `"0"`, or missing are placeholder
//! options. They are never imported as selectable items, but their label may
//! serve as the trigger placeholder.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemDescriptor};

/// Whether an option value marks a placeholder (non-selectable) option
pub fn is_placeholder_value(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some("0"))
}

/// One option-like record of the native control
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceOption {
    pub text: String,
    /// `None` when the option has no value attribute
    pub value: Option<String>,
    pub selected: bool,
    pub disabled: bool,
}

impl SourceOption {
    /// Create an option with value and label
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: Some(value.into()),
            selected: false,
            disabled: false,
        }
    }

    /// Create an option without a value attribute
    pub fn without_value(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Whether this option is a placeholder entry
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_value(self.value.as_deref())
    }

    /// Convert into an item descriptor
    pub fn to_descriptor(&self) -> ItemDescriptor {
        ItemDescriptor {
            text: Some(self.text.clone()),
            value: self.value.clone(),
            selected: Some(self.selected),
            disabled: Some(self.disabled),
            visible: None,
        }
    }
}

impl From<&ItemDescriptor> for SourceOption {
    fn from(descriptor: &ItemDescriptor) -> Self {
        Self {
            text: descriptor.text.clone().unwrap_or_default(),
            value: Some(descriptor.value.clone().unwrap_or_default()),
            selected: descriptor.selected.unwrap_or(false),
            disabled: descriptor.disabled.unwrap_or(false),
        }
    }
}

/// The native control a nice select is built from
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectSource {
    /// Option records in document order
    pub options: Vec<SourceOption>,
    /// `multiple` attribute
    pub multiple: bool,
    /// `disabled` attribute
    pub disabled: bool,
    /// `data-searchable` attribute
    pub searchable: bool,
    /// `data-current` attribute (show the current selection summary)
    pub show_selection: bool,
    /// `data-placeholder` attribute
    pub placeholder: Option<String>,
    /// `tabindex` attribute
    pub tab_index: Option<i32>,
    /// Whether the control is attached to a render host
    pub mounted: bool,
    /// Whether the native control is currently hidden behind the enhanced one
    pub hidden: bool,
}

impl Default for SelectSource {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            multiple: false,
            disabled: false,
            searchable: false,
            show_selection: false,
            placeholder: None,
            tab_index: None,
            mounted: true,
            hidden: false,
        }
    }
}

impl SelectSource {
    /// Create an empty, mounted source
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a hidden source from literal descriptors
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ItemDescriptor>,
        multiple: bool,
    ) -> Self {
        Self {
            options: descriptors.into_iter().map(|d| SourceOption::from(&d)).collect(),
            multiple,
            hidden: true,
            ..Default::default()
        }
    }

    pub fn option(mut self, option: SourceOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SourceOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn show_selection(mut self, show: bool) -> Self {
        self.show_selection = show;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Mark the control as not attached to any render host
    pub fn detached(mut self) -> Self {
        self.mounted = false;
        self
    }

    /// Descriptors for every selectable (non-placeholder) option, in order
    pub fn selectable_descriptors(&self) -> impl Iterator<Item = ItemDescriptor> + '_ {
        self.options
            .iter()
            .filter(|opt| !opt.is_placeholder())
            .map(SourceOption::to_descriptor)
    }

    /// Discover the placeholder label
    ///
    /// The explicit placeholder attribute wins when non-empty. Otherwise the
    /// first option with value `""`, then `"0"`, then without a value is
    /// consulted, and its label is used when non-empty.
    pub fn discover_placeholder(&self) -> Option<String> {
        if let Some(placeholder) = self.placeholder.as_deref().filter(|p| !p.is_empty()) {
            return Some(placeholder.to_string());
        }

        let candidates: [fn(&SourceOption) -> bool; 3] = [
            |opt| opt.value.as_deref() == Some(""),
            |opt| opt.value.as_deref() == Some("0"),
            |opt| opt.value.is_none(),
        ];

        candidates.iter().find_map(|matches| {
            self.options
                .iter()
                .find(|opt| matches(opt))
                .filter(|opt| !opt.text.is_empty())
                .map(|opt| opt.text.clone())
        })
    }

    /// Mirror the store's selection flags onto the selectable options
    ///
    /// `items` must come from importing this source: selectable options and
    /// items are paired by position, so duplicate values stay distinct.
    pub fn write_back(&mut self, items: &[Item]) {
        let selectable = self.options.iter_mut().filter(|opt| !opt.is_placeholder());
        for (option, item) in selectable.zip(items) {
            option.selected = item.is_selected();
        }
    }
}
