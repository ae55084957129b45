//! Selectable items
//!
//! An [`Item`] is one option of a select control. Items are created from raw
//! [`ItemDescriptor`]s, which may be incomplete: every missing field falls
//! back to a default instead of being rejected.
//!
//! # Example
//!
//! ```rust
//! use nice_select_core::item::{Item, ItemDescriptor};
//!
//! let item = Item::from_descriptor(ItemDescriptor::new("us", "United States").selected(true));
//! assert_eq!(item.value(), "us");
//! assert!(item.is_selected());
//! assert!(item.is_visible());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Deserializer, Serialize};

/// Counter backing [`ItemId`] generation
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Stable per-item identifier
///
/// Ids are allocated from a process-wide monotonic counter, so two items never
/// share an id, even across different stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh id
    pub(crate) fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (for render-side correlation attributes)
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Raw, possibly incomplete item description
///
/// Field defaults: empty `text`/`value`, `selected = false`,
/// `disabled = false`, `visible = true`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ItemDescriptor {
    /// Display label
    #[serde(deserialize_with = "lenient_string")]
    pub text: Option<String>,
    /// Value submitted for the option
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub selected: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub disabled: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub visible: Option<bool>,
}

impl ItemDescriptor {
    /// Create a descriptor with value and label
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Set the initial selected flag
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Parse a JSON array of descriptors
    ///
    /// Only input that is not an array is an error. Elements that are not
    /// objects become default descriptors, and wrong-typed fields are coerced
    /// or dropped.
    pub fn list_from_json(json: &str) -> crate::Result<Vec<ItemDescriptor>> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(values.into_iter().map(Self::from_value).collect())
    }

    /// Decode one descriptor, defaulting anything that does not fit
    pub fn from_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            tracing::trace!(%value, "non-object item descriptor, using defaults");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Accepts strings, numbers and booleans; `null` means absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

/// Truthiness coercion; `null` means absent
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    })
}

/// One selectable option with its flag state
///
/// Flags are only writable by [`ItemStore`](crate::store::ItemStore); everything
/// outside the store sees items through shared references or cloned snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    value: String,
    text: String,
    pub(crate) selected: bool,
    disabled: bool,
    pub(crate) visible: bool,
}

impl Item {
    /// Normalize a descriptor, filling defaults and allocating an id
    pub fn from_descriptor(descriptor: ItemDescriptor) -> Self {
        Self {
            id: ItemId::next(),
            value: descriptor.value.unwrap_or_default(),
            text: descriptor.text.unwrap_or_default(),
            selected: descriptor.selected.unwrap_or(false),
            disabled: descriptor.disabled.unwrap_or(false),
            visible: descriptor.visible.unwrap_or(true),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the item passes the active filter term
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Case-insensitive substring match on the label
    ///
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.text.to_lowercase().contains(&term.to_lowercase())
    }
}
