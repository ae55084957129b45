//! Nice Select Core
//!
//! Headless selection state for the nice select dropdown:
//!
//! - **Items**: value/label pairs with `selected`, `disabled` and `visible` flags
//! - **Item Store**: ordered item list with single/multiple selection toggling,
//!   case-insensitive filtering and reset
//! - **Select Source**: model of the native control an enhanced select is
//!   imported from, including the placeholder-option skipping policy
//!
//! Nothing in this crate renders. Render collaborators read immutable
//! snapshots of the store; see the `nice_select` crate for the controller.
//!
//! # Example
//!
//! ```rust
//! use nice_select_core::{ItemStore, SelectSource, SourceOption};
//!
//! let source = SelectSource::new()
//!     .option(SourceOption::new("", "Choose"))
//!     .option(SourceOption::new("a", "A"))
//!     .option(SourceOption::new("0", "Zero-ish"));
//!
//! let store = ItemStore::import(&source, false);
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.items()[0].value(), "a");
//! ```

pub mod error;
pub mod item;
pub mod source;
pub mod store;

pub use error::{CoreError, Result};
pub use item::{Item, ItemDescriptor, ItemId};
pub use source::{is_placeholder_value, SelectSource, SourceOption};
pub use store::ItemStore;
