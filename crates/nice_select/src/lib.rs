//! # Nice Select
//!
//! A styleable, searchable, single/multiple choice dropdown that replaces a
//! native select control. This crate is headless: it models the component
//! and its collaborators, and leaves painting to whatever consumes the
//! snapshots it produces.
//!
//! ## Architecture
//!
//! - **Item Store** (`nice_select_core`): canonical item list with selection
//!   toggling, filtering and reset
//! - **Selection Controller**: owns the store, receives [`SelectIntent`]s,
//!   and synchronizes every render collaborator after each change
//! - **Collaborators**: [`DropdownList`] (option rows), [`CurrentSelection`]
//!   (selection summary), [`Searchbox`] (filter input), plus any extra
//!   [`RenderSink`] attached by the host
//! - **Configuration**: [`SelectConfig`] defaults deep-merged with a
//!   caller-supplied [`PartialSelectConfig`]
//!
//! ## Example
//!
//! ```rust
//! use nice_select::prelude::*;
//!
//! let mut select = SelectionController::from_items(
//!     vec![
//!         ItemDescriptor::new("fr", "France"),
//!         ItemDescriptor::new("de", "Germany"),
//!         ItemDescriptor::new("es", "Spain"),
//!     ],
//!     true,
//!     &PartialSelectConfig::new().show_selection(true),
//! )?;
//!
//! select.dispatch(SelectIntent::SelectValue("fr".into()));
//! select.dispatch(SelectIntent::SelectValue("es".into()));
//!
//! let summary = select.current_selection().unwrap().summary();
//! assert_eq!(
//!     summary,
//!     &SelectionSummary::Items(vec!["France".into(), "Spain".into()])
//! );
//! # Ok::<(), nice_select::SelectError>(())
//! ```

pub mod config;
pub mod controller;
pub mod current_selection;
pub mod dropdown;
pub mod error;
pub mod intent;
pub mod overlay;
pub mod searchbox;
pub mod sink;


pub use config::{
    DropdownConfig, PartialDropdownConfig, PartialSearchConfig, PartialSelectConfig,
    PartialSelectionConfig, SearchConfig, SelectConfig, SelectionConfig,
};
pub use controller::SelectionController;
pub use current_selection::{CurrentSelection, SelectionSummary};
pub use dropdown::{DropdownList, ItemView};
pub use error::{Result, SelectError};
pub use intent::{ClickTarget, SelectIntent};
pub use overlay::{overlay_events, OverlayState};
pub use searchbox::Searchbox;
pub use sink::RenderSink;

pub use nice_select_core::{Item, ItemDescriptor, ItemId, ItemStore, SelectSource, SourceOption};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{PartialSelectConfig, SelectConfig};
    pub use crate::controller::SelectionController;
    pub use crate::current_selection::SelectionSummary;
    pub use crate::intent::{ClickTarget, SelectIntent};
    pub use crate::sink::RenderSink;
    pub use nice_select_core::{Item, ItemDescriptor, ItemId, SelectSource, SourceOption};
}
