//! Render sink seam
//!
//! Render collaborators never hold a live reference into the item store.
//! On every synchronization pass the controller hands each sink an immutable
//! snapshot: the full ordered item list, and the selected subset.

use nice_select_core::Item;

/// A render collaborator that mirrors item and selection state
///
/// Both methods default to no-ops so a sink only implements what it shows.
/// Receiving the same snapshot twice must produce identical output.
pub trait RenderSink {
    /// Receive the ordered item list
    fn sync_items(&mut self, items: &[Item]) {
        let _ = items;
    }

    /// Receive the currently selected items, in store order
    fn sync_selection(&mut self, selected: &[Item]) {
        let _ = selected;
    }
}
