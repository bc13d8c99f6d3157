//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Writes go through the pure transitions in `board`, one whole-state swap per gesture.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::AppState;
use crate::models::{DragPayload, DropSlot};

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in the next state; no-op transitions don't notify subscribers
fn store_apply(store: &AppStore, transition: impl FnOnce(&AppState) -> AppState) {
    let next = store.with_untracked(transition);
    if store.with_untracked(|current| *current != next) {
        store.set(next);
    }
}

/// Apply a finished drag; a body drop lands at the end of the container
pub fn store_drop_item(store: &AppStore, payload: DragPayload, slot: DropSlot) {
    let target_index = slot.index.unwrap_or(usize::MAX);
    store_apply(store, |state| {
        state.move_or_reorder(payload.container_id, payload.item_id, slot.container_id, target_index)
    });
}

/// Remove an item from a container by ID
pub fn store_remove_item(store: &AppStore, container_id: u32, item_id: u32) {
    store_apply(store, |state| state.remove_item(container_id, item_id));
}

/// Rename an item in a container by ID
pub fn store_rename_item(store: &AppStore, container_id: u32, item_id: u32, new_name: &str) {
    store_apply(store, |state| state.rename_item(container_id, item_id, new_name));
}

/// Restore the canonical seed and clear the banner
pub fn store_reset(store: &AppStore) {
    store_apply(store, AppState::reset);
}

/// Hide the banner raised by move number `seq`
pub fn store_dismiss_banner(store: &AppStore, seq: u32) {
    store_apply(store, |state| state.dismiss_banner(seq));
}
