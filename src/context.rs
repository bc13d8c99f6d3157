//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::board::AppStateStoreFields;
use crate::config::AppConfig;
use crate::models::{DragPayload, DropSlot};
use crate::store::{self, AppStore};

/// DnD signals for board rows and containers
pub type BoardDnd = DndSignals<DragPayload, DropSlot>;

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Board state
    pub store: AppStore,
    /// Active drag and hovered drop slot
    pub dnd: BoardDnd,
    config: StoredValue<AppConfig>,
}

impl BoardContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            dnd: create_dnd_signals(),
            config: StoredValue::new(config),
        }
    }

    /// Whether items in this container get a rename input
    pub fn is_renamable(&self, container_id: u32) -> bool {
        self.config.with_value(|c| c.is_renamable(container_id))
    }

    /// Finish a drag on `slot`
    pub fn drop_item(&self, payload: DragPayload, slot: DropSlot) {
        tracing::info!(
            item_id = payload.item_id,
            from = payload.container_id,
            to = slot.container_id,
            index = ?slot.index,
            "drop"
        );
        let before = self.store.banner_seq().get_untracked();
        store::store_drop_item(&self.store, payload, slot);

        let seq = self.store.banner_seq().get_untracked();
        if seq != before {
            self.schedule_banner_dismiss(seq);
        }
    }

    pub fn remove_item(&self, container_id: u32, item_id: u32) {
        tracing::info!(container_id, item_id, "remove");
        store::store_remove_item(&self.store, container_id, item_id);
    }

    pub fn rename_item(&self, container_id: u32, item_id: u32, new_name: &str) {
        tracing::debug!(container_id, item_id, new_name, "rename");
        store::store_rename_item(&self.store, container_id, item_id, new_name);
    }

    /// Restore the canonical seed
    pub fn reset(&self) {
        tracing::info!("reset");
        store::store_reset(&self.store);
    }

    fn schedule_banner_dismiss(&self, seq: u32) {
        let Some(ms) = self.config.with_value(|c| c.banner_timeout_ms) else {
            return;
        };
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            store::store_dismiss_banner(&store, seq);
        });
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
