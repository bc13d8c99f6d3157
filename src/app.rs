//! List Board Frontend App
//!
//! Main application component: the containers side by side, the banner and the reset button.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{AppState, AppStateStoreFields};
use crate::components::{ContainerColumn, SuccessBanner};
use crate::config::AppConfig;
use crate::context::BoardContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let board = BoardContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(board);

    let container_ids = move || {
        store.containers().with(|cs| cs.iter().map(|c| c.id).collect::<Vec<_>>())
    };

    view! {
        <div class="app">
            <div class="board">
                <For
                    each=container_ids
                    key=|id| *id
                    children=move |id| view! { <ContainerColumn container_id=id /> }
                />
            </div>

            <SuccessBanner />

            <button class="reset-btn" on:click=move |_| board.reset()>"Reset"</button>

            <p class="item-count">{move || format!("{} items", store.with(|state| state.item_count()))}</p>
        </div>
    }
}
