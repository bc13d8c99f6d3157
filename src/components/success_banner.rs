//! Success Banner Component

use leptos::prelude::*;

use crate::board::AppStateStoreFields;
use crate::store::use_app_store;

/// Reports the outcome of the last move or reorder
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.is_success().get()>
            <div class="success-message">
                <p>{move || store.success_message().get()}</p>
            </div>
        </Show>
    }
}
