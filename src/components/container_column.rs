//! Container Column Component
//!
//! One labeled container: heading, item rows, and a body that accepts drops.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};

use crate::components::ItemRow;
use crate::context::use_board;
use crate::models::DropSlot;

#[component]
pub fn ContainerColumn(container_id: u32) -> impl IntoView {
    let board = use_board();
    let store = board.store;
    let dnd = board.dnd;
    let renamable = board.is_renamable(container_id);

    let name = Memo::new(move |_| {
        store.with(|state| state.container(container_id).map(|c| c.name.clone()).unwrap_or_default())
    });
    // Only ids and order; names are read by each row so renaming doesn't rebuild the list
    let item_ids = Memo::new(move |_| {
        store.with(|state| {
            state
                .container(container_id)
                .map(|c| c.items.iter().map(|item| item.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    // Drops on the body (not on a row) land at the end
    let slot = DropSlot::body(container_id);
    let on_dragover = make_on_dragover(dnd, slot);
    let on_dragleave = make_on_dragleave(dnd, slot);
    let on_drop = make_on_drop(dnd, slot, move |payload, slot| board.drop_item(payload, slot));

    let column_class = move || {
        let mut c = String::from("container");
        if dnd.is_hovered(&slot) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=column_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <h2>{move || name.get()}</h2>
            <Show
                when=move || !item_ids.get().is_empty()
                fallback=|| view! { <p class="placeholder">"Drag items here"</p> }
            >
                <div class="items-container">
                    <For
                        each=move || item_ids.get().into_iter().enumerate()
                        // Index is part of the key so each row's drop slot stays correct after a reorder
                        key=|(index, item_id)| (*index, *item_id)
                        children=move |(index, item_id)| {
                            view! {
                                <ItemRow
                                    container_id=container_id
                                    item_id=item_id
                                    index=index
                                    renamable=renamable
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
