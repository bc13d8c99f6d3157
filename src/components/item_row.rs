//! Item Row Component
//!
//! A draggable item with a remove button and, in renamable containers, a name input.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop};

use crate::context::use_board;
use crate::models::{DragPayload, DropSlot};

#[component]
pub fn ItemRow(
    container_id: u32,
    item_id: u32,
    /// Row position, used as the insert index when something is dropped on this row
    index: usize,
    renamable: bool,
) -> impl IntoView {
    let board = use_board();
    let store = board.store;
    let dnd = board.dnd;

    let name = Memo::new(move |_| {
        store.with(|state| {
            state
                .find_item(container_id, item_id)
                .map(|item| item.name.clone())
                .unwrap_or_default()
        })
    });

    let payload = DragPayload { container_id, item_id };
    let slot = DropSlot::row(container_id, index);

    let on_dragstart = make_on_dragstart(dnd, payload, item_id.to_string());
    let on_dragend = make_on_dragend(dnd);
    let on_dragover = make_on_dragover(dnd, slot);
    let on_dragleave = make_on_dragleave(dnd, slot);
    let on_drop = make_on_drop(dnd, slot, move |payload, slot| board.drop_item(payload, slot));

    let row_class = move || {
        let mut c = String::from("item");
        if dnd.is_dragging(&payload) { c.push_str(" dragging"); }
        if dnd.is_hovered(&slot) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=row_class
            draggable="true"
            data-index=index.to_string()
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <span class="item-name">{move || name.get()}</span>
            <button class="remove-btn" on:click=move |_| board.remove_item(container_id, item_id)>
                "Remove"
            </button>
            {renamable.then(|| view! {
                <input
                    type="text"
                    class="rename-input"
                    prop:value=move || name.get()
                    on:input=move |ev| board.rename_item(container_id, item_id, &event_target_value(&ev))
                />
            })}
        </div>
    }
}
