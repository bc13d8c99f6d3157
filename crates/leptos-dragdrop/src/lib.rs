//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos.
//! The dragged payload lives in a signal for the duration of the drag,
//! so drop handlers receive a typed value instead of parsing `DataTransfer`.

use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type written to `DataTransfer` (some browsers refuse to start a drag without data)
const DRAG_DATA_FORMAT: &str = "text/plain";

/// DnD state signals
///
/// `P` is the payload carried by the dragged element,
/// `T` identifies a drop target for hover highlighting.
pub struct DndSignals<P: 'static, T: 'static> {
    /// Payload of the element currently being dragged
    pub dragging: RwSignal<Option<P>>,
    /// Drop target currently under the pointer
    pub hover: RwSignal<Option<T>>,
}

impl<P: 'static, T: 'static> Clone for DndSignals<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static, T: 'static> Copy for DndSignals<P, T> {}

impl<P, T> DndSignals<P, T>
where
    P: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `payload` is the one being dragged (tracked)
    pub fn is_dragging(&self, payload: &P) -> bool {
        self.dragging.with(|d| d.as_ref() == Some(payload))
    }

    /// Whether `target` is hovered by an active drag (tracked)
    pub fn is_hovered(&self, target: &T) -> bool {
        self.hover.with(|h| h.as_ref() == Some(target))
    }
}

pub fn create_dnd_signals<P, T>() -> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    DndSignals {
        dragging: RwSignal::new(None),
        hover: RwSignal::new(None),
    }
}

/// End drag operation
pub fn end_drag<P, T>(dnd: &DndSignals<P, T>)
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging.set(None);
    dnd.hover.set(None);
}

/// Create dragstart handler for a draggable element
/// `label` is written as plain text so the browser has something to carry
pub fn make_on_dragstart<P, T>(
    dnd: DndSignals<P, T>,
    payload: P,
    label: String,
) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // The payload signal below is what drops read; the text is only a courtesy
            if let Err(err) = dt.set_data(DRAG_DATA_FORMAT, &label) {
                tracing::debug!(?err, "DataTransfer.setData failed");
            }
        }
        dnd.dragging.set(Some(payload.clone()));
    }
}

/// Create dragend handler; fires on the source element whether or not a drop happened
pub fn make_on_dragend<P, T>(dnd: DndSignals<P, T>) -> impl Fn(DragEvent) + Copy + 'static
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create dragover handler for a drop target
/// Prevents the default so the browser allows dropping here
pub fn make_on_dragover<P, T>(dnd: DndSignals<P, T>, target: T) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        // Nested targets: the innermost one wins
        ev.stop_propagation();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.hover.with_untracked(|h| h.as_ref() != Some(&target)) {
            dnd.hover.set(Some(target.clone()));
        }
    }
}

/// Create dragleave handler; clears the hover only if it still points at this target
pub fn make_on_dragleave<P, T>(dnd: DndSignals<P, T>, target: T) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.hover.with_untracked(|h| h.as_ref() == Some(&target)) {
            dnd.hover.set(None);
        }
    }
}

/// Create drop handler for a drop target
///
/// Calls `on_drop(payload, target)` when a drag started by [`make_on_dragstart`]
/// lands here. Drops that carry no payload (e.g. files dragged in from outside)
/// are ignored.
pub fn make_on_drop<P, T, F>(dnd: DndSignals<P, T>, target: T, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(P, T) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let payload = dnd.dragging.get_untracked();
        end_drag(&dnd);

        if let Some(payload) = payload {
            on_drop(payload, target.clone());
        }
    }
}
