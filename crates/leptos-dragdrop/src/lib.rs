//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos.
//! The dragged element's id travels in the DataTransfer text channel; every
//! wired target accepts a drop, there is no source/target validation.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DataTransfer format carrying the dragged id
pub const PAYLOAD_FORMAT: &str = "text";

/// DnD state signals
///
/// `T` identifies a drop target (a column, a zone, ...).
pub struct DndSignals<T: Send + Sync + 'static> {
    /// Id of the element currently being dragged
    pub dragging_id: RwSignal<Option<String>>,
    /// Target under the pointer, for hover styling
    pub hover_target: RwSignal<Option<T>>,
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

impl<T: Clone + PartialEq + Send + Sync + 'static> DndSignals<T> {
    /// Whether `target` is the current hover target (tracked)
    pub fn is_hovered(&self, target: &T) -> bool {
        self.hover_target.with(|t| t.as_ref() == Some(target))
    }

    /// Whether `id` is the element being dragged (tracked)
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id.with(|d| d.as_deref() == Some(id))
    }
}

pub fn create_dnd_signals<T: Send + Sync + 'static>() -> DndSignals<T> {
    DndSignals {
        dragging_id: RwSignal::new(None),
        hover_target: RwSignal::new(None),
    }
}

/// End drag operation
pub fn end_drag<T: Send + Sync + 'static>(dnd: &DndSignals<T>) {
    dnd.dragging_id.set(None);
    dnd.hover_target.set(None);
}

/// Trim a raw DataTransfer payload; empty means nothing was carried
pub fn normalize_payload(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Create dragstart handler for a draggable element
/// Writes `id` into the payload channel
pub fn make_on_dragstart<T: Send + Sync + 'static>(
    dnd: DndSignals<T>,
    id: String,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            if let Err(e) = dt.set_data(PAYLOAD_FORMAT, &id) {
                tracing::debug!("[DND] Could not write drag payload for {}: {:?}", id, e);
            }
        }
        dnd.dragging_id.set(Some(id.clone()));
    }
}

/// Create dragend handler, fired on the source whether or not a drop happened
pub fn make_on_dragend<T: Send + Sync + 'static>(
    dnd: DndSignals<T>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// Create dragover handler for a drop target
/// Always suppresses the default so the browser permits the drop
pub fn make_on_dragover<T: Clone + PartialEq + Send + Sync + 'static>(
    dnd: DndSignals<T>,
    target: T,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        let already = dnd
            .hover_target
            .with_untracked(|t| t.as_ref() == Some(&target));
        if !already {
            dnd.hover_target.set(Some(target.clone()));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave<T: Send + Sync + 'static>(
    dnd: DndSignals<T>,
) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.hover_target.set(None);
    }
}

/// Create drop handler for a target
///
/// Reads the id from the payload channel, falling back to the tracked
/// `dragging_id` when the channel is empty. `on_drop` is not called when
/// neither carries an id.
pub fn make_on_drop<T, F>(
    dnd: DndSignals<T>,
    target: T,
    on_drop: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    T: Clone + Send + Sync + 'static,
    F: Fn(String, T) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let carried = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(PAYLOAD_FORMAT).ok())
            .and_then(|raw| normalize_payload(&raw));
        let id = carried.or_else(|| dnd.dragging_id.get_untracked());
        end_drag(&dnd);

        if let Some(id) = id {
            on_drop(id, target.clone());
        }
    }
}
