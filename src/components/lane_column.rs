//! Lane Column Component
//!
//! One status lane: header, cards, and the drop target for its status.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, DndSignals};

use crate::board::is_overflowing;
use crate::components::TaskCard;
use crate::models::{Lane, Task};

#[component]
pub fn LaneColumn(
    lane: Lane,
    /// Cards in this lane, in collection order
    #[prop(into)]
    tasks: Signal<Vec<Task>>,
    dnd: DndSignals<Lane>,
    /// Called with (task id, lane) when a card lands here
    on_drop: Callback<(String, Lane)>,
) -> impl IntoView {
    let content_ref = NodeRef::<leptos::html::Div>::new();
    let (scrollable, set_scrollable) = signal(false);

    // Measure once the new cards are laid out
    Effect::new(move |_| {
        tasks.track();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Some(content) = content_ref.get_untracked() {
                set_scrollable.set(is_overflowing(content.scroll_height(), content.client_height()));
            }
        });
    });

    view! {
        <div
            class=move || {
                let mut c = "column is-one-fifth".to_string();
                if dnd.is_hovered(&lane) { c.push_str(" drag-over"); }
                c
            }
            data-status=lane.label()
            on:dragover=make_on_dragover(dnd, lane)
            on:dragleave=make_on_dragleave(dnd)
            on:drop=make_on_drop(dnd, lane, move |task_id, lane| on_drop.run((task_id, lane)))
        >
            <div class=move || if scrollable.get() { "column scrollable" } else { "column" }>
                <header class="card-header">
                    <p class="card-header-title">{lane.label()}</p>
                </header>
                <div class="card-content" id=format!("column-{}", lane.slug()) node_ref=content_ref>
                    // Cards are rebuilt on every change, no keyed reuse
                    {move || tasks.get().into_iter().map(|task| view! {
                        <TaskCard task=task dnd=dnd />
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
