//! Board Columns Component
//!
//! The five lanes, rebuilt from the repository on every change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::create_dnd_signals;

use crate::board::{drop_on_lane, project};
use crate::components::LaneColumn;
use crate::context::use_app_context;
use crate::models::Lane;

#[component]
pub fn BoardColumns() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals::<Lane>();

    let lanes = Memo::new(move |_| {
        let _ = ctx.version.get();
        project(&ctx.repo().snapshot())
    });

    // Errors are logged by drop_on_lane; the lanes show the local state either way
    let on_drop = Callback::new(move |(task_id, lane): (String, Lane)| {
        let repo = ctx.repo();
        spawn_local(async move {
            let _ = drop_on_lane(&repo, &task_id, lane).await;
        });
    });

    view! {
        <div id="task-columns" class="columns">
            {Lane::ALL.into_iter().map(|lane| {
                let tasks = Signal::derive(move || {
                    lanes.with(|views| {
                        views
                            .iter()
                            .find(|view| view.lane == lane)
                            .map(|view| view.tasks.clone())
                            .unwrap_or_default()
                    })
                });
                view! { <LaneColumn lane=lane tasks=tasks dnd=dnd on_drop=on_drop /> }
            }).collect_view()}
        </div>
    }
}
