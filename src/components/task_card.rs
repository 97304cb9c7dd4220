//! Task Card Component

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DndSignals};

use crate::board::CardView;
use crate::context::use_app_context;
use crate::models::{Lane, Task};

/// Draggable card; click opens the editor on the task as currently held
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals<Lane>) -> impl IntoView {
    let ctx = use_app_context();
    let card = CardView::from_task(&task);
    let id = card.id.clone();

    let is_dragging = {
        let id = id.clone();
        move || dnd.is_dragging(&id)
    };
    let on_click = {
        let id = id.clone();
        move |_| ctx.open_edit(&id)
    };
    let class = card.class.clone();

    view! {
        <div
            class=move || if is_dragging() { format!("{} dragging", class) } else { class.clone() }
            data-task-id=id.clone()
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, id.clone())
            on:dragend=make_on_dragend(dnd)
            on:click=on_click
        >
            <div class="priority-indicator" style=format!("background-color: {};", card.indicator_color)></div>
            <div class="card-content">
                <p class="title is-5">{card.title}</p>
                <p class="description is-7">{card.description}</p>
                <p class="assigned is-6">{card.assigned_to}</p>
            </div>
        </div>
    }
}
