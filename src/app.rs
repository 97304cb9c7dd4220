//! Kanban Board App
//!
//! Bootstrap: builds the repository, performs the initial load, and lays
//! out the header, the lanes and the task modal.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use crate::api::RestTaskStore;
use crate::components::{BoardColumns, TaskModal};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::repository::TaskRepository;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_build_env();
    info!("[APP] Using task API at {}", config.tasks_url());

    let repo = TaskRepository::new(Rc::new(RestTaskStore::new(&config)));

    // Every repository change bumps the version the views read
    let (version, set_version) = signal(0u32);
    repo.subscribe(move || set_version.update(|v| *v += 1));

    let ctx = AppContext::new(repo, config, (version, set_version));
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| {
        let repo = ctx.repo();
        spawn_local(async move {
            if let Err(e) = repo.load().await {
                error!("[APP] Initial load failed, board stays empty: {}", e);
            }
        });
    });

    view! {
        <div class="board-app">
            <header class="board-header">
                <h1 class="title">"Kanban Board"</h1>
                <button
                    id="new-task-button"
                    class="button is-primary"
                    on:click=move |_| ctx.open_create()
                >
                    "New task"
                </button>
            </header>

            <BoardColumns />

            <TaskModal on_saved=move |_: ()| ctx.refresh() />

            <p class="task-count">
                {move || {
                    let _ = version.get();
                    format!("{} tasks", ctx.repo().len())
                }}
            </p>
        </div>
    }
}
