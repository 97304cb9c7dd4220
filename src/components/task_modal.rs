//! Task Modal Component
//!
//! Create/edit dialog over the editor state in `AppContext`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::components::{SelectField, TextField};
use crate::context::use_app_context;
use crate::editor::{self, EditorMode, FormField};
use crate::error::BoardError;
use crate::models::{Lane, Priority};

fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        warn!("[MODAL] Could not show alert: {:?}", e);
    }
}

#[component]
pub fn TaskModal(
    /// Runs after a successful save, once the modal is closed
    #[prop(into)]
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.editor;
    let (saving, set_saving) = signal(false);

    let is_open = move || state.with(|s| s.is_open());
    let close = move || state.update(|s| s.close());

    let save = move || {
        let Some(form) = state.with_untracked(|s| s.form().cloned()) else {
            return;
        };
        let repo = ctx.repo();
        set_saving.set(true);
        spawn_local(async move {
            let result = editor::save(&repo, &form).await;
            set_saving.set(false);
            match &result {
                Ok(_) => {
                    state.update(|s| s.settle(&result));
                    on_saved.run(());
                }
                Err(BoardError::Validation(message)) => alert(message),
                // Logged by editor::save; the form keeps what was typed
                Err(BoardError::Store(_)) => {}
            }
        });
    };

    let priorities: Vec<String> = Priority::OPTIONS.iter().map(|p| p.label().to_string()).collect();
    let statuses: Vec<String> = Lane::ALL.iter().map(|l| l.label().to_string()).collect();

    view! {
        <div
            id="task-modal"
            class=move || if is_open() { "modal is-active" } else { "modal" }
            data-mode=move || match state.with(|s| s.mode()) {
                Some(EditorMode::Create) => "create",
                Some(EditorMode::Edit) => "edit",
                None => "closed",
            }
        >
            <div class="modal-background" on:click=move |_| close()></div>
            <div class="modal-card">
                <header class="modal-card-head">
                    <p id="modal-title" class="modal-card-title">
                        {move || state.with(|s| s.heading().to_string())}
                    </p>
                    <button class="delete" aria-label="close" on:click=move |_| close()></button>
                </header>
                <section class="modal-card-body">
                    <Show when=is_open>
                        <form
                            id="task-form"
                            on:submit=move |ev: web_sys::SubmitEvent| {
                                ev.prevent_default();
                                save();
                            }
                        >
                            <div class="columns is-multiline">
                                <div class="column is-half">
                                    <TextField field=FormField::Title label="Title" />
                                </div>
                                <div class="column is-half">
                                    <TextField field=FormField::Description label="Description" />
                                </div>
                                <div class="column is-half">
                                    <SelectField
                                        field=FormField::AssignedTo
                                        label="Assigned to"
                                        options=ctx.assignees()
                                    />
                                </div>
                                <div class="column is-half">
                                    <SelectField
                                        field=FormField::Priority
                                        label="Priority"
                                        options=priorities.clone()
                                    />
                                </div>
                                <div class="column is-half">
                                    <SelectField field=FormField::Status label="Status" options=statuses.clone() />
                                </div>
                                <div class="column is-half">
                                    <TextField field=FormField::EndDate label="Due date" input_type="date" />
                                </div>
                            </div>
                            {move || state.with(|s| s.form().and_then(|f| f.existing_id().map(String::from))).map(|id| view! {
                                <input type="hidden" name="id" value=id />
                            })}
                        </form>
                    </Show>
                </section>
                <footer class="modal-card-foot">
                    <button
                        id="save-task"
                        class="button is-success"
                        disabled=move || saving.get()
                        on:click=move |_| save()
                    >
                        "Save"
                    </button>
                    <button id="cancel-modal" class="button" on:click=move |_| close()>
                        "Cancel"
                    </button>
                </footer>
            </div>
        </div>
    }
}
