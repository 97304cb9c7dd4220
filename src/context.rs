//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use tracing::debug;

use crate::config::BoardConfig;
use crate::editor::{EditorState, EDIT_TASK_HEADING, NEW_TASK_HEADING};
use crate::repository::TaskRepository;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task repository (UI thread only)
    repo: StoredValue<TaskRepository, LocalStorage>,
    config: StoredValue<BoardConfig>,
    /// Bumped on every repository change - read
    pub version: ReadSignal<u32>,
    /// Bumped on every repository change - write
    set_version: WriteSignal<u32>,
    /// Task editor modal state
    pub editor: RwSignal<EditorState>,
}

impl AppContext {
    pub fn new(
        repo: TaskRepository,
        config: BoardConfig,
        version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            repo: StoredValue::new_local(repo),
            config: StoredValue::new(config),
            version: version.0,
            set_version: version.1,
            editor: RwSignal::new(EditorState::default()),
        }
    }

    pub fn repo(&self) -> TaskRepository {
        self.repo.get_value()
    }

    pub fn assignees(&self) -> Vec<String> {
        self.config.with_value(|c| c.assignees.clone())
    }

    /// Force a re-render of everything reading `version`
    pub fn refresh(&self) {
        self.set_version.update(|v| *v += 1);
    }

    /// Open the editor on a blank task
    pub fn open_create(&self) {
        let assignees = self.assignees();
        self.editor.update(|e| e.open_create(NEW_TASK_HEADING, &assignees));
    }

    /// Open the editor on the task currently held under `id`
    pub fn open_edit(&self, id: &str) {
        match self.repo().get(id) {
            Some(task) => self.editor.update(|e| e.open_edit(EDIT_TASK_HEADING, &task)),
            None => debug!("[CTX] Task {} vanished before it could be edited", id),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
