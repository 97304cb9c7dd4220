//! Task Editor
//!
//! Modal state machine and form model behind the create/edit dialog:
//! `Closed -> Open(create) | Open(edit) -> Closed`. Opening while open just
//! rebuilds the form.

use tracing::{error, info};

use crate::dates;
use crate::error::{BoardError, BoardResult};
use crate::models::{generate_id, Lane, Priority, Task};
use crate::repository::TaskRepository;

/// Message shown when saving without a title
pub const TITLE_REQUIRED: &str = "Title is required";

pub const NEW_TASK_HEADING: &str = "New task";
pub const EDIT_TASK_HEADING: &str = "Edit task";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
}

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    AssignedTo,
    Priority,
    Status,
    EndDate,
}

/// Raw form values, as the inputs hold them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub priority: String,
    pub status: String,
    /// `yyyy-mm-dd`, as the date input reports it
    pub end_date: String,
    /// Not rendered by the modal; empty unless set by the caller
    pub start_date: Option<String>,
    /// Comma-joined comments; not rendered by the modal
    pub comments: Option<String>,
    /// Hidden id, present only when editing
    pub id: Option<String>,
}

impl TaskForm {
    /// Form for a new task: default lane, first assignee, first priority
    pub fn blank(assignees: &[String]) -> Self {
        Self {
            assigned_to: assignees.first().cloned().unwrap_or_default(),
            priority: Priority::OPTIONS[0].label().to_string(),
            status: Lane::default().label().to_string(),
            ..Default::default()
        }
    }

    /// Form pre-filled from a stored task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            assigned_to: task.assigned_to.clone(),
            priority: task.priority.clone(),
            status: task.status.clone(),
            end_date: dates::to_form(&task.end_date),
            // The modal has no inputs for these, so a save sends them empty
            start_date: None,
            comments: None,
            id: Some(task.id.clone()),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::AssignedTo => &self.assigned_to,
            FormField::Priority => &self.priority,
            FormField::Status => &self.status,
            FormField::EndDate => &self.end_date,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::AssignedTo => self.assigned_to = value,
            FormField::Priority => self.priority = value,
            FormField::Status => self.status = value,
            FormField::EndDate => self.end_date = value,
        }
    }

    /// Hidden id, if it holds anything
    pub fn existing_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn validate(&self) -> BoardResult<()> {
        if self.title.trim().is_empty() {
            return Err(BoardError::Validation(TITLE_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Normalized record to send
    ///
    /// Empty optionals become `""`; comments split on `,`; the end date goes
    /// back to `dd/mm/yyyy`; without a hidden id a fresh one is generated.
    pub fn to_record(&self) -> BoardResult<Task> {
        self.validate()?;

        let comments = match self.comments.as_deref() {
            Some(joined) if !joined.is_empty() => joined.split(',').map(String::from).collect(),
            _ => Vec::new(),
        };
        let end_date = if self.end_date.is_empty() {
            String::new()
        } else {
            dates::to_stored(&self.end_date)
        };

        Ok(Task {
            id: self
                .existing_id()
                .map(String::from)
                .unwrap_or_else(generate_id),
            title: self.title.clone(),
            description: self.description.clone(),
            assigned_to: self.assigned_to.clone(),
            start_date: self.start_date.clone().unwrap_or_default(),
            end_date,
            status: self.status.clone(),
            priority: self.priority.clone(),
            comments,
        })
    }
}

/// Modal state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Open {
        heading: String,
        mode: EditorMode,
        form: TaskForm,
    },
}

impl EditorState {
    pub fn open_create(&mut self, heading: &str, assignees: &[String]) {
        *self = EditorState::Open {
            heading: heading.to_string(),
            mode: EditorMode::Create,
            form: TaskForm::blank(assignees),
        };
    }

    pub fn open_edit(&mut self, heading: &str, task: &Task) {
        *self = EditorState::Open {
            heading: heading.to_string(),
            mode: EditorMode::Edit,
            form: TaskForm::from_task(task),
        };
    }

    /// Hide the modal and discard the form
    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditorState::Open { .. })
    }

    pub fn heading(&self) -> &str {
        match self {
            EditorState::Open { heading, .. } => heading,
            EditorState::Closed => "",
        }
    }

    pub fn mode(&self) -> Option<EditorMode> {
        match self {
            EditorState::Open { mode, .. } => Some(*mode),
            EditorState::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match self {
            EditorState::Open { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        match self {
            EditorState::Open { form, .. } => Some(form),
            EditorState::Closed => None,
        }
    }

    /// A successful save closes the modal; a failed one keeps the input
    pub fn settle(&mut self, result: &BoardResult<Task>) {
        if result.is_ok() {
            self.close();
        }
    }
}

/// Validate the form, then create or update depending on the hidden id
///
/// Nothing is sent when validation fails.
pub async fn save(repo: &TaskRepository, form: &TaskForm) -> BoardResult<Task> {
    let record = form.to_record()?;

    let result = match form.existing_id() {
        Some(_) => repo.update(&record).await,
        None => repo.create(&record).await,
    };

    match &result {
        Ok(task) => info!("[EDITOR] Saved task {}", task.id),
        Err(e) => error!("[EDITOR] Failed to save task: {}", e),
    }
    result
}
