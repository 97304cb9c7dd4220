//! Test Support
//!
//! In-memory `TaskStore` that records every call.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::TaskStore;
use crate::error::StoreError;
use crate::models::Task;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(Task),
    Update(Task),
}

/// Serves `remote` for list, echoes writes back
#[derive(Default)]
pub struct FakeTaskStore {
    remote: RefCell<Vec<Task>>,
    calls: RefCell<Vec<StoreCall>>,
    failure: RefCell<Option<StoreError>>,
    id_prefix: Option<String>,
    next_id: Cell<u32>,
}

impl FakeTaskStore {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            remote: RefCell::new(tasks),
            ..Default::default()
        }
    }

    /// Replace ids on create with `{prefix}{n}`, n counting from 1
    pub fn assigning_ids(mut self, prefix: &str) -> Self {
        self.id_prefix = Some(prefix.to_string());
        self
    }

    /// Fail every following call with `err`
    pub fn fail_with(&self, err: StoreError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, StoreCall::Create(_)))
            .count()
    }

    pub fn update_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, StoreCall::Update(_)))
            .count()
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TaskStore for FakeTaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.record(StoreCall::List)?;
        Ok(self.remote.borrow().clone())
    }

    async fn create(&self, task: &Task) -> Result<Task, StoreError> {
        self.record(StoreCall::Create(task.clone()))?;
        let mut stored = task.clone();
        if let Some(prefix) = &self.id_prefix {
            let n = self.next_id.get() + 1;
            self.next_id.set(n);
            stored.id = format!("{prefix}{n}");
        }
        self.remote.borrow_mut().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> Result<Task, StoreError> {
        self.record(StoreCall::Update(task.clone()))?;
        let mut remote = self.remote.borrow_mut();
        match remote.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task.clone(),
            None => remote.push(task.clone()),
        }
        Ok(task.clone())
    }
}

/// Task with the given id, title and status; priority High, assignee A
pub fn task(id: &str, title: &str, status: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        priority: "High".to_string(),
        assigned_to: "A".to_string(),
        ..Default::default()
    }
}
