//! Task Store Bindings
//!
//! Frontend access to the remote `/api/tasks` resource.

pub mod rest;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Task;

pub use rest::RestTaskStore;

/// Remote task collection: list, create, update (there is no delete)
///
/// Futures are not `Send`; everything runs on the UI thread.
#[async_trait(?Send)]
pub trait TaskStore {
    /// Full task set
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Store a new task; the returned record carries the authoritative id
    async fn create(&self, task: &Task) -> Result<Task, StoreError>;

    /// Replace the task keyed by `task.id` with the full record
    async fn update(&self, task: &Task) -> Result<Task, StoreError>;
}
