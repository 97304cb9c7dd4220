//! Task Repository
//!
//! Ordered in-memory task collection, the single source of truth for the UI,
//! kept in sync with a [`TaskStore`]. Local records change only after the
//! store answers, except for the optimistic status change behind a drop.
//!
//! Requests are plain round-trips. Nothing is coalesced or cancelled, so two
//! overlapping writes to one task land in completion order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::api::TaskStore;
use crate::error::{BoardError, BoardResult};
use crate::models::{Lane, Task};

/// Handle returned by [`TaskRepository::subscribe`]
pub type SubscriptionId = u64;

type Listener = Rc<dyn Fn()>;

struct Inner {
    tasks: RefCell<Vec<Task>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<SubscriptionId>,
}

/// Shared handle; clones see the same collection
#[derive(Clone)]
pub struct TaskRepository {
    store: Rc<dyn TaskStore>,
    inner: Rc<Inner>,
}

impl TaskRepository {
    pub fn new(store: Rc<dyn TaskStore>) -> Self {
        Self {
            store,
            inner: Rc::new(Inner {
                tasks: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                next_subscription: Cell::new(1),
            }),
        }
    }

    // ========================
    // Reads
    // ========================

    /// Copy of the collection in insertion order
    pub fn snapshot(&self) -> Vec<Task> {
        self.inner.tasks.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.inner.tasks.borrow().iter().find(|t| t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.tasks.borrow().is_empty()
    }

    // ========================
    // Change notification
    // ========================

    /// Run `listener` after every local change
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    fn notify(&self) {
        // Listeners may read or subscribe, so no borrow is held while they run
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    // ========================
    // Local patching
    // ========================

    /// Replace the record with the same id, or append
    fn upsert(&self, task: Task) {
        let mut tasks = self.inner.tasks.borrow_mut();
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => tasks.push(task),
        }
    }

    /// Replace the record held under `id`; a miss is a no-op
    ///
    /// When the replacement carries a different id, any other record already
    /// held under that id is dropped so ids stay unique.
    fn replace(&self, id: &str, task: Task) -> bool {
        let mut tasks = self.inner.tasks.borrow_mut();
        let Some(pos) = tasks.iter().position(|t| t.id == id) else {
            debug!("[REPO] Task {} is not held locally, nothing to replace", id);
            return false;
        };

        if task.id != id {
            warn!("[REPO] Store answered task {} as {}", id, task.id);
            let new_id = task.id.clone();
            tasks[pos] = task;
            let mut index = 0;
            tasks.retain(|t| {
                let keep = index == pos || t.id != new_id;
                index += 1;
                keep
            });
        } else {
            tasks[pos] = task;
        }
        true
    }

    // ========================
    // Synchronized operations
    // ========================

    /// Fetch the full task set and merge it into the collection
    ///
    /// Fetched tasks are appended, or replace a held record with the same id.
    /// On failure the collection is left as it was. Returns the number of
    /// tasks fetched.
    pub async fn load(&self) -> BoardResult<usize> {
        let fetched = match self.store.list().await {
            Ok(tasks) => tasks,
            Err(e) => {
                error!("[REPO] Failed to load tasks: {}", e);
                return Err(e.into());
            }
        };

        let count = fetched.len();
        for task in fetched {
            self.upsert(task);
        }
        info!("[REPO] Loaded {} tasks", count);
        self.notify();
        Ok(count)
    }

    /// Store a new task and hold the store's representation of it
    pub async fn create(&self, candidate: &Task) -> BoardResult<Task> {
        let stored = self.store.create(candidate).await.map_err(|e| {
            error!("[REPO] Failed to create task {:?}: {}", candidate.title, e);
            BoardError::from(e)
        })?;

        info!("[REPO] Created task {}", stored.id);
        if self.get(&stored.id).is_some() {
            warn!("[REPO] Created task {} replaces a record already held", stored.id);
        }
        self.upsert(stored.clone());
        self.notify();
        Ok(stored)
    }

    /// Send the full record and replace the held one with the response
    pub async fn update(&self, task: &Task) -> BoardResult<Task> {
        let stored = self.store.update(task).await.map_err(|e| {
            error!("[REPO] Failed to update task {}: {}", task.id, e);
            BoardError::from(e)
        })?;

        debug!("[REPO] Updated task {}", task.id);
        self.replace(&task.id, stored.clone());
        self.notify();
        Ok(stored)
    }

    /// Move a task to `lane`: applied locally first, then sent as an update
    ///
    /// A failed update is not rolled back; listeners are notified either
    /// way. Returns `Ok(None)` when no task has that id.
    pub async fn set_status(&self, id: &str, lane: Lane) -> BoardResult<Option<Task>> {
        let mutated = {
            let mut tasks = self.inner.tasks.borrow_mut();
            match tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.status = lane.label().to_string();
                    task.clone()
                }
                None => {
                    debug!("[REPO] Task {} is not held locally, ignoring move", id);
                    return Ok(None);
                }
            }
        };
        self.notify();

        match self.update(&mutated).await {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                self.notify();
                Err(e)
            }
        }
    }
}
