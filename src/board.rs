//! Board Projection
//!
//! Pure mapping from the task collection to the five lanes, card
//! presentation, and the drop transition. Every render starts from
//! [`project`]; nothing depends on the previous render.

use tracing::{debug, error, info};

use crate::error::BoardResult;
use crate::models::{Lane, Task};
use crate::repository::TaskRepository;

/// One lane and its cards in collection order
#[derive(Debug, Clone, PartialEq)]
pub struct LaneView {
    pub lane: Lane,
    pub tasks: Vec<Task>,
}

/// Group tasks by status into the fixed lane order
///
/// A task whose status is not a lane label lands nowhere.
pub fn project(tasks: &[Task]) -> Vec<LaneView> {
    Lane::ALL
        .into_iter()
        .map(|lane| LaneView {
            lane,
            tasks: tasks
                .iter()
                .filter(|task| task.lane() == Some(lane))
                .cloned()
                .collect(),
        })
        .collect()
}

/// What a card shows
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub indicator_color: &'static str,
    pub class: String,
}

impl CardView {
    pub fn from_task(task: &Task) -> Self {
        let status_class: String = task
            .status
            .split_whitespace()
            .collect::<String>()
            .to_lowercase();
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            assigned_to: task.assigned_to.clone(),
            indicator_color: task.priority_level().indicator_color(),
            class: format!("card mb-3 task-card task-{}", status_class),
        }
    }
}

/// A lane whose content is taller than its box gets marked scrollable
pub fn is_overflowing(scroll_height: i32, client_height: i32) -> bool {
    scroll_height > client_height
}

/// Move the dropped task to `lane` and persist it
///
/// The local status changes before the request; the repository notifies
/// again once the request settles, success or not. Failures are logged
/// here and returned for the caller to ignore.
pub async fn drop_on_lane(
    repo: &TaskRepository,
    task_id: &str,
    lane: Lane,
) -> BoardResult<Option<Task>> {
    debug!("[BOARD] Drop of task {} on {}", task_id, lane.label());
    match repo.set_status(task_id, lane).await {
        Ok(Some(task)) => {
            info!("[BOARD] Task {} moved to {}", task.id, lane.label());
            Ok(Some(task))
        }
        Ok(None) => {
            debug!("[BOARD] Dropped id {} matches no task", task_id);
            Ok(None)
        }
        Err(e) => {
            error!("[BOARD] Failed to persist move of task {}: {}", task_id, e);
            Err(e)
        }
    }
}
