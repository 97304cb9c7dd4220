//! UI Components
//!
//! Leptos views for the board and the task modal.

mod board_columns;
mod form_fields;
mod lane_column;
mod task_card;
mod task_modal;

pub use board_columns::BoardColumns;
pub use form_fields::{SelectField, TextField};
pub use lane_column::LaneColumn;
pub use task_card::TaskCard;
pub use task_modal::TaskModal;
