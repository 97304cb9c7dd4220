//! Frontend Models
//!
//! Task record as exchanged with `/api/tasks`, plus the fixed lane and
//! priority vocabularies.

use serde::{Deserialize, Deserializer, Serialize};

/// Task data structure (matches the REST resource)
///
/// Every field is always serialized; absent or `null` fields decode to
/// empty values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(deserialize_with = "string_or_null")]
    pub assigned_to: String,
    /// `dd/mm/yyyy`
    #[serde(deserialize_with = "string_or_null")]
    pub start_date: String,
    /// `dd/mm/yyyy`
    #[serde(deserialize_with = "string_or_null")]
    pub end_date: String,
    /// Lane label; kept raw so unknown values still load
    #[serde(deserialize_with = "string_or_null")]
    pub status: String,
    /// Raw priority, see [`Priority::classify`]
    #[serde(deserialize_with = "string_or_null")]
    pub priority: String,
    #[serde(deserialize_with = "comments_or_null")]
    pub comments: Vec<String>,
}

impl Task {
    /// Empty task in the default lane
    pub fn blank() -> Self {
        Self {
            status: Lane::default().label().to_string(),
            ..Default::default()
        }
    }

    /// Lane this task belongs to, if its status is one of the five labels
    pub fn lane(&self) -> Option<Lane> {
        Lane::from_label(&self.status)
    }

    pub fn priority_level(&self) -> Priority {
        Priority::classify(&self.priority)
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn comments_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Board lane, one per status value, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lane {
    #[default]
    Backlog,
    ToDo,
    InProgress,
    Blocked,
    Done,
}

impl Lane {
    pub const ALL: [Lane; 5] = [
        Lane::Backlog,
        Lane::ToDo,
        Lane::InProgress,
        Lane::Blocked,
        Lane::Done,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Lane::Backlog => "Backlog",
            Lane::ToDo => "To Do",
            Lane::InProgress => "In Progress",
            Lane::Blocked => "Blocked",
            Lane::Done => "Done",
        }
    }

    /// Exact label match
    pub fn from_label(label: &str) -> Option<Self> {
        Lane::ALL.into_iter().find(|lane| lane.label() == label)
    }

    /// Label without whitespace (`ToDo`), for element ids and classes
    pub fn slug(&self) -> String {
        self.label().split_whitespace().collect()
    }
}

/// Priority level behind a card's indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    /// Unset or unrecognized
    Unknown,
}

impl Priority {
    /// Selectable levels, in form order
    pub const OPTIONS: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Case-insensitive lookup over the English and Spanish spellings
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "high" | "alta" => Priority::High,
            "medium" | "media" => Priority::Medium,
            "low" | "baja" => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unknown => "",
        }
    }

    pub fn indicator_color(&self) -> &'static str {
        match self {
            Priority::High => "red",
            Priority::Medium => "#e4be00",
            Priority::Low => "green",
            Priority::Unknown => "gray",
        }
    }
}

/// Client-side id for a task that has not been stored yet
///
/// Millisecond Unix timestamp; the store may replace it.
pub fn generate_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lane_order_is_fixed() {
        let labels: Vec<_> = Lane::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, ["Backlog", "To Do", "In Progress", "Blocked", "Done"]);
    }

    #[test]
    fn test_lane_from_label_is_exact() {
        assert_eq!(Lane::from_label("In Progress"), Some(Lane::InProgress));
        assert_eq!(Lane::from_label("in progress"), None);
        assert_eq!(Lane::from_label("Archived"), None);
        assert_eq!(Lane::ToDo.slug(), "ToDo");
    }

    #[test]
    fn test_priority_aliases_share_a_color() {
        for (primary, alternate) in [("High", "Alta"), ("medium", "MEDIA"), ("LOW", "baja")] {
            assert_eq!(Priority::classify(primary), Priority::classify(alternate));
        }
        assert_eq!(Priority::classify("hIgH").indicator_color(), "red");
        assert_eq!(Priority::classify("Media").indicator_color(), "#e4be00");
        assert_eq!(Priority::classify("Baja").indicator_color(), "green");
    }

    #[test]
    fn test_priority_unknown_is_gray() {
        assert_eq!(Priority::classify(""), Priority::Unknown);
        assert_eq!(Priority::classify("urgent!!").indicator_color(), "gray");
    }

    #[test]
    fn test_task_serializes_every_field() {
        let value = serde_json::to_value(Task::blank()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "",
                "title": "",
                "description": "",
                "assignedTo": "",
                "startDate": "",
                "endDate": "",
                "status": "Backlog",
                "priority": "",
                "comments": []
            })
        );
    }

    #[test]
    fn test_task_deserializes_leniently() {
        let task: Task = serde_json::from_value(json!({
            "id": 17,
            "title": "Fix bug",
            "description": null,
            "status": "To Do"
        }))
        .unwrap();

        assert_eq!(task.id, "17");
        assert_eq!(task.title, "Fix bug");
        assert_eq!(task.description, "");
        assert_eq!(task.comments, Vec::<String>::new());
        assert_eq!(task.lane(), Some(Lane::ToDo));
    }

    #[test]
    fn test_generate_id_is_numeric() {
        let id = generate_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }
}
