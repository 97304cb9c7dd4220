//! Board Configuration
//!
//! Startup settings: where the task API lives and who can be assigned.
//! Values can be baked in at build time through `KANBAN_API_BASE` and
//! `KANBAN_ASSIGNEES` (comma separated).

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:3000";

const DEFAULT_ASSIGNEES: &[&str] = &["Rodrigo Lujambio", "Michel Sampil", "Jose Abadie"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Origin serving `/api/tasks`, without trailing slash
    pub api_base: String,
    /// Closed roster for the assignee select
    pub assignees: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            assignees: DEFAULT_ASSIGNEES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by build-time environment
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("KANBAN_API_BASE"), option_env!("KANBAN_ASSIGNEES"))
    }

    fn from_overrides(api_base: Option<&str>, assignees: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(list) = assignees {
            let roster: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
            if !roster.is_empty() {
                config.assignees = roster;
            }
        }
        config
    }

    /// `{api_base}/api/tasks`
    pub fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.api_base)
    }
}
