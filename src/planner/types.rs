use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
}

/// One actionable unit within a plan. Tasks are owned by their plan and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Free-form time estimate, e.g. "2 days".
    pub duration: String,
    /// Free-form prerequisite text; names are not checked against other tasks.
    pub dependencies: String,
    /// Accepted verbatim from the model; only absence defaults to "Medium".
    pub priority: String,
    pub deliverables: String,
    pub risks: String,
    pub status: TaskStatus,
}

/// Complete output of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub goal: String,
    pub timeframe: String,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub total_tasks: usize,
    pub estimated_total_time: String,
}

impl Plan {
    pub fn new(goal: &str, timeframe: &str, tasks: Vec<Task>, estimated_total_time: String) -> Self {
        Self {
            id: short_id(),
            goal: goal.to_string(),
            timeframe: timeframe.to_string(),
            total_tasks: tasks.len(),
            tasks,
            created_at: Utc::now(),
            estimated_total_time,
        }
    }
}

/// Loosely-typed task record as produced by the reasoning model. Missing or
/// null fields degrade to defaults during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub dependencies: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub deliverables: Option<String>,
    #[serde(default)]
    pub risks: Option<String>,
}

fn short_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}
