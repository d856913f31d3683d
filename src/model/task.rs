use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task bar in the Gantt chart.
///
/// Tasks are immutable inputs owned by the caller; the layout engine never
/// mutates them, it only derives geometry from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Progress from 0 (not started) to 100 (complete).
    pub progress: f32,
    /// Display color for the task bar (any CSS color string).
    pub color: Option<String>,
    /// Ids of tasks or milestones this task depends on.
    pub dependencies: Vec<Uuid>,
    /// Project this task belongs to, when project grouping is enabled.
    pub project_id: Option<Uuid>,
    /// Swim lane this task belongs to, when swim lanes are enabled.
    pub swimlane_id: Option<Uuid>,
    /// Free-form caller data, carried through layout untouched.
    pub metadata: Option<serde_json::Value>,
}

impl Task {
    /// Create a new task with sensible defaults.
    pub fn new(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end,
            progress: 0.0,
            color: None,
            dependencies: Vec::new(),
            project_id: None,
            swimlane_id: None,
            metadata: None,
        }
    }
}

/// A point-in-time marker, rendered as a diamond by the chart layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDateTime,
    /// Display color for the milestone diamond.
    pub color: Option<String>,
    /// Project this milestone belongs to, when project grouping is enabled.
    pub project_id: Option<Uuid>,
    /// Ids of tasks or milestones this milestone depends on.
    pub dependencies: Vec<Uuid>,
    /// Free-form caller data, carried through layout untouched.
    pub metadata: Option<serde_json::Value>,
}

impl Milestone {
    /// Create a new milestone.
    pub fn new(name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            color: None,
            project_id: None,
            dependencies: Vec::new(),
            metadata: None,
        }
    }
}
