use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A collapsible group of tasks and milestones.
///
/// Expand/collapse state lives outside the project itself, in
/// [`ProjectStates`](super::ProjectStates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Free-form caller data, carried through layout untouched.
    pub metadata: Option<serde_json::Value>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            metadata: None,
        }
    }
}

/// A horizontal lane whose member tasks are packed into rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: Uuid,
    pub name: String,
    /// Display color for the lane background.
    pub color: Option<String>,
    /// Free-form caller data, carried through layout untouched.
    pub metadata: Option<serde_json::Value>,
}

impl Swimlane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: None,
            metadata: None,
        }
    }
}
