use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Project;

/// Expand/collapse state for project groups.
///
/// Projects start expanded; ids are registered lazily the first time they are
/// observed. Toggling is the only mutation the layout engine reacts to, and
/// each toggle requires a full relayout; there is no incremental update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStates {
    expanded: HashMap<Uuid, bool>,
}

impl ProjectStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register any projects not seen before as expanded.
    pub fn ensure(&mut self, projects: &[Project]) {
        for project in projects {
            self.expanded.entry(project.id).or_insert(true);
        }
    }

    /// Whether a project is currently expanded. Unknown ids read as expanded.
    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.get(&id).copied().unwrap_or(true)
    }

    /// Flip a project's expanded flag, registering unknown ids as expanded first.
    pub fn toggle(&mut self, id: Uuid) {
        let current = self.expanded.get(&id).copied().unwrap_or(true);
        self.expanded.insert(id, !current);
    }
}
