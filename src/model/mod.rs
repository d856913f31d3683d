pub mod options;
pub mod project;
pub mod state;
pub mod task;

pub use options::{GanttOptions, ParseViewModeError, ViewMode};
pub use project::{Project, Swimlane};
pub use state::ProjectStates;
pub use task::{Milestone, Task};
