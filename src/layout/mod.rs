pub mod connector;
pub mod engine;
pub mod geometry;
pub mod packing;
pub mod rendered;

pub use connector::{rectangular_path, to_svg_path, PathSegment, DEFAULT_CONNECTOR_OFFSET};
pub use engine::{ChartLayout, GanttChart};
pub use geometry::{bar_span, point_x};
pub use packing::{bars_overlap, pack_into_rows, row_count, PackedBar};
pub use rendered::{
    ProjectSummary, RenderedMilestone, RenderedProject, RenderedSwimlane, RenderedTask,
};
