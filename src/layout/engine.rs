use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{GanttOptions, Milestone, Project, ProjectStates, Swimlane, Task};
use crate::time::calendar::{start_of, start_of_day};
use crate::time::columns::{build_columns, TimeColumn};

use super::geometry::{bar_span, point_x};
use super::packing::{pack_into_rows, row_count, PackedBar};
use super::rendered::{
    ProjectSummary, RenderedMilestone, RenderedProject, RenderedSwimlane, RenderedTask,
};

/// Complete computed geometry for one render pass.
///
/// Recomputing with identical inputs yields bit-identical results; the
/// engine keeps no caches of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartLayout {
    pub chart_start: NaiveDateTime,
    pub chart_end: NaiveDateTime,
    pub columns: Vec<TimeColumn>,
    pub tasks: Vec<RenderedTask>,
    pub milestones: Vec<RenderedMilestone>,
    pub projects: Vec<RenderedProject>,
    pub swimlanes: Vec<RenderedSwimlane>,
    pub chart_width: f32,
    pub chart_height: f32,
}

/// The chart's input snapshot: entity collections plus options.
///
/// All layout is derived on demand by [`GanttChart::layout`]; expand/collapse
/// state lives in a [`ProjectStates`] value passed in by the caller.
#[derive(Debug, Clone, Default)]
pub struct GanttChart {
    pub tasks: Vec<Task>,
    pub milestones: Vec<Milestone>,
    pub projects: Vec<Project>,
    pub swimlanes: Vec<Swimlane>,
    pub options: GanttOptions,
}

impl GanttChart {
    pub fn new(
        tasks: Vec<Task>,
        milestones: Vec<Milestone>,
        projects: Vec<Project>,
        swimlanes: Vec<Swimlane>,
        options: GanttOptions,
    ) -> Self {
        Self { tasks, milestones, projects, swimlanes, options }
    }

    /// First instant on the axis: the view-mode start of the earliest task
    /// start, or today's midnight when there are no tasks.
    pub fn chart_start(&self) -> NaiveDateTime {
        match self.tasks.iter().map(|t| t.start).min() {
            Some(earliest) => start_of(self.options.view_mode, earliest),
            None => start_of_day(chrono::Local::now().naive_local()),
        }
    }

    /// Last instant on the axis: the latest task end, un-normalized, or
    /// today's midnight when there are no tasks.
    pub fn chart_end(&self) -> NaiveDateTime {
        self.tasks
            .iter()
            .map(|t| t.end)
            .max()
            .unwrap_or_else(|| start_of_day(chrono::Local::now().naive_local()))
    }

    /// Compute the full chart geometry for the current inputs and state.
    pub fn layout(&self, states: &ProjectStates) -> ChartLayout {
        let chart_start = self.chart_start();
        let chart_end = self.chart_end();
        let columns = build_columns(
            chart_start,
            chart_end,
            self.options.view_mode,
            self.options.column_width,
        );
        let chart_width = columns.len() as f32 * self.options.column_width;

        let mut pass = LayoutPass {
            chart: self,
            states,
            chart_start,
            cursor: 0.0,
            tasks: Vec::with_capacity(self.tasks.len()),
            milestones: Vec::with_capacity(self.milestones.len()),
            projects: Vec::new(),
            swimlanes: Vec::new(),
        };

        if self.options.enable_project_grouping {
            let known: HashSet<Uuid> = self.projects.iter().map(|p| p.id).collect();
            for project in &self.projects {
                let tasks: Vec<&Task> = self
                    .tasks
                    .iter()
                    .filter(|t| t.project_id == Some(project.id))
                    .collect();
                let milestones: Vec<&Milestone> = self
                    .milestones
                    .iter()
                    .filter(|m| m.project_id == Some(project.id))
                    .collect();
                pass.lay_group(Some(project), &tasks, &milestones);
            }

            // Entities with no project, or a project id nobody declared,
            // land in a trailing headerless group.
            let orphan_tasks: Vec<&Task> = self
                .tasks
                .iter()
                .filter(|t| t.project_id.map_or(true, |id| !known.contains(&id)))
                .collect();
            let orphan_milestones: Vec<&Milestone> = self
                .milestones
                .iter()
                .filter(|m| m.project_id.map_or(true, |id| !known.contains(&id)))
                .collect();
            pass.lay_group(None, &orphan_tasks, &orphan_milestones);
        } else {
            let tasks: Vec<&Task> = self.tasks.iter().collect();
            let milestones: Vec<&Milestone> = self.milestones.iter().collect();
            pass.lay_group(None, &tasks, &milestones);
        }

        ChartLayout {
            chart_start,
            chart_end,
            columns,
            tasks: pass.tasks,
            milestones: pass.milestones,
            projects: pass.projects,
            swimlanes: pass.swimlanes,
            chart_width,
            chart_height: pass.cursor,
        }
    }
}

/// One vertical traversal of the chart. Every display mode is this same
/// walk: an optional header per group, then member rows either sequential
/// or lane-packed.
struct LayoutPass<'a> {
    chart: &'a GanttChart,
    states: &'a ProjectStates,
    chart_start: NaiveDateTime,
    cursor: f32,
    tasks: Vec<RenderedTask>,
    milestones: Vec<RenderedMilestone>,
    projects: Vec<RenderedProject>,
    swimlanes: Vec<RenderedSwimlane>,
}

impl LayoutPass<'_> {
    fn span_of(&self, task: &Task) -> (f32, f32) {
        let options = &self.chart.options;
        bar_span(
            self.chart_start,
            options.view_mode,
            options.column_width,
            task.start,
            task.end,
        )
    }

    fn lay_group(&mut self, project: Option<&Project>, tasks: &[&Task], milestones: &[&Milestone]) {
        let row_step = self.chart.options.row_step();
        let lanes_enabled = self.chart.options.enable_swimlanes;
        let header_height = self.chart.options.project_header_height;
        let show_summary = self.chart.options.show_project_summary;

        let group_y = self.cursor;
        let is_expanded = match project {
            Some(p) => {
                self.cursor += header_height;
                self.states.is_expanded(p.id)
            }
            None => true,
        };
        let content_base = self.cursor;

        if !is_expanded {
            // Collapsed members keep their identity and geometry but no space.
            for task in tasks {
                let (x, width) = self.span_of(task);
                self.tasks.push(RenderedTask {
                    task: (*task).clone(),
                    x,
                    y: content_base,
                    width,
                    is_visible: false,
                    row: None,
                });
            }
        } else if lanes_enabled {
            let declared: Vec<Swimlane> = self.chart.swimlanes.clone();
            for lane in &declared {
                let members: Vec<&Task> = tasks
                    .iter()
                    .copied()
                    .filter(|t| t.swimlane_id == Some(lane.id))
                    .collect();
                self.lay_lane(project, Some(lane), &members);
            }
            // Tasks without a lane pack into a trailing implicit lane.
            let unassigned: Vec<&Task> = tasks
                .iter()
                .copied()
                .filter(|t| t.swimlane_id.is_none())
                .collect();
            self.lay_lane(project, None, &unassigned);
        } else {
            for task in tasks {
                let (x, width) = self.span_of(task);
                self.tasks.push(RenderedTask {
                    task: (*task).clone(),
                    x,
                    y: self.cursor,
                    width,
                    is_visible: true,
                    row: None,
                });
                self.cursor += row_step;
            }
        }

        // Milestones run on their own index sequence from the content base
        // and never advance the cursor.
        let view_mode = self.chart.options.view_mode;
        let column_width = self.chart.options.column_width;
        for (i, milestone) in milestones.iter().enumerate() {
            let x = point_x(self.chart_start, view_mode, column_width, milestone.date);
            let y = if is_expanded {
                content_base + i as f32 * row_step
            } else {
                content_base
            };
            self.milestones.push(RenderedMilestone {
                milestone: (*milestone).clone(),
                x,
                y,
                is_visible: is_expanded,
            });
        }

        if let Some(p) = project {
            let height = if is_expanded {
                self.cursor - group_y
            } else {
                header_height
            };
            let summary = if show_summary { self.summary_of(tasks) } else { None };
            self.projects.push(RenderedProject {
                project: p.clone(),
                is_expanded,
                task_count: tasks.len(),
                y: group_y,
                height,
                summary,
            });
        }
    }

    /// Pack one lane's tasks into rows and stack it at the cursor. Lanes
    /// that own no tasks are omitted entirely.
    fn lay_lane(&mut self, project: Option<&Project>, lane: Option<&Swimlane>, tasks: &[&Task]) {
        if tasks.is_empty() {
            return;
        }
        let row_step = self.chart.options.row_step();
        let padding = self.chart.options.bar_padding;

        let spans: Vec<(&Task, f32, f32)> = tasks.iter().map(|t| {
            let (x, width) = self.span_of(t);
            (*t, x, width)
        }).collect();
        let bars: Vec<PackedBar> = spans
            .iter()
            .map(|(t, x, width)| PackedBar { id: t.id, x: *x, width: *width })
            .collect();
        let rows = pack_into_rows(&bars, padding);
        let lane_rows = row_count(&rows);
        let lane_y = self.cursor;
        let lane_height = lane_rows as f32 * row_step;

        for (task, x, width) in spans {
            let row = rows.get(&task.id).copied().unwrap_or(0);
            self.tasks.push(RenderedTask {
                task: task.clone(),
                x,
                y: lane_y + row as f32 * row_step,
                width,
                is_visible: true,
                row: Some(row),
            });
        }

        if let Some(lane) = lane {
            self.swimlanes.push(RenderedSwimlane {
                swimlane: lane.clone(),
                project_id: project.map(|p| p.id),
                y: lane_y,
                height: lane_height,
                row_count: lane_rows,
            });
        }

        self.cursor += lane_height;
    }

    fn summary_of(&self, tasks: &[&Task]) -> Option<ProjectSummary> {
        let start = tasks.iter().map(|t| t.start).min()?;
        let end = tasks.iter().map(|t| t.end).max()?;
        let options = &self.chart.options;
        let (x, width) = bar_span(
            self.chart_start,
            options.view_mode,
            options.column_width,
            start,
            end,
        );
        Some(ProjectSummary { start, end, x, width })
    }
}
