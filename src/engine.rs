//! Schedule computation engine.
//!
//! Ties the pipeline together: select a template for the project type,
//! scale its durations for the floor area, order activities
//! topologically, propagate dates, and extract the critical path.
//!
//! # Pipeline
//!
//! 1. Look up the template for the project type.
//! 2. Validate the floor area and build a [`DurationScaler`].
//! 3. Reject structural defects in the template.
//! 4. Build the dependency graph; apply the dangling-reference policy.
//! 5. Topologically order the activities (cycles abort here).
//! 6. Propagate start and finish dates forward.
//! 7. Mark the critical path and assemble the schedule.

use chrono::{Local, NaiveDate};

use crate::critical_path::critical_path;
use crate::error::ScheduleError;
use crate::graph::ActivityGraph;
use crate::models::{ComputedSchedule, ProjectType, ScheduleTemplate, ScheduledActivity};
use crate::propagate::{propagate, DurationUnit};
use crate::scaling::DurationScaler;
use crate::templates::TemplateLibrary;
use crate::validation::{self, DanglingPolicy, TemplateIssue};

/// Input for one schedule computation.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Which template to schedule.
    pub project_type: ProjectType,
    /// Floor area in square metres, used for duration scaling.
    pub area_sqm: f64,
    /// Project start date. Today when not set.
    pub start_date: Option<NaiveDate>,
}

impl ScheduleRequest {
    /// Creates a request starting today.
    pub fn new(project_type: ProjectType, area_sqm: f64) -> Self {
        Self {
            project_type,
            area_sqm,
            start_date: None,
        }
    }

    /// Creates a request from a project-type label.
    ///
    /// Labels parse leniently via [`ProjectType::from_label`].
    pub fn for_label(label: &str, area_sqm: f64) -> Self {
        Self::new(ProjectType::from_label(label), area_sqm)
    }

    /// Sets an explicit start date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

/// Computes project schedules from templates.
///
/// The engine owns its configuration: a template library, the
/// calendar meaning of a week of duration, and the policy for
/// dangling dependency references. Every computation is a pure
/// function of the request and that configuration.
///
/// # Example
///
/// ```
/// use buildsched::engine::{ScheduleEngine, ScheduleRequest};
/// use buildsched::models::ProjectType;
/// use chrono::NaiveDate;
///
/// let engine = ScheduleEngine::new();
/// let request = ScheduleRequest::new(ProjectType::NewBuild, 120.0)
///     .with_start_date(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
///
/// let schedule = engine.compute(&request).unwrap();
/// assert_eq!(schedule.entries.len(), 33);
/// assert!(schedule.is_on_critical_path("5.2.3"));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    library: TemplateLibrary,
    duration_unit: DurationUnit,
    dangling_policy: DanglingPolicy,
}

impl ScheduleEngine {
    /// Creates an engine with the standard template library, day-based
    /// duration arithmetic, and lenient dangling-reference handling.
    pub fn new() -> Self {
        Self {
            library: TemplateLibrary::standard(),
            duration_unit: DurationUnit::default(),
            dangling_policy: DanglingPolicy::default(),
        }
    }

    /// Replaces the template library.
    pub fn with_library(mut self, library: TemplateLibrary) -> Self {
        self.library = library;
        self
    }

    /// Sets how many calendar days a week of duration occupies.
    pub fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Sets the policy for dependencies on unknown activities.
    pub fn with_dangling_policy(mut self, policy: DanglingPolicy) -> Self {
        self.dangling_policy = policy;
        self
    }

    /// The engine's template library.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Computes a schedule for the request.
    pub fn compute(&self, request: &ScheduleRequest) -> Result<ComputedSchedule, ScheduleError> {
        let template = self.library.template_for(request.project_type).ok_or_else(|| {
            ScheduleError::MissingTemplate {
                project_type: request.project_type.label().to_string(),
            }
        })?;
        self.compute_for_template(template, request)
    }

    /// Computes a schedule for a caller-supplied template, bypassing
    /// the library lookup.
    ///
    /// The resulting schedule carries the request's project type
    /// unchanged.
    pub fn compute_for_template(
        &self,
        template: &ScheduleTemplate,
        request: &ScheduleRequest,
    ) -> Result<ComputedSchedule, ScheduleError> {
        let scaler = DurationScaler::for_area(request.area_sqm)?;

        let structural = validation::structural_issues(template);
        if !structural.is_empty() {
            return Err(ScheduleError::InvalidTemplate {
                template: template.name.clone(),
                issues: structural,
            });
        }

        let graph = ActivityGraph::build(template);

        let mut warnings = validation::container_warnings(template);
        for dangling in graph.dangling() {
            if self.dangling_policy == DanglingPolicy::Reject {
                return Err(ScheduleError::UnresolvedDependency {
                    activity: dangling.activity.clone(),
                    dependency: dangling.dependency.clone(),
                });
            }
            warnings.push(TemplateIssue::unknown_dependency(
                &dangling.activity,
                &dangling.dependency,
            ));
        }

        let order = graph
            .topological_order()
            .map_err(|cycle| ScheduleError::CyclicDependency { cycle })?;

        let durations: Vec<u32> = template
            .activities()
            .map(|a| scaler.scale(a.duration_weeks))
            .collect();

        let project_start = request
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());

        let dates = propagate(&graph, &order, &durations, project_start, self.duration_unit);

        let path = critical_path(&graph, &order);
        let mut on_path = vec![false; graph.len()];
        for &i in &path {
            on_path[i] = true;
        }

        let entries: Vec<ScheduledActivity> = template
            .walk()
            .enumerate()
            .map(|(idx, (phase, wp, activity))| ScheduledActivity {
                activity_id: activity.id.clone(),
                activity_name: activity.name.clone(),
                phase: phase.name.clone(),
                work_package: wp.name.clone(),
                dependencies: activity.dependencies.clone(),
                duration_weeks: durations[idx],
                start: dates.starts[idx],
                finish: dates.finishes[idx],
                milestone: activity.milestone,
                critical: on_path[idx],
            })
            .collect();

        let critical_ids: Vec<String> = path
            .iter()
            .map(|&i| graph.activity(i).id.clone())
            .collect();

        Ok(ComputedSchedule {
            project_type: request.project_type,
            template_name: template.name.clone(),
            area_sqm: request.area_sqm,
            duration_multiplier: scaler.multiplier(),
            project_start,
            project_end: dates.project_end,
            entries,
            critical_path: critical_ids,
            warnings,
        })
    }
}

impl Default for ScheduleEngine {
    fn default() -> Self {
        Self::new()
    }
}
