//! Computed schedule model.
//!
//! The output of a scheduling run: every activity with its scaled
//! duration and resolved calendar dates, the critical path, and any
//! warnings raised while the template was being resolved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::TemplateIssue;

use super::ProjectType;

/// One scheduled activity, flattened out of the WBS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledActivity {
    /// Activity id from the template.
    pub activity_id: String,
    /// Activity name.
    pub activity_name: String,
    /// Name of the enclosing phase.
    pub phase: String,
    /// Name of the enclosing work package.
    pub work_package: String,
    /// Ids of the activities this one depends on, as declared.
    pub dependencies: Vec<String>,
    /// Duration after area scaling, in weeks.
    pub duration_weeks: u32,
    /// First working day (inclusive).
    pub start: NaiveDate,
    /// Last working day (inclusive).
    pub finish: NaiveDate,
    /// Whether the activity marks a milestone.
    pub milestone: bool,
    /// Whether the activity lies on the critical path.
    pub critical: bool,
}

impl ScheduledActivity {
    /// Calendar span in days, inclusive of both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.finish - self.start).num_days() + 1
    }
}

/// A fully computed project schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedSchedule {
    /// Project type the template was selected for.
    pub project_type: ProjectType,
    /// Name of the template that was scheduled.
    pub template_name: String,
    /// Floor area the durations were scaled for, in square metres.
    pub area_sqm: f64,
    /// Multiplier applied to every nominal duration.
    pub duration_multiplier: f64,
    /// Project start date.
    pub project_start: NaiveDate,
    /// Finish date of the latest activity. Equals `project_start` when
    /// the template has no activities.
    pub project_end: NaiveDate,
    /// Scheduled activities in template declaration order.
    pub entries: Vec<ScheduledActivity>,
    /// Activity ids along the critical path, in schedule order.
    pub critical_path: Vec<String>,
    /// Non-fatal issues found while resolving the template.
    pub warnings: Vec<TemplateIssue>,
}

impl ComputedSchedule {
    /// Looks up a scheduled activity by id.
    pub fn entry(&self, activity_id: &str) -> Option<&ScheduledActivity> {
        self.entries.iter().find(|e| e.activity_id == activity_id)
    }

    /// Whether the given activity lies on the critical path.
    pub fn is_on_critical_path(&self, activity_id: &str) -> bool {
        self.critical_path.iter().any(|id| id == activity_id)
    }

    /// Entries belonging to the named phase, in schedule order.
    pub fn entries_in_phase<'a>(
        &'a self,
        phase: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledActivity> {
        self.entries.iter().filter(move |e| e.phase == phase)
    }

    /// Number of milestone activities.
    pub fn milestone_count(&self) -> usize {
        self.entries.iter().filter(|e| e.milestone).count()
    }

    /// Overall project span in days, inclusive. Zero for an empty
    /// schedule.
    pub fn total_duration_days(&self) -> i64 {
        if self.entries.is_empty() {
            return 0;
        }
        (self.project_end - self.project_start).num_days() + 1
    }

    /// Project duration in whole weeks, rounded up from the difference
    /// between the start and end dates. Zero for an empty schedule and
    /// for one that starts and ends on the same day.
    pub fn total_duration_weeks(&self) -> i64 {
        if self.entries.is_empty() {
            return 0;
        }
        ((self.project_end - self.project_start).num_days() + 6) / 7
    }

    /// Whether any warnings were raised during computation.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
