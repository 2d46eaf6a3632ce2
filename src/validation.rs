//! Template validation.
//!
//! Checks structural integrity of a schedule template before
//! computation. Detects:
//! - Duplicate activity IDs
//! - Blank activity IDs
//! - Circular dependencies
//! - Dependencies on unknown activities
//! - Empty phases and work packages
//!
//! Problems split into errors (the template cannot be scheduled) and
//! warnings (it can, but the result may not be what the author meant).
//! All issues are collected in one pass, not just the first.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::ActivityGraph;
use crate::models::ScheduleTemplate;

/// A single problem found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIssue {
    /// Issue category.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of template issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Two activities share the same ID.
    DuplicateId,
    /// An activity has an empty or whitespace-only ID.
    BlankId,
    /// The dependency graph contains a cycle.
    CyclicDependency,
    /// An activity depends on an ID that does not exist.
    UnknownDependency,
    /// A phase contains no work packages.
    EmptyPhase,
    /// A work package contains no activities.
    EmptyWorkPackage,
}

impl TemplateIssue {
    pub(crate) fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn unknown_dependency(activity: &str, dependency: &str) -> Self {
        Self::new(
            IssueKind::UnknownDependency,
            format!("Activity '{activity}' depends on unknown activity '{dependency}'"),
        )
    }
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What to do when an activity depends on an id that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DanglingPolicy {
    /// Treat the missing dependency as absent and record a warning on
    /// the computed schedule.
    #[default]
    Warn,
    /// Abort the computation with an unresolved-dependency error.
    Reject,
}

/// Outcome of validating a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Problems that prevent scheduling.
    pub errors: Vec<TemplateIssue>,
    /// Problems the engine can work around.
    pub warnings: Vec<TemplateIssue>,
}

impl ValidationReport {
    /// Whether the template can be scheduled.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any warnings were raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of issues of either severity.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Validates a template.
///
/// Checks:
/// 1. Every activity ID is non-blank
/// 2. No two activities share an ID
/// 3. Every dependency resolves to an existing activity (warning)
/// 4. The dependency graph is acyclic
/// 5. No phase or work package is empty (warning)
pub fn validate_template(template: &ScheduleTemplate) -> ValidationReport {
    let mut report = ValidationReport {
        errors: structural_issues(template),
        warnings: container_warnings(template),
    };

    let graph = ActivityGraph::build(template);
    for dangling in graph.dangling() {
        report.warnings.push(TemplateIssue::unknown_dependency(
            &dangling.activity,
            &dangling.dependency,
        ));
    }

    if let Err(cycle) = graph.topological_order() {
        report.errors.push(TemplateIssue::new(
            IssueKind::CyclicDependency,
            format!("Circular dependency involving activities: {}", cycle.join(", ")),
        ));
    }

    report
}

/// Issues that make a template unschedulable: blank and duplicate IDs.
pub(crate) fn structural_issues(template: &ScheduleTemplate) -> Vec<TemplateIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for activity in template.activities() {
        if activity.id.trim().is_empty() {
            issues.push(TemplateIssue::new(
                IssueKind::BlankId,
                format!("Activity '{}' has a blank ID", activity.name),
            ));
        } else if !seen.insert(activity.id.as_str()) {
            issues.push(TemplateIssue::new(
                IssueKind::DuplicateId,
                format!("Duplicate activity ID: {}", activity.id),
            ));
        }
    }

    issues
}

/// Warnings for phases and work packages with nothing in them.
pub(crate) fn container_warnings(template: &ScheduleTemplate) -> Vec<TemplateIssue> {
    let mut issues = Vec::new();

    for phase in &template.phases {
        if !phase.has_work_packages() {
            issues.push(TemplateIssue::new(
                IssueKind::EmptyPhase,
                format!("Phase '{}' has no work packages", phase.name),
            ));
        }
        for wp in &phase.work_packages {
            if !wp.has_activities() {
                issues.push(TemplateIssue::new(
                    IssueKind::EmptyWorkPackage,
                    format!("Work package '{}' has no activities", wp.name),
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Phase, WorkPackage};

    fn template_of(activities: Vec<Activity>) -> ScheduleTemplate {
        let mut wp = WorkPackage::new("WP");
        for activity in activities {
            wp = wp.with_activity(activity);
        }
        ScheduleTemplate::new("test").with_phase(Phase::new("P").with_work_package(wp))
    }

    #[test]
    fn test_valid_template() {
        let template = template_of(vec![
            Activity::new("A", "First", 1),
            Activity::new("B", "Second", 2).with_dependency("A"),
        ]);
        let report = validate_template(&template);
        assert!(report.is_valid());
        assert!(!report.has_warnings());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn test_duplicate_id() {
        let template = template_of(vec![
            Activity::new("A", "First", 1),
            Activity::new("A", "Second", 2),
        ]);
        let report = validate_template(&template);
        assert!(!report.is_valid());
        assert!(report
            .errors
            .iter()
            .any(|e| e.kind == IssueKind::DuplicateId));
    }

    #[test]
    fn test_blank_id() {
        let template = template_of(vec![Activity::new("  ", "Unnamed", 1)]);
        let report = validate_template(&template);
        assert!(report.errors.iter().any(|e| e.kind == IssueKind::BlankId));
    }

    #[test]
    fn test_unknown_dependency_is_warning() {
        let template = template_of(vec![Activity::new("A", "First", 1).with_dependency("GHOST")]);
        let report = validate_template(&template);
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.kind == IssueKind::UnknownDependency && w.message.contains("GHOST")));
    }

    #[test]
    fn test_cycle_is_error() {
        let template = template_of(vec![
            Activity::new("A", "First", 1).with_dependency("B"),
            Activity::new("B", "Second", 1).with_dependency("A"),
        ]);
        let report = validate_template(&template);
        assert!(!report.is_valid());
        let issue = report
            .errors
            .iter()
            .find(|e| e.kind == IssueKind::CyclicDependency)
            .expect("cycle reported");
        assert!(issue.message.contains("A, B"));
    }

    #[test]
    fn test_empty_containers_are_warnings() {
        let template = ScheduleTemplate::new("sparse")
            .with_phase(Phase::new("Empty phase"))
            .with_phase(Phase::new("P").with_work_package(WorkPackage::new("Empty wp")));
        let report = validate_template(&template);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.kind == IssueKind::EmptyPhase));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.kind == IssueKind::EmptyWorkPackage));
    }

    #[test]
    fn test_multiple_issues_collected() {
        // Duplicate ID and a dangling dependency in one template.
        let template = template_of(vec![
            Activity::new("A", "First", 1),
            Activity::new("A", "Second", 1),
            Activity::new("B", "Third", 1).with_dependency("GHOST"),
        ]);
        let report = validate_template(&template);
        assert!(!report.is_valid());
        assert!(report.issue_count() >= 2);
    }

    #[test]
    fn test_issue_display() {
        let issue = TemplateIssue::unknown_dependency("A", "X");
        assert_eq!(
            issue.to_string(),
            "Activity 'A' depends on unknown activity 'X'"
        );
    }
}
