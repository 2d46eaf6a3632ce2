//! Error types for schedule computation.
//!
//! Every failure the engine can report is a [`ScheduleError`] variant.
//! Template problems that are recoverable (dangling references under a
//! lenient policy) surface as warnings on the computed schedule instead.

use thiserror::Error;

use crate::validation::TemplateIssue;

/// Errors raised while computing a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The requested floor area cannot be used for duration scaling.
    #[error("invalid floor area {area} m2: area must be a positive, finite number")]
    InvalidArea {
        /// The rejected area value.
        area: f64,
    },

    /// The template failed structural validation.
    #[error("template \"{template}\" is invalid ({} issue(s))", .issues.len())]
    InvalidTemplate {
        /// Name of the offending template.
        template: String,
        /// Every structural problem found, not just the first.
        issues: Vec<TemplateIssue>,
    },

    /// The dependency graph contains at least one cycle.
    #[error("cyclic dependency between activities: {}", .cycle.join(" -> "))]
    CyclicDependency {
        /// Ids of the activities caught in cycles, in declaration order.
        cycle: Vec<String>,
    },

    /// An activity references a dependency that does not exist.
    #[error("activity \"{activity}\" depends on unknown activity \"{dependency}\"")]
    UnresolvedDependency {
        /// Id of the referencing activity.
        activity: String,
        /// The id it references.
        dependency: String,
    },

    /// No template is registered for the requested project type.
    #[error("no template registered for project type \"{project_type}\"")]
    MissingTemplate {
        /// Label of the requested project type.
        project_type: String,
    },
}

impl ScheduleError {
    /// Stable machine-readable code for each error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleError::InvalidArea { .. } => "invalid_area",
            ScheduleError::InvalidTemplate { .. } => "invalid_template",
            ScheduleError::CyclicDependency { .. } => "cyclic_dependency",
            ScheduleError::UnresolvedDependency { .. } => "unresolved_dependency",
            ScheduleError::MissingTemplate { .. } => "missing_template",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ScheduleError::InvalidArea { area: -3.0 };
        assert!(err.to_string().contains("-3"));
        assert_eq!(err.code(), "invalid_area");

        let err = ScheduleError::CyclicDependency {
            cycle: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "cyclic dependency between activities: A -> B"
        );

        let err = ScheduleError::UnresolvedDependency {
            activity: "2.1.1".to_string(),
            dependency: "9.9.9".to_string(),
        };
        assert!(err.to_string().contains("2.1.1"));
        assert!(err.to_string().contains("9.9.9"));
        assert_eq!(err.code(), "unresolved_dependency");
    }

    #[test]
    fn test_missing_template_message() {
        let err = ScheduleError::MissingTemplate {
            project_type: "fit-out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no template registered for project type \"fit-out\""
        );
    }
}
