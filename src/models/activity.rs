//! Activity model.
//!
//! An activity is the smallest schedulable unit of a construction
//! programme. It carries a nominal duration and a list of predecessor
//! activities that must finish before it can start.
//!
//! # Duration Model
//!
//! Nominal durations are expressed in whole weeks and scaled to the
//! project's floor area before dates are assigned (see `scaling`).
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

/// An activity within a schedule template.
///
/// Identified by a dotted WBS code unique within its template.
/// Dependencies reference other activities by id; an activity with no
/// dependencies can start on the project start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Stable identifier (dotted WBS code, e.g. "2.1.3").
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Nominal duration in weeks, before area scaling. At least 1.
    pub duration_weeks: u32,
    /// Ids of activities that must finish before this one starts.
    /// Empty means the activity starts at the project start date.
    pub dependencies: Vec<String>,
    /// Marks a reporting milestone. Has no scheduling effect.
    pub milestone: bool,
}

impl Activity {
    /// Creates a new activity.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration_weeks: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration_weeks,
            dependencies: Vec::new(),
            milestone: false,
        }
    }

    /// Adds a dependency on another activity's id.
    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Adds several dependencies at once, preserving order.
    pub fn with_dependencies<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Flags this activity as a milestone.
    pub fn milestone(mut self) -> Self {
        self.milestone = true;
        self
    }

    /// Whether this activity has any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Whether this activity depends on the given id.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|d| d == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("2.1.3", "Foundations", 3)
            .with_dependency("2.1.2")
            .with_dependency("1.1.3");

        assert_eq!(act.id, "2.1.3");
        assert_eq!(act.name, "Foundations");
        assert_eq!(act.duration_weeks, 3);
        assert_eq!(act.dependencies, vec!["2.1.2", "1.1.3"]);
        assert!(!act.milestone);
    }

    #[test]
    fn test_activity_milestone() {
        let act = Activity::new("1.2.2", "Building permit granted", 1)
            .with_dependency("1.2.1")
            .milestone();

        assert!(act.milestone);
        assert_eq!(act.duration_weeks, 1);
    }

    #[test]
    fn test_with_dependencies() {
        let act = Activity::new("4.2.1", "Plastering", 2).with_dependencies(["4.1.2", "4.1.3"]);
        assert_eq!(act.dependencies, vec!["4.1.2", "4.1.3"]);
    }

    #[test]
    fn test_depends_on() {
        let act = Activity::new("B", "Walls", 2).with_dependency("A");
        assert!(act.has_dependencies());
        assert!(act.depends_on("A"));
        assert!(!act.depends_on("C"));

        let free = Activity::new("A", "Groundworks", 1);
        assert!(!free.has_dependencies());
    }

    #[test]
    fn test_activity_serde_roundtrip() {
        let act = Activity::new("3.2.2", "Weathertight shell", 1)
            .with_dependencies(["3.1.5", "3.2.1"])
            .milestone();

        let json = serde_json::to_string(&act).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, act.id);
        assert_eq!(back.dependencies, act.dependencies);
        assert!(back.milestone);
    }
}
