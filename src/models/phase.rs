//! Phase model.
//!
//! A phase is the top level of the work breakdown structure: an ordered
//! run of work packages (e.g. "Substructure", "Superstructure"). Like
//! work packages, phases are organizational only.

use serde::{Deserialize, Serialize};

use super::WorkPackage;

/// An ordered group of work packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    /// Human-readable name (e.g. "Design & approvals").
    pub name: String,
    /// Work packages in declaration order.
    pub work_packages: Vec<WorkPackage>,
}

impl Phase {
    /// Creates an empty phase.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            work_packages: Vec::new(),
        }
    }

    /// Adds a work package.
    pub fn with_work_package(mut self, work_package: WorkPackage) -> Self {
        self.work_packages.push(work_package);
        self
    }

    /// Whether this phase has any work packages.
    pub fn has_work_packages(&self) -> bool {
        !self.work_packages.is_empty()
    }

    /// Total number of activities across all work packages.
    pub fn activity_count(&self) -> usize {
        self.work_packages.iter().map(WorkPackage::activity_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    #[test]
    fn test_phase_builder() {
        let phase = Phase::new("Substructure")
            .with_work_package(
                WorkPackage::new("Site establishment")
                    .with_activity(Activity::new("2.1.1", "Site setup", 1)),
            )
            .with_work_package(
                WorkPackage::new("Groundworks")
                    .with_activity(Activity::new("2.2.1", "Excavation", 2))
                    .with_activity(Activity::new("2.2.2", "Foundations", 3)),
            );

        assert_eq!(phase.name, "Substructure");
        assert!(phase.has_work_packages());
        assert_eq!(phase.work_packages.len(), 2);
        assert_eq!(phase.activity_count(), 3);
    }

    #[test]
    fn test_phase_empty() {
        let phase = Phase::new("empty");
        assert!(!phase.has_work_packages());
        assert_eq!(phase.activity_count(), 0);
    }
}
