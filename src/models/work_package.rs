//! Work package model.
//!
//! A work package groups related activities within a phase. It is a
//! purely organizational container: it has no scheduling effect beyond
//! fixing the order in which its activities are listed and reported.

use serde::{Deserialize, Serialize};

use super::Activity;

/// An ordered group of activities.
///
/// Work packages are expected to contain at least one activity;
/// emptiness is flagged by validation, not by the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPackage {
    /// Human-readable name (e.g. "Groundworks").
    pub name: String,
    /// Activities in declaration order.
    pub activities: Vec<Activity>,
}

impl WorkPackage {
    /// Creates an empty work package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Adds an activity.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Whether this work package has any activities.
    pub fn has_activities(&self) -> bool {
        !self.activities.is_empty()
    }

    /// Number of activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}
