//! Schedule template model.
//!
//! A template is the root input to the engine: the full work breakdown
//! structure (phases → work packages → activities) for one type of
//! project. Templates are immutable reference data, safe to share
//! across any number of concurrent computations.
//!
//! # Reference
//! PMI, "A Guide to the Project Management Body of Knowledge" (WBS)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Activity, Phase, WorkPackage};

/// The kind of construction project a template describes.
///
/// Selects which built-in template the engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Ground-up construction of a new building.
    NewBuild,
    /// Interior fit-out of an existing shell.
    FitOut,
    /// Refurbishment of an existing building.
    Refurbishment,
}

impl ProjectType {
    /// All known project types, in display order.
    pub const ALL: [ProjectType; 3] = [
        ProjectType::NewBuild,
        ProjectType::FitOut,
        ProjectType::Refurbishment,
    ];

    /// Canonical kebab-case label.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::NewBuild => "new-build",
            ProjectType::FitOut => "fit-out",
            ProjectType::Refurbishment => "refurbishment",
        }
    }

    /// Parses a label leniently.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything unrecognized falls back to [`ProjectType::NewBuild`].
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| label.eq_ignore_ascii_case(t.label()))
            .unwrap_or(ProjectType::NewBuild)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A complete schedule template.
///
/// Phases, work packages, and activities are kept in declaration order;
/// that order fixes report layout and all deterministic tie-breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    /// Template name (e.g. "New build").
    pub name: String,
    /// Phases in declaration order.
    pub phases: Vec<Phase>,
}

impl ScheduleTemplate {
    /// Creates an empty template.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phases: Vec::new(),
        }
    }

    /// Adds a phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Walks the WBS in declaration order, yielding each activity with
    /// its enclosing phase and work package.
    pub fn walk(&self) -> impl Iterator<Item = (&Phase, &WorkPackage, &Activity)> {
        self.phases.iter().flat_map(|phase| {
            phase.work_packages.iter().flat_map(move |wp| {
                wp.activities.iter().map(move |activity| (phase, wp, activity))
            })
        })
    }

    /// All activities in declaration order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.walk().map(|(_, _, activity)| activity)
    }

    /// Total number of activities.
    pub fn activity_count(&self) -> usize {
        self.phases.iter().map(Phase::activity_count).sum()
    }

    /// Finds an activity by id.
    pub fn find_activity(&self, id: &str) -> Option<&Activity> {
        self.activities().find(|a| a.id == id)
    }
}
