//! Forward date propagation.
//!
//! Walks activities in topological order and assigns each one a start
//! and finish date. An activity with no scheduled predecessors starts
//! on the project start date; otherwise it starts the day after its
//! latest predecessor finishes. Both endpoints are inclusive, so a
//! one-day activity starts and finishes on the same date.
//!
//! # Algorithm
//!
//! Single forward pass over a precomputed topological order. Each
//! node's start depends only on predecessor finishes, which the order
//! guarantees are already known. O(V + E).
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::graph::ActivityGraph;

/// How many calendar days one nominal week of duration occupies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    /// One week of duration advances one calendar day.
    ///
    /// This is the engine's historical arithmetic: durations are stored
    /// in weeks but dates move a day per week, so a 3-week activity
    /// spans 3 calendar days. It stays the default so existing
    /// schedules keep their dates.
    #[default]
    Day,
    /// One week of duration advances seven calendar days.
    Week,
}

impl DurationUnit {
    /// Calendar days per week of duration.
    pub fn days(&self) -> u64 {
        match self {
            DurationUnit::Day => 1,
            DurationUnit::Week => 7,
        }
    }
}

/// Start and finish dates per graph node, plus the overall end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDates {
    /// Start date per node index.
    pub starts: Vec<NaiveDate>,
    /// Finish date per node index, inclusive.
    pub finishes: Vec<NaiveDate>,
    /// Latest finish across all activities. Equals the project start
    /// when there are no activities.
    pub project_end: NaiveDate,
}

/// Propagates dates through the graph.
///
/// `order` must be a full topological order of `graph` and `durations`
/// holds the scaled duration per node index. Unresolved dependencies
/// have already been dropped from the graph, so an activity whose only
/// dependencies were dangling starts at `project_start`.
pub fn propagate(
    graph: &ActivityGraph<'_>,
    order: &[usize],
    durations: &[u32],
    project_start: NaiveDate,
    unit: DurationUnit,
) -> ActivityDates {
    let mut starts = vec![project_start; graph.len()];
    let mut finishes = vec![project_start; graph.len()];

    for &i in order {
        let start = graph
            .predecessors(i)
            .iter()
            .map(|&p| finishes[p])
            .max()
            .map_or(project_start, |latest| add_days(latest, 1));

        let weeks = u64::from(durations[i].max(1));
        let finish = add_days(start, weeks * unit.days() - 1);

        starts[i] = start;
        finishes[i] = finish;
    }

    let project_end = finishes.iter().copied().max().unwrap_or(project_start);

    ActivityDates {
        starts,
        finishes,
        project_end,
    }
}

/// Date addition that saturates at the calendar's upper bound instead
/// of panicking on overflow.
fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
