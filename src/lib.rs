//! Construction schedule engine.
//!
//! Computes project schedules from work-breakdown templates: select a
//! template for the project type, scale its nominal durations for the
//! floor area, propagate start and finish dates through the dependency
//! graph, and extract the critical path.
//!
//! # Modules
//!
//! - **`models`**: domain types (`ScheduleTemplate`, `Phase`, `WorkPackage`,
//!   `Activity`, `ComputedSchedule`)
//! - **`templates`**: built-in templates and the `TemplateLibrary`
//! - **`engine`**: the `ScheduleEngine` computation pipeline
//! - **`scaling`**: area-based duration scaling
//! - **`graph`**: dependency graph and topological ordering
//! - **`propagate`**: forward date propagation
//! - **`critical_path`**: longest dependency chain extraction
//! - **`validation`**: template integrity checks
//! - **`report`**: Markdown and Gantt rendering
//! - **`error`**: the `ScheduleError` taxonomy
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

pub mod critical_path;
pub mod engine;
pub mod error;
pub mod graph;
pub mod models;
pub mod propagate;
pub mod report;
pub mod scaling;
pub mod templates;
pub mod validation;
