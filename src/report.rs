//! Schedule report rendering.
//!
//! Renders a computed schedule as a Markdown document or as a
//! plain-text Gantt chart. Both renderers are pure formatters over a
//! [`ComputedSchedule`]; nothing here recomputes dates.

use crate::models::ComputedSchedule;

/// Formats a schedule as a Markdown document.
///
/// One section per phase with an activity table, preceded by a summary
/// block and followed by any warnings. Activities on the critical path
/// are flagged `*`, milestones `M`.
#[must_use]
pub fn render_markdown(schedule: &ComputedSchedule) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {} schedule", schedule.template_name));
    lines.push(String::new());
    lines.push(format!("- Project type: {}", schedule.project_type));
    lines.push(format!(
        "- Floor area: {} m2 (duration multiplier {:.2})",
        schedule.area_sqm, schedule.duration_multiplier
    ));
    lines.push(format!("- Start: {}", schedule.project_start));
    lines.push(format!("- Finish: {}", schedule.project_end));
    let weeks = schedule.total_duration_weeks();
    lines.push(format!(
        "- Duration: {} week{}",
        weeks,
        if weeks == 1 { "" } else { "s" }
    ));
    lines.push(format!("- Milestones: {}", schedule.milestone_count()));
    if !schedule.critical_path.is_empty() {
        lines.push(format!(
            "- Critical path ({} activities): {}",
            schedule.critical_path.len(),
            schedule.critical_path.join(" -> ")
        ));
    }

    let mut current_phase: Option<&str> = None;
    for entry in &schedule.entries {
        if current_phase != Some(entry.phase.as_str()) {
            current_phase = Some(entry.phase.as_str());
            lines.push(String::new());
            lines.push(format!("## {}", entry.phase));
            lines.push(String::new());
            lines.push(
                "| ID | Activity | Work package | Depends on | Weeks | Start | Finish | Flags |"
                    .to_string(),
            );
            lines.push(
                "|----|----------|--------------|------------|-------|-------|--------|-------|"
                    .to_string(),
            );
        }
        let flags = match (entry.critical, entry.milestone) {
            (true, true) => "*M",
            (true, false) => "*",
            (false, true) => "M",
            (false, false) => "",
        };
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            entry.activity_id,
            entry.activity_name,
            entry.work_package,
            entry.dependencies.join(", "),
            entry.duration_weeks,
            entry.start,
            entry.finish,
            flags
        ));
    }

    if schedule.has_warnings() {
        lines.push(String::new());
        lines.push("## Warnings".to_string());
        lines.push(String::new());
        for warning in &schedule.warnings {
            lines.push(format!("- {warning}"));
        }
    }

    lines.join("\n")
}

/// Formats a schedule as a plain-text Gantt chart.
///
/// One row per activity with a day-resolution bar. Milestone bars use
/// `M` instead of `#`, and rows on the critical path carry a trailing
/// `*`.
#[must_use]
pub fn render_gantt(schedule: &ComputedSchedule) -> String {
    if schedule.entries.is_empty() {
        return "No activities scheduled.".to_string();
    }

    let total_days = (schedule.project_end - schedule.project_start).num_days() + 1;

    let mut lines = Vec::new();
    lines.push(format!(
        "{} ({} to {}, 1 column = 1 day, * = critical path)",
        schedule.template_name, schedule.project_start, schedule.project_end
    ));
    lines.push(String::new());

    for entry in &schedule.entries {
        let offset = (entry.start - schedule.project_start).num_days();
        let width = (entry.finish - entry.start).num_days() + 1;
        let fill = if entry.milestone { 'M' } else { '#' };

        let bar: String = (0..total_days)
            .map(|day| {
                if day >= offset && day < offset + width {
                    fill
                } else {
                    '.'
                }
            })
            .collect();

        let mark = if entry.critical { " *" } else { "" };
        lines.push(format!(
            "{:<8} {:<32} |{bar}|{mark}",
            entry.activity_id,
            truncated(&entry.activity_name, 32)
        ));
    }

    lines.join("\n")
}

fn truncated(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ScheduleEngine, ScheduleRequest};
    use crate::models::{Activity, Phase, ProjectType, ScheduleTemplate, WorkPackage};
    use crate::templates::TemplateLibrary;
    use chrono::NaiveDate;

    fn chain_schedule() -> ComputedSchedule {
        let template = ScheduleTemplate::new("Chain").with_phase(
            Phase::new("Build").with_work_package(
                WorkPackage::new("Shell")
                    .with_activity(Activity::new("A", "First", 1))
                    .with_activity(Activity::new("B", "Second", 2).with_dependency("A"))
                    .with_activity(
                        Activity::new("C", "Third", 1).with_dependency("B").milestone(),
                    ),
            ),
        );
        let engine = ScheduleEngine::new()
            .with_library(TemplateLibrary::new().with_template(ProjectType::NewBuild, template));
        let request = ScheduleRequest::new(ProjectType::NewBuild, 50.0)
            .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        engine.compute(&request).unwrap()
    }

    #[test]
    fn test_markdown_summary_block() {
        let text = render_markdown(&chain_schedule());
        assert!(text.contains("# Chain schedule"));
        assert!(text.contains("- Project type: new-build"));
        assert!(text.contains("- Start: 2024-01-01"));
        assert!(text.contains("- Finish: 2024-01-04"));
        assert!(text.contains("- Duration: 1 week"));
        assert!(text.contains("- Milestones: 1"));
        assert!(text.contains("- Critical path (3 activities): A -> B -> C"));
    }

    #[test]
    fn test_markdown_phase_table() {
        let text = render_markdown(&chain_schedule());
        assert!(text.contains("## Build"));
        assert!(text.contains("| A | First | Shell |  | 1 | 2024-01-01 | 2024-01-01 | * |"));
        assert!(text.contains("| C | Third | Shell | B | 1 | 2024-01-04 | 2024-01-04 | *M |"));
        assert!(!text.contains("## Warnings"));
    }

    #[test]
    fn test_markdown_includes_warnings() {
        let template = ScheduleTemplate::new("Loose").with_phase(
            Phase::new("P").with_work_package(
                WorkPackage::new("WP")
                    .with_activity(Activity::new("A", "First", 1).with_dependency("GHOST")),
            ),
        );
        let engine = ScheduleEngine::new()
            .with_library(TemplateLibrary::new().with_template(ProjectType::NewBuild, template));
        let schedule = engine
            .compute(&ScheduleRequest::new(ProjectType::NewBuild, 50.0))
            .unwrap();

        let text = render_markdown(&schedule);
        assert!(text.contains("## Warnings"));
        assert!(text.contains("- Activity 'A' depends on unknown activity 'GHOST'"));
    }

    #[test]
    fn test_gantt_bars() {
        let text = render_gantt(&chain_schedule());
        assert!(text.contains("1 column = 1 day"));
        assert!(text.contains("|#...|"));
        assert!(text.contains("|.##.|"));
        // C is a milestone on the critical path.
        assert!(text.contains("|...M| *"));
    }

    #[test]
    fn test_gantt_empty_schedule() {
        let engine = ScheduleEngine::new().with_library(
            TemplateLibrary::new()
                .with_template(ProjectType::NewBuild, ScheduleTemplate::new("Empty")),
        );
        let schedule = engine
            .compute(&ScheduleRequest::new(ProjectType::NewBuild, 50.0))
            .unwrap();
        assert_eq!(render_gantt(&schedule), "No activities scheduled.");
    }

    #[test]
    fn test_gantt_truncates_long_names() {
        let long = "An activity with an extremely long descriptive name";
        let template = ScheduleTemplate::new("Long").with_phase(
            Phase::new("P").with_work_package(
                WorkPackage::new("WP").with_activity(Activity::new("A", long, 1)),
            ),
        );
        let engine = ScheduleEngine::new()
            .with_library(TemplateLibrary::new().with_template(ProjectType::NewBuild, template));
        let schedule = engine
            .compute(&ScheduleRequest::new(ProjectType::NewBuild, 50.0))
            .unwrap();

        let text = render_gantt(&schedule);
        assert!(text.contains("An activity with an extremely lo"));
        assert!(!text.contains(long));
    }
}
