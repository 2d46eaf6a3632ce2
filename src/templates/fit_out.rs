//! Built-in template for interior fit-out of an existing shell.
//!
//! Covers design and procurement, strip-out, services and partitions,
//! and finishes through to handover. Long-lead orders run alongside
//! the site works and gate the joinery.

use crate::models::{Activity, Phase, ScheduleTemplate, WorkPackage};

/// Builds the fit-out template.
pub(super) fn template() -> ScheduleTemplate {
    let design_procurement = Phase::new("Design & procurement")
        .with_work_package(
            WorkPackage::new("Design")
                .with_activity(Activity::new("1.1.1", "Survey & space planning", 2))
                .with_activity(
                    Activity::new("1.1.2", "Concept design", 2).with_dependency("1.1.1"),
                )
                .with_activity(
                    Activity::new("1.1.3", "Technical design", 3).with_dependency("1.1.2"),
                )
                .with_activity(
                    Activity::new("1.1.4", "Client sign-off", 1)
                        .with_dependency("1.1.3")
                        .milestone(),
                ),
        )
        .with_work_package(
            WorkPackage::new("Procurement")
                .with_activity(
                    Activity::new("1.2.1", "Contractor procurement", 3).with_dependency("1.1.3"),
                )
                .with_activity(
                    Activity::new("1.2.2", "Long-lead orders", 4).with_dependency("1.1.4"),
                ),
        );

    let strip_out = Phase::new("Strip-out & preparation").with_work_package(
        WorkPackage::new("Enabling")
            .with_activity(
                Activity::new("2.1.1", "Site mobilisation", 1).with_dependency("1.2.1"),
            )
            .with_activity(Activity::new("2.1.2", "Strip-out", 2).with_dependency("2.1.1"))
            .with_activity(
                Activity::new("2.1.3", "Builder's work & making good", 2)
                    .with_dependency("2.1.2"),
            ),
    );

    let services = Phase::new("Services & partitions")
        .with_work_package(
            WorkPackage::new("First fix")
                .with_activity(
                    Activity::new("3.1.1", "Partitions & ceiling grid", 3)
                        .with_dependency("2.1.3"),
                )
                .with_activity(
                    Activity::new("3.1.2", "Mechanical first fix", 3).with_dependency("3.1.1"),
                )
                .with_activity(
                    Activity::new("3.1.3", "Electrical & data first fix", 3)
                        .with_dependency("3.1.1"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Second fix")
                .with_activity(
                    Activity::new("3.2.1", "Ceiling tiles & lighting", 2)
                        .with_dependencies(["3.1.2", "3.1.3"]),
                )
                .with_activity(
                    Activity::new("3.2.2", "Mechanical & electrical second fix", 2)
                        .with_dependency("3.2.1"),
                )
                .with_activity(
                    Activity::new("3.2.3", "Commissioning", 1)
                        .with_dependency("3.2.2")
                        .milestone(),
                ),
        );

    let finishes = Phase::new("Finishes & handover")
        .with_work_package(
            WorkPackage::new("Finishes")
                .with_activity(
                    Activity::new("4.1.1", "Joinery & fittings", 2)
                        .with_dependencies(["3.2.1", "1.2.2"]),
                )
                .with_activity(Activity::new("4.1.2", "Decoration", 2).with_dependency("4.1.1"))
                .with_activity(
                    Activity::new("4.1.3", "Floor coverings", 1).with_dependency("4.1.2"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Handover")
                .with_activity(
                    Activity::new("4.2.1", "Furniture installation", 1).with_dependency("4.1.3"),
                )
                .with_activity(
                    Activity::new("4.2.2", "Snagging", 1).with_dependencies(["4.2.1", "3.2.3"]),
                )
                .with_activity(
                    Activity::new("4.2.3", "Handover", 1)
                        .with_dependency("4.2.2")
                        .milestone(),
                ),
        );

    ScheduleTemplate::new("Fit-out")
        .with_phase(design_procurement)
        .with_phase(strip_out)
        .with_phase(services)
        .with_phase(finishes)
}
