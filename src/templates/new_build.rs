//! Built-in template for ground-up new construction.
//!
//! Runs from concept design through approvals, substructure,
//! superstructure, and internal works to practical completion.
//! Milestones mark the building permit, the weathertight shell, and
//! practical completion.

use crate::models::{Activity, Phase, ScheduleTemplate, WorkPackage};

/// Builds the new-build template.
pub(super) fn template() -> ScheduleTemplate {
    let design_approvals = Phase::new("Design & approvals")
        .with_work_package(
            WorkPackage::new("Design")
                .with_activity(Activity::new("1.1.1", "Concept design", 3))
                .with_activity(
                    Activity::new("1.1.2", "Detailed design", 4).with_dependency("1.1.1"),
                )
                .with_activity(
                    Activity::new("1.1.3", "Structural engineering", 3).with_dependency("1.1.2"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Approvals")
                .with_activity(
                    Activity::new("1.2.1", "Planning application", 6).with_dependency("1.1.2"),
                )
                .with_activity(
                    Activity::new("1.2.2", "Building permit granted", 1)
                        .with_dependency("1.2.1")
                        .milestone(),
                ),
        );

    let substructure = Phase::new("Substructure")
        .with_work_package(
            WorkPackage::new("Site establishment")
                .with_activity(
                    Activity::new("2.1.1", "Site setup & hoarding", 1).with_dependency("1.2.2"),
                )
                .with_activity(
                    Activity::new("2.1.2", "Service diversions", 2).with_dependency("2.1.1"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Groundworks")
                .with_activity(Activity::new("2.2.1", "Excavation", 2).with_dependency("2.1.1"))
                .with_activity(
                    Activity::new("2.2.2", "Foundations", 3).with_dependencies(["2.2.1", "1.1.3"]),
                )
                .with_activity(
                    Activity::new("2.2.3", "Ground-floor slab", 2).with_dependency("2.2.2"),
                ),
        );

    let superstructure = Phase::new("Superstructure")
        .with_work_package(
            WorkPackage::new("Frame & roof")
                .with_activity(
                    Activity::new("3.1.1", "Ground-floor walls", 3).with_dependency("2.2.3"),
                )
                .with_activity(
                    Activity::new("3.1.2", "First-floor deck", 2).with_dependency("3.1.1"),
                )
                .with_activity(
                    Activity::new("3.1.3", "Upper-floor walls", 3).with_dependency("3.1.2"),
                )
                .with_activity(
                    Activity::new("3.1.4", "Roof structure", 2).with_dependency("3.1.3"),
                )
                .with_activity(
                    Activity::new("3.1.5", "Roof covering", 2).with_dependency("3.1.4"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Envelope")
                .with_activity(
                    Activity::new("3.2.1", "Windows & external doors", 2).with_dependency("3.1.3"),
                )
                .with_activity(
                    Activity::new("3.2.2", "Weathertight shell", 1)
                        .with_dependencies(["3.1.5", "3.2.1"])
                        .milestone(),
                )
                .with_activity(
                    Activity::new("3.2.3", "External render & cladding", 3)
                        .with_dependency("3.2.2"),
                ),
        );

    let internal_works = Phase::new("Internal works")
        .with_work_package(
            WorkPackage::new("First fix")
                .with_activity(
                    Activity::new("4.1.1", "Internal partitions", 2).with_dependency("3.2.2"),
                )
                .with_activity(
                    Activity::new("4.1.2", "Electrical first fix", 2).with_dependency("4.1.1"),
                )
                .with_activity(
                    Activity::new("4.1.3", "Plumbing & heating first fix", 2)
                        .with_dependency("4.1.1"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Finishes")
                .with_activity(
                    Activity::new("4.2.1", "Plastering & drylining", 2)
                        .with_dependencies(["4.1.2", "4.1.3"]),
                )
                .with_activity(Activity::new("4.2.2", "Floor screed", 1).with_dependency("4.2.1"))
                .with_activity(
                    Activity::new("4.2.3", "Electrical second fix", 1).with_dependency("4.2.1"),
                )
                .with_activity(
                    Activity::new("4.2.4", "Plumbing second fix & sanitaryware", 1)
                        .with_dependency("4.2.1"),
                )
                .with_activity(
                    Activity::new("4.2.5", "Kitchen installation", 1).with_dependency("4.2.2"),
                )
                .with_activity(
                    Activity::new("4.2.6", "Painting & decorating", 2)
                        .with_dependencies(["4.2.3", "4.2.4", "4.2.5"]),
                )
                .with_activity(
                    Activity::new("4.2.7", "Floor finishes", 1).with_dependency("4.2.6"),
                ),
        );

    let completion = Phase::new("Completion")
        .with_work_package(
            WorkPackage::new("External works")
                .with_activity(
                    Activity::new("5.1.1", "Drainage & paving", 2).with_dependency("3.2.3"),
                )
                .with_activity(Activity::new("5.1.2", "Landscaping", 2).with_dependency("5.1.1")),
        )
        .with_work_package(
            WorkPackage::new("Handover")
                .with_activity(
                    Activity::new("5.2.1", "Snagging & remedials", 1)
                        .with_dependencies(["4.2.7", "5.1.2"]),
                )
                .with_activity(
                    Activity::new("5.2.2", "Building control sign-off", 1)
                        .with_dependency("5.2.1"),
                )
                .with_activity(
                    Activity::new("5.2.3", "Practical completion", 1)
                        .with_dependency("5.2.2")
                        .milestone(),
                ),
        );

    ScheduleTemplate::new("New build")
        .with_phase(design_approvals)
        .with_phase(substructure)
        .with_phase(superstructure)
        .with_phase(internal_works)
        .with_phase(completion)
}
