//! Built-in template for refurbishment of an existing building.
//!
//! Starts with surveys and consents, then enabling works, structural
//! and envelope repairs, and full services renewal before handover.
//! Milestones mark consent, the weathertight envelope, and handover.

use crate::models::{Activity, Phase, ScheduleTemplate, WorkPackage};

/// Builds the refurbishment template.
pub(super) fn template() -> ScheduleTemplate {
    let survey_design = Phase::new("Survey & design")
        .with_work_package(
            WorkPackage::new("Investigation")
                .with_activity(Activity::new("1.1.1", "Measured survey", 2))
                .with_activity(
                    Activity::new("1.1.2", "Condition survey", 2).with_dependency("1.1.1"),
                )
                .with_activity(
                    Activity::new("1.1.3", "Asbestos & hazmat survey", 1)
                        .with_dependency("1.1.1"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Design")
                .with_activity(
                    Activity::new("1.2.1", "Refurbishment design", 4)
                        .with_dependencies(["1.1.2", "1.1.3"]),
                )
                .with_activity(
                    Activity::new("1.2.2", "Listed-building & landlord consents", 4)
                        .with_dependency("1.2.1"),
                )
                .with_activity(
                    Activity::new("1.2.3", "Consent granted", 1)
                        .with_dependency("1.2.2")
                        .milestone(),
                ),
        );

    let enabling = Phase::new("Enabling works").with_work_package(
        WorkPackage::new("Protection & strip-out")
            .with_activity(
                Activity::new("2.1.1", "Site setup & protection", 1).with_dependency("1.2.3"),
            )
            .with_activity(Activity::new("2.1.2", "Soft strip-out", 2).with_dependency("2.1.1"))
            .with_activity(
                Activity::new("2.1.3", "Hazardous material removal", 2).with_dependency("2.1.2"),
            ),
    );

    let repairs = Phase::new("Structural repairs")
        .with_work_package(
            WorkPackage::new("Fabric")
                .with_activity(
                    Activity::new("3.1.1", "Structural repairs", 3).with_dependency("2.1.3"),
                )
                .with_activity(
                    Activity::new("3.1.2", "Damp-proofing & timber treatment", 2)
                        .with_dependency("3.1.1"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Envelope")
                .with_activity(Activity::new("3.2.1", "Roof repairs", 3).with_dependency("2.1.3"))
                .with_activity(
                    Activity::new("3.2.2", "Window overhaul & replacement", 3)
                        .with_dependency("3.1.1"),
                )
                .with_activity(
                    Activity::new("3.2.3", "Envelope weathertight", 1)
                        .with_dependencies(["3.2.1", "3.2.2"])
                        .milestone(),
                ),
        );

    let interiors = Phase::new("Services & interiors")
        .with_work_package(
            WorkPackage::new("Services renewal")
                .with_activity(
                    Activity::new("4.1.1", "Electrical rewire first fix", 3)
                        .with_dependency("3.2.3"),
                )
                .with_activity(
                    Activity::new("4.1.2", "Heating & plumbing renewal", 3)
                        .with_dependency("3.2.3"),
                ),
        )
        .with_work_package(
            WorkPackage::new("Interiors")
                .with_activity(
                    Activity::new("4.2.1", "Replastering", 2)
                        .with_dependencies(["4.1.1", "4.1.2", "3.1.2"]),
                )
                .with_activity(
                    Activity::new("4.2.2", "Second fix services", 2).with_dependency("4.2.1"),
                )
                .with_activity(
                    Activity::new("4.2.3", "New kitchens & bathrooms", 2)
                        .with_dependency("4.2.2"),
                )
                .with_activity(Activity::new("4.2.4", "Decoration", 2).with_dependency("4.2.3"))
                .with_activity(
                    Activity::new("4.2.5", "Floor finishes", 1).with_dependency("4.2.4"),
                ),
        );

    let completion = Phase::new("Completion").with_work_package(
        WorkPackage::new("Handover")
            .with_activity(
                Activity::new("5.1.1", "Snagging & remedials", 1).with_dependency("4.2.5"),
            )
            .with_activity(
                Activity::new("5.1.2", "Final inspection & handover", 1)
                    .with_dependency("5.1.1")
                    .milestone(),
            ),
    );

    ScheduleTemplate::new("Refurbishment")
        .with_phase(survey_design)
        .with_phase(enabling)
        .with_phase(repairs)
        .with_phase(interiors)
        .with_phase(completion)
}
