//! Built-in schedule templates and the template registry.
//!
//! Ships one hand-built template per [`ProjectType`], each covering a
//! typical project of that kind from design to handover. The
//! [`TemplateLibrary`] maps project types to templates and accepts
//! custom templates alongside or instead of the built-ins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ProjectType, ScheduleTemplate};

mod fit_out;
mod new_build;
mod refurbishment;

/// The built-in new-build template.
pub fn new_build() -> ScheduleTemplate {
    new_build::template()
}

/// The built-in fit-out template.
pub fn fit_out() -> ScheduleTemplate {
    fit_out::template()
}

/// The built-in refurbishment template.
pub fn refurbishment() -> ScheduleTemplate {
    refurbishment::template()
}

/// Registry of schedule templates keyed by project type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: HashMap<ProjectType, ScheduleTemplate>,
}

impl TemplateLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Creates the standard library holding every built-in template.
    pub fn standard() -> Self {
        Self::new()
            .with_template(ProjectType::NewBuild, new_build())
            .with_template(ProjectType::FitOut, fit_out())
            .with_template(ProjectType::Refurbishment, refurbishment())
    }

    /// Registers a template, replacing any existing one for the type.
    pub fn with_template(
        mut self,
        project_type: ProjectType,
        template: ScheduleTemplate,
    ) -> Self {
        self.templates.insert(project_type, template);
        self
    }

    /// The template registered for a project type.
    pub fn template_for(&self, project_type: ProjectType) -> Option<&ScheduleTemplate> {
        self.templates.get(&project_type)
    }

    /// Registered project types, in canonical order.
    pub fn project_types(&self) -> Vec<ProjectType> {
        ProjectType::ALL
            .into_iter()
            .filter(|t| self.templates.contains_key(t))
            .collect()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateLibrary {
    /// The standard library.
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_covers_all_types() {
        let library = TemplateLibrary::standard();
        assert_eq!(library.len(), 3);
        assert_eq!(library.project_types(), ProjectType::ALL.to_vec());
        for project_type in ProjectType::ALL {
            assert!(library.template_for(project_type).is_some());
        }
    }

    #[test]
    fn test_empty_library() {
        let library = TemplateLibrary::new();
        assert!(library.is_empty());
        assert!(library.template_for(ProjectType::NewBuild).is_none());
    }

    #[test]
    fn test_custom_template_replaces_builtin() {
        let custom = ScheduleTemplate::new("Tiny build");
        let library =
            TemplateLibrary::standard().with_template(ProjectType::NewBuild, custom);
        assert_eq!(library.len(), 3);
        assert_eq!(
            library.template_for(ProjectType::NewBuild).unwrap().name,
            "Tiny build"
        );
    }
}
