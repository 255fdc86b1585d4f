//! Application identity block
//!
//! The app identifier and publisher are derived from the project name
//! (`com.companyname.<name>`, `O=<name>`) until the user edits them by hand;
//! after that they are detached for good. This block is excluded from the
//! mark-Custom demotion rule: editing identity does not invalidate a preset.

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{DerivedProperty, Property, PropertyGraph, Signal};
use crate::types::Preset;

pub struct ApplicationBlock {
    app_id: DerivedProperty,
    publisher: DerivedProperty,
    update_ui: Signal,
}

impl ApplicationBlock {
    /// `project_name` is external, read-only input owned by the wizard shell.
    pub fn new(graph: &PropertyGraph, project_name: &Property<String>) -> Self {
        Self {
            app_id: DerivedProperty::new(graph, "appId", project_name, |name| {
                format!("com.companyname.{name}")
            }),
            publisher: DerivedProperty::new(graph, "publisher", project_name, |name| {
                format!("O={name}")
            }),
            update_ui: Signal::new(),
        }
    }

    pub fn app_id(&self) -> &Property<String> {
        self.app_id.property()
    }

    pub fn publisher(&self) -> &Property<String> {
        self.publisher.property()
    }
}

impl OptionBlock for ApplicationBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![
            WizardOption::new("appId", self.app_id.property()),
            WizardOption::new("publisher", self.publisher.property()),
        ]
    }

    fn on_preset_changed(&self, _new_preset: Preset) {}

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::text("Application ID", self.app_id.property()),
            FormRow::text("Publisher", self.publisher.property()),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_derived_from_project_name() {
        let graph = PropertyGraph::new();
        let name = graph.property("projectName", "App1".to_string());
        let block = ApplicationBlock::new(&graph, &name);

        assert_eq!(block.app_id().get(), "com.companyname.App1");
        assert_eq!(block.publisher().get(), "O=App1");

        name.set("Weather".to_string());
        assert_eq!(block.app_id().get(), "com.companyname.Weather");
        assert_eq!(block.publisher().get(), "O=Weather");
    }

    #[test]
    fn test_touched_field_detaches_independently() {
        let graph = PropertyGraph::new();
        let name = graph.property("projectName", "App1".to_string());
        let block = ApplicationBlock::new(&graph, &name);

        block.app_id().set("io.example.weather".to_string());
        name.set("Weather".to_string());

        // app id keeps the explicit value, publisher still tracks.
        assert_eq!(block.app_id().get(), "io.example.weather");
        assert_eq!(block.publisher().get(), "O=Weather");
    }

    #[test]
    fn test_preset_changes_do_not_touch_identity() {
        let graph = PropertyGraph::new();
        let name = graph.property("projectName", "App1".to_string());
        let block = ApplicationBlock::new(&graph, &name);

        block.on_preset_changed(Preset::Blank);
        assert_eq!(block.app_id().get(), "com.companyname.App1");

        name.set("Other".to_string());
        assert_eq!(block.app_id().get(), "com.companyname.Other");
    }
}
