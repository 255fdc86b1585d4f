//! Test projects and CI pipeline blocks

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Ci, Preset, TestSelection};

/// Unit and UI test project selection.
pub struct TestsBlock {
    pub tests: Property<TestSelection>,
    update_ui: Signal,
}

impl TestsBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            tests: graph.property("tests", TestSelection::BOTH),
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for TestsBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("tests", &self.tests)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank => self.tests.set(TestSelection::NONE),
            Preset::Recommended => self.tests.set(TestSelection::BOTH),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        let value = self.tests.get();
        let unit = self.tests.clone();
        let ui = self.tests.clone();
        vec![
            FormRow::toggle_with("Unit Tests", value.unit, true, move || {
                let mut v = unit.get();
                v.unit = !v.unit;
                unit.set(v);
            }),
            FormRow::toggle_with("UI Tests", value.ui, true, move || {
                let mut v = ui.get();
                v.ui = !v.ui;
                ui.set(v);
            }),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

/// Continuous integration pipeline selection.
pub struct CiBlock {
    pub ci: Property<Ci>,
    update_ui: Signal,
}

impl CiBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            ci: graph.property("continuousIntegration", Ci::None),
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for CiBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("continuousIntegration", &self.ci)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank | Preset::Recommended => self.ci.set(Ci::None),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![FormRow::choice("CI Pipeline", &self.ci, Ci::label, |_| true)]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_preset_defaults() {
        let graph = PropertyGraph::new();
        let block = TestsBlock::new(&graph);

        block.on_preset_changed(Preset::Blank);
        assert_eq!(block.tests.get(), TestSelection::NONE);
        assert_eq!(block.tests.get().to_string(), "none");

        block.on_preset_changed(Preset::Recommended);
        assert_eq!(block.tests.get(), TestSelection::BOTH);
    }

    #[test]
    fn test_test_toggles_flip_individual_flags() {
        let graph = PropertyGraph::new();
        let block = TestsBlock::new(&graph);

        let rows = block.rows();
        let FormRow::Toggle { toggle, .. } = &rows[1] else {
            panic!("expected a toggle row");
        };
        toggle();

        let value = block.tests.get();
        assert!(value.unit);
        assert!(!value.ui);
    }

    #[test]
    fn test_ci_resets_to_none_on_presets() {
        let graph = PropertyGraph::new();
        let block = CiBlock::new(&graph);
        block.ci.set(Ci::Github);

        block.on_preset_changed(Preset::Blank);
        assert_eq!(block.ci.get(), Ci::None);

        block.ci.set(Ci::Azure);
        block.on_preset_changed(Preset::Custom);
        assert_eq!(block.ci.get(), Ci::Azure);
    }
}
