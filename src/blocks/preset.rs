//! Preset selector block

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::Preset;

/// Holds the preset property itself. The cascade that reacts to it lives in
/// the registry; this block only renders the selector and exports the value.
pub struct PresetBlock {
    pub preset: Property<Preset>,
    update_ui: Signal,
}

impl PresetBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            preset: graph.property("preset", Preset::Recommended),
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for PresetBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("preset", &self.preset)]
    }

    fn on_preset_changed(&self, _new_preset: Preset) {}

    fn rows(&self) -> Vec<FormRow> {
        vec![FormRow::choice(
            "Preset",
            &self.preset,
            Preset::label,
            |_| true,
        )]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}
