//! Target framework and platform selection blocks

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Framework, PlatformSelection, Preset};

/// Target framework version.
pub struct FrameworkBlock {
    pub framework: Property<Framework>,
    update_ui: Signal,
}

impl FrameworkBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            framework: graph.property("tfm", Framework::Net80),
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for FrameworkBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("tfm", &self.framework)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank | Preset::Recommended => self.framework.set(Framework::Net80),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![FormRow::choice(
            "Framework",
            &self.framework,
            Framework::label,
            |_| true,
        )]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

/// Six-flag target platform selection.
pub struct PlatformsBlock {
    pub platforms: Property<PlatformSelection>,
    update_ui: Signal,
}

impl PlatformsBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            platforms: graph.property("platforms", PlatformSelection::ALL),
            update_ui: Signal::new(),
        }
    }

    fn flag_row(
        &self,
        label: &'static str,
        read: fn(&PlatformSelection) -> bool,
        write: fn(&mut PlatformSelection, bool),
    ) -> FormRow {
        let platforms = self.platforms.clone();
        let on = read(&platforms.get());
        FormRow::toggle_with(label, on, true, move || {
            let mut value = platforms.get();
            let flipped = !read(&value);
            write(&mut value, flipped);
            platforms.set(value);
        })
    }
}

impl OptionBlock for PlatformsBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("platforms", &self.platforms)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank | Preset::Recommended => self.platforms.set(PlatformSelection::ALL),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![
            self.flag_row("Android", |p| p.android, |p, v| p.android = v),
            self.flag_row("iOS", |p| p.ios, |p, v| p.ios = v),
            self.flag_row("WebAssembly", |p| p.wasm, |p, v| p.wasm = v),
            self.flag_row("macOS (Catalyst)", |p| p.maccatalyst, |p, v| p.maccatalyst = v),
            self.flag_row("Windows", |p| p.windows, |p, v| p.windows = v),
            self.flag_row("Desktop", |p| p.desktop, |p, v| p.desktop = v),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}
