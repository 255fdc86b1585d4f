//! Architecture, markup, and theme blocks

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Architecture, Markup, Preset, Theme};

/// Presentation architecture. Reads the preset property to disable the None
/// choice while Recommended is active, so it re-renders on preset changes.
pub struct ArchitectureBlock {
    pub architecture: Property<Architecture>,
    preset: Property<Preset>,
    update_ui: Signal,
}

impl ArchitectureBlock {
    pub fn new(graph: &PropertyGraph, preset: Property<Preset>) -> Self {
        Self {
            architecture: graph.property("architecture", Architecture::Mvux),
            preset,
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for ArchitectureBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("architecture", &self.architecture)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank => self.architecture.set(Architecture::None),
            Preset::Recommended => self.architecture.set(Architecture::Mvux),
            Preset::Custom => {}
        }
        self.update_ui.emit();
    }

    fn rows(&self) -> Vec<FormRow> {
        let preset = self.preset.clone();
        vec![FormRow::choice(
            "Presentation",
            &self.architecture,
            Architecture::label,
            move |variant| {
                !(variant == Architecture::None && preset.get() == Preset::Recommended)
            },
        )]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

/// UI markup language.
pub struct MarkupBlock {
    pub markup: Property<Markup>,
    update_ui: Signal,
}

impl MarkupBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        Self {
            markup: graph.property("markup", Markup::Xaml),
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for MarkupBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("markup", &self.markup)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank | Preset::Recommended => self.markup.set(Markup::Xaml),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![FormRow::choice(
            "Markup",
            &self.markup,
            Markup::label,
            |_| true,
        )]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

/// Theme selection plus the theme-service and design-system-import flags.
///
/// Standing rule independent of presets: selecting a theme without a design
/// system (Fluent, Cupertino) forces the DSP import off. Material leaves it
/// alone.
pub struct ThemeBlock {
    pub theme: Property<Theme>,
    pub theme_service: Property<bool>,
    pub dsp: Property<bool>,
    update_ui: Signal,
}

impl ThemeBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        let theme = graph.property("appTheme", Theme::Material);
        let theme_service = graph.property("themeService", true);
        let dsp = graph.property("dspGenerator", true);

        {
            let dsp = dsp.clone();
            theme.subscribe(move |t| {
                if !t.supports_dsp() {
                    dsp.set(false);
                }
            });
        }
        {
            // Writing the flag on under Fluent or Cupertino is refused too.
            let theme = theme.clone();
            dsp.constrain(move |&on| (on && !theme.get().supports_dsp()).then_some(false));
        }

        Self {
            theme,
            theme_service,
            dsp,
            update_ui: Signal::new(),
        }
    }
}

impl OptionBlock for ThemeBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![
            WizardOption::new("appTheme", &self.theme),
            WizardOption::new("themeService", &self.theme_service),
            WizardOption::new("dspGenerator", &self.dsp),
        ]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank => {
                self.theme.set(Theme::Fluent);
                self.theme_service.set(false);
                self.dsp.set(false);
            }
            Preset::Recommended => {
                self.theme.set(Theme::Material);
                self.theme_service.set(true);
                self.dsp.set(true);
            }
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::choice("Theme", &self.theme, Theme::label, |_| true),
            FormRow::toggle("Theme Service", &self.theme_service, true),
            FormRow::toggle("Import DSP", &self.dsp, self.theme.get().supports_dsp()),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}
