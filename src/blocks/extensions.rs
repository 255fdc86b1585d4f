//! Extensions block: dependency injection, configuration, http,
//! localization, navigation, logging
//!
//! Dependency injection is the root of this block's internal dependency
//! tree: everything else here needs the DI container. Turning DI off at any
//! time - by hand or through the Blank preset - forces the dependent options
//! back to their no-DI values.

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Logging, Navigation, Preset};

pub struct ExtensionsBlock {
    pub dependency_injection: Property<bool>,
    pub configuration: Property<bool>,
    pub http: Property<bool>,
    pub localization: Property<bool>,
    pub navigation: Property<Navigation>,
    pub logging: Property<Logging>,
    update_ui: Signal,
}

impl ExtensionsBlock {
    pub fn new(graph: &PropertyGraph) -> Self {
        let dependency_injection = graph.property("dependencyInjection", true);
        let configuration = graph.property("configuration", true);
        let http = graph.property("http", true);
        let localization = graph.property("localization", true);
        let navigation = graph.property("navigation", Navigation::Regions);
        let logging = graph.property("logging", Logging::Default);
        let update_ui = Signal::new();

        {
            let configuration = configuration.clone();
            let http = http.clone();
            let localization = localization.clone();
            let navigation = navigation.clone();
            let logging = logging.clone();
            let update_ui = update_ui.clone();
            dependency_injection.subscribe(move |&di| {
                if !di {
                    configuration.set(false);
                    http.set(false);
                    localization.set(false);
                    navigation.set(Navigation::Blank);
                    logging.set(Logging::Console);
                }
                update_ui.emit();
            });
        }
        // Dependent options cannot be written past the DI gate either: a
        // write that needs the container while it is off snaps back to the
        // no-DI value.
        for flag in [&configuration, &http, &localization] {
            let di = dependency_injection.clone();
            flag.constrain(move |&on| (on && !di.get()).then_some(false));
        }
        {
            let di = dependency_injection.clone();
            navigation.constrain(move |&nav| {
                (nav != Navigation::Blank && !di.get()).then_some(Navigation::Blank)
            });
        }
        {
            let di = dependency_injection.clone();
            logging.constrain(move |&log| {
                (log != Logging::Console && !di.get()).then_some(Logging::Console)
            });
        }

        Self {
            dependency_injection,
            configuration,
            http,
            localization,
            navigation,
            logging,
            update_ui,
        }
    }
}

impl OptionBlock for ExtensionsBlock {
    fn group_label(&self) -> Option<&'static str> {
        Some("Extensions")
    }

    fn options(&self) -> Vec<WizardOption> {
        vec![
            WizardOption::new("dependencyInjection", &self.dependency_injection),
            WizardOption::new("configuration", &self.configuration),
            WizardOption::new("http", &self.http),
            WizardOption::new("localization", &self.localization),
            WizardOption::new("navigation", &self.navigation),
            WizardOption::new("logging", &self.logging),
        ]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank => {
                // The DI listener drags the dependent options down with it.
                self.dependency_injection.set(false);
            }
            Preset::Recommended => {
                self.dependency_injection.set(true);
                self.configuration.set(true);
                self.http.set(true);
                self.localization.set(true);
                self.navigation.set(Navigation::Regions);
                self.logging.set(Logging::Default);
            }
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        let di = self.dependency_injection.get();
        let di_for_nav = self.dependency_injection.clone();
        let di_for_log = self.dependency_injection.clone();
        vec![
            FormRow::toggle("Dependency Injection", &self.dependency_injection, true),
            FormRow::toggle("Configuration", &self.configuration, di),
            FormRow::toggle("HTTP", &self.http, di),
            FormRow::toggle("Localization", &self.localization, di),
            FormRow::choice(
                "Navigation",
                &self.navigation,
                Navigation::label,
                move |variant| di_for_nav.get() || variant == Navigation::Blank,
            ),
            FormRow::choice(
                "Logging",
                &self.logging,
                Logging::label,
                move |variant| di_for_log.get() || variant == Logging::Console,
            ),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_disabling_di_forces_dependents_off() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);

        block.dependency_injection.set(false);

        assert!(!block.configuration.get());
        assert!(!block.http.get());
        assert!(!block.localization.get());
        assert_eq!(block.navigation.get(), Navigation::Blank);
        assert_eq!(block.logging.get(), Logging::Console);
    }

    #[test]
    fn test_enabling_di_does_not_restore_dependents() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);

        block.dependency_injection.set(false);
        block.dependency_injection.set(true);

        assert!(!block.configuration.get());
        assert_eq!(block.navigation.get(), Navigation::Blank);
        assert_eq!(block.logging.get(), Logging::Console);
    }

    #[test]
    fn test_dependent_writes_snap_back_while_di_off() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);
        block.dependency_injection.set(false);

        block.configuration.set(true);
        block.http.set(true);
        block.navigation.set(Navigation::Regions);
        block.logging.set(Logging::Serilog);

        assert!(!block.configuration.get());
        assert!(!block.http.get());
        assert_eq!(block.navigation.get(), Navigation::Blank);
        assert_eq!(block.logging.get(), Logging::Console);
    }

    #[test]
    fn test_blank_preset_goes_through_di() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);

        block.on_preset_changed(Preset::Blank);

        assert!(!block.dependency_injection.get());
        assert!(!block.http.get());
        assert_eq!(block.logging.get(), Logging::Console);
    }

    #[test]
    fn test_recommended_preset_restores_full_stack() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);
        block.on_preset_changed(Preset::Blank);

        block.on_preset_changed(Preset::Recommended);

        assert!(block.dependency_injection.get());
        assert!(block.configuration.get());
        assert!(block.http.get());
        assert!(block.localization.get());
        assert_eq!(block.navigation.get(), Navigation::Regions);
        assert_eq!(block.logging.get(), Logging::Default);
    }

    #[test]
    fn test_di_change_requests_rerender() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);
        let fired = Rc::new(Cell::new(0u32));
        let fired_in = Rc::clone(&fired);
        block.update_ui().connect(move || fired_in.set(fired_in.get() + 1));

        block.dependency_injection.set(false);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_dependent_rows_disabled_without_di() {
        let graph = PropertyGraph::new();
        let block = ExtensionsBlock::new(&graph);
        block.dependency_injection.set(false);

        let rows = block.rows();
        for row in &rows[1..4] {
            let FormRow::Toggle { enabled, .. } = row else {
                panic!("expected a toggle row");
            };
            assert!(!enabled);
        }
        let FormRow::Choice { choices, .. } = &rows[4] else {
            panic!("expected the navigation row");
        };
        // Regions disabled, Blank still selectable.
        assert!(!choices[0].enabled);
        assert!(choices[1].enabled);
    }
}
