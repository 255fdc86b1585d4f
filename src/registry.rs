//! Option registry: block assembly, preset cascade, Custom demotion
//!
//! This module owns the two protocols that make the form behave:
//!
//! - **Preset cascade**: when the preset property changes, every block's
//!   `on_preset_changed` runs in registration order inside one
//!   [`SuppressionGuard::run`]. Later blocks read the already-updated values
//!   of earlier blocks within the same pass, so the order is load-bearing.
//! - **Custom demotion**: every exported option of every block except the
//!   preset and application blocks carries a listener that marks the preset
//!   Custom - unless the write happened under the guard, i.e. was part of a
//!   cascade the user just asked for.
//!
//! Termination is guaranteed by write-if-new (no notification on unchanged
//! values), not by forbidding re-entrancy.

use std::rc::Rc;

use crate::blocks::{
    ApplicationBlock, ArchitectureBlock, AuthBlock, CiBlock, ExtensionsBlock, FeaturesBlock,
    FormRow, FrameworkBlock, MarkupBlock, OptionBlock, PlatformsBlock, PresetBlock, TestsBlock,
    ThemeBlock,
};
use crate::property::{Property, PropertyGraph, SuppressionGuard};
use crate::types::Preset;

/// All twelve blocks in registration order, plus the wiring between them.
///
/// Constructed once when the wizard view is created; lives for the session;
/// discarded without persistence when the wizard closes. The only output that
/// survives is the option map from [`all_options`](Self::all_options).
pub struct OptionRegistry {
    pub preset: Rc<PresetBlock>,
    pub framework: Rc<FrameworkBlock>,
    pub platforms: Rc<PlatformsBlock>,
    pub architecture: Rc<ArchitectureBlock>,
    pub markup: Rc<MarkupBlock>,
    pub theme: Rc<ThemeBlock>,
    pub extensions: Rc<ExtensionsBlock>,
    pub features: Rc<FeaturesBlock>,
    pub auth: Rc<AuthBlock>,
    pub application: Rc<ApplicationBlock>,
    pub tests: Rc<TestsBlock>,
    pub ci: Rc<CiBlock>,
    blocks: Rc<Vec<Rc<dyn OptionBlock>>>,
    guard: SuppressionGuard,
    project_name: Property<String>,
}

impl OptionRegistry {
    /// Builds and wires every block. `project_name` is the external input the
    /// application identity block derives from; the registry does not own it.
    pub fn new(graph: &PropertyGraph, project_name: Property<String>) -> Self {
        let preset = Rc::new(PresetBlock::new(graph));
        let framework = Rc::new(FrameworkBlock::new(graph));
        let platforms = Rc::new(PlatformsBlock::new(graph));
        let architecture = Rc::new(ArchitectureBlock::new(graph, preset.preset.clone()));
        let markup = Rc::new(MarkupBlock::new(graph));
        let theme = Rc::new(ThemeBlock::new(graph));
        let extensions = Rc::new(ExtensionsBlock::new(graph));
        let features = Rc::new(FeaturesBlock::new(
            graph,
            framework.framework.clone(),
            platforms.platforms.clone(),
        ));
        let auth = Rc::new(AuthBlock::new(
            graph,
            extensions.dependency_injection.clone(),
            platforms.platforms.clone(),
        ));
        let application = Rc::new(ApplicationBlock::new(graph, &project_name));
        let tests = Rc::new(TestsBlock::new(graph));
        let ci = Rc::new(CiBlock::new(graph));

        let blocks: Rc<Vec<Rc<dyn OptionBlock>>> = Rc::new(vec![
            preset.clone(),
            framework.clone(),
            platforms.clone(),
            architecture.clone(),
            markup.clone(),
            theme.clone(),
            extensions.clone(),
            features.clone(),
            auth.clone(),
            application.clone(),
            tests.clone(),
            ci.clone(),
        ]);

        let guard = SuppressionGuard::new();

        // Preset cascade: one guarded pass over all blocks in order. The
        // closure holds the block list weakly so dropping the registry tears
        // the whole graph down.
        {
            let guard = guard.clone();
            let weak_blocks = Rc::downgrade(&blocks);
            preset.preset.subscribe(move |&new_preset| {
                let Some(blocks) = weak_blocks.upgrade() else {
                    return;
                };
                tracing::debug!(preset = new_preset.label(), "running preset cascade");
                guard.run(|| {
                    for block in blocks.iter() {
                        block.on_preset_changed(new_preset);
                    }
                });
            });
        }

        // Custom demotion: user edits to any option outside the preset and
        // application blocks invalidate the selected preset. Cascade writes
        // are recognized by the active guard and skipped.
        let demotable: [&Rc<dyn OptionBlock>; 10] = [
            &(blocks[1]), // framework
            &(blocks[2]), // platforms
            &(blocks[3]), // architecture
            &(blocks[4]), // markup
            &(blocks[5]), // theme
            &(blocks[6]), // extensions
            &(blocks[7]), // features
            &(blocks[8]), // auth
            &(blocks[10]), // tests
            &(blocks[11]), // ci
        ];
        for block in demotable {
            for option in block.options() {
                let guard = guard.clone();
                let preset_property = preset.preset.clone();
                let name = option.name;
                option.on_change(move || {
                    if guard.is_suppressed() {
                        return;
                    }
                    tracing::debug!(option = name, "user edit, demoting preset to custom");
                    preset_property.set(Preset::Custom);
                });
            }
        }

        Self {
            preset,
            framework,
            platforms,
            architecture,
            markup,
            theme,
            extensions,
            features,
            auth,
            application,
            tests,
            ci,
            blocks,
            guard,
            project_name,
        }
    }

    /// Explicit preset selection, as the form's preset selector does it.
    pub fn select_preset(&self, preset: Preset) {
        self.preset.preset.set(preset);
    }

    /// Current preset state.
    pub fn current_preset(&self) -> Preset {
        self.preset.preset.get()
    }

    /// True while a preset cascade is writing; listeners use this to tell
    /// cascade writes from user edits.
    pub fn is_cascading(&self) -> bool {
        self.guard.is_suppressed()
    }

    /// Blocks in registration order.
    pub fn blocks(&self) -> &[Rc<dyn OptionBlock>] {
        &self.blocks
    }

    /// The external project-name property the identity block derives from.
    pub fn project_name(&self) -> &Property<String> {
        &self.project_name
    }

    /// The flattened option map handed to the generation backend: the union
    /// of all blocks' exports, in block declaration order, serialized.
    pub fn all_options(&self) -> Vec<(&'static str, String)> {
        self.blocks
            .iter()
            .flat_map(|block| block.options())
            .map(|option| (option.name, option.serialized()))
            .collect()
    }

    /// Forwards every block's re-render request to one container callback.
    /// The container is expected to re-invoke the block's render operation
    /// and re-derive shared layout (see [`label_width`](Self::label_width)).
    pub fn connect_update_ui(&self, f: impl Fn() + Clone + 'static) {
        for block in self.blocks.iter() {
            block.update_ui().connect(f.clone());
        }
    }

    /// All form rows in registration order, with group headings inserted for
    /// blocks that declare one.
    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows = Vec::new();
        for block in self.blocks.iter() {
            if let Some(group) = block.group_label() {
                rows.push(FormRow::Heading(group));
            }
            rows.extend(block.rows());
        }
        rows
    }

    /// Shared layout metric: the widest row label across all blocks. The
    /// container aligns the label column to it after every re-render.
    pub fn label_width(&self) -> usize {
        self.rows()
            .iter()
            .map(|row| row.label().chars().count())
            .max()
            .unwrap_or(0)
    }
}
