//! Features block: toolkit, MAUI embedding, server, WASM features, VS Code
//! debugging, media element
//!
//! The WASM options are gated on other blocks: multi-threading requires the
//! lowest supported framework AND the WebAssembly platform; the PWA manifest
//! requires the WebAssembly platform. Whenever a gate closes, the gated flag
//! is forced off in the same update, and a flag written true while its gate
//! is closed is forced straight back off.

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Framework, PlatformSelection, Preset};

pub struct FeaturesBlock {
    pub toolkit: Property<bool>,
    pub maui_embedding: Property<bool>,
    pub server: Property<bool>,
    pub wasm_multi_threading: Property<bool>,
    pub wasm_pwa_manifest: Property<bool>,
    pub vscode_debugging: Property<bool>,
    pub media_element: Property<bool>,
    framework: Property<Framework>,
    platforms: Property<PlatformSelection>,
    update_ui: Signal,
}

impl FeaturesBlock {
    pub fn new(
        graph: &PropertyGraph,
        framework: Property<Framework>,
        platforms: Property<PlatformSelection>,
    ) -> Self {
        let toolkit = graph.property("toolkit", true);
        let maui_embedding = graph.property("mauiEmbedding", false);
        let server = graph.property("server", false);
        let wasm_multi_threading = graph.property("wasmMultiThreading", false);
        let wasm_pwa_manifest = graph.property("wasmPwaManifest", true);
        let vscode_debugging = graph.property("vscode", true);
        let media_element = graph.property("mediaElement", false);

        {
            let wasm_multi_threading = wasm_multi_threading.clone();
            framework.subscribe(move |&fw| {
                if fw != Framework::Net80 {
                    wasm_multi_threading.set(false);
                }
            });
        }
        {
            let wasm_multi_threading = wasm_multi_threading.clone();
            let wasm_pwa_manifest = wasm_pwa_manifest.clone();
            platforms.subscribe(move |sel| {
                if !sel.wasm {
                    wasm_multi_threading.set(false);
                    wasm_pwa_manifest.set(false);
                }
            });
        }
        {
            // A gated flag written true while its gate is closed is forced
            // straight back off, same as when the gate closes over it.
            let framework = framework.clone();
            let platforms = platforms.clone();
            wasm_multi_threading.constrain(move |&on| {
                (on && !(framework.get() == Framework::Net80 && platforms.get().wasm))
                    .then_some(false)
            });
        }
        {
            let platforms = platforms.clone();
            wasm_pwa_manifest.constrain(move |&on| (on && !platforms.get().wasm).then_some(false));
        }

        Self {
            toolkit,
            maui_embedding,
            server,
            wasm_multi_threading,
            wasm_pwa_manifest,
            vscode_debugging,
            media_element,
            framework,
            platforms,
            update_ui: Signal::new(),
        }
    }

    /// Gate for the multi-threading checkbox: lowest supported framework and
    /// the WebAssembly platform selected.
    pub fn multi_threading_available(&self) -> bool {
        self.framework.get() == Framework::Net80 && self.platforms.get().wasm
    }
}

impl OptionBlock for FeaturesBlock {
    fn group_label(&self) -> Option<&'static str> {
        Some("Features")
    }

    fn options(&self) -> Vec<WizardOption> {
        vec![
            WizardOption::new("toolkit", &self.toolkit),
            WizardOption::new("mauiEmbedding", &self.maui_embedding),
            WizardOption::new("server", &self.server),
            WizardOption::new("wasmMultiThreading", &self.wasm_multi_threading),
            WizardOption::new("wasmPwaManifest", &self.wasm_pwa_manifest),
            WizardOption::new("vscode", &self.vscode_debugging),
            WizardOption::new("mediaElement", &self.media_element),
        ]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank => {
                self.toolkit.set(false);
                self.maui_embedding.set(false);
                self.server.set(false);
                self.wasm_multi_threading.set(false);
                self.wasm_pwa_manifest.set(true);
                self.vscode_debugging.set(true);
                self.media_element.set(false);
            }
            Preset::Recommended => {
                self.toolkit.set(true);
                self.maui_embedding.set(false);
                self.server.set(false);
                self.wasm_multi_threading.set(false);
                self.wasm_pwa_manifest.set(true);
                self.vscode_debugging.set(true);
                self.media_element.set(false);
            }
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        vec![
            FormRow::toggle("Toolkit", &self.toolkit, true),
            FormRow::toggle(".NET MAUI Embedding", &self.maui_embedding, true),
            FormRow::toggle("Server", &self.server, true),
            FormRow::toggle(
                "WASM Multi-Threading",
                &self.wasm_multi_threading,
                self.multi_threading_available(),
            ),
            FormRow::toggle(
                "PWA Manifest",
                &self.wasm_pwa_manifest,
                self.platforms.get().wasm,
            ),
            FormRow::toggle("VS Code Debugging", &self.vscode_debugging, true),
            FormRow::toggle("Media Element", &self.media_element, true),
        ]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_with_inputs() -> (FeaturesBlock, Property<Framework>, Property<PlatformSelection>) {
        let graph = PropertyGraph::new();
        let framework = graph.property("tfm", Framework::Net80);
        let platforms = graph.property("platforms", PlatformSelection::ALL);
        let block = FeaturesBlock::new(&graph, framework.clone(), platforms.clone());
        (block, framework, platforms)
    }

    #[test]
    fn test_framework_bump_forces_multi_threading_off() {
        let (block, framework, _platforms) = block_with_inputs();
        block.wasm_multi_threading.set(true);

        framework.set(Framework::Net90);
        assert!(!block.wasm_multi_threading.get());
    }

    #[test]
    fn test_dropping_wasm_forces_wasm_features_off() {
        let (block, _framework, platforms) = block_with_inputs();
        block.wasm_multi_threading.set(true);
        assert!(block.wasm_pwa_manifest.get());

        let mut sel = platforms.get();
        sel.wasm = false;
        platforms.set(sel);

        assert!(!block.wasm_multi_threading.get());
        assert!(!block.wasm_pwa_manifest.get());
    }

    #[test]
    fn test_gated_writes_are_forced_back_off() {
        let (block, framework, platforms) = block_with_inputs();

        framework.set(Framework::Net90);
        block.wasm_multi_threading.set(true);
        assert!(!block.wasm_multi_threading.get());

        framework.set(Framework::Net80);
        let mut sel = platforms.get();
        sel.wasm = false;
        platforms.set(sel);

        block.wasm_multi_threading.set(true);
        assert!(!block.wasm_multi_threading.get());
        block.wasm_pwa_manifest.set(true);
        assert!(!block.wasm_pwa_manifest.get());
    }

    #[test]
    fn test_multi_threading_availability_gate() {
        let (block, framework, platforms) = block_with_inputs();
        assert!(block.multi_threading_available());

        framework.set(Framework::Net90);
        assert!(!block.multi_threading_available());

        framework.set(Framework::Net80);
        let mut sel = platforms.get();
        sel.wasm = false;
        platforms.set(sel);
        assert!(!block.multi_threading_available());
    }

    #[test]
    fn test_blank_and_recommended_differ_only_in_toolkit() {
        let (block, _framework, _platforms) = block_with_inputs();
        block.server.set(true);
        block.media_element.set(true);

        block.on_preset_changed(Preset::Blank);
        assert!(!block.toolkit.get());
        assert!(!block.server.get());
        assert!(!block.media_element.get());
        assert!(block.wasm_pwa_manifest.get());
        assert!(block.vscode_debugging.get());

        block.on_preset_changed(Preset::Recommended);
        assert!(block.toolkit.get());
        assert!(!block.server.get());
        assert!(block.wasm_pwa_manifest.get());
        assert!(block.vscode_debugging.get());
    }
}
