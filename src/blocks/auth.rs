//! Authentication block
//!
//! Every provider except None needs the DI container, and MSAL is not
//! available on macOS (Catalyst) or Desktop. Both constraints are standing
//! rules: whether a dependency flips the wrong way or a gated provider is
//! written directly, the selection falls back to None rather than leaving an
//! impossible configuration behind.

use crate::blocks::{FormRow, OptionBlock, WizardOption};
use crate::property::{Property, PropertyGraph, Signal};
use crate::types::{Auth, PlatformSelection, Preset};

pub struct AuthBlock {
    pub auth: Property<Auth>,
    dependency_injection: Property<bool>,
    platforms: Property<PlatformSelection>,
    update_ui: Signal,
}

impl AuthBlock {
    pub fn new(
        graph: &PropertyGraph,
        dependency_injection: Property<bool>,
        platforms: Property<PlatformSelection>,
    ) -> Self {
        let auth = graph.property("authentication", Auth::None);
        let update_ui = Signal::new();

        {
            let auth = auth.clone();
            let update_ui = update_ui.clone();
            dependency_injection.subscribe(move |&di| {
                if !di {
                    auth.set(Auth::None);
                }
                update_ui.emit();
            });
        }
        {
            let auth = auth.clone();
            let update_ui = update_ui.clone();
            platforms.subscribe(move |sel| {
                if (sel.maccatalyst || sel.desktop) && auth.get() == Auth::Msal {
                    auth.set(Auth::None);
                }
                update_ui.emit();
            });
        }
        {
            // Writes to the selection itself obey the same gates as the
            // dependency listeners: a provider written while its gate is
            // closed falls back to None in the same update.
            let di = dependency_injection.clone();
            let platforms = platforms.clone();
            auth.constrain(move |&variant| {
                (!Self::selectable(di.get(), platforms.get(), variant)).then_some(Auth::None)
            });
        }

        Self {
            auth,
            dependency_injection,
            platforms,
            update_ui,
        }
    }

    fn selectable(di: bool, sel: PlatformSelection, variant: Auth) -> bool {
        match variant {
            Auth::None => true,
            Auth::Custom | Auth::Oidc | Auth::Web => di,
            Auth::Msal => di && !(sel.maccatalyst || sel.desktop),
        }
    }

    /// View enablement for one provider under the current inputs.
    pub fn is_enabled(&self, variant: Auth) -> bool {
        Self::selectable(self.dependency_injection.get(), self.platforms.get(), variant)
    }
}

impl OptionBlock for AuthBlock {
    fn options(&self) -> Vec<WizardOption> {
        vec![WizardOption::new("authentication", &self.auth)]
    }

    fn on_preset_changed(&self, new_preset: Preset) {
        match new_preset {
            Preset::Blank | Preset::Recommended => self.auth.set(Auth::None),
            Preset::Custom => {}
        }
    }

    fn rows(&self) -> Vec<FormRow> {
        let di = self.dependency_injection.clone();
        let platforms = self.platforms.clone();
        vec![FormRow::choice(
            "Authentication",
            &self.auth,
            Auth::label,
            move |variant| Self::selectable(di.get(), platforms.get(), variant),
        )]
    }

    fn update_ui(&self) -> &Signal {
        &self.update_ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_with_inputs() -> (AuthBlock, Property<bool>, Property<PlatformSelection>) {
        let graph = PropertyGraph::new();
        let di = graph.property("dependencyInjection", true);
        let platforms = graph.property("platforms", PlatformSelection::NONE);
        let block = AuthBlock::new(&graph, di.clone(), platforms.clone());
        (block, di, platforms)
    }

    #[test]
    fn test_disabling_di_forces_auth_none() {
        let (block, di, _platforms) = block_with_inputs();
        block.auth.set(Auth::Oidc);

        di.set(false);
        assert_eq!(block.auth.get(), Auth::None);
    }

    #[test]
    fn test_msal_unavailable_on_catalyst_and_desktop() {
        let (block, _di, platforms) = block_with_inputs();

        block.auth.set(Auth::Msal);
        let mut sel = platforms.get();
        sel.maccatalyst = true;
        platforms.set(sel);
        assert_eq!(block.auth.get(), Auth::None);

        block.auth.set(Auth::Msal);
        let mut sel = platforms.get();
        sel.desktop = true;
        platforms.set(sel);
        assert_eq!(block.auth.get(), Auth::None);
    }

    #[test]
    fn test_msal_write_falls_back_while_platform_gate_closed() {
        let (block, _di, platforms) = block_with_inputs();
        let mut sel = platforms.get();
        sel.desktop = true;
        platforms.set(sel);

        block.auth.set(Auth::Msal);
        assert_eq!(block.auth.get(), Auth::None);
    }

    #[test]
    fn test_provider_write_falls_back_while_di_off() {
        let (block, di, _platforms) = block_with_inputs();
        di.set(false);

        block.auth.set(Auth::Oidc);
        assert_eq!(block.auth.get(), Auth::None);
        block.auth.set(Auth::Msal);
        assert_eq!(block.auth.get(), Auth::None);
    }

    #[test]
    fn test_platform_changes_leave_non_msal_auth_alone() {
        let (block, _di, platforms) = block_with_inputs();
        block.auth.set(Auth::Web);

        let mut sel = platforms.get();
        sel.desktop = true;
        sel.maccatalyst = true;
        platforms.set(sel);

        assert_eq!(block.auth.get(), Auth::Web);
    }

    #[test]
    fn test_enablement_rules() {
        let (block, di, platforms) = block_with_inputs();

        assert!(block.is_enabled(Auth::None));
        assert!(block.is_enabled(Auth::Custom));
        assert!(block.is_enabled(Auth::Msal));

        let mut sel = platforms.get();
        sel.desktop = true;
        platforms.set(sel);
        assert!(!block.is_enabled(Auth::Msal));
        assert!(block.is_enabled(Auth::Oidc));

        di.set(false);
        assert!(block.is_enabled(Auth::None));
        assert!(!block.is_enabled(Auth::Custom));
        assert!(!block.is_enabled(Auth::Oidc));
        assert!(!block.is_enabled(Auth::Web));
        assert!(!block.is_enabled(Auth::Msal));
    }

    #[test]
    fn test_presets_reset_to_none() {
        let (block, _di, _platforms) = block_with_inputs();
        block.auth.set(Auth::Custom);
        block.on_preset_changed(Preset::Recommended);
        assert_eq!(block.auth.get(), Auth::None);

        block.auth.set(Auth::Custom);
        block.on_preset_changed(Preset::Custom);
        assert_eq!(block.auth.get(), Auth::Custom);
    }
}
