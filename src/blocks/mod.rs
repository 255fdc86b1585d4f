//! Option blocks for the wizard form
//!
//! A block is a cohesive group of related options with its own preset
//! reaction. Blocks are polymorphic over [`OptionBlock`]: each one exports
//! its named options, reacts to preset changes, produces its form rows for
//! the container to draw, and can ask for a re-render through its signal.
//!
//! Submodules, in block registration order:
//! - `preset` - the Blank/Recommended/Custom selector
//! - `targets` - target framework and platform selection
//! - `presentation` - architecture, markup, theme
//! - `extensions` - dependency injection and friends
//! - `features` - toolkit, server, WASM features
//! - `auth` - authentication provider
//! - `identity` - derived application id and publisher
//! - `delivery` - test projects and CI pipeline

mod auth;
mod delivery;
mod extensions;
mod features;
mod identity;
mod presentation;
mod preset;
mod targets;

pub use auth::AuthBlock;
pub use delivery::{CiBlock, TestsBlock};
pub use extensions::ExtensionsBlock;
pub use features::FeaturesBlock;
pub use identity::ApplicationBlock;
pub use presentation::{ArchitectureBlock, MarkupBlock, ThemeBlock};
pub use preset::PresetBlock;
pub use targets::{FrameworkBlock, PlatformsBlock};

use std::fmt;
use std::rc::Rc;

use strum::IntoEnumIterator;

use crate::property::{Property, Signal};
use crate::types::Preset;

/// Capability set every block implements.
pub trait OptionBlock {
    /// Collapsible group header; blocks without one render inline.
    fn group_label(&self) -> Option<&'static str> {
        None
    }

    /// The options this block exports, in declaration order.
    fn options(&self) -> Vec<WizardOption>;

    /// Applies this block's defaults for `new_preset` via write-if-new.
    /// Called inside the suppression guard, in block registration order.
    fn on_preset_changed(&self, new_preset: Preset);

    /// Renders the block as form rows. The engine treats the result as
    /// opaque; the container draws it.
    fn rows(&self) -> Vec<FormRow>;

    /// Fired when the block wants its view recomputed.
    fn update_ui(&self) -> &Signal;
}

/// Type-erased view of a property, enough for the registry to serialize it
/// and watch it for user edits.
pub trait OptionSource {
    fn serialized(&self) -> String;
    fn on_change(&self, f: Box<dyn Fn()>);
}

impl<T: Clone + PartialEq + fmt::Display + 'static> OptionSource for Property<T> {
    fn serialized(&self) -> String {
        self.get().to_string()
    }

    fn on_change(&self, f: Box<dyn Fn()>) {
        self.subscribe(move |_| f());
    }
}

/// A named option exported by a block.
pub struct WizardOption {
    pub name: &'static str,
    source: Rc<dyn OptionSource>,
}

impl WizardOption {
    pub fn new<T: Clone + PartialEq + fmt::Display + 'static>(
        name: &'static str,
        property: &Property<T>,
    ) -> Self {
        Self {
            name,
            source: Rc::new(property.clone()),
        }
    }

    /// Current value in generator form.
    pub fn serialized(&self) -> String {
        self.source.serialized()
    }

    /// Watches the underlying property for changes.
    pub fn on_change(&self, f: impl Fn() + 'static) {
        self.source.on_change(Box::new(f));
    }
}

/// One selectable choice inside a [`FormRow::Choice`] row.
pub struct Choice {
    pub label: &'static str,
    pub selected: bool,
    pub enabled: bool,
    pub select: Box<dyn Fn()>,
}

/// A single row of the wizard form, produced by a block's render operation.
///
/// Rows are snapshots: they carry the displayed state plus closures that
/// write back into the block's properties. The container rebuilds them after
/// every edit and whenever a block requests a re-render.
pub enum FormRow {
    /// Collapsible group header.
    Heading(&'static str),
    /// Segmented selector over an enum.
    Choice {
        label: &'static str,
        choices: Vec<Choice>,
    },
    /// Checkbox.
    Toggle {
        label: &'static str,
        on: bool,
        enabled: bool,
        toggle: Box<dyn Fn()>,
    },
    /// Free-text field.
    Text {
        label: &'static str,
        value: String,
        set: Box<dyn Fn(String)>,
    },
}

impl FormRow {
    /// Builds a choice row over every variant of `T`, with per-variant
    /// enablement.
    pub fn choice<T>(
        label: &'static str,
        property: &Property<T>,
        labeler: fn(&T) -> &'static str,
        enabled: impl Fn(T) -> bool + 'static,
    ) -> Self
    where
        T: Copy + PartialEq + IntoEnumIterator + 'static,
    {
        let current = property.get();
        let choices = T::iter()
            .map(|variant| {
                let property = property.clone();
                Choice {
                    label: labeler(&variant),
                    selected: variant == current,
                    enabled: enabled(variant),
                    select: Box::new(move || property.set(variant)),
                }
            })
            .collect();
        Self::Choice { label, choices }
    }

    /// Builds a checkbox row bound directly to a boolean property.
    pub fn toggle(label: &'static str, property: &Property<bool>, enabled: bool) -> Self {
        let on = property.get();
        let property = property.clone();
        Self::Toggle {
            label,
            on,
            enabled,
            toggle: Box::new(move || property.set(!property.get())),
        }
    }

    /// Builds a checkbox row with a custom flip action, for flags living
    /// inside composite values.
    pub fn toggle_with(
        label: &'static str,
        on: bool,
        enabled: bool,
        toggle: impl Fn() + 'static,
    ) -> Self {
        Self::Toggle {
            label,
            on,
            enabled,
            toggle: Box::new(toggle),
        }
    }

    /// Builds a text row bound to a string property.
    pub fn text(label: &'static str, property: &Property<String>) -> Self {
        let value = property.get();
        let property = property.clone();
        Self::Text {
            label,
            value,
            set: Box::new(move |v| property.set(v)),
        }
    }

    /// Label shown in the shared left column; empty for headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading(_) => "",
            Self::Choice { label, .. }
            | Self::Toggle { label, .. }
            | Self::Text { label, .. } => label,
        }
    }
}
