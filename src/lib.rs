//! Appforge library
//!
//! Core of the project-creation wizard: a reactive option engine, twelve
//! option blocks, the registry that wires them, and the TUI shell plus
//! generation plumbing around them.

pub mod blocks;
pub mod cli;
pub mod error;
pub mod generator;
pub mod property;
pub mod protocol;
pub mod registry;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export the main types for convenience
pub use error::{AppforgeError, Result};
pub use generator::GenerationRequest;
pub use property::{DerivedProperty, Property, PropertyGraph, Signal, SuppressionGuard};
pub use registry::OptionRegistry;
pub use types::{
    Architecture, Auth, Ci, Framework, Logging, Markup, Navigation, PlatformSelection, Preset,
    TestSelection, Theme,
};
pub use ui::{WizardApp, WizardOutcome};
