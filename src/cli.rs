use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Preset;

/// Appforge - cross-platform app project creation wizard
#[derive(Parser)]
#[command(name = "appforge")]
#[command(about = "Interactive wizard for creating cross-platform app projects")]
#[command(version)]
pub struct Cli {
    /// Project name to preload into the wizard
    #[arg(short, long, default_value = "App1", global = true)]
    pub name: String,

    /// Directory the generated project is created in
    #[arg(short, long, default_value = ".", global = true)]
    pub output: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive wizard (default)
    Wizard,
    /// Print the option map for a preset without opening the wizard
    Dump {
        /// Preset to apply before dumping
        #[arg(long, value_enum, default_value = "recommended")]
        preset: PresetArg,

        /// Pretty-print the JSON manifest
        #[arg(long)]
        pretty: bool,
    },
}

/// CLI-facing preset names. Custom is not selectable from the command line;
/// it only ever arises from edits inside the wizard.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    Blank,
    Recommended,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Blank => Preset::Blank,
            PresetArg::Recommended => Preset::Recommended,
        }
    }
}
