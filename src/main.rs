//! Appforge - main entry point
//!
//! Sets up logging and the terminal, runs the wizard, and hands the result
//! to the generator.

use std::io::stdout;

use anyhow::Context;
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use appforge::cli::{Cli, Commands};
use appforge::protocol::BackendCaller;
use appforge::{
    AppforgeError, GenerationRequest, OptionRegistry, PropertyGraph, WizardApp, WizardOutcome,
};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    let graph = PropertyGraph::new();
    let project_name = graph.property("projectName", cli.name.clone());
    let registry = OptionRegistry::new(&graph, project_name);

    match cli.command.take() {
        Some(Commands::Dump { preset, pretty }) => {
            registry.select_preset(preset.into());
            let request = GenerationRequest::from_registry(&registry, &cli.output)
                .context("building generation request")?;
            println!("{}", request.to_json(pretty)?);
            Ok(())
        }
        Some(Commands::Wizard) | None => run_wizard(registry, &cli),
    }
}

fn run_wizard(registry: OptionRegistry, cli: &Cli) -> anyhow::Result<()> {
    info!("starting wizard");
    enable_raw_mode().map_err(|e| AppforgeError::terminal(format!("enabling raw mode: {e}")))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| AppforgeError::terminal(format!("creating terminal: {e}")))?;
    terminal.clear()?;

    let mut app = WizardApp::new(registry);
    let outcome = app.run(&mut terminal);

    // Restore the terminal before reporting any error from the session.
    disable_raw_mode().map_err(|e| AppforgeError::terminal(format!("disabling raw mode: {e}")))?;
    terminal.show_cursor()?;

    match outcome? {
        WizardOutcome::Cancelled => {
            info!("wizard cancelled, nothing generated");
        }
        WizardOutcome::Generate => {
            let request = GenerationRequest::from_registry(app.registry(), &cli.output)
                .context("building generation request")?;
            let manifest_path = cli.output.join("appforge.json");
            request
                .write_manifest(&manifest_path)
                .context("writing manifest")?;

            // Notify the template backend; the sample backend just echoes.
            let caller = BackendCaller::default();
            let answer = caller.call(request.project_name.clone()).wait()?;
            info!(answer, "backend acknowledged generation request");
            println!("Created manifest for {} at {}", request.project_name, manifest_path.display());
        }
    }
    Ok(())
}
