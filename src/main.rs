mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::DirectoryWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in aidfind::ui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    aidfind::logging::initialize()?;

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_session(cli.output, resolved)
}

/// Run the interactive session and print the summary in the chosen format.
fn run_session(format: OutputFormat, settings: settings::ResolvedConfig) -> Result<()> {
    let workflow = DirectoryWorkflow::from_config(settings)?;
    let outcome = workflow.run()?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
