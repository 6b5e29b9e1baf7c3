use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use dirstat::cli::Cli;
use dirstat::config::Settings;
use dirstat::core::Report;
use dirstat::logging;

fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    setup_logging()?;

    let cli = Cli::parse();
    run(&cli)
}

/// Diagnostics go to stderr; `RUST_LOG` raises the level.
fn setup_logging() -> Result<()> {
    let subscriber = logging::diagnostics(std::io::stderr, logging::env_filter());
    tracing::subscriber::set_global_default(subscriber).wrap_err("Failed to install logging")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .wrap_err("Failed to load settings")?
    .with_overrides(cli.sort, cli.sizes);

    let report = Report::scan(&cli.root).wrap_err("Scan aborted")?;

    print!("{}", report.render(settings.sort_by, settings.sizes));
    Ok(())
}
