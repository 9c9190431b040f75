use clap::Parser;
use html_locators::cli::commands::{cmd_checkbox, cmd_locators};
use html_locators::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Locators {
            source,
            format,
            output,
            trace,
        } => {
            cmd_locators(
                &source,
                format.as_deref(),
                output.as_deref(),
                trace.as_deref(),
                &config,
            )?;
        }
        Commands::Checkbox { source, label } => {
            cmd_checkbox(&source, label.as_deref(), &config)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for the variables block.
/// `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
