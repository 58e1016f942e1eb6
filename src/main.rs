use anyhow::Result;
use buildstats::cli::{Cli, Commands};
use buildstats::{gather, summary};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    match args.command {
        Commands::Gather {
            output_file,
            base_dir,
            quiet,
        } => gather::run(&output_file, &base_dir, quiet)?,
        Commands::Summarize { csv_file, format } => summary::run(&csv_file, format)?,
    }

    Ok(())
}
