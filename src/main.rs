use clap::Parser;
use tracing_subscriber::EnvFilter;

use hmm_besthit::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("hmm_besthit=debug,info")
    } else {
        EnvFilter::new("hmm_besthit=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::besthit::run(cli)
}
