use std::io::{BufWriter, Write};

use anyhow::Context;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::parsing::descriptions::DescriptionTable;
use crate::parsing::tblout::TbloutReader;
use crate::reduce::BestHitReducer;
use crate::report;

/// Execute the best-hit reduction and print the report to stdout
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed, or if the
/// report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let descriptions = DescriptionTable::load(&cli.descriptions).with_context(|| {
        format!(
            "Failed to load descriptions from {}",
            cli.descriptions.display()
        )
    })?;

    if descriptions.is_empty() {
        tracing::warn!(
            "Description table {} is empty; all descriptions will be blank",
            cli.descriptions.display()
        );
    }

    let records = TbloutReader::open(&cli.tblout)
        .with_context(|| format!("Failed to open {}", cli.tblout.display()))?;
    let hits = BestHitReducer::new()
        .reduce(records)
        .with_context(|| format!("Failed to parse {}", cli.tblout.display()))?;

    debug!(
        "{} queries with hits in {}",
        hits.len(),
        cli.tblout.display()
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Tsv => report::write_tsv(&mut out, &hits, &descriptions)?,
        OutputFormat::Json => report::write_json(&mut out, &hits, &descriptions)?,
    }
    out.flush()?;

    Ok(())
}
