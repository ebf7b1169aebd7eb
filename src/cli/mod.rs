//! Command-line interface for hmm-besthit.
//!
//! The tool takes a profile description table and an HMMER3 `--tblout` file
//! and prints the best-scoring profile for every query sequence.
//!
//! ## Usage
//!
//! ```text
//! # Best TIGRFAM hit per protein
//! hmm-besthit TIGRFAMs_15.0_INFO.tsv proteins.tblout > best_hits.tsv
//!
//! # Read hmmsearch output from a pipe
//! hmmsearch --tblout /dev/stdout -o /dev/null TIGRFAMs.hmm proteins.faa \
//!     | hmm-besthit TIGRFAMs_15.0_INFO.tsv -
//!
//! # JSON output for scripting
//! hmm-besthit --format json cog_descriptions.tsv hits.tblout.gz
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod besthit;

#[derive(Parser)]
#[command(name = "hmm-besthit")]
#[command(version)]
#[command(about = "Report the best-scoring HMM profile hit for each query sequence")]
#[command(
    long_about = "hmm-besthit reduces HMMER3 tabular (--tblout) output to the single best hit per query sequence.\n\nFor every query it keeps the line with the highest full-sequence bit score, looks up the matched profile in a description table, and prints one row per query in the order queries first appear in the input."
)]
pub struct Cli {
    /// Profile description table (tab-separated; column 1 is the profile ID, column 4 the description)
    #[arg(required = true)]
    pub descriptions: PathBuf,

    /// HMMER3 --tblout file. Use '-' for stdin
    #[arg(required = true)]
    pub tblout: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}
