//! Best-hit report writers.
//!
//! Each query's best hit is joined with its profile description and written
//! as one row. Rows follow the order in which queries first appeared in the
//! tblout input.
//!
//! ## TSV
//!
//! ```text
//! Query	TIGRFAM	Description	Bit_Score	Evalue
//! protA	COG0001	Ribosomal protein S1	99.9	1e-50
//! protB	COG0002		10.0	1e-5
//! ```
//!
//! Profiles missing from the description table get an empty description.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::parsing::descriptions::DescriptionTable;
use crate::reduce::BestHits;

/// Column names of the TSV report
pub const TSV_HEADER: [&str; 5] = ["Query", "TIGRFAM", "Description", "Bit_Score", "Evalue"];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One joined output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow<'a> {
    pub query: &'a str,
    pub profile_id: &'a str,
    pub description: &'a str,
    pub bit_score: f64,
    pub e_value: &'a str,
}

/// Join best hits with their descriptions, in report order
pub fn rows<'a>(
    hits: &'a BestHits,
    descriptions: &'a DescriptionTable,
) -> impl Iterator<Item = ReportRow<'a>> {
    hits.iter().map(|(query, hit)| ReportRow {
        query,
        profile_id: &hit.profile_id,
        description: descriptions.get(&hit.profile_id),
        bit_score: hit.bit_score,
        e_value: &hit.e_value,
    })
}

/// Number of best hits whose profile has no description
#[must_use]
pub fn missing_descriptions(hits: &BestHits, descriptions: &DescriptionTable) -> usize {
    rows(hits, descriptions)
        .filter(|row| row.description.is_empty())
        .count()
}

/// Render a bit score as its shortest round-tripping decimal.
///
/// Integral values keep a trailing `.0` so a score is never mistaken for a
/// count.
#[must_use]
pub fn format_score(score: f64) -> String {
    let mut text = score.to_string();
    if score.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Write the tab-separated report
///
/// # Errors
///
/// Returns `ReportError::Io` if writing fails.
pub fn write_tsv<W: Write>(
    writer: &mut W,
    hits: &BestHits,
    descriptions: &DescriptionTable,
) -> Result<(), ReportError> {
    writeln!(writer, "{}", TSV_HEADER.join("\t"))?;

    for row in rows(hits, descriptions) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.query,
            row.profile_id,
            row.description,
            format_score(row.bit_score),
            row.e_value,
        )?;
    }

    debug!(
        "Wrote {} report rows ({} without description)",
        hits.len(),
        missing_descriptions(hits, descriptions)
    );
    Ok(())
}

/// Write the report as a pretty-printed JSON array
///
/// # Errors
///
/// Returns `ReportError::Json` if serialization fails, or `ReportError::Io`
/// if writing fails.
pub fn write_json<W: Write>(
    writer: &mut W,
    hits: &BestHits,
    descriptions: &DescriptionTable,
) -> Result<(), ReportError> {
    let output: Vec<ReportRow<'_>> = rows(hits, descriptions).collect();
    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)?;
    debug!(
        "Wrote {} report rows as JSON ({} without description)",
        output.len(),
        missing_descriptions(hits, descriptions)
    );
    Ok(())
}
