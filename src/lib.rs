//! # hmm-besthit
//!
//! A library for reducing HMMER3 tabular output to one annotated hit per query.
//!
//! `hmmsearch --tblout` lists every profile that a sequence matched, so a
//! protein searched against TIGRFAM or COG models typically appears on many
//! lines. For annotation you usually want only the strongest match, together
//! with a readable name for the profile.
//!
//! `hmm-besthit` streams the tblout file once, keeps the highest bit-scoring
//! line for each query, and joins the winning profile against a description
//! table.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hmm_besthit::{BestHitReducer, DescriptionTable, TbloutReader};
//! use std::path::Path;
//!
//! let descriptions = DescriptionTable::load(Path::new("TIGRFAMs_INFO.tsv")).unwrap();
//! let records = TbloutReader::open(Path::new("proteins.tblout")).unwrap();
//! let hits = BestHitReducer::new().reduce(records).unwrap();
//!
//! for (query, hit) in hits.iter() {
//!     println!("{query}: {} ({})", hit.profile_id, descriptions.get(&hit.profile_id));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Record and hit types
//! - [`parsing`]: Readers for tblout files and description tables
//! - [`reduce`]: Streaming best-hit reduction
//! - [`report`]: TSV and JSON report writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod reduce;
pub mod report;

// Re-export commonly used types for convenience
pub use core::hit::BestHit;
pub use core::record::TbloutRecord;
pub use parsing::descriptions::DescriptionTable;
pub use parsing::tblout::TbloutReader;
pub use parsing::ParseError;
pub use reduce::{BestHitReducer, BestHits};
