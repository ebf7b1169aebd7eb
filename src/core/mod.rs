//! Core data types for best-hit reduction.
//!
//! - [`TbloutRecord`]: One data line of HMMER3 `--tblout` output
//! - [`BestHit`]: The winning profile, score and e-value kept for a query
//!
//! ## Field mapping
//!
//! HMMER's tblout names columns from the search program's point of view.
//! With `hmmsearch` the *target* is the sequence and the *query* is the
//! profile; here "query" always means the annotated sequence:
//!
//! | tblout column | Field |
//! |---------------|-------|
//! | target name   | `query_id` |
//! | query name    | `profile_id` |
//! | E-value (full sequence) | `e_value` |
//! | score (full sequence)   | `bit_score` |
//!
//! [`TbloutRecord`]: record::TbloutRecord
//! [`BestHit`]: hit::BestHit

pub mod hit;
pub mod record;
