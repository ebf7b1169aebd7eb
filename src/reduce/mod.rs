//! Best-hit reduction of tblout records.
//!
//! HMMER reports every profile that clears the inclusion threshold, so a
//! single query sequence usually appears on many lines. The reducer keeps,
//! per query, only the line with the highest full-sequence bit score.
//!
//! ## Ordering
//!
//! Queries are reported in the order they first appear in the input, not in
//! the order of their final best hit. The table is backed by an `IndexMap`
//! so that order survives later replacements.
//!
//! ## Ties
//!
//! A stored hit is only kept when its score is strictly greater than the
//! incoming one. On equal scores the later line wins.

pub mod reducer;

pub use reducer::{BestHitReducer, BestHits};
