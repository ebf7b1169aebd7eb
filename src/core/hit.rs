use crate::core::record::TbloutRecord;

/// The best-scoring match kept for one query.
///
/// Profile, score and e-value always come from the same source line; a
/// `BestHit` is replaced as a whole and never edited field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct BestHit {
    pub profile_id: String,
    pub bit_score: f64,
    pub e_value: String,

    /// Line the hit was taken from
    pub line: usize,
}

impl BestHit {
    /// Whether `candidate` should take this hit's place.
    ///
    /// Only a strictly better stored score keeps the current hit, so an equal
    /// score hands the slot to the later line.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)] // NaN scores must not hold the slot
    pub fn is_superseded_by(&self, candidate: &TbloutRecord) -> bool {
        !(self.bit_score > candidate.bit_score)
    }
}

impl From<TbloutRecord> for BestHit {
    fn from(record: TbloutRecord) -> Self {
        Self {
            profile_id: record.profile_id,
            bit_score: record.bit_score,
            e_value: record.e_value,
            line: record.line,
        }
    }
}
