/// A single data line from HMMER3 `--tblout` output.
///
/// Only the columns used for best-hit selection are kept. The e-value is
/// carried as the original text so it is reported exactly as HMMER wrote it.
#[derive(Debug, Clone, PartialEq)]
pub struct TbloutRecord {
    /// Query sequence name (column 1)
    pub query_id: String,

    /// Matched profile name (column 3)
    pub profile_id: String,

    /// Full-sequence E-value, verbatim (column 5)
    pub e_value: String,

    /// Full-sequence bit score (column 6)
    pub bit_score: f64,

    /// 1-based line number in the source file
    pub line: usize,
}

impl TbloutRecord {
    pub fn new(
        query_id: impl Into<String>,
        profile_id: impl Into<String>,
        e_value: impl Into<String>,
        bit_score: f64,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            profile_id: profile_id.into(),
            e_value: e_value.into(),
            bit_score,
            line: 0,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}
