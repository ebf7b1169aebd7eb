use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::hit::BestHit;
use crate::core::record::TbloutRecord;
use crate::parsing::ParseError;

/// Finalized best hits, in order of each query's first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestHits {
    hits: IndexMap<String, BestHit>,
}

impl BestHits {
    #[must_use]
    pub fn get(&self, query_id: &str) -> Option<&BestHit> {
        self.hits.get(query_id)
    }

    /// Iterate `(query_id, best hit)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BestHit)> {
        self.hits.iter().map(|(query, hit)| (query.as_str(), hit))
    }

    /// Query identifiers in first-seen order
    #[cfg(test)]
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.hits.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Streaming per-query maximum over tblout records
#[derive(Debug, Default)]
pub struct BestHitReducer {
    hits: IndexMap<String, BestHit>,
    records_seen: usize,
    replacements: usize,
}

impl BestHitReducer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the table.
    ///
    /// Returns `true` if the record became the query's best hit.
    pub fn observe(&mut self, record: TbloutRecord) -> bool {
        self.records_seen += 1;

        match self.hits.entry(record.query_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(BestHit::from(record));
                true
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_superseded_by(&record) {
                    slot.insert(BestHit::from(record));
                    self.replacements += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Drain a record stream, stopping at the first parse error
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `records`.
    pub fn reduce<I>(mut self, records: I) -> Result<BestHits, ParseError>
    where
        I: IntoIterator<Item = Result<TbloutRecord, ParseError>>,
    {
        for record in records {
            self.observe(record?);
        }
        Ok(self.finish())
    }

    /// Number of records observed so far
    #[cfg(test)]
    #[must_use]
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Number of times a stored best hit was replaced
    #[cfg(test)]
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    #[must_use]
    pub fn finish(self) -> BestHits {
        debug!(
            "Reduced {} records to {} queries ({} replacements)",
            self.records_seen,
            self.hits.len(),
            self.replacements
        );
        BestHits { hits: self.hits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tblout::TbloutReader;

    fn record(query: &str, profile: &str, evalue: &str, score: f64, line: usize) -> TbloutRecord {
        TbloutRecord::new(query, profile, evalue, score).with_line(line)
    }

    #[test]
    fn test_keeps_highest_score() {
        let mut reducer = BestHitReducer::new();
        reducer.observe(record("protA", "COG0001", "1e-10", 55.2, 1));
        reducer.observe(record("protA", "COG0003", "1e-50", 99.9, 2));
        reducer.observe(record("protA", "COG0004", "1e-20", 70.0, 3));
        let hits = reducer.finish();

        let best = hits.get("protA").unwrap();
        assert_eq!(best.profile_id, "COG0003");
        assert_eq!(best.e_value, "1e-50");
        assert!((best.bit_score - 99.9).abs() < f64::EPSILON);
        assert_eq!(best.line, 2);
    }

    #[test]
    fn test_lower_score_discarded() {
        let mut reducer = BestHitReducer::new();
        assert!(reducer.observe(record("protA", "PF00001", "1e-30", 80.0, 1)));
        assert!(!reducer.observe(record("protA", "PF00002", "1e-2", 12.0, 2)));
        assert_eq!(reducer.records_seen(), 2);
        assert_eq!(reducer.replacements(), 0);

        let hits = reducer.finish();
        assert_eq!(hits.get("protA").unwrap().profile_id, "PF00001");
    }

    #[test]
    fn test_equal_score_later_line_wins() {
        let mut reducer = BestHitReducer::new();
        reducer.observe(record("protA", "PF00001", "1e-5", 42.0, 1));
        assert!(reducer.observe(record("protA", "PF00002", "2e-5", 42.0, 2)));
        assert_eq!(reducer.replacements(), 1);

        let hits = reducer.finish();
        let best = hits.get("protA").unwrap();
        assert_eq!(best.profile_id, "PF00002");
        assert_eq!(best.e_value, "2e-5");
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let mut reducer = BestHitReducer::new();
        reducer.observe(record("protC", "PF00001", "1", 1.0, 1));
        reducer.observe(record("protA", "PF00001", "1", 1.0, 2));
        reducer.observe(record("protB", "PF00001", "1", 1.0, 3));
        // A later, better hit must not move protC to the end
        reducer.observe(record("protC", "PF00009", "1e-90", 300.0, 4));
        let hits = reducer.finish();

        let order: Vec<&str> = hits.queries().collect();
        assert_eq!(order, vec!["protC", "protA", "protB"]);
        assert_eq!(hits.get("protC").unwrap().profile_id, "PF00009");
    }

    #[test]
    fn test_hit_fields_come_from_one_line() {
        // Scores rise and fall; the reported triple must match a single line
        let lines = [
            ("PF00001", "1e-3", 10.0),
            ("PF00002", "1e-9", 31.5),
            ("PF00003", "1e-1", 4.0),
            ("PF00004", "1e-12", 31.5),
            ("PF00005", "1e-7", 25.0),
        ];

        let mut reducer = BestHitReducer::new();
        for (i, (profile, evalue, score)) in lines.iter().enumerate() {
            reducer.observe(record("q", profile, evalue, *score, i + 1));
        }
        let hits = reducer.finish();
        let best = hits.get("q").unwrap();

        let (profile, evalue, score) = lines[best.line - 1];
        assert_eq!(best.profile_id, profile);
        assert_eq!(best.e_value, evalue);
        assert!((best.bit_score - score).abs() < f64::EPSILON);
        assert_eq!(best.profile_id, "PF00004");
    }

    #[test]
    fn test_reported_score_is_maximum() {
        let scores = [
            ("a", 3.0),
            ("b", 8.5),
            ("a", 17.25),
            ("b", 2.0),
            ("a", 9.0),
            ("c", -1.5),
            ("b", 8.75),
        ];

        let mut reducer = BestHitReducer::new();
        for (i, (query, score)) in scores.iter().enumerate() {
            reducer.observe(record(query, "PF", "1", *score, i + 1));
        }
        let hits = reducer.finish();

        for query in hits.queries() {
            let max = scores
                .iter()
                .filter(|(q, _)| *q == query)
                .map(|(_, s)| *s)
                .fold(f64::NEG_INFINITY, f64::max);
            assert!((hits.get(query).unwrap().bit_score - max).abs() < f64::EPSILON);
        }
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_reduce_from_reader() {
        let text = "# comment line ignored\n\
                    protA   -    COG0001   -   1e-10  55.2   extra\n\
                    protA   -    COG0001   -   1e-50  99.9   extra\n\
                    protB   -    COG0002   -   1e-5   10.0   extra\n";

        let hits = BestHitReducer::new()
            .reduce(TbloutReader::new(text.as_bytes()))
            .unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits.get("protA").unwrap().e_value, "1e-50");
        assert_eq!(hits.get("protB").unwrap().profile_id, "COG0002");
    }

    #[test]
    fn test_reduce_stops_on_error() {
        let text = "protA - COG0001 - 1e-10 55.2\nprotB - COG0002 - 1e-5 n/a\n";
        let result = BestHitReducer::new().reduce(TbloutReader::new(text.as_bytes()));
        assert!(matches!(
            result,
            Err(ParseError::MalformedScore { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let hits = BestHitReducer::new()
            .reduce(TbloutReader::new("# nothing here\n".as_bytes()))
            .unwrap();
        assert!(hits.is_empty());
    }
}
