//! Per-bucket aggregation of classified candidates.

use tracing::{debug, info};

use crate::{
    CandidateTiers, OverrideTable, RankError, RelevanceTier, ResultSet, classify::heuristic_tier,
};

/// One input row: a bucket label and an optional candidate keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Grouping label, such as a month.
    pub bucket: String,
    /// Candidate keyword; `None` when the source cell was missing.
    pub candidate: Option<String>,
}

impl Row {
    /// Creates a row with a candidate.
    pub fn new(bucket: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            candidate: Some(candidate.into()),
        }
    }

    /// Creates a row whose candidate is missing.
    pub fn missing(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            candidate: None,
        }
    }

    /// Returns the candidate if it is present and not blank.
    pub fn candidate(&self) -> Option<&str> {
        self.candidate
            .as_deref()
            .filter(|candidate| !candidate.trim().is_empty())
    }
}

/// Row counts from one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    /// Rows examined.
    pub rows: usize,
    /// Rows skipped because the candidate was missing or blank.
    pub skipped: usize,
    /// Rows classified below the reporting threshold.
    pub discarded: usize,
    /// Rows classified as reportable, including duplicates.
    pub kept: usize,
}

/// Classifies each row against `target` and groups reportable candidates by bucket.
///
/// Fails with [`RankError::EmptyQuery`] before touching any row when `target` is blank.
pub fn aggregate<'a, I>(
    rows: I,
    target: &str,
    overrides: &OverrideTable,
) -> Result<ResultSet, RankError>
where
    I: IntoIterator<Item = &'a Row>,
{
    aggregate_with_stats(rows, target, overrides).map(|(result, _)| result)
}

/// Like [`aggregate`], also returning row counts.
pub fn aggregate_with_stats<'a, I>(
    rows: I,
    target: &str,
    overrides: &OverrideTable,
) -> Result<(ResultSet, AggregateStats), RankError>
where
    I: IntoIterator<Item = &'a Row>,
{
    if target.trim().is_empty() {
        return Err(RankError::EmptyQuery);
    }

    let curated = overrides.get(target);
    let mut result = ResultSet::new();
    let mut stats = AggregateStats::default();

    for row in rows {
        stats.rows += 1;

        let Some(candidate) = row.candidate() else {
            stats.skipped += 1;
            continue;
        };

        let tier = curated_tier(curated, candidate)
            .unwrap_or_else(|| heuristic_tier(candidate, target));
        if !tier.is_reportable() {
            stats.discarded += 1;
            continue;
        }

        stats.kept += 1;
        result.insert(&row.bucket, tier, candidate);
    }

    if stats.skipped > 0 {
        debug!(skipped = stats.skipped, "skipped rows without a candidate");
    }
    info!(
        query = target,
        rows = stats.rows,
        kept = stats.kept,
        discarded = stats.discarded,
        buckets = result.len(),
        "aggregated keywords"
    );

    Ok((result, stats))
}

/// Looks up an exact candidate in a target's curated mapping.
fn curated_tier(curated: Option<&CandidateTiers>, candidate: &str) -> Option<RelevanceTier> {
    curated?.get(candidate).copied()
}

/// A loaded keyword table and the overrides used to search it.
///
/// Searching before [`load`](Self::load) fails with [`RankError::NoDataLoaded`], which
/// keeps "no data" distinct from "no matches".
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Curated overrides applied to every search.
    overrides: OverrideTable,
    /// Loaded rows, if any.
    rows: Option<Vec<Row>>,
}

impl Session {
    /// Creates a session with no rows loaded.
    pub fn new(overrides: OverrideTable) -> Self {
        Self {
            overrides,
            rows: None,
        }
    }

    /// Loads rows, replacing any previously loaded rows.
    pub fn load(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows = Some(rows.into_iter().collect());
    }

    /// Returns true once rows have been loaded, even if there were none.
    pub fn is_loaded(&self) -> bool {
        self.rows.is_some()
    }

    /// Returns the loaded rows.
    pub fn rows(&self) -> Option<&[Row]> {
        self.rows.as_deref()
    }

    /// Returns the override table.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Adds or fully replaces the curated mapping for `target`.
    pub fn add_override<I, K>(&mut self, target: &str, mapping: I)
    where
        I: IntoIterator<Item = (K, RelevanceTier)>,
        K: Into<String>,
    {
        self.overrides.insert(target, mapping);
    }

    /// Aggregates the loaded rows against `target`.
    pub fn search(&self, target: &str) -> Result<ResultSet, RankError> {
        self.search_with_stats(target).map(|(result, _)| result)
    }

    /// Aggregates the loaded rows against `target`, also returning row counts.
    pub fn search_with_stats(
        &self,
        target: &str,
    ) -> Result<(ResultSet, AggregateStats), RankError> {
        let rows = self.rows.as_ref().ok_or(RankError::NoDataLoaded)?;
        aggregate_with_stats(rows, target, &self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camping_rows() -> Vec<Row> {
        vec![
            Row::new("1월", "차박텐트"),
            Row::new("1월", "캠핑"),
            Row::new("2월", "차박텐트"),
        ]
    }

    #[test]
    fn rejects_blank_target() {
        let rows = camping_rows();
        assert_eq!(
            aggregate(&rows, "   ", &OverrideTable::new()),
            Err(RankError::EmptyQuery)
        );
        assert_eq!(
            aggregate(&rows, "", &OverrideTable::new()),
            Err(RankError::EmptyQuery)
        );
    }

    #[test]
    fn counts_rows() {
        let mut rows = camping_rows();
        rows.push(Row::missing("3월"));
        rows.push(Row::new("3월", "  "));
        rows.push(Row::new("1월", "차박텐트"));

        let (result, stats) =
            aggregate_with_stats(&rows, "차박텐트", &OverrideTable::new()).unwrap();
        assert_eq!(
            stats,
            AggregateStats {
                rows: 6,
                skipped: 2,
                discarded: 1,
                kept: 3,
            }
        );
        assert_eq!(result.candidate_count(), 2);
        assert!(!result.contains_bucket("3월"));
    }

    #[test]
    fn blank_candidate_is_missing() {
        assert_eq!(Row::new("1월", " \t").candidate(), None);
        assert_eq!(Row::missing("1월").candidate(), None);
        assert_eq!(Row::new("1월", " 캠핑").candidate(), Some(" 캠핑"));
    }

    #[test]
    fn candidates_keep_original_text() {
        let rows = vec![Row::new("1월", " 차박텐트")];
        let result = aggregate(&rows, "차박텐트", &OverrideTable::new()).unwrap();
        assert_eq!(
            result.get("1월").unwrap().get(RelevanceTier::Exact),
            [" 차박텐트"]
        );
    }

    #[test]
    fn session_requires_loaded_rows() {
        let session = Session::new(OverrideTable::new());
        assert!(!session.is_loaded());
        assert_eq!(session.search("차박텐트"), Err(RankError::NoDataLoaded));
    }

    #[test]
    fn session_distinguishes_no_matches_from_no_data() {
        let mut session = Session::default();
        session.load(Vec::new());
        assert!(session.is_loaded());
        let result = session.search("차박텐트").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn session_checks_data_before_query() {
        let session = Session::default();
        assert_eq!(session.search(""), Err(RankError::NoDataLoaded));
    }

    #[test]
    fn session_overrides_apply_to_search() {
        let mut session = Session::default();
        session.load(camping_rows());
        session.add_override("차박텐트", [("캠핑", RelevanceTier::Weak)]);

        let result = session.search("차박텐트").unwrap();
        assert_eq!(result.get("1월").unwrap().get(RelevanceTier::Weak), ["캠핑"]);

        session.add_override("차박텐트", [("레이 차박텐트", RelevanceTier::Strong)]);
        let result = session.search("차박텐트").unwrap();
        assert!(result.get("1월").unwrap().get(RelevanceTier::Weak).is_empty());
    }
}
