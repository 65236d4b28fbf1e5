//! Aggregated results grouped by bucket and tier.

use std::{collections::HashMap, slice};

use serde::Serialize;

use crate::{BucketOrder, RelevanceTier};

/// Distinct candidates per reportable tier, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierLists {
    /// Tier 5 candidates.
    #[serde(rename = "5")]
    exact: Vec<String>,
    /// Tier 4 candidates.
    #[serde(rename = "4")]
    strong: Vec<String>,
    /// Tier 3 candidates.
    #[serde(rename = "3")]
    weak: Vec<String>,
}

impl TierLists {
    /// Returns the candidates recorded for `tier`.
    ///
    /// [`RelevanceTier::Unrelated`] always yields an empty slice.
    pub fn get(&self, tier: RelevanceTier) -> &[String] {
        match tier {
            RelevanceTier::Exact => &self.exact,
            RelevanceTier::Strong => &self.strong,
            RelevanceTier::Weak => &self.weak,
            RelevanceTier::Unrelated => &[],
        }
    }

    /// Appends `candidate` under `tier` unless it is already listed there.
    ///
    /// Returns false for duplicates and for [`RelevanceTier::Unrelated`].
    fn push(&mut self, tier: RelevanceTier, candidate: &str) -> bool {
        let list = match tier {
            RelevanceTier::Exact => &mut self.exact,
            RelevanceTier::Strong => &mut self.strong,
            RelevanceTier::Weak => &mut self.weak,
            RelevanceTier::Unrelated => return false,
        };
        if list.iter().any(|existing| existing == candidate) {
            return false;
        }
        list.push(candidate.to_string());
        true
    }

    /// Total candidates across all tiers.
    pub fn len(&self) -> usize {
        self.exact.len() + self.strong.len() + self.weak.len()
    }

    /// Returns true if no tier has a candidate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One bucket and its tier lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketResult {
    /// Bucket label as it appeared in the input.
    pub bucket: String,
    /// Candidates grouped by tier.
    pub tiers: TierLists,
}

/// Relevant candidates grouped by bucket, then by tier.
///
/// Buckets are kept in first-seen order and exist only once a qualifying candidate has
/// been recorded for them, so no bucket is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    /// Buckets in first-seen order.
    buckets: Vec<BucketResult>,
    /// Bucket label -> position in `buckets`.
    index: HashMap<String, usize>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `candidate` under `bucket` and `tier`.
    ///
    /// The bucket is created on the first reportable insert. Returns false when nothing
    /// was recorded: the tier is not reportable, or the candidate is already listed.
    pub fn insert(&mut self, bucket: &str, tier: RelevanceTier, candidate: &str) -> bool {
        if !tier.is_reportable() {
            return false;
        }

        let idx = match self.index.get(bucket) {
            Some(&idx) => idx,
            None => {
                self.index.insert(bucket.to_string(), self.buckets.len());
                self.buckets.push(BucketResult {
                    bucket: bucket.to_string(),
                    tiers: TierLists::default(),
                });
                self.buckets.len() - 1
            }
        };

        self.buckets[idx].tiers.push(tier, candidate)
    }

    /// Returns the tier lists for `bucket`, without creating it.
    pub fn get(&self, bucket: &str) -> Option<&TierLists> {
        self.index.get(bucket).map(|&idx| &self.buckets[idx].tiers)
    }

    /// Returns true if `bucket` has at least one candidate.
    pub fn contains_bucket(&self, bucket: &str) -> bool {
        self.index.contains_key(bucket)
    }

    /// Iterates buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &BucketResult> {
        self.buckets.iter()
    }

    /// Returns bucket labels in first-seen order.
    pub fn buckets(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.bucket.as_str()).collect()
    }

    /// Returns buckets sorted for display by `order`.
    ///
    /// The sort is stable, so buckets with equal keys keep their first-seen order.
    pub fn sorted_by(&self, order: &BucketOrder) -> Vec<&BucketResult> {
        let mut sorted: Vec<&BucketResult> = self.buckets.iter().collect();
        sorted.sort_by_key(|b| order.key(&b.bucket));
        sorted
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no candidate qualified.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total candidates across all buckets and tiers.
    pub fn candidate_count(&self) -> usize {
        self.buckets.iter().map(|b| b.tiers.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a BucketResult;
    type IntoIter = slice::Iter<'a, BucketResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
