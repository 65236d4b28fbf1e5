//! Curated tier overrides.
//!
//! An override assigns an authoritative tier to a specific (target, candidate) pair.
//! Targets are keyed by their normalized form; candidates are matched on their exact,
//! un-normalized text.

use std::collections::HashMap;

use crate::{RelevanceTier, keyword::normalize};

/// Curated tiers for the candidates of one target, keyed by exact candidate text.
pub type CandidateTiers = HashMap<String, RelevanceTier>;

/// Curated tier assignments that take precedence over the heuristic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    /// Normalized target -> exact candidate text -> tier.
    targets: HashMap<String, CandidateTiers>,
}

impl OverrideTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the mapping for `target`.
    ///
    /// Any previous mapping for the same normalized target is discarded entirely, not
    /// merged. Returns the replaced mapping, if there was one.
    pub fn insert<I, K>(&mut self, target: &str, mapping: I) -> Option<CandidateTiers>
    where
        I: IntoIterator<Item = (K, RelevanceTier)>,
        K: Into<String>,
    {
        let mapping = mapping.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.targets.insert(normalize(target), mapping)
    }

    /// Layers `other` on top of this table, replacing whole mappings per target.
    pub fn apply(&mut self, other: Self) {
        self.targets.extend(other.targets);
    }

    /// Returns the mapping for `target`, normalizing the lookup key.
    pub fn get(&self, target: &str) -> Option<&CandidateTiers> {
        self.targets.get(&normalize(target))
    }

    /// Returns the curated tier for an exact `candidate` under `target`.
    pub fn lookup(&self, target: &str, candidate: &str) -> Option<RelevanceTier> {
        self.get(target)?.get(candidate).copied()
    }

    /// Returns true if a mapping exists for `target`.
    pub fn contains_target(&self, target: &str) -> bool {
        self.get(target).is_some()
    }

    /// Returns the normalized targets in sorted order.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }

    /// Number of targets with a mapping.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
