//! Relevance classification.
//!
//! Assigns a [`RelevanceTier`] to a (candidate, target) pair. Curated overrides are
//! consulted first; otherwise a containment heuristic decides:
//!
//! - **5**: one normalized string contains the other and their lengths are close
//! - **4**: one contains the other but the lengths differ by more than 20%
//! - **3**: no containment, but the two share a whitespace-delimited word
//! - **0**: none of the above
//!
//! Classification is pure and never fails.

use std::fmt;

use crate::{
    OverrideTable, RelevanceTier,
    keyword::{char_len, normalize, words},
};

/// Why a pair received its tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// A curated override supplied the tier.
    Override,
    /// The candidate or target was blank after normalization.
    EmptyInput,
    /// One string contains the other and the lengths are within 20%.
    NearIdentical,
    /// One string contains the other but the lengths differ by more than 20%.
    Containment,
    /// No containment, but both contain this word.
    SharedWord(String),
    /// Neither containment nor a shared word.
    NoRelation,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "curated override"),
            Self::EmptyInput => write!(f, "blank keyword"),
            Self::NearIdentical => write!(f, "contained, near-identical length"),
            Self::Containment => write!(f, "contained, length differs by more than 20%"),
            Self::SharedWord(word) => write!(f, "shares the word '{word}'"),
            Self::NoRelation => write!(f, "no shared text"),
        }
    }
}

/// A tier together with the reason it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Assigned tier.
    pub tier: RelevanceTier,
    /// Rule that produced the tier.
    pub reason: Reason,
}

impl Classification {
    /// Pairs a tier with its reason.
    const fn new(tier: RelevanceTier, reason: Reason) -> Self {
        Self { tier, reason }
    }
}

/// Classifies `candidate` against `target`, honoring curated overrides.
///
/// The override lookup uses the normalized target but the exact, un-normalized
/// candidate text.
pub fn classify(candidate: &str, target: &str, overrides: &OverrideTable) -> RelevanceTier {
    overrides
        .lookup(target, candidate)
        .unwrap_or_else(|| heuristic_tier(candidate, target))
}

/// Classifies `candidate` against `target` and reports which rule decided.
pub fn explain(candidate: &str, target: &str, overrides: &OverrideTable) -> Classification {
    match overrides.lookup(target, candidate) {
        Some(tier) => Classification::new(tier, Reason::Override),
        None => explain_heuristic(candidate, target),
    }
}

/// Classifies a pair with the heuristic alone, ignoring overrides.
pub fn heuristic_tier(candidate: &str, target: &str) -> RelevanceTier {
    explain_heuristic(candidate, target).tier
}

/// Runs the containment and shared-word heuristic.
fn explain_heuristic(candidate: &str, target: &str) -> Classification {
    let candidate = normalize(candidate);
    let target = normalize(target);

    // Every string contains "", so blank input must not reach the containment test.
    if candidate.is_empty() || target.is_empty() {
        return Classification::new(RelevanceTier::Unrelated, Reason::EmptyInput);
    }

    let (candidate_len, target_len) = (char_len(&candidate), char_len(&target));
    let (shorter, longer, shorter_len, longer_len) = if candidate_len <= target_len {
        (&candidate, &target, candidate_len, target_len)
    } else {
        (&target, &candidate, target_len, candidate_len)
    };

    if longer.contains(shorter.as_str()) {
        return if is_near_identical(shorter_len, longer_len) {
            Classification::new(RelevanceTier::Exact, Reason::NearIdentical)
        } else {
            Classification::new(RelevanceTier::Strong, Reason::Containment)
        };
    }

    match shared_word(&candidate, &target) {
        Some(word) => Classification::new(RelevanceTier::Weak, Reason::SharedWord(word)),
        None => Classification::new(RelevanceTier::Unrelated, Reason::NoRelation),
    }
}

/// True when `longer` is at most 1.2 times `shorter`.
///
/// The lower bound of the [0.8, 1.2] window always holds for the longer string.
const fn is_near_identical(shorter: usize, longer: usize) -> bool {
    longer * 5 <= shorter * 6
}

/// Returns the first candidate word that also appears in the target.
fn shared_word(candidate: &str, target: &str) -> Option<String> {
    let target_words = words(target);
    candidate
        .split_whitespace()
        .find(|word| target_words.contains(word))
        .map(str::to_string)
}
