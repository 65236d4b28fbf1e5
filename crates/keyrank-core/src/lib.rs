//! Keyword relevance ranking.
//!
//! Given a target keyword and rows of (bucket, candidate) pairs, keyrank assigns each
//! candidate a [`RelevanceTier`] and groups the relevant ones by bucket:
//!
//! 1. **Classification**: curated [`OverrideTable`] entries win; otherwise a containment
//!    and shared-word heuristic picks tier 5, 4, 3 or 0 ([`classify`]).
//! 2. **Aggregation**: rows with a missing candidate are skipped, tier 0 is discarded,
//!    and the rest are recorded once per bucket and tier ([`aggregate`]).
//! 3. **Ordering**: buckets are sorted for display by the number embedded in their
//!    label ([`BucketOrder`]); ordering never changes what a [`ResultSet`] contains.
//!
//! ```
//! use keyrank_core::{OverrideTable, RelevanceTier, Row, aggregate};
//!
//! let rows = vec![Row::new("1월", "차박텐트"), Row::new("1월", "캠핑")];
//! let result = aggregate(&rows, "차박텐트", &OverrideTable::new()).unwrap();
//! assert_eq!(result.get("1월").unwrap().get(RelevanceTier::Exact), ["차박텐트"]);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod classify;
mod error;
mod keyword;
mod order;
mod overrides;
mod result;
mod tier;

pub use aggregate::{AggregateStats, Row, Session, aggregate, aggregate_with_stats};
pub use classify::{Classification, Reason, classify, explain, heuristic_tier};
pub use error::RankError;
pub use keyword::{Keyword, normalize};
pub use order::{BucketOrder, MONTH_UNIT, UNORDERED, order_key, sort_buckets};
pub use overrides::{CandidateTiers, OverrideTable};
pub use result::{BucketResult, ResultSet, TierLists};
pub use tier::RelevanceTier;
