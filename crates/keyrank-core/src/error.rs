//! Error types for relevance ranking.

use thiserror::Error;

/// Errors surfaced by the ranking core.
///
/// Rows with a missing candidate and buckets without an ordering hint are tolerated
/// rather than reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A search was requested before any rows were loaded.
    #[error("no keyword data loaded; load a dataset before searching")]
    NoDataLoaded,

    /// The target keyword is blank after trimming.
    #[error("target keyword is empty")]
    EmptyQuery,

    /// An integer score that does not name a tier.
    #[error("invalid relevance tier {0}: expected 0, 3, 4 or 5")]
    InvalidTier(u8),

    /// A bucket unit marker that could not be compiled into an ordering pattern.
    #[error("invalid bucket unit '{unit}': {message}")]
    InvalidBucketUnit {
        /// The rejected unit marker.
        unit: String,
        /// Underlying pattern error.
        message: String,
    },
}
