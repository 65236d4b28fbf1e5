//! Display ordering for buckets.
//!
//! Bucket labels conventionally embed a number followed by a unit marker, such as the
//! month in `"3월"`. The ordering key is that number; labels without one sort last.

use std::sync::LazyLock;

use regex::Regex;

use crate::RankError;

/// Ordering key assigned to buckets without a parseable number.
pub const UNORDERED: u64 = u64::MAX;

/// Unit marker for month buckets.
pub const MONTH_UNIT: &str = "월";

/// Compiled pattern for month buckets.
static MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    unit_pattern(MONTH_UNIT).expect("month bucket pattern is valid")
});

/// Builds the digits-then-unit pattern for `unit`.
fn unit_pattern(unit: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("([0-9]+){}", regex::escape(unit)))
}

/// Extracts ordering keys from bucket labels.
#[derive(Debug, Clone)]
pub struct BucketOrder {
    /// Digits followed by the unit marker; group 1 captures the digits.
    pattern: Regex,
}

impl Default for BucketOrder {
    fn default() -> Self {
        Self::month()
    }
}

impl BucketOrder {
    /// Orders buckets by an embedded month number (`"12월"` -> 12).
    pub fn month() -> Self {
        Self {
            pattern: MONTH_PATTERN.clone(),
        }
    }

    /// Orders buckets by the number immediately preceding `unit`.
    pub fn with_unit(unit: &str) -> Result<Self, RankError> {
        if unit == MONTH_UNIT {
            return Ok(Self::month());
        }
        let pattern = unit_pattern(unit).map_err(|e| RankError::InvalidBucketUnit {
            unit: unit.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Returns the ordering key for `bucket`, or [`UNORDERED`] when none is found.
    pub fn key(&self, bucket: &str) -> u64 {
        self.pattern
            .captures(bucket)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
            .unwrap_or(UNORDERED)
    }

    /// Stable-sorts bucket labels by their ordering key.
    pub fn sort<S: AsRef<str>>(&self, buckets: &mut [S]) {
        buckets.sort_by_key(|b| self.key(b.as_ref()));
    }
}

/// Returns the month ordering key for `bucket`.
pub fn order_key(bucket: &str) -> u64 {
    BucketOrder::month().key(bucket)
}

/// Stable-sorts bucket labels by their month ordering key.
pub fn sort_buckets<S: AsRef<str>>(buckets: &mut [S]) {
    BucketOrder::month().sort(buckets);
}
