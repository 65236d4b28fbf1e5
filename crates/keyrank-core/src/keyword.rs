//! Keyword normalization.
//!
//! Keywords are compared in a normalized form (lowercase, surrounding whitespace removed)
//! while the original text is preserved for output.

use std::{collections::HashSet, fmt};

/// Normalizes keyword text for comparison: lowercase and trimmed.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Splits normalized text into its set of whitespace-delimited words.
pub(crate) fn words(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Number of characters in a string, the unit used for length ratios.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// A keyword carrying both its original and normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword {
    /// Text as it appeared in the input.
    original: String,
    /// Lowercased, trimmed text used for comparisons.
    normalized: String,
}

impl Keyword {
    /// Creates a keyword from its original text.
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let normalized = normalize(&original);
        Self {
            original,
            normalized,
        }
    }

    /// Returns the text as it appeared in the input.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the normalized comparison form.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns true if the keyword is blank after normalization.
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<&str> for Keyword {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
