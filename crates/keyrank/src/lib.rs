//! keyrank: related-keyword ranking for marketing keyword research.
//!
//! Given a keyword table exported from a search-trend tool (rows of month, related keyword
//! and category) and a target keyword, keyrank sorts every related keyword into a relevance
//! tier: 5 for synonyms and direct purchase intent, 4 for competitor or closely related
//! keywords, 3 for keywords searched by likely buyers. Curated overrides take precedence
//! over the containment heuristic, and results are reported month by month.

#![warn(missing_docs)]
