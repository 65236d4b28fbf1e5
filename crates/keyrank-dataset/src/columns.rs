//! Column selection for keyword tables.

use csv::StringRecord;

/// Default header for the bucket column.
pub const DEFAULT_BUCKET_COLUMN: &str = "소분류";
/// Default header for the candidate keyword column.
pub const DEFAULT_CANDIDATE_COLUMN: &str = "연관키워드";
/// Default header for the category column.
pub const DEFAULT_CATEGORY_COLUMN: &str = "카테고리";

/// Which headers hold the bucket, candidate and category values.
///
/// Each role accepts a list of header names; the first one present in the file is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Accepted names for the bucket column (required).
    pub bucket: Vec<String>,
    /// Accepted names for the candidate column (required).
    pub candidate: Vec<String>,
    /// Accepted names for the category column (optional; empty disables it).
    pub category: Vec<String>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            bucket: vec![DEFAULT_BUCKET_COLUMN.to_string()],
            candidate: vec![DEFAULT_CANDIDATE_COLUMN.to_string()],
            category: vec![DEFAULT_CATEGORY_COLUMN.to_string()],
            delimiter: b',',
        }
    }
}

/// Header positions resolved against a file's header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndexes {
    /// Position of the bucket column.
    pub bucket: usize,
    /// Position of the candidate column.
    pub candidate: usize,
    /// Position of the category column, if present.
    pub category: Option<usize>,
}

/// Cleans a header cell: byte-order mark and surrounding whitespace removed.
pub(crate) fn clean_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

/// Returns the position of the first header matching any of `names`.
fn find(headers: &[String], names: &[String]) -> Option<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name.trim()))
}

impl ColumnSpec {
    /// Resolves header positions, returning the names of missing required columns.
    pub(crate) fn resolve(&self, headers: &[String]) -> Result<ColumnIndexes, Vec<String>> {
        let bucket = find(headers, &self.bucket);
        let candidate = find(headers, &self.candidate);
        let category = find(headers, &self.category);

        match (bucket, candidate) {
            (Some(bucket), Some(candidate)) => Ok(ColumnIndexes {
                bucket,
                candidate,
                category,
            }),
            _ => {
                let mut missing = Vec::new();
                if bucket.is_none() {
                    missing.push(self.bucket.join(" | "));
                }
                if candidate.is_none() {
                    missing.push(self.candidate.join(" | "));
                }
                Err(missing)
            }
        }
    }
}

/// Cleans every header in a record.
pub(crate) fn clean_headers(record: &StringRecord) -> Vec<String> {
    record.iter().map(clean_header).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn resolves_default_columns() {
        let spec = ColumnSpec::default();
        let idx = spec
            .resolve(&headers(&["카테고리", "소분류", "연관키워드"]))
            .unwrap();
        assert_eq!(idx.bucket, 1);
        assert_eq!(idx.candidate, 2);
        assert_eq!(idx.category, Some(0));
    }

    #[test]
    fn category_is_optional() {
        let spec = ColumnSpec::default();
        let idx = spec.resolve(&headers(&["연관키워드", "소분류"])).unwrap();
        assert_eq!(idx.bucket, 1);
        assert_eq!(idx.candidate, 0);
        assert_eq!(idx.category, None);
    }

    #[test]
    fn first_matching_alias_wins() {
        let spec = ColumnSpec {
            candidate: vec!["keyword".into(), "연관키워드".into()],
            ..ColumnSpec::default()
        };
        let idx = spec
            .resolve(&headers(&["연관키워드", "소분류", "keyword"]))
            .unwrap();
        assert_eq!(idx.candidate, 2);
    }

    #[test]
    fn reports_missing_columns() {
        let spec = ColumnSpec {
            candidate: vec!["연관키워드".into(), "keyword".into()],
            ..ColumnSpec::default()
        };
        let missing = spec.resolve(&headers(&["월", "키워드"])).unwrap_err();
        assert_eq!(missing, vec!["소분류", "연관키워드 | keyword"]);
    }

    #[test]
    fn clean_header_strips_bom_and_whitespace() {
        assert_eq!(clean_header("\u{feff}카테고리"), "카테고리");
        assert_eq!(clean_header(" 소분류 "), "소분류");
    }
}
