//! Keyword table ingestion for keyrank.
//!
//! Reads a delimited export (typically CSV with `카테고리`, `소분류`, `연관키워드` headers)
//! into rows the ranking core can aggregate. Ragged input is tolerated: cells missing
//! from short records, and blank candidate cells, become absent candidates that the
//! aggregator skips.

#![warn(missing_docs)]

mod columns;
mod error;

use std::{
    collections::HashSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

pub use columns::{
    ColumnSpec, DEFAULT_BUCKET_COLUMN, DEFAULT_CANDIDATE_COLUMN, DEFAULT_CATEGORY_COLUMN,
};
use columns::{ColumnIndexes, clean_headers};
use csv::{ReaderBuilder, StringRecord};
pub use error::DatasetError;
use keyrank_core::Row;
use tracing::info;

/// One row of a keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Category label, when the table has a category column.
    pub category: Option<String>,
    /// Bucket and candidate.
    pub row: Row,
}

/// A loaded keyword table.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the table was read from.
    origin: PathBuf,
    /// Header row, cleaned.
    headers: Vec<String>,
    /// Rows in file order.
    records: Vec<Record>,
    /// Headers whose cells are blank in every row.
    empty_columns: Vec<String>,
}

impl Dataset {
    /// Loads a keyword table from a file.
    pub fn load(path: &Path, columns: &ColumnSpec) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, columns, path)
    }

    /// Reads a keyword table from any reader.
    ///
    /// `origin` is used for error reporting.
    pub fn from_reader<R: Read>(
        reader: R,
        columns: &ColumnSpec,
        origin: &Path,
    ) -> Result<Self, DatasetError> {
        let csv_error = |source| DatasetError::Csv {
            path: origin.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(columns.delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers = clean_headers(reader.headers().map_err(csv_error)?);
        if headers.iter().all(String::is_empty) {
            return Err(DatasetError::Empty {
                path: origin.to_path_buf(),
            });
        }

        let indexes = columns
            .resolve(&headers)
            .map_err(|missing| DatasetError::MissingColumns {
                missing,
                available: headers.clone(),
            })?;

        let mut records = Vec::new();
        let mut has_value = vec![false; headers.len()];
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            for (seen, cell) in has_value.iter_mut().zip(record.iter()) {
                *seen |= !cell.trim().is_empty();
            }
            records.push(to_record(&record, indexes));
        }

        let empty_columns = headers
            .iter()
            .zip(&has_value)
            .filter(|(_, seen)| !**seen)
            .map(|(header, _)| header.clone())
            .collect();

        info!(
            path = %origin.display(),
            rows = records.len(),
            "loaded keyword table"
        );

        Ok(Self {
            origin: origin.to_path_buf(),
            headers,
            records,
            empty_columns,
        })
    }

    /// Returns where the table was read from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Returns the cleaned header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns headers whose cells are blank in every row.
    pub fn empty_columns(&self) -> &[String] {
        &self.empty_columns
    }

    /// Returns all records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates the bucket/candidate rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.records.iter().map(|r| &r.row)
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.records.into_iter().map(|r| r.row).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows whose candidate is missing or blank.
    pub fn missing_candidates(&self) -> usize {
        self.rows().filter(|row| row.candidate().is_none()).count()
    }

    /// Returns distinct bucket labels in first-seen order.
    pub fn buckets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows()
            .map(|row| row.bucket.as_str())
            .filter(|bucket| seen.insert(*bucket))
            .collect()
    }

    /// Returns distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|r| r.category.as_deref())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Returns up to `n` leading records.
    pub fn sample(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Returns a copy keeping only records whose category equals `category`.
    pub fn filter_category(&self, category: &str) -> Self {
        Self {
            origin: self.origin.clone(),
            headers: self.headers.clone(),
            records: self
                .records
                .iter()
                .filter(|r| r.category.as_deref().map(str::trim) == Some(category.trim()))
                .cloned()
                .collect(),
            empty_columns: self.empty_columns.clone(),
        }
    }
}

/// Extracts a record using resolved column positions.
fn to_record(record: &StringRecord, indexes: ColumnIndexes) -> Record {
    let cell = |idx: usize| {
        record
            .get(idx)
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
    };

    Record {
        category: indexes.category.and_then(cell),
        row: Row {
            bucket: cell(indexes.bucket).unwrap_or_default(),
            candidate: cell(indexes.candidate),
        },
    }
}
