//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use keyrank_config::{Config, OverrideMap, parse_overrides_file};
use keyrank_core::{BucketOrder, OverrideTable, RankError, RelevanceTier, Session};
use keyrank_dataset::{ColumnSpec, Dataset, DatasetError};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds the override table: built-in seeds, then config, then `file`.
    ///
    /// Each layer replaces earlier mappings target by target.
    pub fn overrides(&self, file: Option<&Path>) -> Result<OverrideTable, ExitCode> {
        let mut layers = self.config.effective_overrides();
        if let Some(path) = file {
            let extra = parse_overrides_file(path).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })?;
            debug!(path = %path.display(), targets = extra.len(), "loaded overrides file");
            layers.extend(extra);
        }
        override_table(&layers)
    }

    /// Returns the column layout configured under `[data]`.
    pub fn columns(&self) -> ColumnSpec {
        let data = &self.config.data;
        ColumnSpec {
            bucket: data.bucket_column.clone(),
            candidate: data.candidate_column.clone(),
            category: data.category_column.clone(),
            delimiter: u8::try_from(data.delimiter).unwrap_or(b','),
        }
    }

    /// Returns the bucket ordering for the configured unit marker.
    pub fn bucket_order(&self) -> Result<BucketOrder, ExitCode> {
        BucketOrder::with_unit(&self.config.settings.bucket_unit).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Returns the dataset path: `explicit` if given, else `[data] path`.
    pub fn data_path<'a>(&'a self, explicit: Option<&'a Path>) -> Option<&'a Path> {
        explicit.or(self.config.data.path.as_deref())
    }

    /// Loads a keyword table with the configured column layout.
    pub fn load_dataset(&self, path: &Path) -> Result<Dataset, ExitCode> {
        Dataset::load(path, &self.columns()).map_err(|e| {
            eprintln!("error: {e}");
            if matches!(e, DatasetError::MissingColumns { .. }) {
                eprintln!("Set bucket_column and candidate_column under [data] in .keyrank.toml.");
            }
            ExitCode::FAILURE
        })
    }

    /// Builds a search session.
    ///
    /// Rows are loaded only when a dataset path is known; otherwise the session stays
    /// empty and searching it reports that no data was loaded.
    pub fn session(
        &self,
        data: Option<&Path>,
        overrides: Option<&Path>,
        category: Option<&str>,
    ) -> Result<Session, ExitCode> {
        let mut session = Session::new(self.overrides(overrides)?);
        if let Some(path) = self.data_path(data) {
            let dataset = self.load_dataset(path)?;
            let dataset = match category {
                Some(name) => dataset.filter_category(name),
                None => dataset,
            };
            session.load(dataset.into_rows());
        }
        Ok(session)
    }
}

/// Prints a search error, with a hint when no data was loaded.
pub fn report_rank_error(e: &RankError) -> ExitCode {
    eprintln!("error: {e}");
    if matches!(e, RankError::NoDataLoaded) {
        eprintln!("Pass --data FILE or set [data] path in .keyrank.toml.");
    }
    ExitCode::FAILURE
}

/// Converts validated integer overrides into a ranking table.
fn override_table(layers: &OverrideMap) -> Result<OverrideTable, ExitCode> {
    let mut table = OverrideTable::new();
    for (target, mapping) in layers {
        let tiers = mapping
            .iter()
            .map(|(candidate, &score)| Ok((candidate.clone(), RelevanceTier::try_from(score)?)))
            .collect::<Result<Vec<_>, RankError>>()
            .map_err(|e| {
                eprintln!("error: override '{target}': {e}");
                ExitCode::FAILURE
            })?;
        table.insert(target, tiers);
    }
    Ok(table)
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
