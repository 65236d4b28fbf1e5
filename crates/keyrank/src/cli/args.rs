//! Clap argument definitions for the `keyrank` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use keyrank_config::ReportFormat;

/// Default number of rows shown by `keyrank inspect`.
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "keyrank")]
#[command(about = "Rank related keywords against a target, month by month")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Shared flag for loading curated overrides from a file.
#[derive(Args, Debug, Clone, Default)]
pub struct OverridesArgs {
    /// TOML file of extra overrides (`["target"]` tables of `"candidate" = tier`)
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// One line per tier instead of a table
    #[arg(long, conflicts_with = "json")]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    /// Resolves the output format, falling back to the configured default.
    pub fn format(&self, default: ReportFormat) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else if self.list {
            ReportFormat::List
        } else {
            default
        }
    }
}

/// Arguments for `keyrank search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Target keywords
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Keyword table to search (defaults to `[data] path` from config)
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    /// Extra overrides file.
    pub overrides: OverridesArgs,

    /// Only use rows whose category matches
    #[arg(short = 'c', long, value_name = "NAME")]
    pub category: Option<String>,

    /// Maximum buckets to show, 0 for all [default: from config, else 0]
    #[arg(short = 'm', long, value_name = "N")]
    pub max_buckets: Option<usize>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `keyrank classify`.
#[derive(Args, Debug, Clone)]
pub struct ClassifyCommand {
    /// Candidate keyword
    pub candidate: String,

    /// Target keyword
    pub target: String,

    #[command(flatten)]
    /// Extra overrides file.
    pub overrides: OverridesArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `keyrank inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Keyword table to inspect
    pub file: PathBuf,

    /// Sample rows to display [default: 5]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `keyrank overrides`.
#[derive(Args, Debug, Clone)]
pub struct OverridesCommand {
    /// Show the mapping for one target
    pub target: Option<String>,

    #[command(flatten)]
    /// Extra overrides file.
    pub overrides: OverridesArgs,
}

/// Arguments for `keyrank init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.keyrank.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `keyrank` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank related keywords against targets, grouped by bucket
    #[command(after_help = "\
TIERS:
  5   synonym, or a keyword likely to convert directly to a purchase
  4   competitor keyword or closely related keyword
  3   searched by people likely to buy the product

Curated overrides decide first; otherwise a keyword containing the target
(or contained in it) is tier 5 when the lengths are within 20% and tier 4
otherwise, and a keyword sharing a whole word with the target is tier 3.

EXAMPLES:
  keyrank search 차박텐트 -d keywords.csv
  keyrank search 차박텐트 데오드란트 --list
  keyrank search 데오드란트 --category 뷰티 --max-buckets 3
  keyrank search 차박텐트 --overrides curated.toml --json")]
    Search(SearchCommand),

    /// Show the tier and reason for one candidate/target pair
    Classify(ClassifyCommand),

    /// Show how keyrank reads a keyword table
    Inspect(InspectCommand),

    /// List curated override targets, or one target's mapping
    Overrides(OverridesCommand),

    /// Initialize keyrank configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// Returns false for commands that must work even when existing config is invalid.
    pub const fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help listing every subcommand with its summary.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: keyrank [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -v, --verbose...  Log verbosity (-v for info, -vv for debug)");
    println!("  -h, --help        Print help");
}
