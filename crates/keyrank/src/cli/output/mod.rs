//! Rendering and JSON serialization for CLI output.

use std::{path::Path, process::ExitCode};

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use keyrank_config::ReportFormat;
use keyrank_core::{BucketOrder, BucketResult, RelevanceTier, ResultSet, TierLists, UNORDERED};
pub use keyrank_highlight::{dim, header, subheader, success, warning};
use keyrank_highlight::tier as paint_tier;
use serde::Serialize;

/// Placeholder for an empty tier list in tables.
const EMPTY_CELL: &str = "-";

/// Search results for one target.
pub struct TargetReport {
    /// Target keyword as given on the command line.
    pub target: String,
    /// Aggregated results.
    pub result: ResultSet,
}

/// JSON output for one target.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Target keyword.
    target: &'a str,
    /// Buckets in display order.
    buckets: Vec<JsonBucket<'a>>,
    /// Buckets left out by the bucket limit.
    omitted: usize,
}

/// JSON output for one bucket.
#[derive(Serialize)]
struct JsonBucket<'a> {
    /// Bucket label.
    bucket: &'a str,
    /// Ordering key, or null when the label has none.
    order: Option<u64>,
    /// Candidates keyed by tier score.
    tiers: &'a TierLists,
}

/// Returns the buckets to display and how many were cut by `max_buckets` (0 = no limit).
fn visible<'a>(
    result: &'a ResultSet,
    order: &BucketOrder,
    max_buckets: usize,
) -> (Vec<&'a BucketResult>, usize) {
    let mut buckets = result.sorted_by(order);
    if max_buckets == 0 || buckets.len() <= max_buckets {
        return (buckets, 0);
    }
    let omitted = buckets.len() - max_buckets;
    buckets.truncate(max_buckets);
    (buckets, omitted)
}

/// Joins a tier list for display.
fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        items.join(", ")
    }
}

/// Message printed when a target matched nothing.
pub fn no_results_message(target: &str) -> String {
    format!("No related keywords found for '{target}'.")
}

/// Message printed when the bucket limit hid some buckets.
fn omitted_message(omitted: usize) -> String {
    let noun = if omitted == 1 { "bucket" } else { "buckets" };
    format!("… and {omitted} more {noun}")
}

/// Renders one report as a table, one row per bucket.
pub fn render_table(report: &TargetReport, order: &BucketOrder, max_buckets: usize) -> String {
    if report.result.is_empty() {
        return dim(&no_results_message(&report.target));
    }

    let (buckets, omitted) = visible(&report.result, order, max_buckets);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["", "5", "4", "3"]);
    for bucket in buckets {
        let mut row = vec![bucket.bucket.clone()];
        row.extend(
            RelevanceTier::REPORTABLE
                .iter()
                .map(|&tier| join_or_dash(bucket.tiers.get(tier))),
        );
        table.add_row(row);
    }

    let mut out = table.to_string();
    if omitted > 0 {
        out.push('\n');
        out.push_str(&dim(&omitted_message(omitted)));
    }
    out
}

/// Renders one report as per-bucket tier lines, skipping empty tiers.
pub fn render_list(report: &TargetReport, order: &BucketOrder, max_buckets: usize) -> String {
    if report.result.is_empty() {
        return dim(&no_results_message(&report.target));
    }

    let (buckets, omitted) = visible(&report.result, order, max_buckets);
    let mut lines = Vec::new();
    for bucket in buckets {
        lines.push(format!("{}:", bucket.bucket));
        for tier in RelevanceTier::REPORTABLE {
            let items = bucket.tiers.get(tier);
            if !items.is_empty() {
                lines.push(format!(
                    "  {}: {}",
                    paint_tier(tier, &tier.to_string()),
                    items.join(", ")
                ));
            }
        }
    }
    if omitted > 0 {
        lines.push(dim(&omitted_message(omitted)));
    }
    lines.join("\n")
}

/// Builds the JSON document for one report.
fn json_report<'a>(
    report: &'a TargetReport,
    order: &BucketOrder,
    max_buckets: usize,
) -> JsonReport<'a> {
    let (buckets, omitted) = visible(&report.result, order, max_buckets);
    JsonReport {
        target: &report.target,
        buckets: buckets
            .into_iter()
            .map(|b| JsonBucket {
                bucket: &b.bucket,
                order: Some(order.key(&b.bucket)).filter(|&k| k != UNORDERED),
                tiers: &b.tiers,
            })
            .collect(),
        omitted,
    }
}

/// Serializes reports: an object for a single target, an array for several.
pub fn render_json(
    reports: &[TargetReport],
    order: &BucketOrder,
    max_buckets: usize,
) -> serde_json::Result<String> {
    let docs: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|r| json_report(r, order, max_buckets))
        .collect();
    match docs.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(&docs),
    }
}

/// Describes the tiers, each label in its color.
pub fn tier_legend() -> String {
    RelevanceTier::REPORTABLE
        .iter()
        .map(|&tier| {
            format!(
                "{} {}",
                paint_tier(tier, &tier.to_string()),
                dim(tier.description())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints search reports in the selected format.
pub fn print_reports(
    reports: &[TargetReport],
    order: &BucketOrder,
    format: ReportFormat,
    max_buckets: usize,
) -> ExitCode {
    if format == ReportFormat::Json {
        return match render_json(reports, order, max_buckets) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", header(&report.target));
        let body = match format {
            ReportFormat::List => render_list(report, order, max_buckets),
            ReportFormat::Table | ReportFormat::Json => render_table(report, order, max_buckets),
        };
        println!("{body}");
    }

    if format == ReportFormat::Table && reports.iter().any(|r| !r.result.is_empty()) {
        println!();
        println!("{}", tier_legend());
    }

    ExitCode::SUCCESS
}

/// Shows `path` relative to `base` when it lies inside it.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map_or_else(|_| path.display().to_string(), |rel| rel.display().to_string())
}

/// Formats a status flag in green or dim.
pub fn on_off(enabled: bool) -> String {
    if enabled {
        success("on")
    } else {
        dim("off")
    }
}
