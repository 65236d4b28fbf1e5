//! Implementation of `keyrank search`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{
    args::SearchCommand,
    context::{CommandContext, report_rank_error},
    output::{TargetReport, print_reports},
};

/// Ranks related keywords for each target and prints one report per target.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let session = match ctx.session(
        cmd.data.as_deref(),
        cmd.overrides.overrides.as_deref(),
        cmd.category.as_deref(),
    ) {
        Ok(session) => session,
        Err(code) => return code,
    };
    let order = match ctx.bucket_order() {
        Ok(order) => order,
        Err(code) => return code,
    };

    let mut reports = Vec::with_capacity(cmd.targets.len());
    for target in &cmd.targets {
        match session.search(target) {
            Ok(result) => {
                debug!(query = %target, buckets = result.len(), "search complete");
                reports.push(TargetReport {
                    target: target.clone(),
                    result,
                });
            }
            Err(e) => return report_rank_error(&e),
        }
    }

    let report = &ctx.config.report;
    let format = cmd.output.format(report.format);
    let max_buckets = cmd.max_buckets.unwrap_or(report.max_buckets);
    print_reports(&reports, &order, format, max_buckets)
}
