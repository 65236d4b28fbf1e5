//! Implementation of `keyrank classify`.

use std::process::ExitCode;

use keyrank_core::explain;
use keyrank_highlight::tier as paint_tier;
use serde::Serialize;

use crate::cli::{
    args::ClassifyCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// JSON output for a single classification.
#[derive(Serialize)]
struct JsonClassification<'a> {
    /// Candidate keyword as given.
    candidate: &'a str,
    /// Target keyword as given.
    target: &'a str,
    /// Tier score.
    tier: u8,
    /// Rule that decided the tier.
    reason: String,
}

/// Explains how one candidate relates to one target.
pub fn run(ctx: &CommandContext, cmd: &ClassifyCommand) -> ExitCode {
    let overrides = match ctx.overrides(cmd.overrides.overrides.as_deref()) {
        Ok(table) => table,
        Err(code) => return code,
    };
    let classification = explain(&cmd.candidate, &cmd.target, &overrides);

    if cmd.json {
        let output = JsonClassification {
            candidate: &cmd.candidate,
            target: &cmd.target,
            tier: classification.tier.score(),
            reason: classification.reason.to_string(),
        };
        return match serde_json::to_string_pretty(&output) {
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

    let tier = classification.tier;
    println!(
        "{} {}",
        paint_tier(tier, &format!("tier {tier}")),
        dim(&format!("({})", tier.description()))
    );
    println!("{} {}", subheader("Reason:"), classification.reason);
    ExitCode::SUCCESS
}
