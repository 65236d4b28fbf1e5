//! Implementation of `keyrank overrides`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use keyrank_core::{CandidateTiers, RelevanceTier};
use keyrank_highlight::tier as paint_tier;

use crate::cli::{args::OverridesCommand, context::CommandContext, output::dim};

/// Lists curated override targets, or the mapping for one target.
pub fn run(ctx: &CommandContext, cmd: &OverridesCommand) -> ExitCode {
    let table = match ctx.overrides(cmd.overrides.overrides.as_deref()) {
        Ok(table) => table,
        Err(code) => return code,
    };

    let Some(target) = &cmd.target else {
        if table.is_empty() {
            println!("{}", dim("No curated overrides."));
            return ExitCode::SUCCESS;
        }
        let mut listing = Table::new();
        listing.load_preset(UTF8_FULL_CONDENSED);
        listing.set_header(vec!["target", "candidates"]);
        for name in table.targets() {
            let count = table.get(name).map_or(0, CandidateTiers::len);
            listing.add_row(vec![name.to_string(), count.to_string()]);
        }
        println!("{listing}");
        return ExitCode::SUCCESS;
    };

    match table.get(target) {
        Some(mapping) => {
            for (candidate, tier) in sorted_mapping(mapping) {
                println!("{} {candidate}", paint_tier(tier, &tier.to_string()));
            }
        }
        None => println!("{}", dim(&format!("No overrides for '{target}'."))),
    }
    ExitCode::SUCCESS
}

/// Orders a mapping by tier, highest first, then by candidate.
fn sorted_mapping(mapping: &CandidateTiers) -> Vec<(&str, RelevanceTier)> {
    let mut entries: Vec<_> = mapping
        .iter()
        .map(|(candidate, &tier)| (candidate.as_str(), tier))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_sorts_by_tier_then_candidate() {
        let mapping = CandidateTiers::from([
            ("캠핑".to_string(), RelevanceTier::Strong),
            ("차박".to_string(), RelevanceTier::Strong),
            ("등산화".to_string(), RelevanceTier::Unrelated),
            ("차박텐트".to_string(), RelevanceTier::Exact),
        ]);
        let sorted = sorted_mapping(&mapping);
        assert_eq!(
            sorted,
            vec![
                ("차박텐트", RelevanceTier::Exact),
                ("차박", RelevanceTier::Strong),
                ("캠핑", RelevanceTier::Strong),
                ("등산화", RelevanceTier::Unrelated),
            ]
        );
    }
}
