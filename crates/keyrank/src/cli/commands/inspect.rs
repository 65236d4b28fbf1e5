//! Implementation of `keyrank inspect`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::{DEFAULT_SAMPLE_ROWS, InspectCommand},
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows how a keyword table is read: columns, row counts, buckets and a sample.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let dataset = match ctx.load_dataset(&cmd.file) {
        Ok(dataset) => dataset,
        Err(code) => return code,
    };
    let order = match ctx.bucket_order() {
        Ok(order) => order,
        Err(code) => return code,
    };

    println!("{}", subheader("Columns:"));
    println!("   {}", dataset.headers().join(", "));
    if !dataset.empty_columns().is_empty() {
        println!(
            "   {}",
            warning(&format!("always blank: {}", dataset.empty_columns().join(", ")))
        );
    }
    println!();

    println!("{}", subheader("Rows:"));
    println!(
        "   {} {}",
        dataset.len(),
        dim(&format!(
            "({} without a candidate)",
            dataset.missing_candidates()
        ))
    );
    println!();

    let mut buckets = dataset.buckets();
    order.sort(&mut buckets);
    println!("{}", subheader(&format!("Buckets ({}):", buckets.len())));
    if buckets.is_empty() {
        println!("   {}", dim("(none)"));
    } else {
        println!("   {}", buckets.join(", "));
    }
    println!();

    let categories = dataset.categories();
    if !categories.is_empty() {
        println!("{}", subheader(&format!("Categories ({}):", categories.len())));
        println!("   {}", categories.join(", "));
        println!();
    }

    let sample = dataset.sample(cmd.limit.unwrap_or(DEFAULT_SAMPLE_ROWS));
    if sample.is_empty() {
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Sample:"));
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["category", "bucket", "candidate"]);
    for record in sample {
        table.add_row(vec![
            record.category.as_deref().unwrap_or(""),
            record.row.bucket.as_str(),
            record.row.candidate().unwrap_or("-"),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
