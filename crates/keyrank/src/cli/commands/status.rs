//! Implementation of `keyrank status`.

use std::process::ExitCode;

use keyrank_config::{ConfigWarning, discover_config_files, is_global_config};

use crate::cli::{
    context::CommandContext,
    output::{dim, display_path, on_off, subheader, warning},
};

/// Shows configuration files, the dataset, override counts and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("keyrank init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        let scope = if is_global_config(path) {
            "global"
        } else {
            "local"
        };
        println!("   {} {}", display_path(path, cwd), dim(&format!("({scope})")));
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Data:"));
    match &config.data.path {
        None => println!("   {}", dim("(none configured)")),
        Some(path) => {
            let shown = display_path(path, cwd);
            if path.is_file() {
                println!("   {shown}");
            } else {
                println!("   {shown} {}", warning("[missing]"));
            }
        }
    }
    println!();

    println!("{}", subheader("Overrides:"));
    println!("   built-in seeds: {}", on_off(config.settings.builtin_overrides));
    println!("   targets: {}", config.effective_overrides().len());
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints one hint per distinct kind of warning.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut shown = Vec::new();
    for w in warnings {
        let hint = match w {
            ConfigWarning::NoDataConfigured => "set path under [data] in .keyrank.toml",
            ConfigWarning::DataPathMissing { .. } => {
                "relative data paths resolve against the config file that sets them"
            }
            ConfigWarning::EmptyOverrideTarget | ConfigWarning::EmptyOverrideCandidate { .. } => {
                "remove blank keys from [overrides] tables"
            }
        };
        if !shown.contains(&hint) {
            shown.push(hint);
            println!("{}", dim(&format!("Hint: {hint}")));
        }
    }
}
