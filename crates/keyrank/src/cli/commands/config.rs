//! Implementation of `keyrank config`.

use std::process::ExitCode;

use keyrank_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Prints the effective configuration, built-in overrides included.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
