//! Command-line interface for the `keyrank` keyword ranker.

mod cli;
mod logging;

use std::process::ExitCode;

use cli::{CommandContext, args::parse_cli, commands};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
