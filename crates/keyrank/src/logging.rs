//! Tracing initialization.

use std::{env, io, sync::Once};

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, checked before `RUST_LOG`.
const LOG_ENV: &str = "KEYRANK_LOG";

/// Filter used when neither a flag nor the environment selects one.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Guards against installing the subscriber twice.
static INIT: Once = Once::new();

/// Installs a stderr subscriber. Safe to call multiple times.
///
/// `-v` raises the level to info and `-vv` to debug; without it the filter comes from
/// `KEYRANK_LOG`, then `RUST_LOG`, defaulting to warnings only.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = filter_for(verbosity, env_directive().as_deref());
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .try_init()
        {
            eprintln!("warning: failed to initialize logging: {e}");
        }
    });
}

/// Reads the first filter directive set in the environment.
fn env_directive() -> Option<String> {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

/// Builds the filter for the chosen directive, falling back to the default on parse errors.
fn filter_for(verbosity: u8, from_env: Option<&str>) -> EnvFilter {
    EnvFilter::try_new(directive_for(verbosity, from_env))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Picks a directive: explicit verbosity beats the environment, which beats the default.
fn directive_for(verbosity: u8, from_env: Option<&str>) -> &str {
    match verbosity {
        0 => from_env.unwrap_or(DEFAULT_DIRECTIVE),
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_beats_environment() {
        assert_eq!(directive_for(1, Some("error")), "info");
        assert_eq!(directive_for(2, None), "debug");
        assert_eq!(directive_for(5, Some("trace")), "debug");
    }

    #[test]
    fn environment_beats_default() {
        assert_eq!(
            directive_for(0, Some("keyrank_core=debug")),
            "keyrank_core=debug"
        );
        assert_eq!(directive_for(0, None), "warn");
    }

    #[test]
    fn invalid_directive_still_builds_a_filter() {
        let _filter = filter_for(0, Some("keyrank=loud"));
    }
}
