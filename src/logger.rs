//! Logger initialization.

use env_logger::Env;

/// Initializes env_logger for the CLI.
///
/// The verbosity flag maps to the `debug` level; without it only warnings
/// and errors are shown. An explicit `RUST_LOG` value takes precedence.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .init();
}
