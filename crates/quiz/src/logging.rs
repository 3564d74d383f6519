const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Install the global `tracing` subscriber, writing to stderr so stdout
/// stays free for command output.
///
/// `--verbose` wins over `LOG_LEVEL`. An unrecognized `LOG_LEVEL` falls back
/// to the default level with a warning once logging is up.
pub(crate) fn init(verbose: bool) {
    let env_val = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, warning) = match (verbose, env_val.as_deref()) {
        (true, _) => (tracing::Level::DEBUG, None),
        (false, None) => (DEFAULT_LOG_LEVEL, None),
        (false, Some(raw)) => match parse_log_level(raw) {
            Some(level) => (level, None),
            None => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: \
                    `{}`",
                    raw.trim(),
                )),
            ),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `VERBOSE` is accepted as an alias for `DEBUG`.
pub(crate) fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim() {
        "DEBUG" | "debug" | "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        "INFO" | "info" => Some(tracing::Level::INFO),
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "WARN" | "warn" => Some(tracing::Level::WARN),
        "ERROR" | "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
