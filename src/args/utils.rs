//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
/// - `ARTSEA_TRACE=1` enables TRACE level for request-level diagnostics.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("ARTSEA_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    /// What: `--verbose` wins over `--log-level`.
    fn verbose_overrides_log_level() {
        let args = Args {
            log_level: "warn".into(),
            verbose: true,
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }
}
