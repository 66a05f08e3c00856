use pdf2json::ConvertError;
use tracing_subscriber::EnvFilter;

/// One-line usage printed after argument validation errors.
pub const USAGE: &str = "Usage: -input <file.pdf> -output <file.json>";

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// Per-page extraction failures are logged at `warn`, so they show up
/// with the default filter.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Format a fatal error the way it is shown on stderr.
pub fn error_message(err: &ConvertError) -> String {
    if err.is_validation() {
        format!("Error: {err}\n{USAGE}")
    } else {
        format!("Error: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_include_usage() {
        let err = ConvertError::Validation("input file must be a PDF: a.txt".to_string());
        assert_eq!(
            error_message(&err),
            "Error: input file must be a PDF: a.txt\nUsage: -input <file.pdf> -output <file.json>"
        );
    }

    #[test]
    fn other_errors_omit_usage() {
        let err = ConvertError::Format("failed to create PDF reader: eof".to_string());
        let msg = error_message(&err);
        assert_eq!(msg, "Error: format error: failed to create PDF reader: eof");
        assert!(!msg.contains("Usage"));
    }

    #[test]
    fn init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
    }
}
