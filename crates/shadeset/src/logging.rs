//! Subscriber setup for the command-line tool.
//!
//! Logs go to stderr so the style text on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `shadeset_core=trace`. Overrides `-v`.
pub const ENV_LOG: &str = "SHADESET_LOG";

/// `json` for JSON log lines; anything else means plain text.
pub const ENV_LOG_FORMAT: &str = "SHADESET_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env(verbosity: u8) -> Self {
        Self::from_env_with(verbosity, |key| std::env::var(key).ok())
    }

    /// Read settings through `get_env`, falling back to the verbosity level.
    #[must_use]
    pub fn from_env_with<F>(verbosity: u8, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = get_env(ENV_LOG)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| level_for(verbosity).to_string());
        let format = match get_env(ENV_LOG_FORMAT) {
            Some(value) if value.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self { filter, format }
    }
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// An unparsable filter falls back to `warn` rather than failing the run.
///
/// # Errors
///
/// [`crate::CliError::Logging`] when a global subscriber is already set.
pub fn init(settings: &LogSettings) -> crate::Result<()> {
    let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match settings.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|error| crate::CliError::Logging {
        message: error.to_string(),
    })
}
