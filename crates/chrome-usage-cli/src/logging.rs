use clap::ValueEnum;
use tracing_subscriber::filter::LevelFilter;

/// Crates whose events the CLI shows.
const TARGETS: [&str; 4] = [
    "chrome_usage",
    "chrome_usage_cli",
    "chrome_usage_core",
    "chrome_usage_browser",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Logging settings decided once at startup.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl LoggingConfig {
    /// `--debug` wins over `--log-level`.
    pub fn new(debug: bool, level: LogLevel) -> Self {
        let level = if debug {
            LevelFilter::DEBUG
        } else {
            level.as_filter()
        };

        Self { level }
    }

    /// `EnvFilter` directives scoping `level` to this workspace.
    pub fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
