use crate::OutputFormat;
use crate::format;
use anyhow::Result;
use chrome_usage_browser::{ChromeDataDir, ProfileScanner, ScanReporter, TracingReporter};
use chrome_usage_core::{Report, ReportBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;

pub const DEFAULT_MIN_SIZE_MB: f64 = 50.0;

/// Settings for one scan, collected from the command line.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Explicit data directory; `None` means the platform default.
    pub data_dir: Option<PathBuf>,
    pub min_size_mb: f64,
    pub top_n: usize,
    pub format: OutputFormat,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            data_dir: None,
            min_size_mb: DEFAULT_MIN_SIZE_MB,
            top_n: chrome_usage_core::report::DEFAULT_TOP_N,
            format: OutputFormat::Pretty,
        }
    }
}

/// Scan the data directory and build the filtered report.
///
/// Fails only when the data directory cannot be used or the options are
/// invalid; per-profile problems go to `reporter`.
pub fn build(options: &ScanOptions, reporter: &dyn ScanReporter) -> Result<Report> {
    let builder = ReportBuilder::new(options.min_size_mb)?.with_top_n(options.top_n);
    let data_dir = ChromeDataDir::new(options.data_dir.clone()).find()?;

    let profiles = ProfileScanner::new(reporter).scan_profiles(&data_dir)?;

    Ok(builder.build(&profiles))
}

pub fn execute(options: &ScanOptions) -> Result<()> {
    tracing::debug!(
        "Scan options: min {:.2} MB, top {}, format {}",
        options.min_size_mb,
        options.top_n,
        options.format.as_str()
    );

    let spinner = scan_spinner(options.format)?;
    let report = build(options, &TracingReporter);
    spinner.finish_and_clear();
    let report = report?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format::render(&report, options.format, &mut out)
}

/// Spinner on stderr for the human-readable mode. Hidden when stderr is not
/// a terminal.
fn scan_spinner(format: OutputFormat) -> Result<ProgressBar> {
    if format != OutputFormat::Pretty {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Scanning Chrome profiles...");
    spinner.tick();
    Ok(spinner)
}
