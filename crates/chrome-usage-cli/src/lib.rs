pub mod commands;
pub mod format;
pub mod logging;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Pretty,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// `--json` and `--csv` replace the human-readable default.
    pub fn from_flags(json: bool, csv: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Pretty
        }
    }
}
