use anyhow::Result;
use chrome_usage_cli::commands::scan::{DEFAULT_MIN_SIZE_MB, ScanOptions};
use chrome_usage_cli::commands;
use chrome_usage_cli::logging::{LogLevel, LoggingConfig};
use chrome_usage_cli::OutputFormat;
use chrome_usage_core::report::DEFAULT_TOP_N;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chrome-usage")]
#[command(author, version)]
#[command(
    about = "List Chrome profiles and extensions by disk usage",
    long_about = "chrome-usage scans a Chrome user data directory, resolves friendly profile and \
                  extension names, and reports how much disk space each one uses as text, JSON or CSV."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    scan: ScanArgs,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Enable debug logging (overrides --log-level)
    #[arg(long)]
    debug: bool,
}

#[derive(Args)]
struct ScanArgs {
    /// Path to the Chrome user data directory [default: platform Chrome data directory]
    #[arg(long, value_name = "DIR", env = "CHROME_USER_DATA_DIR")]
    chrome_data_dir: Option<PathBuf>,

    /// Minimum size in MB for profiles and extensions to be listed
    #[arg(long, value_name = "MB", default_value_t = DEFAULT_MIN_SIZE_MB)]
    min_size_mb: f64,

    /// Number of largest extensions in the summary
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Output JSON instead of human-readable text
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output CSV instead of human-readable text
    #[arg(long)]
    csv: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: chrome-usage completion --shell bash >> ~/.bashrc\n  \
                            zsh:  chrome-usage completion --shell zsh > \"${fpath[1]}/_chrome-usage\"\n  \
                            fish: chrome-usage completion --shell fish > ~/.config/fish/completions/chrome-usage.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&LoggingConfig::new(cli.debug, cli.log_level));

    match cli.command {
        Some(Commands::Completion { shell }) => {
            commands::completion::execute(shell, &mut Cli::command(), &mut io::stdout())
        }
        None => {
            let options = ScanOptions {
                data_dir: cli.scan.chrome_data_dir,
                min_size_mb: cli.scan.min_size_mb,
                top_n: cli.scan.top,
                format: OutputFormat::from_flags(cli.scan.json, cli.scan.csv),
            };
            commands::scan::execute(&options)
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.directives()))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
