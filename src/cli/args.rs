//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

/// Terminal dashboard for sprint progress and team activity
#[derive(Debug, Parser)]
#[command(name = "sprintboard", version, about)]
pub struct Args {
    /// Initial location to open
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Theme JSON file
    #[arg(short, long, env = "SPRINTBOARD_THEME")]
    pub theme: Option<PathBuf>,

    /// Render a single frame to stdout and exit
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Width used with --print
    #[arg(long, default_value_t = 120, requires = "print")]
    pub width: u16,

    /// Height used with --print
    #[arg(long, default_value_t = 40, requires = "print")]
    pub height: u16,

    /// Print the dashboard dataset as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Log file (defaults to <cache dir>/sprintboard/sprintboard.log)
    #[arg(long, env = "SPRINTBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// How the process presents the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    Print { width: u16, height: u16 },
    Json,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub route: String,
    pub theme_path: Option<PathBuf>,
    pub mode: OutputMode,
    pub log_file: Option<PathBuf>,
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        let mode = if args.json {
            OutputMode::Json
        } else if args.print {
            OutputMode::Print {
                width: args.width.max(1),
                height: args.height.max(1),
            }
        } else {
            OutputMode::Interactive
        };

        Self {
            route: args.route,
            theme_path: args.theme,
            mode,
            log_file: args.log_file,
        }
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    Args::parse().into()
}
