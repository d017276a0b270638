//! CLI argument parsing for sprintboard.

mod args;

pub use args::{parse_args, CliConfig, OutputMode};
