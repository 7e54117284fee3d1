//! Flags shared by every `code-daily` subcommand.

use clap::Args;
use clap::builder::FalseyValueParser;
use std::path::PathBuf;

/// Flattened into [`super::Cli`]; each flag is `global`, so it may follow
/// any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase log verbosity (-v, -vv, -vvv)",
        long_help = "Raise the log level written to stderr:
    (none)  - warnings and errors
    -v      - session progress
    -vv     - requests, paths and decisions
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. Any non-empty `NO_COLOR` other than a falsey word
    /// (`0`, `false`, `no`, `off`) turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Overrides the per-user `config.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Styled or plain output"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled on a terminal, plain when piped.
    #[default]
    Auto,
    /// Colours and symbols.
    Human,
    /// No escape codes.
    Plain,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn no_color_flag_needs_no_value() {
        let cli = Cli::try_parse_from(["code-daily", "list", "--no-color"]).unwrap();
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["code-daily", "-q", "-v"]).is_err());
    }
}
