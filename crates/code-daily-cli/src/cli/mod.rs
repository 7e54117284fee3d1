//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "code-daily",
    bin_name = "code-daily",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4da} Daily coding exercises, generated on demand",
    long_about = "code-daily asks a language model for five practice exercises \
                  in the language and topic you pick, scaffolds a dated workspace \
                  for them, and writes worked solutions on request.",
    after_help = "EXAMPLES:\n\
        \x20 code-daily                 # start an interactive session\n\
        \x20 code-daily list --lang rust\n\
        \x20 code-daily init\n\
        \x20 code-daily completions bash > /usr/share/bash-completion/completions/code-daily",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Without one, an interactive session starts.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, `start` when none was given.
    pub fn command_or_default(&mut self) -> Commands {
        self.command.take().unwrap_or(Commands::Start)
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start an interactive practice session.
    #[command(
        visible_alias = "s",
        about = "Start an interactive session (default)",
        after_help = "The session asks for a Gemini API key on first use and stores it \
                      in the configured credentials file."
    )]
    Start,

    /// List languages and their sections.
    #[command(
        visible_alias = "ls",
        about = "List languages and sections",
        after_help = "EXAMPLES:\n\
            \x20 code-daily list\n\
            \x20 code-daily list --lang go\n\
            \x20 code-daily list --format json"
    )]
    List(ListArgs),

    /// Write the default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 code-daily init                       # platform config dir\n\
            \x20 code-daily --config ./cd.toml init    # explicit location\n\
            \x20 code-daily init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 code-daily completions bash > ~/.local/share/bash-completion/completions/code-daily\n\
            \x20 code-daily completions zsh  > ~/.zfunc/_code-daily\n\
            \x20 code-daily completions fish > ~/.config/fish/completions/code-daily.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 code-daily config get model.name\n\
            \x20 code-daily config list\n\
            \x20 code-daily config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `code-daily list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one language (`rust`, `go`, `js`, ...).
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "LANGUAGE",
        help = "Filter by language"
    )]
    pub language: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped, human-readable.
    Table,
    /// One `language/section` pair per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `code-daily init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `code-daily completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `code-daily config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `model.name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
