//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sola",
    bin_name = "sola",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Forge SOLA-standard AI services",
    long_about = "Sola scaffolds Python AI services that follow the SOLA \
                  architecture and generates their business logic with an \
                  OpenAI-compatible model.",
    after_help = "EXAMPLES:\n\
        \x20 sola auth\n\
        \x20 sola init ticket-triage\n\
        \x20 sola build --task \"classify support tickets by urgency\"\n\
        \x20 sola completions bash > ~/.local/share/bash-completion/completions/sola",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the OpenAI API key.
    #[command(
        about = "Store your OpenAI API key",
        after_help = "EXAMPLES:\n\
            \x20 sola auth                 # prompt (input hidden)\n\
            \x20 sola auth --api-key sk-…  # non-interactive"
    )]
    Auth(AuthArgs),

    /// Create a new project skeleton.
    #[command(
        about = "Create a new SOLA project",
        after_help = "EXAMPLES:\n\
            \x20 sola init my-service"
    )]
    Init(InitArgs),

    /// Generate business logic into `app/services.py`.
    #[command(
        visible_alias = "b",
        about = "Generate business logic with AI",
        after_help = "EXAMPLES:\n\
            \x20 sola build -t \"summarise meeting notes\"\n\
            \x20 sola build -t \"score leads\" --project-dir ./my-service"
    )]
    Build(BuildArgs),

    /// Manage the Sola configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sola config path\n\
            \x20 sola config list\n\
            \x20 sola config init --force"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sola completions bash > ~/.local/share/bash-completion/completions/sola\n\
            \x20 sola completions zsh  > ~/.zfunc/_sola\n\
            \x20 sola completions fish > ~/.config/fish/completions/sola.fish"
    )]
    Completions(CompletionsArgs),
}

// ── auth ──────────────────────────────────────────────────────────────────────

/// Arguments for `sola auth`.
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Key to store. Prompted for (hidden input) when omitted.
    #[arg(long = "api-key", value_name = "KEY", help = "API key to store")]
    pub api_key: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sola init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name; the project is created at `./<NAME>`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `sola build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// What the service should do.
    #[arg(
        short = 't',
        long = "task",
        value_name = "DESCRIPTION",
        help = "Description of the business logic to generate"
    )]
    pub task: String,

    /// Project to write into (default: current directory).
    #[arg(
        long = "project-dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub project_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sola completions`.
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

/// Subcommands for `sola config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the path to the active configuration file.
    Path,
    /// Print all effective configuration values.
    List,
    /// Write a configuration file holding the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
