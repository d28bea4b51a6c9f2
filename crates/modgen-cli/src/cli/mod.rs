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
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate ModuleLoader sources from a module specification",
    long_about = "modgen reads JSON documents listing interfaces and their \
                  implementations and writes the four moduleLoader*.ipp \
                  fragments that wire them into a C++ ModuleLoader.",
    after_help = "EXAMPLES:\n\
        \x20 modgen generate\n\
        \x20 modgen generate physics.json dynamics.json --ipp src/generated/\n\
        \x20 modgen check modules.json\n\
        \x20 modgen completions bash > /usr/share/bash-completion/completions/modgen",
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
    /// Write the four ModuleLoader fragments.
    #[command(
        visible_alias = "gen",
        about = "Generate ModuleLoader fragments",
        after_help = "EXAMPLES:\n\
            \x20 modgen generate                          # reads modules.json\n\
            \x20 modgen generate a.json b.json --ipp out/ --hpp include/\n\
            \x20 modgen generate --strict-modules --dry-run"
    )]
    Generate(GenerateArgs),

    /// Load and validate documents without writing anything.
    #[command(
        about = "Validate module specifications",
        after_help = "EXAMPLES:\n\
            \x20 modgen check\n\
            \x20 modgen check a.json b.json --format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the modgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modgen config show\n\
            \x20 modgen config path\n\
            \x20 modgen config init --force"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `modgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Specification documents, concatenated in order.
    #[arg(
        value_name = "FILES",
        help = "Specification documents (default: modules.json)"
    )]
    pub files: Vec<PathBuf>,

    /// Prefix prepended to each generated `.ipp` file name.
    #[arg(
        long = "ipp",
        value_name = "PREFIX",
        help = "Prefix for generated .ipp files (default: ./)"
    )]
    pub ipp_prefix: Option<String>,

    /// Prefix prepended to each included header stem.
    #[arg(
        long = "hpp",
        value_name = "PREFIX",
        help = "Prefix for included .hpp headers (default: include/)"
    )]
    pub hpp_prefix: Option<String>,

    /// Report unknown module names instead of ignoring them.
    #[arg(
        long = "strict-modules",
        overrides_with = "no_strict_modules",
        help = "Call throwup() for unknown module names too"
    )]
    pub strict_modules: bool,

    /// Ignore unknown module names even when the config enables strict mode.
    #[arg(
        long = "no-strict-modules",
        overrides_with = "strict_modules",
        help = "Ignore unknown module names, overriding strict_modules from config"
    )]
    pub no_strict_modules: bool,

    /// Print the artifacts instead of writing them.
    #[arg(
        long = "dry-run",
        help = "Print generated fragments without writing files"
    )]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `modgen check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Specification documents, concatenated in order.
    #[arg(
        value_name = "FILES",
        help = "Specification documents (default: modules.json)"
    )]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: CheckFormat,
}

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    /// Interface names with implementation counts.
    Table,
    /// One `Interface Implementation` pair per line.
    List,
    /// The merged specification as JSON.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
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

/// Subcommands for `modgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,

        /// Write `.modgen.toml` in the current directory instead.
        #[arg(long = "local", help = "Create local configuration in current directory")]
        local: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::parse_from(["modgen", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.files.is_empty());
        assert_eq!(args.ipp_prefix, None);
        assert_eq!(args.hpp_prefix, None);
        assert!(!args.strict_modules);
        assert!(!args.dry_run);
    }

    #[test]
    fn generate_with_files_and_prefixes() {
        let cli = Cli::parse_from([
            "modgen",
            "gen",
            "a.json",
            "b.json",
            "--ipp",
            "out/",
            "--hpp",
            "inc/",
            "--strict-modules",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.files, [PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.ipp_prefix.as_deref(), Some("out/"));
        assert_eq!(args.hpp_prefix.as_deref(), Some("inc/"));
        assert!(args.strict_modules);
    }

    #[test]
    fn last_strict_flag_wins() {
        let cli = Cli::parse_from(["modgen", "generate", "--strict-modules", "--no-strict-modules"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(!args.strict_modules);
        assert!(args.no_strict_modules);

        let cli = Cli::parse_from(["modgen", "generate", "--no-strict-modules", "--strict-modules"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.strict_modules);
        assert!(!args.no_strict_modules);
    }

    #[test]
    fn empty_prefix_is_accepted() {
        let cli = Cli::parse_from(["modgen", "generate", "--ipp", ""]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.ipp_prefix.as_deref(), Some(""));
    }

    #[test]
    fn check_format_json() {
        let cli = Cli::parse_from(["modgen", "check", "--format", "json"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.format, CheckFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modgen", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
