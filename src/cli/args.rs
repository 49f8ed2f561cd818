//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Relink link rewriter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Site directory override (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Serving URL override (e.g. https://alice.github.io/repo/)
    ///
    /// Wins over `site.url` from the config file. Useful in CI where the
    /// deployment URL differs from local development.
    #[arg(short = 'U', long = "url", value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Config file path (default: relink.toml)
    #[arg(short = 'C', long, default_value = "relink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite links in every HTML file under the site root
    #[command(visible_alias = "a")]
    Apply {
        /// Report what would change without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Report files whose links are not rewritten yet
    #[command(visible_alias = "c")]
    Check {
        /// Treat pending rewrites as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },

    /// Apply, then keep re-applying on file changes until Ctrl+C
    #[command(visible_alias = "w")]
    Watch {},

    /// Print the detected environment for a URL as JSON
    #[command(visible_alias = "d")]
    Detect {
        /// URL to classify (e.g. http://localhost:5500/Meatlovers/menu.html)
        #[arg(value_hint = clap::ValueHint::Url)]
        url: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_apply(&self) -> bool {
        matches!(self.command, Commands::Apply { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_watch(&self) -> bool {
        matches!(self.command, Commands::Watch { .. })
    }
    pub const fn is_detect(&self) -> bool {
        matches!(self.command, Commands::Detect { .. })
    }
}
