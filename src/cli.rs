use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// shapesync - check TypeScript interfaces against Django models
#[derive(Parser, Debug)]
#[command(name = "shapesync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'shapesync' without a subcommand to check every configured pair.")]
pub struct Cli {
    /// Emit NDJSON events on stdout (for CI)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Config file (default: .shapesync.toml, then .ts-backend-check.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report drift between frontend interfaces and backend models
    Check {
        /// Backend model files or directories (overrides configured pairs)
        #[arg(short, long, num_args = 1.., value_name = "PATH")]
        backend: Vec<PathBuf>,

        /// Frontend interface files or directories (overrides configured pairs)
        #[arg(short, long, num_args = 1.., value_name = "PATH")]
        frontend: Vec<PathBuf>,

        /// Only check these configured pairs
        #[arg(short, long = "pair", value_delimiter = ',', value_name = "NAME")]
        pairs: Vec<String>,

        /// Also report backend models no interface is checked against
        #[arg(long)]
        backend_orphans: bool,
    },

    /// List backend fields declared optional (blank=True / null=True)
    Optional {
        /// Backend model files or directories (default: every configured pair)
        #[arg(short, long, num_args = 1.., value_name = "PATH")]
        backend: Vec<PathBuf>,
    },

    /// Show the declarations shapesync extracts, with inherited fields
    Parse {
        /// Backend model files or directories
        #[arg(short, long, num_args = 1.., value_name = "PATH")]
        backend: Vec<PathBuf>,

        /// Frontend interface files or directories
        #[arg(short, long, num_args = 1.., value_name = "PATH")]
        frontend: Vec<PathBuf>,
    },

    /// Write a commented .shapesync.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,

        /// Ask for the first pair's paths
        #[arg(short, long)]
        interactive: bool,
    },
}
