//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use geodex::{Collation, SortBy, SortOrder};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "geodex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Look up, filter and sort ISO 3166-1 country records")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to an optional `geodex.*` file in the
    /// current directory
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Output switches shared by the record-printing commands.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct OutputArgs {
    /// Include the flag emoji (and flag URLs in JSON output)
    #[arg(long)]
    pub(crate) flags: bool,

    /// Print pretty JSON instead of text lines
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List countries, optionally filtered by continent and sorted
    List {
        /// Keep only countries on this continent (e.g. 'Europe', 'north america')
        #[arg(long)]
        continent: Option<String>,

        /// Sort column: label, code, phone or continent
        #[arg(long)]
        sort: Option<SortBy>,

        /// Sort direction: asc or desc
        #[arg(long, default_value_t = SortOrder::Asc)]
        order: SortOrder,

        /// String comparison: natural or ordinal. Overrides `query.collation`
        #[arg(long)]
        collation: Option<Collation>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the country with this ISO alpha-2 code
    Code {
        code: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the country with this ISO alpha-3 code
    Alpha3 {
        alpha3: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show every country using this dialing prefix (without '+', e.g. '44' or '1-242')
    Phone {
        phone: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the flag emoji and image URLs for a code
    Flag { code: String },
}
