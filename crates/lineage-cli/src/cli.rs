//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use lineage_browser::SortKey;
use std::path::PathBuf;

/// Lineage - Browse a family tree from the terminal.
#[derive(Debug, Parser)]
#[command(name = "lineage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding people.json, relationships.json and sources.json
    #[arg(short, long, global = true, env = "LINEAGE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the family tree around a person
    Tree(TreeArgs),

    /// List everyone in the directory
    List(ListArgs),

    /// Search people by name or place
    Search(SearchArgs),

    /// Show one person's profile
    Profile(ProfileArgs),

    /// Convert a GEDCOM file into data documents
    Import(ImportArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the tree command.
#[derive(Debug, Parser)]
pub struct TreeArgs {
    /// Person to center on (default: configured root)
    #[arg(short, long)]
    pub root: Option<String>,

    /// Partner to show beside the root (default: first spouse)
    #[arg(long)]
    pub co_root: Option<String>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Sort order
    #[arg(short, long, value_enum, default_value = "last")]
    pub sort: SortArg,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search terms; every term must match
    #[arg(required = true)]
    pub query: Vec<String>,
}

/// Arguments for the profile command.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    /// Person id
    pub id: String,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// GEDCOM file to convert
    pub file: PathBuf,

    /// Output directory (default: the data directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Directory sort argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    /// Last name, then first name
    Last,
    /// First name, then last name
    First,
    /// Birth year
    Birth,
    /// Death year
    Death,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Last => SortKey::LastName,
            SortArg::First => SortKey::FirstName,
            SortArg::Birth => SortKey::Birth,
            SortArg::Death => SortKey::Death,
        }
    }
}
