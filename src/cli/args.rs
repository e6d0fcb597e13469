//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "importer")]
#[command(author, version, about = "Load script files and directories, reporting every failure", long_about = None)]
pub struct Args {
    /// Files or directories to import, in order
    pub paths: Vec<String>,

    /// JSON file holding an array of paths (use - for stdin), imported after PATHS
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, env = "IMPORTER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Echo each error message as it is found
    #[arg(long)]
    pub echo: bool,

    /// Echo messages as HTML
    #[arg(long)]
    pub html: bool,

    /// Required script extension (default: php)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Validate only, do not load anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the definitions loaded into the scope
    #[arg(long)]
    pub show_scope: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
