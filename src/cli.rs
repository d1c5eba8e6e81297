//! Command-line interface implementation for pkgscaffold.
//! The tool is interactive; the flags only tune logging and where inputs come from.

use clap::Parser;
use std::path::PathBuf;

#[cfg(windows)]
const DEFAULT_REGISTRY_COMMAND: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_REGISTRY_COMMAND: &str = "npm";

/// Command-line arguments structure for pkgscaffold.
#[derive(Parser, Debug)]
#[command(author, version, about = "pkgscaffold: scaffold a new rollup-based npm package", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers as JSON or YAML from stdin.
    /// Any answer missing from the document is still asked interactively.
    #[arg(short, long)]
    pub stdin: bool,

    /// Directory of `*.template.txt` files to use instead of the bundled templates
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Executable used to look up the latest version of each dependency
    #[arg(long, value_name = "CMD", default_value = DEFAULT_REGISTRY_COMMAND)]
    pub registry_command: String,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
