//! Run-wide settings derived once from the command line.

use crate::cli::Args;
use crate::error::Result;
use std::path::PathBuf;

/// Host family, which decides the flavour of release script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Everything the pipeline needs besides the user's answers.
#[derive(Debug, Clone)]
pub struct Settings {
    pub platform: Platform,
    /// Template directory override. `None` selects the bundled templates.
    pub templates: Option<PathBuf>,
    pub registry_command: String,
    /// The scaffold root is created inside this directory.
    pub output_parent: PathBuf,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self> {
        Ok(Self {
            platform: Platform::current(),
            templates: args.templates.clone(),
            registry_command: args.registry_command.clone(),
            output_parent: std::env::current_dir()?,
        })
    }
}
