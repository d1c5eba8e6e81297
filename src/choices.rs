//! The user's answers, captured once and read by every later stage.

use crate::config::Platform;
use crate::constants::PACKAGE_NAME_PATTERN;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Shell used by the generated release script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseShell {
    PowerShell,
    Posix,
}

impl ReleaseShell {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => ReleaseShell::PowerShell,
            Platform::Posix => ReleaseShell::Posix,
        }
    }

    /// Name of the generated script file.
    pub fn file_name(self) -> &'static str {
        match self {
            ReleaseShell::PowerShell => "publish.ps1",
            ReleaseShell::Posix => "publish.sh",
        }
    }

    /// The quoted `scripts.release` value pointing at [`Self::file_name`].
    pub fn invocation(self) -> &'static str {
        match self {
            ReleaseShell::PowerShell => "\"powershell ./publish.ps1\"",
            ReleaseShell::Posix => "\"bash ./publish.sh\"",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChoices {
    pub name: String,
    pub description: String,
    pub author: String,
    pub use_auto_release: bool,
    /// Set exactly when `use_auto_release` is.
    pub release_shell: Option<ReleaseShell>,
    pub use_typescript: bool,
    pub use_lint_tool: bool,
    pub use_prettifier: bool,
}

fn package_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PACKAGE_NAME_PATTERN).expect("package name pattern is valid"))
}

/// Checks that `name` only contains URL-friendly characters and names a
/// directory below the current one, so no leading `/`.
pub fn validate_package_name(name: &str) -> Result<()> {
    if package_name_regex().is_match(name) && !name.starts_with('/') {
        Ok(())
    } else {
        Err(Error::ValidationError(
            "Name can only contain URL-friendly characters".to_string(),
        ))
    }
}

/// Parses a `Y/n` answer. Anything but `y` or `n` (any case) is rejected.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
