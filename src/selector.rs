//! Decides which config files a scaffold gets and which of their lines survive.
//!
//! Config templates mark feature-only blocks with region markers:
//!
//! ```text
//! // #region typescript
//! typescript({ tsconfig: joinTo('tsconfig.json') }),
//! // #endregion
//! ```
//!
//! Marker lines are always removed. The enclosed lines are removed when the
//! feature is off. On top of that, lines mentioning a disabled tool by name
//! are dropped, so single-line references need no markers.

use crate::choices::UserChoices;
use crate::constants::{
    BUNDLER_CONFIG, DTS_BUNDLER_CONFIG, FORMATTER_CONFIG, FORMATTER_IGNORE, LINT_CONFIG, NPMRC,
    REGION_END, REGION_START, TS_CONFIG, TS_NODE_CONFIG,
};
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

pub const TYPESCRIPT_REGION: &str = "typescript";
pub const PRETTIER_REGION: &str = "prettier";

/// Placeholder-free files to copy, in output order.
pub fn base_files(choices: &UserChoices) -> Vec<&'static str> {
    let mut files = vec![NPMRC, BUNDLER_CONFIG];
    if choices.use_typescript {
        files.extend([TS_CONFIG, TS_NODE_CONFIG, DTS_BUNDLER_CONFIG]);
    }
    if choices.use_lint_tool {
        files.push(LINT_CONFIG);
    }
    if choices.use_prettifier {
        files.extend([FORMATTER_IGNORE, FORMATTER_CONFIG]);
    }
    files
}

/// Source entry file under `src/`.
pub fn entry_file(choices: &UserChoices) -> &'static str {
    if choices.use_typescript {
        "index.ts"
    } else {
        "index.js"
    }
}

/// Line rules for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFilter {
    /// Regions whose contents are dropped.
    pub dropped_regions: Vec<&'static str>,
    /// Lowercase needles; a line containing any of them (case-insensitively) is dropped.
    pub dropped_mentions: Vec<&'static str>,
    /// Rewrite `.ts` extensions to `.js` on surviving lines.
    pub rewrite_ts_extensions: bool,
}

fn ts_extension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.ts\b").expect("extension pattern is valid"))
}

fn region_name(line: &str) -> Option<&str> {
    line.trim().strip_prefix(REGION_START).map(str::trim)
}

fn is_region_end(line: &str) -> bool {
    line.trim() == REGION_END
}

impl LineFilter {
    /// Applies the rules to `content`, preserving `\n` line structure.
    ///
    /// # Arguments
    /// * `content` - Template text of one config file
    ///
    /// # Returns
    /// * `Result<String>` - Surviving lines joined by `\n`, marker lines removed
    ///
    /// # Errors
    /// * `Error::TemplateError` if a region is nested, never closed, or ends
    ///   without a start
    pub fn apply(&self, content: &str) -> Result<String> {
        let mut kept = Vec::new();
        let mut open_region: Option<&str> = None;

        for (index, line) in content.split('\n').enumerate() {
            if let Some(name) = region_name(line) {
                if let Some(outer) = open_region {
                    return Err(Error::TemplateError(format!(
                        "region '{name}' opened inside region '{outer}' on line {}",
                        index + 1
                    )));
                }
                open_region = Some(name);
                continue;
            }
            if is_region_end(line) {
                if open_region.take().is_none() {
                    return Err(Error::TemplateError(format!(
                        "region end without a start on line {}",
                        index + 1
                    )));
                }
                continue;
            }

            if open_region.is_some_and(|region| self.dropped_regions.iter().any(|r| *r == region)) {
                continue;
            }
            let lower = line.to_lowercase();
            if self.dropped_mentions.iter().any(|needle| lower.contains(needle)) {
                continue;
            }

            if self.rewrite_ts_extensions {
                kept.push(ts_extension_regex().replace_all(line, ".js").into_owned());
            } else {
                kept.push(line.to_string());
            }
        }

        if let Some(name) = open_region {
            return Err(Error::TemplateError(format!("region '{name}' is never closed")));
        }
        Ok(kept.join("\n"))
    }
}

/// The line filter for `file`, if it has one.
pub fn line_filter(file: &str, choices: &UserChoices) -> Option<LineFilter> {
    let mut filter = LineFilter::default();
    match file {
        LINT_CONFIG => {
            if !choices.use_typescript {
                filter.dropped_regions.push(TYPESCRIPT_REGION);
                filter.dropped_mentions.extend(["typescript", "dts"]);
            }
            if !choices.use_prettifier {
                filter.dropped_regions.push(PRETTIER_REGION);
                filter.dropped_mentions.push("prettier");
            }
        }
        BUNDLER_CONFIG => {
            if !choices.use_typescript {
                filter.dropped_regions.push(TYPESCRIPT_REGION);
                filter.dropped_mentions.push("typescript");
                filter.rewrite_ts_extensions = true;
            }
        }
        _ => return None,
    }
    debug!("Line filter for {file}: {filter:?}");
    Some(filter)
}
