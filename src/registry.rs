//! Dependency version lookup.
//!
//! Each feature contributes a fixed group of npm packages. Versions are
//! resolved through a [`Registry`]; the production implementation shells out
//! to `npm show <package> version`.

use crate::choices::UserChoices;
use crate::constants::VERSION_PATTERN;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;
use std::fmt;
use std::process::Command;
use std::sync::{Mutex, OnceLock};
use std::thread;

/// Looks up the latest published version of a package.
pub trait Registry: Sync {
    fn latest_version(&self, package: &str) -> Result<String>;
}

/// A named, fixed list of packages enabled by one feature or feature pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyGroup {
    pub name: &'static str,
    pub packages: &'static [&'static str],
    /// Version used for every package instead of asking the registry.
    pub pinned: Option<&'static str>,
}

pub const BASE: DependencyGroup = DependencyGroup {
    name: "base",
    packages: &[
        "@rollup/plugin-alias",
        "@rollup/plugin-babel",
        "@rollup/plugin-node-resolve",
        "@rollup/plugin-terser",
        "@tsconfig/node20",
        "@types/node",
        "globals",
        "rollup",
        "rollup-plugin-dts",
    ],
    pinned: None,
};

pub const BUNDLER_PLUGINS: DependencyGroup =
    DependencyGroup { name: "bundler plugins", packages: &["vite"], pinned: Some("6.0.0") };

pub const TYPESCRIPT: DependencyGroup = DependencyGroup {
    name: "typescript",
    packages: &["@babel/preset-typescript", "@rollup/plugin-typescript", "tslib", "typescript"],
    pinned: None,
};

pub const LINT: DependencyGroup = DependencyGroup {
    name: "eslint",
    packages: &[
        "@eslint/js",
        "@types/eslint__js",
        "eslint",
        "eslint-import-resolver-alias",
        "eslint-plugin-import",
    ],
    pinned: None,
};

pub const FORMATTER: DependencyGroup =
    DependencyGroup { name: "prettier", packages: &["prettier"], pinned: None };

pub const LINT_AND_FORMATTER: DependencyGroup = DependencyGroup {
    name: "eslint + prettier",
    packages: &["eslint-config-prettier", "eslint-plugin-prettier"],
    pinned: None,
};

pub const TYPESCRIPT_AND_LINT: DependencyGroup =
    DependencyGroup { name: "typescript + eslint", packages: &["typescript-eslint"], pinned: None };

/// A package and the caret range it is pinned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    /// Bare `MAJOR.MINOR.PATCH`; the caret is added when formatting.
    pub version: String,
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": \"^{}\"", self.name, self.version)
    }
}

/// Groups enabled by `choices`, in contribution order.
pub fn selected_groups(choices: &UserChoices) -> Vec<DependencyGroup> {
    let mut groups = vec![BASE, BUNDLER_PLUGINS];
    if choices.use_typescript {
        groups.push(TYPESCRIPT);
    }
    if choices.use_lint_tool {
        groups.push(LINT);
    }
    if choices.use_prettifier {
        groups.push(FORMATTER);
    }
    if choices.use_lint_tool && choices.use_prettifier {
        groups.push(LINT_AND_FORMATTER);
    }
    if choices.use_typescript && choices.use_lint_tool {
        groups.push(TYPESCRIPT_AND_LINT);
    }
    groups
}

/// Resolves every package of `group`. Registry queries run concurrently;
/// entries come back in the group's declared order.
///
/// # Arguments
/// * `registry` - Source of latest versions
/// * `group` - Packages to resolve. A pinned group skips the registry.
///
/// # Returns
/// * `Result<Vec<DependencyEntry>>` - One entry per package of the group
///
/// # Errors
/// * `Error::RegistryLookupError` for the first package, in declared order,
///   whose lookup failed
pub fn resolve_group(
    registry: &dyn Registry,
    group: &DependencyGroup,
) -> Result<Vec<DependencyEntry>> {
    debug!("Resolving {} dependencies", group.name);
    if let Some(version) = group.pinned {
        return Ok(group
            .packages
            .iter()
            .map(|package| DependencyEntry {
                name: package.to_string(),
                version: version.to_string(),
            })
            .collect());
    }

    let versions: Vec<Result<String>> = thread::scope(|scope| {
        let handles: Vec<_> = group
            .packages
            .iter()
            .map(|package| scope.spawn(move || registry.latest_version(package)))
            .collect();
        handles
            .into_iter()
            .zip(group.packages)
            .map(|(handle, package)| {
                handle.join().unwrap_or_else(|_| {
                    Err(Error::RegistryLookupError {
                        package: package.to_string(),
                        reason: "lookup thread panicked".to_string(),
                    })
                })
            })
            .collect()
    });

    group
        .packages
        .iter()
        .zip(versions)
        .map(|(package, version)| {
            Ok(DependencyEntry { name: package.to_string(), version: version? })
        })
        .collect()
}

/// Resolves all groups enabled by `choices`.
///
/// # Arguments
/// * `registry` - Source of latest versions
/// * `choices` - Answers deciding which groups are enabled
///
/// # Returns
/// * `Result<Vec<DependencyEntry>>` - Entries of every enabled group, group by group
///
/// # Errors
/// * `Error::RegistryLookupError` from the first group with an unresolvable
///   package. Later groups are not queried.
pub fn collect_dev_dependencies(
    registry: &dyn Registry,
    choices: &UserChoices,
) -> Result<Vec<DependencyEntry>> {
    let mut entries = Vec::new();
    for group in selected_groups(choices) {
        entries.extend(resolve_group(registry, &group)?);
    }
    Ok(entries)
}

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Checks the registry's reply and strips surrounding whitespace.
pub fn parse_version(package: &str, stdout: &str) -> Result<String> {
    let version = stdout.trim();
    if version_regex().is_match(version) {
        Ok(version.to_string())
    } else {
        Err(Error::RegistryLookupError {
            package: package.to_string(),
            reason: format!("unexpected version '{version}'"),
        })
    }
}

/// Queries the npm registry through the `npm` executable.
pub struct NpmRegistry {
    command: String,
}

impl NpmRegistry {
    pub fn new<S: Into<String>>(command: S) -> Self {
        Self { command: command.into() }
    }
}

impl Registry for NpmRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        let output = Command::new(&self.command)
            .args(["show", package, "version"])
            .output()
            .map_err(|e| Error::RegistryLookupError {
                package: package.to_string(),
                reason: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            warn!("'{} show {package} version' failed: {}", self.command, stderr.trim());
            return Err(Error::RegistryLookupError {
                package: package.to_string(),
                reason: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        let version = parse_version(package, &String::from_utf8_lossy(&output.stdout))?;
        debug!("Resolved {package}@{version}");
        Ok(version)
    }
}

/// Memoizes another registry for the lifetime of one run.
pub struct CachedRegistry<R> {
    inner: R,
    cache: Mutex<IndexMap<String, String>>,
}

impl<R: Registry> CachedRegistry<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, cache: Mutex::new(IndexMap::new()) }
    }
}

impl<R: Registry> Registry for CachedRegistry<R> {
    fn latest_version(&self, package: &str) -> Result<String> {
        if let Some(version) = self.cache.lock().ok().and_then(|c| c.get(package).cloned()) {
            return Ok(version);
        }
        let version = self.inner.latest_version(package)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(package.to_string(), version.clone());
        }
        Ok(version)
    }
}
