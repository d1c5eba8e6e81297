//! Template loading. Templates are bundled into the binary, or loaded from a
//! directory of `<name>.template.txt` files that mirrors the bundled layout.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name, ".template.txt")))),*]
    };
}

const BUNDLED: &[(&str, &str)] = bundled![
    "package.json",
    ".npmrc",
    "rollup.config.js",
    "rollup.config.dts.js",
    "tsconfig.json",
    "tsconfig.node.json",
    "eslint.config.mjs",
    ".prettierrc",
    ".prettierignore",
    "src/index.ts",
    "src/index.js",
    "publish.sh",
    "publish.ps1",
    "README.md",
    "LICENSE",
];

/// Where templates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    Directory(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Bundled => write!(f, "bundled templates"),
            TemplateSource::Directory(path) => {
                write!(f, "template directory: '{}'", path.display())
            }
        }
    }
}

impl From<Option<PathBuf>> for TemplateSource {
    fn from(dir: Option<PathBuf>) -> Self {
        dir.map_or(TemplateSource::Bundled, TemplateSource::Directory)
    }
}

/// Template text keyed by output-relative name, e.g. `src/index.ts`.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: IndexMap<String, String>,
}

impl TemplateSet {
    pub fn bundled() -> Self {
        Self {
            templates: BUNDLED
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect(),
        }
    }

    /// Loads every `*.template.txt` below `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::TemplateDirDoesNotExistError {
                template_dir: dir.display().to_string(),
            });
        }

        let mut templates = IndexMap::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let Some(name) = relative.strip_suffix(TEMPLATE_SUFFIX) else {
                debug!("Skipping non-template file {relative}");
                continue;
            };
            debug!("Loaded template {name}");
            templates.insert(name.to_string(), fs::read_to_string(entry.path())?);
        }
        Ok(Self { templates })
    }

    pub fn load(source: &TemplateSource) -> Result<Self> {
        debug!("Using {source}");
        match source {
            TemplateSource::Bundled => Ok(Self::bundled()),
            TemplateSource::Directory(dir) => Self::from_dir(dir),
        }
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_set_is_complete() {
        let set = TemplateSet::bundled();
        for (name, _) in BUNDLED {
            assert!(set.get(name).is_ok(), "missing {name}");
        }
        assert!(set.get("package.json").unwrap().contains("[let:devDependencies]"));
    }

    #[test]
    fn test_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("README.md.template.txt"), "# [let:name]").unwrap();
        fs::write(temp_dir.path().join("src/index.ts.template.txt"), "export {}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let set = TemplateSet::from_dir(temp_dir.path()).unwrap();
        assert_eq!(set.get("README.md").unwrap(), "# [let:name]");
        assert_eq!(set.get("src/index.ts").unwrap(), "export {}");
        assert!(matches!(set.get("notes.txt"), Err(Error::TemplateNotFoundError { .. })));
    }

    #[test]
    fn test_from_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = TemplateSet::from_dir(temp_dir.path().join("nope"));
        assert!(matches!(result, Err(Error::TemplateDirDoesNotExistError { .. })));
    }

    #[test]
    fn test_template_source_display() {
        assert_eq!(TemplateSource::from(None).to_string(), "bundled templates");
        assert_eq!(
            TemplateSource::from(Some(PathBuf::from("/tpl"))).to_string(),
            "template directory: '/tpl'"
        );
    }
}
