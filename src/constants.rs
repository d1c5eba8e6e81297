//! Common constants used throughout pkgscaffold.

/// Suffix every template file carries on disk.
pub const TEMPLATE_SUFFIX: &str = ".template.txt";

/// Accepted package names: URL-friendly characters, optionally scoped.
pub const PACKAGE_NAME_PATTERN: &str = r"^@?[A-Za-z0-9\-_/]+$";

/// Placeholder token, `[let:KEY]`.
pub const PLACEHOLDER_PATTERN: &str = r"\[let:(.+?)\]";

/// Versions accepted from the registry.
pub const VERSION_PATTERN: &str = r"^\d+\.\d+\.\d+";

/// Left padding applied to each line of a multi-line variable.
pub const DEFAULT_INDENT: usize = 4;

/// Opens a feature-only block inside a config template.
pub const REGION_START: &str = "// #region ";

/// Closes the innermost feature-only block.
pub const REGION_END: &str = "// #endregion";

/// Always-present package-manager config.
pub const NPMRC: &str = ".npmrc";
/// Always-present bundler config, filtered line by line.
pub const BUNDLER_CONFIG: &str = "rollup.config.js";
pub const TS_CONFIG: &str = "tsconfig.json";
pub const TS_NODE_CONFIG: &str = "tsconfig.node.json";
pub const DTS_BUNDLER_CONFIG: &str = "rollup.config.dts.js";
/// Lint config, filtered line by line.
pub const LINT_CONFIG: &str = "eslint.config.mjs";
pub const FORMATTER_IGNORE: &str = ".prettierignore";
pub const FORMATTER_CONFIG: &str = ".prettierrc";

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const SOURCE_DIR: &str = "src";
pub const README: &str = "README.md";
pub const LICENSE: &str = "LICENSE";
