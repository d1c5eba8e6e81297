//! pkgscaffold generates a ready-to-build npm package skeleton.
//! It asks a handful of questions, resolves dependency versions from the npm
//! registry and writes the resulting files into a new directory.

/// Answers driving a run: package metadata and feature toggles
pub mod choices;

/// Command-line interface module for the pkgscaffold application
pub mod cli;

/// Run-wide settings derived from the command line
pub mod config;

/// Shared constants: file names, patterns, markers
pub mod constants;

/// Error types and handling for the pkgscaffold application
pub mod error;

/// Logger initialization
pub mod logger;

/// Answer collection from stdin documents and interactive prompts
pub mod parser;

/// `[let:KEY]` placeholder resolution
pub mod placeholder;

/// Pipeline stages: variable population, tree building, materialization
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Dependency groups and registry version lookup
pub mod registry;

/// Per-feature file selection and line filtering
pub mod selector;

/// Bundled and directory-based template sets
pub mod template;

/// In-memory scaffold tree and its on-disk materialization
pub mod tree;

/// Template variable store
pub mod variables;
