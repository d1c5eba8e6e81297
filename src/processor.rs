//! Core scaffold processing: turns the user's answers into a tree of files
//! and writes it out.
//!
//! The stages run strictly in order and each one only starts once the previous
//! one has produced its output:
//!
//! 1. populate the variable store (queries the registry)
//! 2. build the package manifest
//! 3. build the placeholder-free config files
//! 4. build the placeholder files
//! 5. materialize the tree

use crate::choices::UserChoices;
use crate::constants::{LICENSE, PACKAGE_MANIFEST, README, SOURCE_DIR};
use crate::error::Result;
use crate::placeholder::Resolver;
use crate::registry::{collect_dev_dependencies, Registry};
use crate::selector::{base_files, entry_file, line_filter};
use crate::template::TemplateSet;
use crate::tree::{materialize, DirNode, FileNode};
use crate::variables::VariableStore;
use log::debug;
use std::path::{Path, PathBuf};

pub fn populate_variables(registry: &dyn Registry, choices: &UserChoices) -> Result<VariableStore> {
    let dependencies = collect_dev_dependencies(registry, choices)?;
    debug!("Resolved {} dev dependencies", dependencies.len());
    Ok(VariableStore::populate(choices, &dependencies))
}

/// Builds the in-memory scaffold from stages 2-4.
pub struct Builder<'a> {
    choices: &'a UserChoices,
    templates: &'a TemplateSet,
    resolver: Resolver<'a>,
}

impl<'a> Builder<'a> {
    pub fn new(
        choices: &'a UserChoices,
        templates: &'a TemplateSet,
        store: &'a VariableStore,
    ) -> Self {
        Self { choices, templates, resolver: Resolver::new(store) }
    }

    fn resolved(&self, template: &str) -> Result<String> {
        Ok(self.resolver.resolve(self.templates.get(template)?))
    }

    pub fn package_manifest(&self, root: &mut DirNode) -> Result<()> {
        root.push_file(FileNode::new(PACKAGE_MANIFEST, self.resolved(PACKAGE_MANIFEST)?));
        Ok(())
    }

    pub fn base_files(&self, root: &mut DirNode) -> Result<()> {
        for file in base_files(self.choices) {
            let content = self.templates.get(file)?;
            let content = match line_filter(file, self.choices) {
                Some(filter) => filter.apply(content)?,
                None => content.to_string(),
            };
            debug!("Adding base file {file}");
            root.push_file(FileNode::new(file, content));
        }
        Ok(())
    }

    pub fn placeholder_files(&self, root: &mut DirNode) -> Result<()> {
        let entry = entry_file(self.choices);
        let mut src = DirNode::new(SOURCE_DIR);
        src.push_file(FileNode::new(entry, self.resolved(&format!("{SOURCE_DIR}/{entry}"))?));
        root.push_dir(src);

        let release_shell = self.choices.release_shell.filter(|_| self.choices.use_auto_release);
        if let Some(shell) = release_shell {
            root.push_file(FileNode::new(shell.file_name(), self.resolved(shell.file_name())?));
        }

        for file in [README, LICENSE] {
            root.push_file(FileNode::new(file, self.resolved(file)?));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<DirNode> {
        let mut root = DirNode::new(self.choices.name.as_str());
        self.package_manifest(&mut root)?;
        self.base_files(&mut root)?;
        self.placeholder_files(&mut root)?;
        debug!("Scaffold tree:\n{root}");
        Ok(root)
    }
}

/// Runs every stage and writes the scaffold below `output_parent`.
/// Nothing is written unless all earlier stages succeed.
///
/// # Arguments
/// * `choices` - The user's answers
/// * `templates` - Template text for every file that may be generated
/// * `registry` - Source of dev dependency versions
/// * `output_parent` - Directory the scaffold root is created in
///
/// # Returns
/// * `Result<PathBuf>` - Path of the created scaffold root
///
/// # Errors
/// * `Error::RegistryLookupError` if a dependency version cannot be resolved
/// * `Error::TemplateNotFoundError` or `Error::TemplateError` for a missing
///   or malformed template
/// * `Error::ValidationError` if the package name would leave `output_parent`
/// * `Error::OutputDirectoryExistsError` if the scaffold root already exists
/// * `Error::IoError` on a failed write
pub fn generate<P: AsRef<Path>>(
    choices: &UserChoices,
    templates: &TemplateSet,
    registry: &dyn Registry,
    output_parent: P,
) -> Result<PathBuf> {
    let store = populate_variables(registry, choices)?;
    let root = Builder::new(choices, templates, &store).build()?;
    materialize(&root, output_parent)
}
