//! In-memory scaffold tree and its materialization on disk.

use crate::error::{Error, Result};
use log::debug;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    /// Creation order on disk.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileNode),
    Dir(DirNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Dir(dir) => &dir.name,
        }
    }
}

impl FileNode {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, content: C) -> Self {
        Self { name: name.into(), content: content.into() }
    }
}

impl DirNode {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into(), children: Vec::new() }
    }

    pub fn push_file(&mut self, file: FileNode) {
        self.children.push(Node::File(file));
    }

    pub fn push_dir(&mut self, dir: DirNode) {
        self.children.push(Node::Dir(dir));
    }

    /// Looks a node up by a `/`-separated path relative to this directory.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let child = self.children.iter().find(|child| child.name() == head)?;
        match (child, rest) {
            (_, None) => Some(child),
            (Node::Dir(dir), Some(rest)) => dir.find(rest),
            (Node::File(_), Some(_)) => None,
        }
    }

    /// Content of the file at `path`, if there is one.
    pub fn file(&self, path: &str) -> Option<&str> {
        match self.find(path)? {
            Node::File(file) => Some(&file.content),
            Node::Dir(_) => None,
        }
    }

    /// Every file path below this directory, in creation order.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for child in &self.children {
            match child {
                Node::File(file) => paths.push(file.name.clone()),
                Node::Dir(dir) => paths
                    .extend(dir.file_paths().into_iter().map(|p| format!("{}/{p}", dir.name))),
            }
        }
        paths
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{}/", "  ".repeat(depth), self.name)?;
        for child in &self.children {
            match child {
                Node::File(file) => writeln!(f, "{}{}", "  ".repeat(depth + 1), file.name)?,
                Node::Dir(dir) => dir.fmt_indented(f, depth + 1)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for DirNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

fn write_new_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn create_dir_node(dir: &DirNode, path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir(path)?;
    for child in &dir.children {
        match child {
            Node::File(file) => write_new_file(&path.join(&file.name), &file.content)?,
            Node::Dir(sub) => create_dir_node(sub, &path.join(&sub.name))?,
        }
    }
    Ok(())
}

/// Joins `name` below `parent`, refusing anything that would leave `parent`.
fn contained_path(parent: &Path, name: &str) -> Result<PathBuf> {
    let mut path = parent.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            _ => {
                return Err(Error::ValidationError(format!(
                    "'{name}' does not name a directory below '{}'",
                    parent.display()
                )))
            }
        }
    }
    Ok(path)
}

/// Writes `root` below `parent` and returns the created root path.
///
/// # Errors
/// * `Error::ValidationError` if the root name is absolute or climbs out of
///   `parent`
/// * `Error::OutputDirectoryExistsError` if the root already exists
/// * `Error::IoError` on the first failed write. Anything written before
///   the failure stays on disk.
pub fn materialize<P: AsRef<Path>>(root: &DirNode, parent: P) -> Result<PathBuf> {
    let root_path = contained_path(parent.as_ref(), &root.name)?;
    if root_path.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: root_path.display().to_string(),
        });
    }
    create_dir_node(root, &root_path)?;
    Ok(root_path)
}
