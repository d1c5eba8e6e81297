//! Placeholder resolution.
//!
//! Template text marks substitution points with `[let:KEY]`. Scalar keys also
//! come in a quoted flavour, `[let:"KEY"]`, which expands to the value wrapped
//! in double quotes. Multi-line keys expand to their lines joined by `,\n`,
//! each line padded by the resolver's indent.
//!
//! Resolution is a single pass per line: expanded text is never scanned
//! again, and tokens with an unknown key are left exactly as written.

use crate::constants::{DEFAULT_INDENT, PLACEHOLDER_PATTERN};
use crate::variables::{Variable, VariableStore};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// A recognized `[let:KEY]` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub variable: Variable,
    pub quoted: bool,
}

impl Placeholder {
    /// Parses the text between `[let:` and `]`.
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(inner) = key.strip_prefix('"').and_then(|k| k.strip_suffix('"')) {
            let variable = Variable::from_key(inner)?;
            return variable.is_scalar().then_some(Self { variable, quoted: true });
        }
        Variable::from_key(key).map(|variable| Self { variable, quoted: false })
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"))
}

pub struct Resolver<'a> {
    store: &'a VariableStore,
    indent: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self { store, indent: DEFAULT_INDENT }
    }

    pub fn with_indent(store: &'a VariableStore, indent: usize) -> Self {
        Self { store, indent }
    }

    fn expand(&self, placeholder: Placeholder) -> String {
        let value = self.store.get(placeholder.variable);
        match placeholder.variable {
            Variable::Script | Variable::DevDependencies => value.render(self.indent),
            _ if placeholder.quoted => format!("\"{}\"", value.first()),
            _ => value.first().to_string(),
        }
    }

    /// Replaces every recognized placeholder in `line`.
    pub fn resolve_line(&self, line: &str) -> String {
        placeholder_regex()
            .replace_all(line, |caps: &Captures| match Placeholder::parse(&caps[1]) {
                Some(placeholder) => self.expand(placeholder),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Resolves `content` line by line, keeping its line structure.
    pub fn resolve(&self, content: &str) -> String {
        content.split('\n').map(|line| self.resolve_line(line)).collect::<Vec<_>>().join("\n")
    }
}
