//! The variable store: every value a `[let:KEY]` placeholder can expand to.

use crate::choices::UserChoices;
use crate::registry::DependencyEntry;

const BUILD_SCRIPT: &str = "rollup --config ./rollup.config.js";
const DTS_BUILD_SCRIPT: &str = " && rollup --config ./rollup.config.dts.js";

/// The named slots of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Name,
    Description,
    Author,
    Script,
    ReleaseScript,
    DevDependencies,
}

impl Variable {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Variable::Name),
            "description" => Some(Variable::Description),
            "author" => Some(Variable::Author),
            "script" => Some(Variable::Script),
            "releaseScript" => Some(Variable::ReleaseScript),
            "devDependencies" => Some(Variable::DevDependencies),
            _ => None,
        }
    }

    /// Scalar slots may also be requested as a JSON string literal, `[let:"KEY"]`.
    pub fn is_scalar(self) -> bool {
        matches!(self, Variable::Name | Variable::Description | Variable::Author)
    }
}

/// An ordered sequence of lines. `None` marks an absent optional line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariable {
    lines: Vec<Option<String>>,
}

impl TemplateVariable {
    pub fn single<S: Into<String>>(value: S) -> Self {
        Self { lines: vec![Some(value.into())] }
    }

    pub fn absent() -> Self {
        Self { lines: vec![None] }
    }

    pub fn push<S: Into<String>>(&mut self, line: S) {
        self.lines.push(Some(line.into()));
    }

    pub fn lines(&self) -> &[Option<String>] {
        &self.lines
    }

    /// The first line, with an absent line reading as empty.
    pub fn first(&self) -> &str {
        self.lines.first().and_then(|line| line.as_deref()).unwrap_or_default()
    }

    /// Pads each present, non-empty line with `indent` spaces and joins
    /// them with `,\n`. Absent lines render as empty strings.
    pub fn render(&self, indent: usize) -> String {
        let padding = " ".repeat(indent);
        self.lines
            .iter()
            .map(|line| match line.as_deref() {
                Some(value) if !value.is_empty() => format!("{padding}{value}"),
                _ => String::new(),
            })
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStore {
    name: TemplateVariable,
    description: TemplateVariable,
    author: TemplateVariable,
    script: TemplateVariable,
    release_script: TemplateVariable,
    dev_dependencies: TemplateVariable,
}

impl VariableStore {
    /// Fills every slot from the answers and the resolved dependencies.
    /// The dependency lines are sorted by their formatted text.
    pub fn populate(choices: &UserChoices, dependencies: &[DependencyEntry]) -> Self {
        let release_script = match choices.release_shell {
            Some(shell) if choices.use_auto_release => {
                TemplateVariable::single(shell.invocation())
            }
            _ => TemplateVariable::absent(),
        };

        let build = if choices.use_typescript {
            format!("\"build\": \"{BUILD_SCRIPT}{DTS_BUILD_SCRIPT}\"")
        } else {
            format!("\"build\": \"{BUILD_SCRIPT}\"")
        };
        let mut script = TemplateVariable::single(build);
        if let Some(invocation) = release_script.lines()[0].as_deref() {
            script.push(format!("\"release\": {invocation}"));
        }

        let mut formatted: Vec<String> =
            dependencies.iter().map(DependencyEntry::to_string).collect();
        formatted.sort();
        let mut dev_dependencies = TemplateVariable::default();
        for line in formatted {
            dev_dependencies.push(line);
        }

        Self {
            name: TemplateVariable::single(choices.name.as_str()),
            description: TemplateVariable::single(choices.description.as_str()),
            author: TemplateVariable::single(choices.author.as_str()),
            script,
            release_script,
            dev_dependencies,
        }
    }

    pub fn get(&self, variable: Variable) -> &TemplateVariable {
        match variable {
            Variable::Name => &self.name,
            Variable::Description => &self.description,
            Variable::Author => &self.author,
            Variable::Script => &self.script,
            Variable::ReleaseScript => &self.release_script,
            Variable::DevDependencies => &self.dev_dependencies,
        }
    }
}
