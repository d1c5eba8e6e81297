//! Collects the answers that drive a run, from a preloaded document, from the
//! prompter, or from both.

use crate::choices::{parse_yes_no, validate_package_name, ReleaseShell, UserChoices};
use crate::config::Platform;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use log::debug;
use serde::Deserialize;
use std::io::Read;

/// Answers supplied up front. Every field is optional; missing ones are prompted.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreloadedAnswers {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "useAutoRelease")]
    pub use_auto_release: Option<bool>,
    #[serde(rename = "useTypeScript")]
    pub use_typescript: Option<bool>,
    #[serde(rename = "useLintTool")]
    pub use_lint_tool: Option<bool>,
    #[serde(rename = "usePrettifier")]
    pub use_prettifier: Option<bool>,
}

/// Parses a JSON document of answers, falling back to YAML.
/// Blank input means nothing was preloaded.
pub fn parse_answers(content: &str) -> Result<PreloadedAnswers> {
    if content.trim().is_empty() {
        return Ok(PreloadedAnswers::default());
    }
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::AnswersParseError(e.to_string())),
    }
}

pub fn load_from_stdin() -> Result<PreloadedAnswers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn get_answers_from(take_from_stdin: bool) -> Result<PreloadedAnswers> {
    if take_from_stdin {
        load_from_stdin()
    } else {
        Ok(PreloadedAnswers::default())
    }
}

const INVALID_NAME: &str = "Name can only contain URL-friendly characters.";

/// Asks until `parse` accepts the reply.
fn ask_until_valid<T>(
    prompt: &dyn Prompter,
    question: &str,
    default: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T> {
    loop {
        let reply = prompt.input(question, default)?;
        match parse(&reply) {
            Ok(value) => return Ok(value),
            Err(message) => {
                debug!("Rejected answer '{reply}' to '{question}'");
                prompt.report_invalid(&message);
            }
        }
    }
}

fn ask_yes_no(prompt: &dyn Prompter, question: &str) -> Result<bool> {
    ask_until_valid(prompt, question, "Y", |reply| {
        parse_yes_no(reply).ok_or_else(|| "Please enter Y or n.".to_string())
    })
}

fn ask_package_name(prompt: &dyn Prompter) -> Result<String> {
    ask_until_valid(prompt, "Package name", "", |reply| {
        validate_package_name(reply)
            .map(|()| reply.to_string())
            .map_err(|_| INVALID_NAME.to_string())
    })
}

/// Produces the run's [`UserChoices`]. Preloaded answers win; the rest are
/// asked in the fixed order: name, description, author, release script,
/// TypeScript, lint tool, formatter. A preloaded name that fails validation
/// is reported and asked for again.
pub fn get_answers(
    prompt: &dyn Prompter,
    preloaded: PreloadedAnswers,
    platform: Platform,
) -> Result<UserChoices> {
    let name = match preloaded.name {
        Some(name) => match validate_package_name(&name) {
            Ok(()) => name,
            Err(e) => {
                debug!("Preloaded name '{name}' rejected: {e}");
                prompt.report_invalid(INVALID_NAME);
                ask_package_name(prompt)?
            }
        },
        None => ask_package_name(prompt)?,
    };
    let description = match preloaded.description {
        Some(description) => description,
        None => prompt.input("description", "")?,
    };
    let author = match preloaded.author {
        Some(author) => author,
        None => prompt.input("author", "")?,
    };
    let use_auto_release = match preloaded.use_auto_release {
        Some(value) => value,
        None => ask_yes_no(prompt, "Add release script? (Y/n)")?,
    };
    let use_typescript = match preloaded.use_typescript {
        Some(value) => value,
        None => ask_yes_no(prompt, "Use typescript? (Y/n)")?,
    };
    let use_lint_tool = match preloaded.use_lint_tool {
        Some(value) => value,
        None => ask_yes_no(prompt, "Use eslint? (Y/n)")?,
    };
    let use_prettifier = match preloaded.use_prettifier {
        Some(value) => value,
        None => ask_yes_no(prompt, "Use prettier? (Y/n)")?,
    };

    let release_shell = use_auto_release.then(|| ReleaseShell::for_platform(platform));

    Ok(UserChoices {
        name,
        description,
        author,
        use_auto_release,
        release_shell,
        use_typescript,
        use_lint_tool,
        use_prettifier,
    })
}
