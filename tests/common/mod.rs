#![allow(dead_code)]

use pkgscaffold::choices::{ReleaseShell, UserChoices};
use pkgscaffold::error::{Error, Result};
use pkgscaffold::prompt::Prompter;
use pkgscaffold::registry::Registry;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned replies and records every question and complaint.
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<String>>,
    pub complaints: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: RefCell::new(replies.iter().map(|r| r.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
            complaints: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::ValidationError(format!("no scripted reply for '{prompt}'")))?;
        Ok(if reply.is_empty() { default.to_string() } else { reply })
    }

    fn report_invalid(&self, message: &str) {
        self.complaints.borrow_mut().push(message.to_string());
    }
}

/// Answers every lookup with a version derived from the package name length.
pub struct FakeRegistry;

impl Registry for FakeRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        Ok(format!("{}.0.0", package.len()))
    }
}

/// Fails the lookup for one package.
pub struct BrokenRegistry(pub &'static str);

impl Registry for BrokenRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        if package == self.0 {
            Err(Error::RegistryLookupError {
                package: package.to_string(),
                reason: "npm ERR! 404".to_string(),
            })
        } else {
            Ok("1.0.0".to_string())
        }
    }
}

pub fn choices(auto_release: bool, ts: bool, lint: bool, prettier: bool) -> UserChoices {
    UserChoices {
        name: "my-pkg".to_string(),
        description: "desc".to_string(),
        author: "me".to_string(),
        use_auto_release: auto_release,
        release_shell: auto_release.then_some(ReleaseShell::Posix),
        use_typescript: ts,
        use_lint_tool: lint,
        use_prettifier: prettier,
    }
}
