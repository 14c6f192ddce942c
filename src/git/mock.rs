use std::collections::HashMap;

use crate::error::{ChangelogError, Result};
use crate::git::GitShell;

/// Mock executor for testing without a real git repository.
///
/// Maps full command lines (`"log --pretty=%H v1.0.0...v1.1.0"`) to the
/// output a real `git` invocation would produce.
pub struct MockGit {
    responses: HashMap<String, String>,
}

impl MockGit {
    /// Create a mock with no expectations
    pub fn new() -> Self {
        MockGit {
            responses: HashMap::new(),
        }
    }

    /// Register the output for a command line (args joined by spaces)
    pub fn expect(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.responses.insert(command.into(), output.into());
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitShell for MockGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = args.join(" ");
        self.responses
            .get(&command_line)
            .map(|out| out.trim().to_string())
            .ok_or_else(|| {
                ChangelogError::subprocess(
                    format!("git {}", command_line),
                    "no mock response registered",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_registered_output() {
        let mut git = MockGit::new();
        git.expect("rev-list --max-parents=0 HEAD", "abc123\n");

        let out = git.run(&["rev-list", "--max-parents=0", "HEAD"]).unwrap();
        assert_eq!(out, "abc123");
    }

    #[test]
    fn test_mock_unregistered_command_fails() {
        let git = MockGit::new();
        let result = git.run(&["log", "--pretty=%H", "v1...v2"]);
        assert!(result.is_err());
    }
}
