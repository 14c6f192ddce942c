use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ChangelogError, Result};
use crate::git::GitShell;

/// Runs git commands against a repository on disk.
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    /// Create an executor rooted at the given repository directory.
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        SystemGit {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl GitShell for SystemGit {
    fn run(&self, args: &[&str]) -> Result<String> {
        let command_line = format!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| ChangelogError::subprocess(&command_line, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChangelogError::subprocess(
                &command_line,
                format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_trims_output() {
        let git = SystemGit::new(".");
        let version = git.run(&["--version"]).unwrap();
        assert!(version.starts_with("git version"));
        assert_eq!(version, version.trim());
    }

    #[test]
    fn test_failing_command_is_an_error() {
        let git = SystemGit::new(".");
        let result = git.run(&["definitely-not-a-subcommand"]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("git definitely-not-a-subcommand"));
    }
}
