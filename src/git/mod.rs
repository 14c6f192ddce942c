//! Git command abstraction layer
//!
//! Everything this tool needs from git is the trimmed text output of a
//! porcelain or plumbing command. The [GitShell] trait captures exactly
//! that primitive, with two implementations:
//!
//! - [shell::SystemGit]: spawns the `git` binary synchronously
//! - [mock::MockGit]: canned command/output pairs for testing
//!
//! Components depend on the trait rather than a concrete implementation,
//! so the whole generation pipeline can be exercised without a real
//! repository.

pub mod mock;
pub mod shell;

pub use mock::MockGit;
pub use shell::SystemGit;

use crate::error::Result;

/// Run a git command, get its trimmed standard output.
///
/// Implementors must be `Send + Sync`. Every call blocks until the
/// command completes; a non-zero exit status is an error (mapped to
/// [crate::error::ChangelogError::Subprocess]) and aborts the caller —
/// commit metadata is not re-derivable mid-run, so there is no retry.
pub trait GitShell: Send + Sync {
    /// Execute `git <args...>` and return stdout with surrounding
    /// whitespace removed.
    fn run(&self, args: &[&str]) -> Result<String>;
}
