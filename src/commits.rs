//! Commit parsing: expands a version window's diff range into ordered
//! [Commit] records.

use crate::domain::Commit;
use crate::error::Result;
use crate::git::GitShell;

/// List and decompose the commits of one diff range, newest first
/// (git-log order).
///
/// Subject and body are fetched with one `git show` each; any failing
/// invocation aborts the whole generation. Batching the queries would be
/// an output-preserving optimization, this keeps the one-question-one-
/// command shape.
pub fn parse_commits<G: GitShell>(git: &G, diff: &str) -> Result<Vec<Commit>> {
    let hashes = git.run(&["log", "--pretty=%H", diff])?;

    hashes
        .lines()
        .map(|hash| {
            let subject = git.run(&["show", "--pretty=%s", "-s", hash])?;
            let body = git.run(&["show", "--pretty=%b", "-s", hash])?;
            Ok(Commit::new(hash, subject, body))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockGit;

    fn mock_commit(git: &mut MockGit, hash: &str, subject: &str, body: &str) {
        git.expect(format!("show --pretty=%s -s {}", hash), subject);
        git.expect(format!("show --pretty=%b -s {}", hash), body);
    }

    #[test]
    fn test_parses_commits_in_log_order() {
        let mut git = MockGit::new();
        git.expect("log --pretty=%H v1.0.0...v1.1.0", "bbb2222\naaa1111");
        mock_commit(&mut git, "bbb2222", "feat: add X", "");
        mock_commit(&mut git, "aaa1111", "fix: correct Y", "");

        let commits = parse_commits(&git, "v1.0.0...v1.1.0").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject, "feat: add X");
        assert_eq!(commits[0].r#type, "feat");
        assert_eq!(commits[1].subject, "fix: correct Y");
    }

    #[test]
    fn test_empty_range_yields_no_commits() {
        let mut git = MockGit::new();
        git.expect("log --pretty=%H v1.0.0...v1.0.1", "");

        let commits = parse_commits(&git, "v1.0.0...v1.0.1").unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_subprocess_failure_aborts() {
        let mut git = MockGit::new();
        git.expect("log --pretty=%H v1.0.0...v1.1.0", "bbb2222");
        // no show responses registered -> the per-commit query fails

        assert!(parse_commits(&git, "v1.0.0...v1.1.0").is_err());
    }

    #[test]
    fn test_breaking_change_flows_through() {
        let mut git = MockGit::new();
        git.expect("log --pretty=%H v1.0.0...v1.1.0", "ccc3333");
        mock_commit(
            &mut git,
            "ccc3333",
            "refactor!: drop legacy api",
            "BREAKING CHANGE: removed the v1 endpoints",
        );

        let commits = parse_commits(&git, "v1.0.0...v1.1.0").unwrap();
        assert_eq!(commits[0].breaking_change, "removed the v1 endpoints");
    }
}
