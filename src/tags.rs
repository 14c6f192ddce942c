//! Tag resolution: turns the repository's tag refs into an ordered list
//! of version windows.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::{compare_desc, Version};
use crate::error::{ChangelogError, Result};
use crate::git::GitShell;

/// Resolve the repository's tags into descending-ordered version windows.
///
/// For N tags this produces exactly N windows: `older...newer` for each
/// adjacent pair plus a terminal `rootCommit...oldest` window. Dates are
/// the tag commits' dates truncated to `YYYY-MM-DD`. When `version_limit`
/// is set, only the newest N windows are kept.
pub fn resolve_versions<G: GitShell>(
    git: &G,
    repo_root: &Path,
    version_limit: Option<usize>,
) -> Result<Vec<Version>> {
    let raw_tags = list_tags(repo_root)?;

    // uniq, keeping first occurrence; lexical pre-sort makes the later
    // stable sort deterministic for tags the comparator cannot order
    let mut seen = HashSet::new();
    let mut tags: Vec<String> = raw_tags
        .into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect();
    tags.sort();
    tags.sort_by(|a, b| compare_desc(a, b));

    let mut versions = Vec::with_capacity(tags.len());

    for pair in tags.windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        versions.push(Version::new(
            newer,
            format!("{}...{}", older, newer),
            tag_date(git, newer)?,
        ));
    }

    // terminal window: everything from the root commit up to the oldest tag
    let oldest = &tags[tags.len() - 1];
    versions.push(Version::new(
        oldest,
        format!("{}...{}", root_commit(git)?, oldest),
        tag_date(git, oldest)?,
    ));

    if let Some(limit) = version_limit {
        versions.truncate(limit);
    }

    Ok(versions)
}

/// List tag names from `.git/refs/tags`.
fn list_tags(repo_root: &Path) -> Result<Vec<String>> {
    let tags_dir = repo_root.join(".git").join("refs").join("tags");

    if !tags_dir.exists() {
        return Err(ChangelogError::NoGitRepository);
    }

    let mut tags = Vec::new();
    for entry in fs::read_dir(&tags_dir)? {
        let entry = entry?;
        tags.push(entry.file_name().to_string_lossy().into_owned());
    }

    if tags.is_empty() {
        return Err(ChangelogError::NoTagsFound);
    }

    Ok(tags)
}

/// Date of the tag's commit, `YYYY-MM-DD`.
fn tag_date<G: GitShell>(git: &G, tag: &str) -> Result<String> {
    let iso = git.run(&["log", "-1", "--pretty=%ci", tag])?;
    Ok(iso.split(' ').next().unwrap_or_default().to_string())
}

/// First root commit reachable from HEAD.
fn root_commit<G: GitShell>(git: &G) -> Result<String> {
    let out = git.run(&["rev-list", "--max-parents=0", "HEAD"])?;
    Ok(out.lines().next().unwrap_or_default().to_string())
}
