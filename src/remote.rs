//! Remote resolution: turns the origin URL into the link bases used to
//! hyperlink commits, issues and merge requests.

use regex::Regex;

use crate::error::{ChangelogError, Result};
use crate::git::GitShell;

/// Hosting provider of the origin remote, selected by host-name substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Github,
    Gitlab,
    Bitbucket,
    Other,
}

impl Provider {
    fn classify(url: &str) -> Self {
        if url.contains("github") {
            Provider::Github
        } else if url.contains("gitlab") {
            Provider::Gitlab
        } else if url.contains("bitbucket") {
            Provider::Bitbucket
        } else {
            Provider::Other
        }
    }

    /// Path segments for commit / issue / merge / compare links.
    ///
    /// Unrecognized hosts fall back to the GitHub-style convention
    /// instead of producing a link with a missing segment.
    fn path_segments(self) -> [&'static str; 4] {
        match self {
            Provider::Github | Provider::Other => ["commit", "issues", "pull", "compare"],
            Provider::Gitlab => ["commit", "issues", "merge_requests", "compare"],
            Provider::Bitbucket => ["commits", "issues", "pull-requests", "compare"],
        }
    }
}

/// The four provider-specific link bases, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLinks {
    pub commit: String,
    pub issue: String,
    pub merge: String,
    pub compare: String,
}

/// Read the origin URL and derive the link bases.
///
/// Fails with [ChangelogError::NoOriginRemote] when no origin remote is
/// configured. Returns `Ok(None)` when the URL has a form we cannot
/// normalize; rendering then proceeds without links.
pub fn resolve_links<G: GitShell>(git: &G) -> Result<Option<RemoteLinks>> {
    let url = git
        .run(&["config", "--get", "remote.origin.url"])
        .map_err(|_| ChangelogError::NoOriginRemote)?;

    if url.is_empty() {
        return Err(ChangelogError::NoOriginRemote);
    }

    Ok(links_for(&url))
}

/// Derive the link bases from a raw origin URL.
pub fn links_for(origin_url: &str) -> Option<RemoteLinks> {
    let base = normalize_url(origin_url);
    if base.is_empty() {
        return None;
    }

    let [commit, issue, merge, compare] = Provider::classify(&base).path_segments();

    Some(RemoteLinks {
        commit: format!("{}/{}", base, commit),
        issue: format!("{}/{}", base, issue),
        merge: format!("{}/{}", base, merge),
        compare: format!("{}/{}", base, compare),
    })
}

/// Normalize an origin URL to its https web form.
///
/// `git@host:user/repo(.git)` becomes `https://host/user/repo`; http(s)
/// URLs lose a trailing `.git`; anything else normalizes to empty.
fn normalize_url(url: &str) -> String {
    if url.starts_with("git") {
        if let Some(captures) = Regex::new(r"^git@([^:]+):([^/]+)/(.+?)(?:\.git)?$")
            .ok()
            .and_then(|re| re.captures(url))
        {
            let host = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            let user = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
            let project = captures.get(3).map(|m| m.as_str()).unwrap_or_default();
            return format!("https://{}/{}/{}", host, user, project);
        }
        String::new()
    } else if url.starts_with("http") {
        url.strip_suffix(".git").unwrap_or(url).to_string()
    } else {
        String::new()
    }
}
