//! Document generation: wires tag resolution, commit parsing, remote
//! links and history formatting into one changelog string.

use std::mem;
use std::path::Path;

use crate::commits::parse_commits;
use crate::domain::Version;
use crate::error::{ChangelogError, Result};
use crate::git::GitShell;
use crate::history::{self, HistoryBuilder, RenderOptions};
use crate::remote::{self, RemoteLinks};
use crate::tags::resolve_versions;

/// Attribution line under the document title.
pub const ATTRIBUTION: &str = "This document was generated by \
[autochangelog](https://github.com/roshanca/autochangelog) automatically.";

/// Plain options consumed by the generation run, decoupled from clap.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub show_date: bool,
    pub use_group: bool,
    pub filter: Option<String>,
    pub commit_limit: Option<usize>,
    pub version_limit: Option<usize>,
    pub attribution: bool,
    pub uncategorized: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            show_date: true,
            use_group: false,
            filter: None,
            commit_limit: None,
            version_limit: None,
            attribution: true,
            uncategorized: false,
        }
    }
}

/// Generate the whole changelog document.
///
/// Returns the assembled markdown; nothing is written to disk here, so a
/// fatal error anywhere leaves no partial output behind. State is scoped
/// to this call, it is safe to invoke repeatedly from a long-lived host.
pub fn generate_changelog<G: GitShell>(
    git: &G,
    repo_root: &Path,
    options: &GenerateOptions,
) -> Result<String> {
    let mut versions = resolve_versions(git, repo_root, options.version_limit)?;

    for version in &mut versions {
        version.commits = parse_commits(git, &version.diff)?;
    }

    let links = remote::resolve_links(git)?;

    let filter = match &options.filter {
        Some(pattern) => Some(history::type_pattern(pattern).ok_or_else(|| {
            ChangelogError::config(format!("invalid filter pattern: {}", pattern))
        })?),
        None => None,
    };
    let render = RenderOptions {
        use_group: options.use_group,
        commit_limit: options.commit_limit,
        filter,
    };

    let mut builder = HistoryBuilder::new(options.uncategorized);
    let mut document = vec!["# ChangeLog".to_string()];

    if options.attribution {
        document.push(String::new());
        document.push(ATTRIBUTION.to_string());
    }

    for mut version in versions {
        let commits = mem::take(&mut version.commits);

        document.push(String::new());
        document.push(version_heading(&version, links.as_ref(), options.show_date));
        document.push(String::new());
        document.push(builder.render_version(commits, links.as_ref(), &render));
    }

    if let Some(section) = builder.breaking_section() {
        document.push(String::new());
        document.push(section);
    }

    let mut text = document.join("\n");
    if let Some(links) = &links {
        text = history::rewrite_references(&text, links);
    }

    Ok(text)
}

fn version_heading(version: &Version, links: Option<&RemoteLinks>, show_date: bool) -> String {
    let title = match links {
        Some(links) => format!("[{}]({}/{})", version.name, links.compare, version.diff),
        None => version.name.clone(),
    };

    if show_date {
        format!("## {} ({})", title, version.date)
    } else {
        format!("## {}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_with_links_and_date() {
        let version = Version::new("v1.1.0", "v1.0.0...v1.1.0", "2023-04-01");
        let links = RemoteLinks {
            commit: "https://github.com/u/r/commit".to_string(),
            issue: "https://github.com/u/r/issues".to_string(),
            merge: "https://github.com/u/r/pull".to_string(),
            compare: "https://github.com/u/r/compare".to_string(),
        };

        let heading = version_heading(&version, Some(&links), true);
        assert_eq!(
            heading,
            "## [v1.1.0](https://github.com/u/r/compare/v1.0.0...v1.1.0) (2023-04-01)"
        );
    }

    #[test]
    fn test_heading_without_date() {
        let version = Version::new("v1.1.0", "v1.0.0...v1.1.0", "2023-04-01");
        let heading = version_heading(&version, None, false);
        assert_eq!(heading, "## v1.1.0");
    }
}
