//! History formatting: renders a version's commits as markdown, flat or
//! grouped by conventional-commit type, and rewrites issue / merge
//! references into links.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::domain::Commit;
use crate::remote::RemoteLinks;

/// Named groups in emission order, each with the pattern its commit
/// types must match.
pub const GROUPS: &[(&str, &str)] = &[
    ("Features", r"^(feat(ure)?|updated?|new)$"),
    ("Bug Fixes", r"^fix(e(d|s))?$"),
    ("Chores", r"^(chores?)$"),
];

/// Heading of the opt-in bucket for commits matching no group.
pub const UNCATEGORIZED_TITLE: &str = "Others";

/// Per-version rendering options.
pub struct RenderOptions {
    pub use_group: bool,
    pub commit_limit: Option<usize>,
    pub filter: Option<Regex>,
}

/// Compile a pattern case-insensitively.
pub fn type_pattern(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

/// Renders version bodies and accumulates breaking-change notes.
///
/// One builder instance covers exactly one document generation: create
/// it fresh per run, render every version through it, then take the
/// breaking-changes section at the end.
pub struct HistoryBuilder {
    breaking_changes: Vec<String>,
    uncategorized: bool,
}

impl HistoryBuilder {
    pub fn new(uncategorized: bool) -> Self {
        HistoryBuilder {
            breaking_changes: Vec::new(),
            uncategorized,
        }
    }

    /// Produce the markdown body for one version's commits.
    ///
    /// Applies the commit limit first (keeping the newest commits), then
    /// the type filter, then renders flat or grouped. Breaking-change
    /// notes of every commit that survives limit and filter are
    /// collected for the end-of-document section.
    pub fn render_version(
        &mut self,
        mut commits: Vec<Commit>,
        links: Option<&RemoteLinks>,
        options: &RenderOptions,
    ) -> String {
        if let Some(limit) = options.commit_limit {
            if commits.len() > limit {
                commits.truncate(limit);
            }
        }

        if let Some(filter) = &options.filter {
            commits.retain(|commit| filter.is_match(&commit.r#type));
        }

        for commit in &mut commits {
            attach_labels(commit);
            if !commit.breaking_change.is_empty() {
                self.breaking_changes.push(commit.breaking_change.clone());
            }
        }

        if options.use_group {
            self.grouped_history(&commits, links)
        } else {
            flat_history(&commits, links)
        }
    }

    fn grouped_history(&self, commits: &[Commit], links: Option<&RemoteLinks>) -> String {
        let mut sections: Vec<String> = Vec::new();
        let mut grouped: HashSet<usize> = HashSet::new();

        for (title, pattern) in GROUPS {
            let regex = match type_pattern(pattern) {
                Some(regex) => regex,
                None => continue,
            };

            let members: Vec<&Commit> = commits
                .iter()
                .enumerate()
                .filter(|(index, commit)| {
                    let matched = regex.is_match(&commit.r#type);
                    if matched {
                        grouped.insert(*index);
                    }
                    matched
                })
                .map(|(_, commit)| commit)
                .collect();

            if !members.is_empty() {
                sections.push(group_section(title, &members, links));
            }
        }

        if self.uncategorized {
            let leftovers: Vec<&Commit> = commits
                .iter()
                .enumerate()
                .filter(|(index, _)| !grouped.contains(index))
                .map(|(_, commit)| commit)
                .collect();

            if !leftovers.is_empty() {
                sections.push(group_section(UNCATEGORIZED_TITLE, &leftovers, links));
            }
        }

        sections.join("\n\n")
    }

    /// The `### BREAKING CHANGES` block: distinct notes in the order
    /// they were first encountered, or `None` when nothing was
    /// collected.
    pub fn breaking_section(&self) -> Option<String> {
        if self.breaking_changes.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let mut lines = vec!["### BREAKING CHANGES".to_string(), String::new()];
        for note in &self.breaking_changes {
            if seen.insert(note.as_str()) {
                lines.push(format!("- {}", note));
            }
        }

        Some(lines.join("\n"))
    }
}

fn flat_history(commits: &[Commit], links: Option<&RemoteLinks>) -> String {
    commits
        .iter()
        .map(|commit| line_for(&commit.subject, commit, links))
        .collect::<Vec<_>>()
        .join("\n")
}

fn group_section(title: &str, members: &[&Commit], links: Option<&RemoteLinks>) -> String {
    let mut lines = vec![format!("### {}", title), String::new()];
    lines.extend(
        members
            .iter()
            .map(|commit| line_for(&commit.pure_subject, commit, links)),
    );
    lines.join("\n")
}

fn line_for(text: &str, commit: &Commit, links: Option<&RemoteLinks>) -> String {
    match links {
        Some(links) => format!(
            "- {} [`{}`]({}/{})",
            text, commit.short_hash, links.commit, commit.hash
        ),
        None => format!("- {}", text),
    }
}

/// Append short-form issue / merge references found in the body
/// (`#12`, `!7`, `owner/repo#34`) to the commit's subject lines,
/// space-joined. Mutates the record; each commit is rendered once per
/// run.
fn attach_labels(commit: &mut Commit) {
    let regex = match Regex::new(r"([\w.-]+/[\w.-]+)?[#!][1-9]\d*") {
        Ok(regex) => regex,
        Err(_) => return,
    };

    let labels: Vec<&str> = regex
        .find_iter(&commit.body)
        .map(|m| m.as_str())
        .collect();

    if labels.is_empty() {
        return;
    }

    let joined = labels.join(" ");
    commit.subject = format!("{} {}", commit.subject, joined);
    commit.pure_subject = format!("{} {}", commit.pure_subject, joined);
}

/// Whole-document post-pass: every bare `#N` becomes an issue link and
/// every `!N` a merge-request link. This is a global substitution over
/// the assembled text, so numeric sequences that merely look like
/// references are rewritten too.
pub fn rewrite_references(text: &str, links: &RemoteLinks) -> String {
    let mut output = text.to_string();

    if let Ok(regex) = Regex::new(r"(#[1-9]\d*)") {
        let replacement = format!("[`${{1}}`]({}/${{1}})", links.issue);
        output = regex
            .replace_all(&output, replacement.as_str())
            .into_owned();
    }

    if let Ok(regex) = Regex::new(r"(![1-9]\d*)") {
        let replacement = format!("[`${{1}}`]({}/${{1}})", links.merge);
        output = regex
            .replace_all(&output, replacement.as_str())
            .into_owned();
    }

    output
}
