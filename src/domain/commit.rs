use regex::Regex;

const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE: ";

/// One commit of a version window, decomposed for rendering.
///
/// `r#type` and `scope` are populated only when the subject matches the
/// conventional-commits header form (`type(scope): description` or
/// `type: description`); otherwise both stay empty and `pure_subject`
/// equals `subject` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub short_hash: String,
    pub subject: String,
    pub pure_subject: String,
    pub r#type: String,
    pub scope: String,
    pub body: String,
    pub breaking_change: String,
}

impl Commit {
    /// Build a commit record from its raw hash, subject line and body.
    pub fn new(hash: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        let hash = hash.into();
        let subject = subject.into();
        let body = body.into();

        let short_hash: String = hash.chars().take(7).collect();
        let (r#type, scope, pure_subject) = decompose_subject(&subject);
        let breaking_change = breaking_change_from(&body);

        Commit {
            hash,
            short_hash,
            subject,
            pure_subject,
            r#type,
            scope,
            body,
            breaking_change,
        }
    }
}

/// Split a subject into `(type, scope, description)`.
///
/// Returns empty type/scope and the subject itself when the header
/// pattern does not match.
fn decompose_subject(subject: &str) -> (String, String, String) {
    // type(scope): description
    if let Some(captures) = Regex::new(r"^([a-zA-Z]+)\(([^)]*)\):\s*(.*)$")
        .ok()
        .and_then(|re| re.captures(subject))
    {
        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let scope = captures
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let description = captures
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        return (r#type, scope, description);
    }

    // type: description
    if let Some(captures) = Regex::new(r"^([a-zA-Z]+):\s*(.*)$")
        .ok()
        .and_then(|re| re.captures(subject))
    {
        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let description = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        return (r#type, String::new(), description);
    }

    (String::new(), String::new(), subject.to_string())
}

/// Everything after the first `BREAKING CHANGE: ` marker, or empty.
fn breaking_change_from(body: &str) -> String {
    body.split_once(BREAKING_CHANGE_MARKER)
        .map(|(_, note)| note.to_string())
        .unwrap_or_default()
}
