use crate::domain::Commit;

/// One changelog section: a tag, the diff range it covers, the tag's
/// commit date (`YYYY-MM-DD`) and the commits inside the range.
///
/// `diff` is either `olderTag...newerTag` or, for the earliest tag,
/// `rootCommit...tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub name: String,
    pub diff: String,
    pub date: String,
    pub commits: Vec<Commit>,
}

impl Version {
    /// Create a version window with no commits attached yet
    pub fn new(name: impl Into<String>, diff: impl Into<String>, date: impl Into<String>) -> Self {
        Version {
            name: name.into(),
            diff: diff.into(),
            date: date.into(),
            commits: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_new() {
        let version = Version::new("v1.1.0", "v1.0.0...v1.1.0", "2023-04-01");
        assert_eq!(version.name, "v1.1.0");
        assert_eq!(version.diff, "v1.0.0...v1.1.0");
        assert_eq!(version.date, "2023-04-01");
        assert!(version.commits.is_empty());
    }
}
