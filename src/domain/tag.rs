use std::cmp::Ordering;

use regex::Regex;
use semver::Version as SemverVersion;

/// Extract the semantic-version core of a tag name.
///
/// `"v1.2.3"` and `"release-1.2.3-rc1"` both clean to `"1.2.3"`; a tag
/// with no `X.Y.Z` substring cleans to the empty string.
pub fn clean_tag(tag: &str) -> String {
    Regex::new(r"\d+\.\d+\.\d+")
        .ok()
        .and_then(|re| re.find(tag))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Descending semantic-version comparison over raw tag names.
///
/// Tags that clean to an empty core are incomparable and report
/// `Ordering::Equal`, so a stable sort leaves them where they were.
/// This is a deliberate leniency, not a strict semver total order.
pub fn compare_desc(a: &str, b: &str) -> Ordering {
    let a = clean_tag(a);
    let b = clean_tag(b);

    if a.is_empty() || b.is_empty() {
        return Ordering::Equal;
    }

    match (SemverVersion::parse(&a), SemverVersion::parse(&b)) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        _ => Ordering::Equal,
    }
}
