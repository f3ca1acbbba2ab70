//! Runtime version parsing and comparison.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::config::VersionCompare;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").unwrap());

/// Normalize tool output such as `v18.17.0\n` to `18.17.0`.
pub fn normalize(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('v').unwrap_or(trimmed)
}

/// Parse a version as reported by a tool.
///
/// Accepts a leading `v`, pads missing minor/patch components (`18` →
/// `18.0.0`), and otherwise takes the first `X.Y.Z` in the text.
pub fn parse_version(raw: &str) -> Option<Version> {
    let text = normalize(raw);
    if let Ok(version) = Version::parse(text) {
        return Some(version);
    }

    let parts: Vec<&str> = text.split('.').collect();
    if (1..=2).contains(&parts.len()) && parts.iter().all(|p| p.parse::<u64>().is_ok()) {
        let mut padded = parts.join(".");
        for _ in parts.len()..3 {
            padded.push_str(".0");
        }
        return Version::parse(&padded).ok();
    }

    VERSION_REGEX
        .find(text)
        .and_then(|m| Version::parse(m.as_str()).ok())
}

/// Whether `found` satisfies `minimum` under the given comparison mode.
///
/// Returns `None` when either side cannot be parsed in semantic mode.
pub fn meets_minimum(found: &str, minimum: &str, mode: VersionCompare) -> Option<bool> {
    match mode {
        VersionCompare::Semantic => {
            let found = parse_version(found)?;
            let minimum = parse_version(minimum)?;
            Some(found >= minimum)
        }
        VersionCompare::Lexical => Some(normalize(found) >= normalize(minimum)),
    }
}
