//! Next release name computation
//!
//! Release names are an opaque prefix followed by a trailing
//! `major.minor.patch` triple, e.g. `BE-ADMIN-TEST-4.2.7`. Only the triple at
//! the very end of the name is interpreted.

use regex::{Captures, Regex};

use crate::models::{JiraVersion, VersionBumpKind};

const SEPARATOR: &str = "-";
const TRAILING_TRIPLE: &str = r"(\d+)\.(\d+)\.(\d+)$";

/// Computes the name of the release that follows `latest_version_name`.
///
/// The trailing triple of `latest_version_name` is bumped according to `kind`
/// and appended to `prefix` with a `-` separator. Doubled separators (a prefix
/// that already ends in `-`) are collapsed afterwards.
///
/// # Returns
/// * `Some(name)` - The next version name
/// * `None` - If the name has no trailing numeric triple, or a component does
///   not fit in a `u64`
///
/// # Example
/// ```
/// use jira_action_core::models::VersionBumpKind;
/// use jira_action_core::next_version_name;
///
/// assert_eq!(
///     next_version_name(VersionBumpKind::Minor, "BE-ADMIN-TEST", "BE-ADMIN-TEST-4.2.7"),
///     Some("BE-ADMIN-TEST-4.3.0".to_string())
/// );
/// assert_eq!(next_version_name(VersionBumpKind::Patch, "X", "no-version-here"), None);
/// ```
pub fn next_version_name(
    kind: VersionBumpKind,
    prefix: &str,
    latest_version_name: &str,
) -> Option<String> {
    let re = Regex::new(TRAILING_TRIPLE).ok()?;
    let captures = re.captures(latest_version_name)?;

    let major = component(&captures, 1)?;
    let minor = component(&captures, 2)?;
    let patch = component(&captures, 3)?;

    let (major, minor, patch) = match kind {
        VersionBumpKind::Major => (major.checked_add(1)?, 0, 0),
        VersionBumpKind::Minor => (major, minor.checked_add(1)?, 0),
        VersionBumpKind::Patch => (major, minor, patch.checked_add(1)?),
    };

    let name = format!("{prefix}{SEPARATOR}{major}.{minor}.{patch}");
    Some(name.replace("--", SEPARATOR))
}

fn component(captures: &Captures<'_>, index: usize) -> Option<u64> {
    captures.get(index)?.as_str().parse::<u64>().ok()
}

/// Picks the released version starting with `prefix` that was released last.
///
/// Versions without a release date sort before dated ones. On equal dates
/// the one listed later wins.
pub fn latest_released_matching<'a>(
    versions: &'a [JiraVersion],
    prefix: &str,
) -> Option<&'a JiraVersion> {
    versions
        .iter()
        .filter(|version| version.released && version.name.starts_with(prefix))
        .max_by_key(|version| version.release_date)
}
