//! URL path types and helpers.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The URL path prefix under which the site root is served.
///
/// Invariants:
/// - Always starts with `/`
/// - Always ends with `/`
///
/// `/` itself is the root base path (site served at domain root).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(Arc<str>);

impl BasePath {
    /// The root base path (`/`).
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Build a base path from a single path segment.
    ///
    /// `"repo"` -> `/repo/`. Leading/trailing slashes in the segment are
    /// tolerated; an empty segment collapses to the root.
    pub fn from_segment(segment: &str) -> Self {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        Self(Arc::from(format!("/{trimmed}/")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// The single segment of a non-root base path (`/repo/` -> `repo`).
    pub fn segment(&self) -> Option<&str> {
        let trimmed = self.0.trim_matches('/');
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Compare a live path against this base, ignoring the trailing slash.
    ///
    /// `/repo/` matches both `/repo/` and `/repo`; the root matches `/`.
    pub fn matches_path(&self, path: &str) -> bool {
        let base = self.0.trim_end_matches('/');
        let path = path.trim_end_matches('/');
        if base.is_empty() {
            return path.is_empty();
        }
        base == path
    }

    /// Prefix a site-root target with this base path.
    ///
    /// Avoids a doubled slash at the join and never prefixes a target that
    /// already lives under the base segment.
    ///
    /// `/repo/` + `/menu` -> `/repo/menu`; `/repo/` + `/repo/menu` is
    /// returned unchanged.
    pub fn prepend_to(&self, target: &str) -> String {
        if self.is_root() {
            return target.to_string();
        }
        if let Some(segment) = self.segment()
            && path_starts_with_segment(target, segment)
        {
            return target.to_string();
        }
        format!("{}{}", self.0.trim_end_matches('/'), target)
    }
}

/// Check if a site-root path starts with a given segment (not just a
/// string prefix): `/repo/menu` starts with `repo`, `/repository` does not.
fn path_starts_with_segment(path: &str, segment: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    match trimmed.split('/').next() {
        Some(first) => first.eq_ignore_ascii_case(segment),
        None => false,
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BasePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for BasePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BasePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let trimmed = s.trim_matches('/');
        if trimmed.is_empty() {
            Ok(Self::root())
        } else {
            Ok(Self(Arc::from(format!("/{trimmed}/"))))
        }
    }
}

// =============================================================================
// Path helpers
// =============================================================================

/// Iterate the non-empty segments of a URL path.
///
/// `/repo/menu.html` -> `["repo", "menu.html"]`
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Strip a trailing `.html` suffix, case-insensitively.
///
/// Returns `None` when the path does not end in `.html`.
pub fn strip_html_suffix(path: &str) -> Option<&str> {
    let len = path.len();
    // The suffix is pure ASCII, so a non-boundary 5 bytes from the end
    // already means there is no match.
    if len < 5 || !path.is_char_boundary(len - 5) {
        return None;
    }
    let (head, tail) = path.split_at(len - 5);
    tail.eq_ignore_ascii_case(".html").then_some(head)
}

/// Split a URL into path and fragment parts.
///
/// `/about#team` -> `("/about", Some("team"))`
#[inline]
pub fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((path, frag)) => (path, Some(frag)),
        None => (url, None),
    }
}

/// Split a URL into path and query parts.
///
/// `/about?v=1` -> `("/about", Some("v=1"))`
#[inline]
pub fn split_query(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}
