//! Ordered platform detection rules.
//!
//! A strategy table of predicate -> classification pairs, evaluated top to
//! bottom; the first matching rule wins. The final rule is a catch-all, so
//! classification always succeeds.

use crate::core::{BasePath, Platform, path_segments};

use super::MarkerSet;

/// Read-only view of everything a rule may consult.
pub(super) struct Probe<'a> {
    /// Lowercased hostname.
    pub hostname: &'a str,
    /// Decoded URL path.
    pub path: &'a str,
    /// Lowercased `<meta name=...>` names present in the document head.
    pub markers: &'a MarkerSet,
    /// Allow-list of local dev folder names.
    pub folders: &'a [String],
    /// Production domains (with or without `www.`).
    pub domains: &'a [String],
}

pub(super) struct Rule {
    #[allow(dead_code)] // surfaced in debug logging by callers
    pub name: &'static str,
    pub applies: fn(&Probe) -> bool,
    pub classify: fn(&Probe) -> (Platform, BasePath),
}

/// Detection rules in priority order.
pub(super) const RULES: &[Rule] = &[
    Rule {
        name: "vercel",
        applies: |p| p.hostname.contains("vercel.app") || p.markers.contains("vercel"),
        classify: |_| (Platform::Vercel, BasePath::root()),
    },
    Rule {
        name: "netlify",
        applies: |p| p.hostname.contains("netlify.app") || p.markers.contains("netlify"),
        classify: |_| (Platform::Netlify, BasePath::root()),
    },
    Rule {
        name: "github-pages",
        applies: |p| p.hostname.contains("github.io"),
        classify: |p| (Platform::GitHubPages, github_base(p.path)),
    },
    Rule {
        name: "local",
        applies: |p| p.hostname == "localhost" || p.hostname == "127.0.0.1",
        classify: |p| (Platform::Local, local_base(p.path, p.folders)),
    },
    Rule {
        name: "production",
        applies: |p| {
            p.domains.iter().any(|d| host_matches_domain(p.hostname, d))
                || !p.hostname.contains("localhost")
        },
        classify: |_| (Platform::Production, BasePath::root()),
    },
    Rule {
        name: "unknown",
        applies: |_| true,
        classify: |_| (Platform::Unknown, BasePath::root()),
    },
];

/// Base path for a GitHub Pages project site.
///
/// The first path segment names the repository when the path has more than
/// one segment. Segments naming the pages host itself (seen when a checkout
/// is served from a folder called `user.github.io`) cannot be the base.
fn github_base(path: &str) -> BasePath {
    if path_segments(path).count() <= 1 {
        return BasePath::root();
    }
    path_segments(path)
        .find(|segment| !segment.to_ascii_lowercase().contains("github.io"))
        .map(BasePath::from_segment)
        .unwrap_or_default()
}

/// Base path on a local dev server.
///
/// The allow-list of project folder names is consulted first
/// (case-insensitive); otherwise the first segment of a multi-segment path
/// is assumed to be the serving folder; otherwise the root.
fn local_base(path: &str, folders: &[String]) -> BasePath {
    let first = path_segments(path).next();

    if let Some(first) = first
        && folders.iter().any(|f| first.eq_ignore_ascii_case(f))
    {
        // Keep the casing of the live path: that is what the server serves.
        return BasePath::from_segment(first);
    }

    if path_segments(path).count() > 1 {
        return first.map(BasePath::from_segment).unwrap_or_default();
    }

    BasePath::root()
}

/// Exact domain match, tolerating a `www.` prefix on either side.
fn host_matches_domain(hostname: &str, domain: &str) -> bool {
    let host = hostname.strip_prefix("www.").unwrap_or(hostname);
    let domain = domain.trim();
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    host.eq_ignore_ascii_case(domain)
}
