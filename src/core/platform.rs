//! Hosting platform classification.

use serde::{Deserialize, Serialize};

/// The hosting environment a page is served from.
///
/// Derived from the live hostname, path and document markers on every
/// pass; never cached, so there is no staleness to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Local development server (localhost / 127.0.0.1).
    Local,
    /// Vercel deployment (*.vercel.app or marker present).
    Vercel,
    /// Netlify deployment (*.netlify.app or marker present).
    Netlify,
    /// GitHub Pages (*.github.io), usually under a /repo/ base path.
    #[serde(rename = "github-pages")]
    GitHubPages,
    /// Custom production domain.
    Production,
    /// Could not be classified.
    Unknown,
}

impl Platform {
    /// Stable lowercase identifier, used for the injected meta tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Vercel => "vercel",
            Self::Netlify => "netlify",
            Self::GitHubPages => "github-pages",
            Self::Production => "production",
            Self::Unknown => "unknown",
        }
    }

    /// Hosts that rewrite clean URLs natively; the normalizer and the
    /// click interception both stand down for them.
    #[inline]
    pub fn is_managed_host(self) -> bool {
        matches!(self, Self::Vercel | Self::Netlify)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
