//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "http://localhost:5500/Meatlovers/"   # canonical serving URL
//! root = "public"                             # directory of HTML files
//! ```
//!
//! The url is the address the processed pages are expected to be served
//! from; each file's location is derived by joining its route onto it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical serving URL. Hostname and leading path drive platform
    /// detection for every processed file.
    pub url: Option<String>,

    /// Directory of HTML files to process (relative to project root).
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: None,
            root: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_site_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.site.url, None);
        assert_eq!(config.site.root, std::path::PathBuf::from("public"));
    }

    #[test]
    fn test_site_override() {
        let config =
            Config::from_str("[site]\nurl = \"https://x.vercel.app/\"\nroot = \"dist\"").unwrap();
        assert_eq!(config.site.url.as_deref(), Some("https://x.vercel.app/"));
        assert_eq!(config.site.root, std::path::PathBuf::from("dist"));
    }
}
