//! Explicit stand-in for the browser location.

use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::core::{split_fragment, split_query};

/// The pieces of the current page URL the pipeline cares about.
///
/// Threaded as a parameter everywhere; components never reach for global
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub hostname: String,
    /// Decoded URL path, always with a leading slash.
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    pub fn new(hostname: &str, path: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            path: normalize_path(path),
            query: None,
            fragment: None,
        }
    }

    /// Parse from a full URL string.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).with_context(|| format!("invalid url `{url}`"))?;
        Ok(Self::from_url(&parsed))
    }

    pub fn from_url(url: &Url) -> Self {
        let path = percent_decode_str(url.path())
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| url.path().to_string());
        Self {
            hostname: url.host_str().unwrap_or_default().to_string(),
            path: normalize_path(&path),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        }
    }

    /// The location this page lands on after a replace-navigation.
    ///
    /// `target` is a path with optional query and fragment, as produced by
    /// the normalizer.
    pub fn redirected(&self, target: &str) -> Self {
        let (rest, fragment) = split_fragment(target);
        let (path, query) = split_query(rest);
        Self {
            hostname: self.hostname.clone(),
            path: normalize_path(path),
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        }
    }

    /// Query string and fragment in href form (`?q#f`), empty when absent.
    pub fn href_suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(query) = &self.query {
            suffix.push('?');
            suffix.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            suffix.push('#');
            suffix.push_str(fragment);
        }
        suffix
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.path, self.href_suffix())
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
