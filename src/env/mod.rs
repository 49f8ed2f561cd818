//! Environment detection.
//!
//! Classifies the hosting platform from the live hostname, path and
//! document markers, and computes the base path the site is served under.
//! Pure computation: the context is rebuilt from scratch on every pass and
//! never cached.

mod location;
mod rules;

pub use location::Location;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::DetectConfig;
use crate::core::{BasePath, Platform};

use rules::{Probe, RULES};

/// Lowercased `<meta name=...>` names found in a document.
///
/// Deployment platforms inject their own markers; detection treats their
/// presence as equivalent to the matching hostname.
pub type MarkerSet = FxHashSet<String>;

/// Everything downstream components need to know about the current
/// hosting environment.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentContext {
    pub platform: Platform,
    pub base_path: BasePath,
    pub hostname: String,
    pub full_path: String,
    pub is_local: bool,
}

/// Classify the hosting environment for a location.
///
/// Evaluates the ordered rule table; the first matching rule wins and the
/// final rule is a catch-all, so this always returns a context.
pub fn detect(location: &Location, markers: &MarkerSet, config: &DetectConfig) -> EnvironmentContext {
    let hostname = location.hostname.to_ascii_lowercase();
    let probe = Probe {
        hostname: &hostname,
        path: &location.path,
        markers,
        folders: &config.folders,
        domains: &config.domains,
    };

    let (platform, base_path) = RULES
        .iter()
        .find(|rule| (rule.applies)(&probe))
        .map(|rule| (rule.classify)(&probe))
        .unwrap_or((Platform::Unknown, BasePath::root()));

    EnvironmentContext {
        platform,
        base_path,
        hostname: location.hostname.clone(),
        full_path: location.path.clone(),
        is_local: platform == Platform::Local,
    }
}
