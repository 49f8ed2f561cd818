//! `[rewrite]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [rewrite]
//! intercept = true    # tag anchors + inject the navigation runtime
//! ```

use serde::{Deserialize, Serialize};

/// Link rewriting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Tag rewritable anchors for client-side navigation and inject the
    /// delegated-click runtime. Managed hosts (Vercel, Netlify) never get
    /// either, regardless of this setting.
    pub intercept: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self { intercept: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_rewrite_defaults() {
        let config = Config::from_str("").unwrap();
        assert!(config.rewrite.intercept);
    }

    #[test]
    fn test_rewrite_disable() {
        let config = Config::from_str("[rewrite]\nintercept = false").unwrap();
        assert!(!config.rewrite.intercept);
    }
}
