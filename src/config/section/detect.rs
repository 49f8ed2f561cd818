//! `[detect]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [detect]
//! folders = ["Meatlovers"]            # local dev folder allow-list
//! domains = ["meatlovers.pizza"]      # production domains
//! ```

use serde::{Deserialize, Serialize};

/// Environment detection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Folder names the site may be served under on a local dev server.
    /// Matched case-insensitively against the first path segment.
    pub folders: Vec<String>,

    /// Production domains, with or without `www.`.
    pub domains: Vec<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn test_detect_defaults_empty() {
        let config = Config::from_str("").unwrap();
        assert!(config.detect.folders.is_empty());
        assert!(config.detect.domains.is_empty());
    }

    #[test]
    fn test_detect_values() {
        let config = Config::from_str(
            "[detect]\nfolders = [\"Meatlovers\"]\ndomains = [\"meatlovers.pizza\"]",
        )
        .unwrap();
        assert_eq!(config.detect.folders, vec!["Meatlovers"]);
        assert_eq!(config.detect.domains, vec!["meatlovers.pizza"]);
    }
}
