//! `[nav]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! containers = ["nav", ".nav-menu", ".footer-col"]
//! active_class = "active"
//! ```

use serde::{Deserialize, Serialize};

/// Navigation active-state settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Containers whose links receive active-state marking.
    /// Each entry is a `tag`, `.class` or `#id` selector.
    pub containers: Vec<String>,

    /// Class toggled on the link matching the current page.
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            containers: vec![
                "nav".to_string(),
                ".nav-menu".to_string(),
                ".footer-col".to_string(),
            ],
            active_class: "active".to_string(),
        }
    }
}
