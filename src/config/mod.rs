//! Configuration management for `relink.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[site]`    | Serving URL and the directory of HTML files      |
//! | `[detect]`  | Local folder allow-list, production domains      |
//! | `[nav]`     | Active-state containers and class                |
//! | `[rewrite]` | Click interception toggle                        |
//! | `[watch]`   | Watcher debounce                                 |

pub mod section;
pub mod types;

pub use section::{DetectConfig, NavConfig, RewriteConfig, SiteConfig, WatchConfig};
pub use types::{ConfigError, cfg, init_config, reload_config};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use url::Url;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing relink.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (serving url, html root)
    pub site: SiteConfig,

    /// Environment detection settings
    pub detect: DetectConfig,

    /// Navigation active-state settings
    pub nav: NavConfig,

    /// Link rewriting settings
    pub rewrite: RewriteConfig,

    /// File watcher settings
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteConfig::default(),
            detect: DetectConfig::default(),
            nav: NavConfig::default(),
            rewrite: RewriteConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. A missing config
    /// file is not an error: every section has working defaults.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path by searching upward from cwd.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match find_config_file(&cwd, &cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        // CLI options override the config file
        if let Some(root) = &cli.root {
            self.site.root = root.clone();
        }
        if let Some(url) = &cli.url {
            self.site.url = Some(url.clone());
        }
    }

    /// Check what cannot be defaulted away: a site url, when set, must parse.
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.site.url {
            Url::parse(url)
                .map_err(|e| ConfigError::Validation(format!("site.url `{url}`: {e}")))?;
        }
        Ok(())
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Absolute path to the directory of HTML files.
    pub fn site_root(&self) -> PathBuf {
        if self.site.root.is_absolute() {
            self.site.root.clone()
        } else {
            self.root.join(&self.site.root)
        }
    }

    /// The serving URL each file route is joined onto.
    ///
    /// Defaults to plain localhost when unset, which classifies as a local
    /// environment with a root base path.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.site.url.as_deref().unwrap_or("http://localhost/");
        let mut url = Url::parse(raw).with_context(|| format!("invalid site.url `{raw}`"))?;
        // Joining relies on a trailing slash; without one the last path
        // segment would be replaced instead of appended to.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Search upward from `start` for a config file with the given name.
fn find_config_file(start: &Path, name: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_empty_is_default() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.site.root, PathBuf::from("public"));
        assert!(config.rewrite.intercept);
        assert_eq!(config.watch.debounce_ms, 300);
    }

    #[test]
    fn test_parse_with_ignored_collects_unknown() {
        let (_, ignored) =
            Config::parse_with_ignored("[site]\nurl = \"http://localhost/\"\nbogus = 1").unwrap();
        assert_eq!(ignored, vec!["site.bogus"]);
    }

    #[test]
    fn test_parse_with_ignored_clean() {
        let (_, ignored) = Config::parse_with_ignored("[nav]\nactive_class = \"on\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let mut config = Config::default();
        config.site.url = Some("http://localhost:5500/Meatlovers".to_string());
        let url = config.base_url().unwrap();
        assert_eq!(url.path(), "/Meatlovers/");
        assert_eq!(url.join("menu.html").unwrap().path(), "/Meatlovers/menu.html");
    }

    #[test]
    fn test_base_url_default_is_localhost() {
        let config = Config::default();
        let url = config.base_url().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.site.url = Some("not a url".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let config_path = dir.path().join("relink.toml");
        std::fs::write(&config_path, "").unwrap();

        let found = find_config_file(&nested, Path::new("relink.toml")).unwrap();
        assert_eq!(found.canonicalize().unwrap(), config_path.canonicalize().unwrap());
    }
}
