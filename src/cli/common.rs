//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use url::Url;

use crate::env::Location;
use crate::utils::{is_html_file, url_route};

/// Collect every HTML file under the site root, sorted for stable output.
pub fn collect_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("site root `{}` is not a directory", root.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_html_file(p))
        .collect();
    files.sort();
    Ok(files)
}

/// The location a file is served at: its route joined onto the base URL.
pub fn location_for(base: &Url, root: &Path, file: &Path) -> Result<Location> {
    let route = url_route(root, file);
    let url = base
        .join(&route)
        .map_err(|e| anyhow::anyhow!("cannot join `{route}` onto {base}: {e}"))?;
    Ok(Location::from_url(&url))
}
