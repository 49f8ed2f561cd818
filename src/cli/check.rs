//! Check command: report pending rewrites without touching files.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::Config;
use crate::dom::Document;
use crate::log;
use crate::pipeline::Pass;
use crate::utils::{plural_count, plural_s};

use super::common::{collect_html_files, location_for};

/// Files that would change under `apply`.
#[derive(Debug, Default)]
struct CheckReport {
    /// (site-relative path, links pending)
    pending: Vec<(String, usize)>,
}

impl CheckReport {
    fn add(&mut self, file: String, links: usize) {
        self.pending.push((file, links));
    }

    fn print(&self) {
        let mut rows = self.pending.clone();
        rows.sort();
        for (file, links) in rows {
            log!("check"; "pending: {} ({} link{})", file, links, plural_s(links));
        }
    }
}

/// Report files whose links are not rewritten yet.
///
/// Exits nonzero when changes are pending, unless `warn_only` is set. A
/// clean tree (apply already ran) checks out quietly, which makes this
/// usable as a CI gate.
pub fn run_check(config: &Config, warn_only: bool) -> Result<()> {
    let root = config.site_root();
    let files = collect_html_files(&root)?;

    if files.is_empty() {
        log!("check"; "no html files under {}", root.display());
        return Ok(());
    }

    log!("check"; "checking {}", plural_count(files.len(), "file"));

    let base = config.base_url()?;
    let report = Arc::new(RwLock::new(CheckReport::default()));

    files.par_iter().for_each(|file| {
        let Some((changed, links)) = check_file(config, &root, &base, file) else {
            return;
        };
        if changed {
            let display = file
                .strip_prefix(&root)
                .unwrap_or(file)
                .display()
                .to_string();
            report.write().add(display, links);
        }
    });

    let report = Arc::try_unwrap(report).unwrap().into_inner();

    if report.pending.is_empty() {
        log!("check"; "all links rewritten");
        return Ok(());
    }

    report.print();

    if warn_only {
        log!("check"; "{} pending (warn-only)", plural_count(report.pending.len(), "file"));
        return Ok(());
    }

    anyhow::bail!(
        "found {} with pending rewrites",
        plural_count(report.pending.len(), "file")
    );
}

/// Run one file through the pass in memory.
///
/// Returns (would change, links that would be rewritten); `None` when the
/// file cannot be read or parsed (apply skips those too).
fn check_file(
    config: &Config,
    root: &Path,
    base: &url::Url,
    file: &Path,
) -> Option<(bool, usize)> {
    let source = std::fs::read_to_string(file).ok()?;
    let mut doc = Document::parse(&source).ok()?;
    let location = location_for(base, root, file).ok()?;
    let (_, stats) = Pass::new(config).run_to_completion(&mut doc, &location);
    Some((doc.to_html() != source, stats.rewritten))
}
