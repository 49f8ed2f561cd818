//! Apply command: run the rewrite pipeline over the site.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::config::Config;
use crate::dom::Document;
use crate::log;
use crate::pipeline::Pass;
use crate::utils::{plural_count, plural_s};

use super::common::{collect_html_files, location_for};

/// Per-file result of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Changed,
    Unchanged,
    Failed,
}

/// Rewrite every HTML file under the site root.
pub fn run_apply(config: &Config, dry_run: bool) -> Result<()> {
    let root = config.site_root();
    let files = collect_html_files(&root)?;

    if files.is_empty() {
        log!("apply"; "no html files under {}", root.display());
        return Ok(());
    }

    let outcomes = apply_files(config, &root, &files, dry_run);

    let changed = outcomes.iter().filter(|o| **o == FileOutcome::Changed).count();
    let failed = outcomes.iter().filter(|o| **o == FileOutcome::Failed).count();

    let verb = if dry_run { "would rewrite" } else { "rewrote" };
    log!("apply"; "{} {} of {}", verb, changed, plural_count(files.len(), "file"));
    if failed > 0 {
        log!("apply"; "{} file{} skipped (unreadable or unparsable)", failed, plural_s(failed));
    }

    Ok(())
}

/// Run the pipeline over a set of files in parallel.
pub fn apply_files(
    config: &Config,
    root: &Path,
    files: &[PathBuf],
    dry_run: bool,
) -> Vec<FileOutcome> {
    let Ok(base) = config.base_url() else {
        return vec![FileOutcome::Failed; files.len()];
    };

    files
        .par_iter()
        .map(|file| match process_file(config, root, &base, file, dry_run) {
            Ok(outcome) => outcome,
            Err(e) => {
                crate::debug!("apply"; "{}: {}", file.display(), e);
                FileOutcome::Failed
            }
        })
        .collect()
}

/// Run one document through the pass and write it back when it changed.
fn process_file(
    config: &Config,
    root: &Path,
    base: &url::Url,
    file: &Path,
    dry_run: bool,
) -> Result<FileOutcome> {
    let source = std::fs::read_to_string(file)?;
    let mut doc = Document::parse(&source)?;
    let location = location_for(base, root, file)?;

    let pass = Pass::new(config);
    let (landed, stats) = pass.run_to_completion(&mut doc, &location);

    let rendered = doc.to_html();
    if rendered == source {
        return Ok(FileOutcome::Unchanged);
    }

    crate::debug!(
        "apply"; "{} at {}: {} link{} rewritten",
        file.display(), landed, stats.rewritten, plural_s(stats.rewritten)
    );

    if !dry_run {
        std::fs::write(file, rendered)?;
    }
    Ok(FileOutcome::Changed)
}
