//! Watch command: keep the site rewritten as files change.

use std::time::Duration;

use anyhow::Result;

use crate::config::{Config, cfg, reload_config};
use crate::core::is_shutdown;
use crate::log;
use crate::logger::WatchStatus;
use crate::utils::{is_html_file, normalize_path, plural_count};
use crate::watch::{Change, ChangeKind, Observer};

use super::apply::{FileOutcome, apply_files, run_apply};

/// Apply once, then re-apply to every changed file until Ctrl+C.
pub fn run_watch(config: &Config) -> Result<()> {
    run_apply(config, false)?;

    let root = config.site_root();
    let quiet = Duration::from_millis(config.watch.debounce_ms);

    // Watch the project root when the site directory lives inside it, so
    // config edits are seen too; otherwise watch the site directory alone.
    let watch_root = if !config.root.as_os_str().is_empty() && root.starts_with(&config.root) {
        config.root.clone()
    } else {
        root.clone()
    };

    log!("watch"; "watching {} (Ctrl+C to stop)", watch_root.display());

    let observer = Observer::new(vec![watch_root], quiet);
    let subscription = observer.subscribe(handle_changes)?;

    while !is_shutdown() {
        std::thread::sleep(Duration::from_millis(200));
    }

    subscription.unsubscribe();
    log!("watch"; "stopped");
    Ok(())
}

/// React to one settled batch of file changes.
fn handle_changes(changes: Vec<Change>) {
    let mut status = WatchStatus::new();
    let config = cfg();

    // Config edits reload and re-apply everything
    let config_path = normalize_path(&config.config_path);
    if changes.iter().any(|c| normalize_path(&c.path) == config_path) {
        match reload_config() {
            Ok(true) => {
                status.success("config reloaded");
                let fresh = cfg();
                let _ = run_apply(&fresh, false);
                return;
            }
            Ok(false) => {}
            Err(e) => {
                status.error("config reload failed", &e.to_string());
                return;
            }
        }
    }

    let root = config.site_root();
    let files: Vec<_> = changes
        .iter()
        .filter(|c| c.kind != ChangeKind::Removed)
        .filter(|c| is_html_file(&c.path))
        .filter(|c| c.path.starts_with(&root))
        .map(|c| c.path.clone())
        .collect();

    if files.is_empty() {
        return;
    }

    let outcomes = apply_files(&config, &root, &files, false);
    let changed = outcomes.iter().filter(|o| **o == FileOutcome::Changed).count();
    let failed = outcomes.iter().filter(|o| **o == FileOutcome::Failed).count();

    if failed > 0 {
        status.error(
            &format!("{} failed", plural_count(failed, "file")),
            "run with --verbose for details",
        );
    } else if changed > 0 {
        status.success(&format!("rewrote {}", plural_count(changed, "file")));
    } else {
        status.unchanged(&format!("{} already clean", plural_count(files.len(), "file")));
    }
}
