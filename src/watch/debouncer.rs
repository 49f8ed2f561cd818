//! Pure debouncer: timing and event deduplication only.
//!
//! No business logic, no global state access.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use super::{Change, ChangeKind};

pub(super) struct Debouncer {
    /// Path -> ChangeKind (dedup is free via HashMap key uniqueness)
    changes: FxHashMap<PathBuf, ChangeKind>,
    last_event: Option<Instant>,
    quiet: Duration,
}

impl Debouncer {
    pub(super) fn new(quiet: Duration) -> Self {
        Self {
            changes: FxHashMap::default(),
            last_event: None,
            quiet,
        }
    }

    /// Add a notify event, applying dedup rules:
    /// - Removed + Created/Modified -> Created/Modified (file was restored)
    /// - Modified + Removed -> Removed (file was deleted)
    /// - Created + Removed -> discard (appeared then vanished)
    /// - Same type events: first event wins
    pub(super) fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        let kind = match event.kind {
            EventKind::Create(_) => ChangeKind::Created,
            EventKind::Remove(_) => ChangeKind::Removed,
            EventKind::Modify(modify) => {
                // Ignore metadata-only changes (mtime/atime/chmod noise)
                if matches!(modify, notify::event::ModifyKind::Metadata(_)) {
                    return;
                }
                ChangeKind::Modified
            }
            _ => return,
        };

        for path in &event.paths {
            if is_temp_file(path) {
                continue;
            }
            self.record(path.clone(), kind);
        }
    }

    fn record(&mut self, path: PathBuf, kind: ChangeKind) {
        if let Some(&existing) = self.changes.get(&path) {
            match (existing, kind) {
                (ChangeKind::Removed, ChangeKind::Created | ChangeKind::Modified) => {
                    self.changes.insert(path, kind);
                }
                (ChangeKind::Modified, ChangeKind::Removed) => {
                    self.changes.insert(path, ChangeKind::Removed);
                }
                (ChangeKind::Created, ChangeKind::Removed) => {
                    self.changes.remove(&path);
                }
                // Same kind or other combos (Created+Modified, etc.): first wins
                _ => return,
            }
        } else {
            self.changes.insert(path, kind);
        }
        self.last_event = Some(Instant::now());
    }

    /// Take the batched changes once the quiet period has elapsed.
    pub(super) fn take_if_ready(&mut self) -> Option<Vec<Change>> {
        let last = self.last_event?;
        if self.changes.is_empty() || last.elapsed() < self.quiet {
            return None;
        }
        self.last_event = None;
        let changes = std::mem::take(&mut self.changes)
            .into_iter()
            .map(|(path, kind)| Change { path, kind })
            .collect();
        Some(changes)
    }
}

/// Editor temp/swap files that never matter.
fn is_temp_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with('~')
        || name.ends_with(".swp")
        || name.ends_with(".swx")
        || name.ends_with(".tmp")
}
