//! Active-state marker.
//!
//! Toggles the active class on links inside the configured navigation
//! containers by comparing each target against the current path.

use crate::config::NavConfig;
use crate::dom::{Document, Selector};
use crate::env::EnvironmentContext;

/// Marks the navigation link matching the current page.
pub struct ActiveTransform<'a> {
    ctx: &'a EnvironmentContext,
    nav: &'a NavConfig,
}

impl<'a> ActiveTransform<'a> {
    pub fn new(ctx: &'a EnvironmentContext, nav: &'a NavConfig) -> Self {
        Self { ctx, nav }
    }

    /// Re-mark every navigation link. Returns how many links are active.
    pub fn apply(&self, doc: &mut Document) -> usize {
        let containers = Selector::parse_all(&self.nav.containers);
        if containers.is_empty() {
            return 0;
        }

        let active_class = self.nav.active_class.as_str();
        let mut marked = 0;

        doc.for_each_in(&containers, |el| {
            if el.name() != "a" {
                return;
            }

            // Always clear first; marking is recomputed from scratch.
            el.remove_class(active_class);

            let Some(target) = el.attr("href").map(str::to_string) else {
                return;
            };

            if self.is_active(&target) {
                el.add_class(active_class);
                marked += 1;
            }
        });

        marked
    }

    fn is_active(&self, target: &str) -> bool {
        let current = self.ctx.full_path.as_str();
        let base = &self.ctx.base_path;

        if self.is_root_target(target) {
            // Root link lights up only on the site root itself.
            return base.matches_path(current);
        }

        // Substring containment, not segment-exact: `/menu` also matches
        // `/menu/specials`. Targets of one character (`/`) are excluded
        // above; anything shorter is noise.
        target.len() > 1 && current.contains(target)
    }

    fn is_root_target(&self, target: &str) -> bool {
        target == "/" || self.ctx.base_path.matches_path(target)
    }
}
