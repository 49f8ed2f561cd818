//! Embedded static resources.
//!
//! The navigation runtime is the one asset this tool injects: a delegated
//! click handler that sends tagged anchors through `location.assign`, so
//! rewritten paths are honored uniformly. Delegation means a single live
//! handler per document no matter how often the pipeline re-runs.

mod template;

pub use template::{Template, TemplateVars};

/// `id` of the injected runtime script element, the idempotence anchor for
/// script injection.
pub const RUNTIME_SCRIPT_ID: &str = "relink-runtime";

/// Variables for reroute.js.
pub struct RerouteVars<'a> {
    /// Attribute marking anchors that navigate client-side.
    pub attr: &'a str,
}

impl TemplateVars for RerouteVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__REROUTE_ATTR__", self.attr)
    }
}

/// Delegated-click navigation runtime.
pub const REROUTE_JS: Template<RerouteVars<'static>> =
    Template::new(include_str!("reroute.js"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_attr() {
        let rendered = REROUTE_JS.render(&RerouteVars { attr: "data-reroute" });
        assert!(rendered.contains("a[data-reroute]"));
        assert!(!rendered.contains("__REROUTE_ATTR__"));
    }

    #[test]
    fn test_runtime_guards_modified_clicks() {
        let rendered = REROUTE_JS.render(&RerouteVars { attr: "data-reroute" });
        assert!(rendered.contains("event.metaKey"));
        assert!(rendered.contains("location.assign"));
    }
}
