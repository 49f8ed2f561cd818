//! Link rewriter.
//!
//! Rewrites anchor hrefs so one build navigates correctly on the detected
//! host: strips `.html` suffixes and prefixes the base path onto site-root
//! targets on a local server. The pre-rewrite value is kept in an auxiliary
//! attribute and every rewrite recomputes from it, so re-running the
//! transform never compounds.

use crate::core::{LinkKind, strip_html_suffix};
use crate::dom::{Document, Element};
use crate::env::EnvironmentContext;

/// Attribute holding the untouched original href (idempotence anchor).
pub const ORIGINAL_ATTR: &str = "data-original-href";

/// Attribute marking anchors the navigation runtime intercepts.
pub const REROUTE_ATTR: &str = "data-reroute";

/// Processes anchor hrefs against the detected environment.
pub struct LinkTransform<'a> {
    ctx: &'a EnvironmentContext,
    intercept: bool,
}

impl<'a> LinkTransform<'a> {
    pub fn new(ctx: &'a EnvironmentContext, intercept: bool) -> Self {
        Self { ctx, intercept }
    }

    /// Rewrite every anchor in the document. Returns how many hrefs changed.
    pub fn apply(&self, doc: &mut Document) -> usize {
        let mut changed = 0;
        doc.for_each_element_mut(|el| {
            if el.name() == "a" && self.process_anchor(el) {
                changed += 1;
            }
        });
        changed
    }

    /// Process one anchor. Returns whether its href changed.
    fn process_anchor(&self, el: &mut Element) -> bool {
        let Some(href) = el.attr("href") else {
            return false;
        };
        if href.is_empty() {
            return false;
        }

        // Absolute URLs, fragments, mailto/tel/javascript: never touched,
        // never intercepted.
        if !LinkKind::is_rewritable(href) {
            return false;
        }

        // First encounter: remember the untouched value. Later passes
        // always rewrite from it, never from the current (already
        // rewritten) href.
        let original = match el.attr(ORIGINAL_ATTR) {
            Some(original) => original.to_string(),
            None => {
                let href = href.to_string();
                el.set_attr(ORIGINAL_ATTR, &href);
                href
            }
        };

        let fixed = self.fix_target(&original);

        let changed = el.attr("href") != Some(fixed.as_str());
        el.set_attr("href", &fixed);

        // Managed hosts navigate natively; everywhere else the runtime
        // claims the click. Overwriting the tag (not appending) is what
        // keeps a single interceptor per anchor.
        if self.intercept && !self.ctx.platform.is_managed_host() {
            el.set_flag(REROUTE_ATTR);
        } else {
            el.remove_attr(REROUTE_ATTR);
        }

        changed
    }

    /// Compute the rewritten target from the original value.
    fn fix_target(&self, original: &str) -> String {
        let fixed = strip_html_suffix(original).unwrap_or(original);

        if fixed.starts_with('/') && self.ctx.is_local && !self.ctx.base_path.is_root() {
            return self.ctx.base_path.prepend_to(fixed);
        }

        fixed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectConfig;
    use crate::env::{Location, MarkerSet, detect};

    fn context_at(url: &str, folders: &[&str]) -> EnvironmentContext {
        let config = DetectConfig {
            folders: folders.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        };
        detect(&Location::parse(url).unwrap(), &MarkerSet::default(), &config)
    }

    fn first_anchor_attr(doc: &mut Document, attr: &str) -> Option<String> {
        let mut value = None;
        doc.for_each_element_mut(|el| {
            if el.name() == "a" && value.is_none() {
                value = el.attr(attr).map(str::to_string);
            }
        });
        value
    }

    #[test]
    fn test_strips_html_suffix() {
        let ctx = context_at("https://example.com/index.html", &[]);
        let mut doc = Document::parse(r#"<a href="/menu.html">m</a>"#).unwrap();
        LinkTransform::new(&ctx, true).apply(&mut doc);
        assert_eq!(first_anchor_attr(&mut doc, "href").as_deref(), Some("/menu"));
        assert_eq!(
            first_anchor_attr(&mut doc, ORIGINAL_ATTR).as_deref(),
            Some("/menu.html")
        );
    }

    #[test]
    fn test_local_base_path_prefix() {
        let ctx = context_at("http://localhost:5500/Meatlovers/index.html", &["Meatlovers"]);
        let mut doc = Document::parse(r#"<a href="/menu">m</a>"#).unwrap();
        LinkTransform::new(&ctx, true).apply(&mut doc);
        assert_eq!(
            first_anchor_attr(&mut doc, "href").as_deref(),
            Some("/Meatlovers/menu")
        );
    }

    #[test]
    fn test_non_local_site_root_unprefixed() {
        let ctx = context_at("https://alice.github.io/repo/index.html", &[]);
        let mut doc = Document::parse(r#"<a href="/menu.html">m</a>"#).unwrap();
        LinkTransform::new(&ctx, true).apply(&mut doc);
        // GitHub Pages gets the suffix strip but no prefixing
        assert_eq!(first_anchor_attr(&mut doc, "href").as_deref(), Some("/menu"));
    }

    #[test]
    fn test_idempotent_across_passes() {
        let ctx = context_at("http://localhost:5500/Meatlovers/index.html", &["Meatlovers"]);
        let mut doc = Document::parse(r#"<a href="/menu.html">m</a>"#).unwrap();

        let transform = LinkTransform::new(&ctx, true);
        transform.apply(&mut doc);
        let after_one = doc.to_html();
        transform.apply(&mut doc);
        assert_eq!(doc.to_html(), after_one);
        assert_eq!(
            first_anchor_attr(&mut doc, "href").as_deref(),
            Some("/Meatlovers/menu")
        );
    }

    #[test]
    fn test_skips_external_and_special() {
        let ctx = context_at("http://localhost/Meatlovers/index.html", &["Meatlovers"]);
        let html = concat!(
            r#"<a href="https://other.site/page.html">x</a>"#,
            r##"<a href="#section">x</a>"##,
            r#"<a href="//cdn.example.com/x.html">x</a>"#,
            r#"<a href="mailto:a@b.c">x</a>"#,
            r#"<a href="tel:+123">x</a>"#,
            r#"<a href="javascript:void(0)">x</a>"#,
            r#"<a>no href</a>"#,
        );
        let mut doc = Document::parse(html).unwrap();
        let changed = LinkTransform::new(&ctx, true).apply(&mut doc);
        assert_eq!(changed, 0);
        doc.for_each_element_mut(|el| {
            if el.name() == "a" {
                assert!(!el.has_attr(ORIGINAL_ATTR));
                assert!(!el.has_attr(REROUTE_ATTR));
            }
        });
    }

    #[test]
    fn test_reroute_tag_toggles_with_platform() {
        let mut doc = Document::parse(r#"<a href="/menu.html">m</a>"#).unwrap();

        let local = context_at("http://localhost/index.html", &[]);
        LinkTransform::new(&local, true).apply(&mut doc);
        assert_eq!(first_anchor_attr(&mut doc, REROUTE_ATTR).as_deref(), Some(""));

        // Same document later served from a managed host: tag removed
        let vercel = context_at("https://x.vercel.app/index.html", &[]);
        LinkTransform::new(&vercel, true).apply(&mut doc);
        assert_eq!(first_anchor_attr(&mut doc, REROUTE_ATTR), None);
    }

    #[test]
    fn test_intercept_disabled() {
        let ctx = context_at("http://localhost/index.html", &[]);
        let mut doc = Document::parse(r#"<a href="/menu.html">m</a>"#).unwrap();
        LinkTransform::new(&ctx, false).apply(&mut doc);
        assert_eq!(first_anchor_attr(&mut doc, REROUTE_ATTR), None);
        assert_eq!(first_anchor_attr(&mut doc, "href").as_deref(), Some("/menu"));
    }

    #[test]
    fn test_relative_target_suffix_strip() {
        let ctx = context_at("http://localhost/index.html", &[]);
        let mut doc = Document::parse(r#"<a href="menu.html">m</a>"#).unwrap();
        LinkTransform::new(&ctx, true).apply(&mut doc);
        assert_eq!(first_anchor_attr(&mut doc, "href").as_deref(), Some("menu"));
    }

    #[test]
    fn test_no_double_prefix() {
        let ctx = context_at("http://localhost/Meatlovers/index.html", &["Meatlovers"]);
        let mut doc = Document::parse(r#"<a href="/Meatlovers/menu.html">m</a>"#).unwrap();
        LinkTransform::new(&ctx, true).apply(&mut doc);
        assert_eq!(
            first_anchor_attr(&mut doc, "href").as_deref(),
            Some("/Meatlovers/menu")
        );
    }
}
