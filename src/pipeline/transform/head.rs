//! Head injections: platform meta tag and navigation runtime.

use crate::config::RewriteConfig;
use crate::dom::{Document, Element, Node};
use crate::embed::{REROUTE_JS, RUNTIME_SCRIPT_ID, RerouteVars};
use crate::env::EnvironmentContext;

use super::link::REROUTE_ATTR;

/// `name` of the injected meta tag recording the detected platform.
pub const PLATFORM_META_NAME: &str = "relink-platform";

/// Record the detected platform in the document head and manage the
/// navigation runtime script. Documents without a head are left alone.
pub fn inject(doc: &mut Document, ctx: &EnvironmentContext, rewrite: &RewriteConfig) {
    let platform = ctx.platform;
    let wants_runtime = rewrite.intercept && !platform.is_managed_host();

    let Some(head) = doc.find_mut("head") else {
        return;
    };

    set_platform_meta(head, platform.as_str());

    if wants_runtime {
        ensure_runtime_script(head);
    } else {
        remove_runtime_script(head);
    }
}

/// Insert or update the platform meta tag.
fn set_platform_meta(head: &mut Element, platform: &str) {
    for node in head.children.iter_mut() {
        if let Node::Element(el) = node
            && el.name() == "meta"
            && el.attr("name") == Some(PLATFORM_META_NAME)
        {
            el.set_attr("content", platform);
            return;
        }
    }

    let mut meta = Element::new("meta");
    meta.set_attr("name", PLATFORM_META_NAME);
    meta.set_attr("content", platform);
    head.children.push(Node::Element(meta));
}

/// Inject the delegated-click runtime once.
fn ensure_runtime_script(head: &mut Element) {
    let exists = head.children.iter().any(|node| {
        matches!(node, Node::Element(el)
            if el.name() == "script" && el.attr("id") == Some(RUNTIME_SCRIPT_ID))
    });
    if exists {
        return;
    }

    let mut script = Element::new("script");
    script.set_attr("id", RUNTIME_SCRIPT_ID);
    script
        .children
        .push(Node::Text(REROUTE_JS.render(&RerouteVars { attr: REROUTE_ATTR })));
    head.children.push(Node::Element(script));
}

/// Drop the runtime on hosts that navigate natively.
fn remove_runtime_script(head: &mut Element) {
    head.children.retain(|node| {
        !matches!(node, Node::Element(el)
            if el.name() == "script" && el.attr("id") == Some(RUNTIME_SCRIPT_ID))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectConfig;
    use crate::env::{Location, MarkerSet, detect};

    fn context_at(url: &str) -> EnvironmentContext {
        detect(
            &Location::parse(url).unwrap(),
            &MarkerSet::default(),
            &DetectConfig::default(),
        )
    }

    const PAGE: &str = "<html><head><title>t</title></head><body></body></html>";

    #[test]
    fn test_injects_platform_meta() {
        let mut doc = Document::parse(PAGE).unwrap();
        inject(&mut doc, &context_at("https://alice.github.io/repo/"), &RewriteConfig::default());
        let html = doc.to_html();
        assert!(html.contains(r#"<meta name="relink-platform" content="github-pages">"#));
    }

    #[test]
    fn test_meta_updated_not_duplicated() {
        let mut doc = Document::parse(PAGE).unwrap();
        inject(&mut doc, &context_at("https://alice.github.io/repo/"), &RewriteConfig::default());
        inject(&mut doc, &context_at("https://x.vercel.app/"), &RewriteConfig::default());
        let html = doc.to_html();
        assert_eq!(html.matches(PLATFORM_META_NAME).count(), 1);
        assert!(html.contains(r#"content="vercel""#));
    }

    #[test]
    fn test_runtime_injected_once() {
        let mut doc = Document::parse(PAGE).unwrap();
        let ctx = context_at("http://localhost/index.html");
        inject(&mut doc, &ctx, &RewriteConfig::default());
        inject(&mut doc, &ctx, &RewriteConfig::default());
        let html = doc.to_html();
        assert_eq!(html.matches(RUNTIME_SCRIPT_ID).count(), 1);
        assert!(html.contains("location.assign"));
    }

    #[test]
    fn test_runtime_removed_on_managed_host() {
        let mut doc = Document::parse(PAGE).unwrap();
        inject(&mut doc, &context_at("http://localhost/index.html"), &RewriteConfig::default());
        assert!(doc.to_html().contains(RUNTIME_SCRIPT_ID));

        inject(&mut doc, &context_at("https://x.netlify.app/"), &RewriteConfig::default());
        assert!(!doc.to_html().contains(RUNTIME_SCRIPT_ID));
    }

    #[test]
    fn test_no_runtime_when_intercept_disabled() {
        let mut doc = Document::parse(PAGE).unwrap();
        let rewrite = RewriteConfig { intercept: false };
        inject(&mut doc, &context_at("http://localhost/index.html"), &rewrite);
        let html = doc.to_html();
        assert!(!html.contains(RUNTIME_SCRIPT_ID));
        // Meta tag still lands
        assert!(html.contains(PLATFORM_META_NAME));
    }

    #[test]
    fn test_headless_document_untouched() {
        let mut doc = Document::parse("<p>fragment</p>").unwrap();
        inject(&mut doc, &context_at("http://localhost/"), &RewriteConfig::default());
        assert_eq!(doc.to_html(), "<p>fragment</p>");
    }
}
