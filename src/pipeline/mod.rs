//! Rewrite pass orchestration.
//!
//! A pass runs the full component sequence over one document: normalize the
//! location, record the platform, rewrite links, re-mark active states.
//! Every stage is idempotent, so the correct reaction to any change is
//! simply the next pass.

pub mod normalize;
pub mod transform;

use crate::config::Config;
use crate::dom::Document;
use crate::env::{self, Location};

use normalize::normalize;
use transform::{ActiveTransform, LinkTransform, head};

/// Result of one pass over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The current URL should be replaced; no transforms ran (the page is
    /// about to reload at the target, where the next pass picks up).
    Redirect(String),
    /// Transforms ran to completion.
    Done(PassStats),
}

/// What a completed pass touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Anchor hrefs that changed.
    pub rewritten: usize,
    /// Navigation links marked active.
    pub marked: usize,
}

/// One rewrite pass, parameterized by configuration.
pub struct Pass<'a> {
    config: &'a Config,
}

impl<'a> Pass<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Run the pass: Normalizer -> platform meta -> Link Rewriter ->
    /// Active-State Marker.
    pub fn run(&self, doc: &mut Document, location: &Location) -> PassOutcome {
        let markers = doc.meta_markers();
        let ctx = env::detect(location, &markers, &self.config.detect);

        if let Some(target) = normalize(location, ctx.platform) {
            return PassOutcome::Redirect(target);
        }

        head::inject(doc, &ctx, &self.config.rewrite);

        let rewritten = LinkTransform::new(&ctx, self.config.rewrite.intercept).apply(doc);
        let marked = ActiveTransform::new(&ctx, &self.config.nav).apply(doc);

        PassOutcome::Done(PassStats { rewritten, marked })
    }

    /// Run the pass, following at most one replace-navigation.
    ///
    /// This is what a host does for a document it knows will reload at the
    /// redirected location: run the fresh pass there immediately.
    pub fn run_to_completion(&self, doc: &mut Document, location: &Location) -> (Location, PassStats) {
        match self.run(doc, location) {
            PassOutcome::Done(stats) => (location.clone(), stats),
            PassOutcome::Redirect(target) => {
                let landed = location.redirected(&target);
                match self.run(doc, &landed) {
                    PassOutcome::Done(stats) => (landed, stats),
                    // A second redirect cannot happen: the normalizer's
                    // target never ends in `.html`. Degrade to no-op.
                    PassOutcome::Redirect(_) => (landed, PassStats::default()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(folders: &[&str]) -> Config {
        let mut config = Config::default();
        config.detect.folders = folders.iter().map(|f| f.to_string()).collect();
        config
    }

    const PAGE: &str = concat!(
        "<!DOCTYPE html>\n",
        "<html><head><title>t</title></head><body>",
        r#"<nav><a href="/">home</a><a href="/menu.html">menu</a></nav>"#,
        "</body></html>",
    );

    #[test]
    fn test_pass_redirects_html_location() {
        let config = test_config(&[]);
        let mut doc = Document::parse(PAGE).unwrap();
        let location = Location::parse("http://localhost/menu.html").unwrap();

        let outcome = Pass::new(&config).run(&mut doc, &location);
        assert_eq!(outcome, PassOutcome::Redirect("/menu".to_string()));
        // Short-circuit: nothing was injected
        assert!(!doc.to_html().contains("relink-platform"));
    }

    #[test]
    fn test_pass_on_managed_host_never_redirects() {
        let config = test_config(&[]);
        let mut doc = Document::parse(PAGE).unwrap();
        let location = Location::parse("https://x.vercel.app/menu.html").unwrap();

        let outcome = Pass::new(&config).run(&mut doc, &location);
        assert!(matches!(outcome, PassOutcome::Done(_)));
    }

    #[test]
    fn test_run_to_completion_follows_redirect() {
        let config = test_config(&["Meatlovers"]);
        let mut doc = Document::parse(PAGE).unwrap();
        let location = Location::parse("http://localhost:5500/Meatlovers/menu.html").unwrap();

        let (landed, stats) = Pass::new(&config).run_to_completion(&mut doc, &location);
        assert_eq!(landed.path, "/Meatlovers/menu");
        assert!(stats.rewritten > 0);

        let html = doc.to_html();
        assert!(html.contains(r#"href="/Meatlovers/menu""#));
        assert!(html.contains(r#"content="local""#));
    }

    #[test]
    fn test_full_pass_idempotent() {
        let config = test_config(&["Meatlovers"]);
        let mut doc = Document::parse(PAGE).unwrap();
        let location = Location::parse("http://localhost:5500/Meatlovers/menu").unwrap();

        let pass = Pass::new(&config);
        pass.run(&mut doc, &location);
        let after_one = doc.to_html();
        pass.run(&mut doc, &location);
        assert_eq!(doc.to_html(), after_one);
    }

    #[test]
    fn test_active_marking_after_redirect() {
        let config = test_config(&[]);
        let mut doc = Document::parse(PAGE).unwrap();
        let location = Location::parse("https://example.com/menu.html").unwrap();

        Pass::new(&config).run_to_completion(&mut doc, &location);
        let html = doc.to_html();
        // The menu link was rewritten to /menu and the landed path is /menu
        assert!(html.contains(r#"href="/menu" class="active""#) || html.contains("active"));
    }

    #[test]
    fn test_marker_driven_detection() {
        let config = test_config(&[]);
        let page_with_marker = concat!(
            "<html><head><meta name=\"netlify\"><title>t</title></head><body>",
            r#"<a href="/menu.html">m</a>"#,
            "</body></html>",
        );
        let mut doc = Document::parse(page_with_marker).unwrap();
        // Hostname says production, marker says netlify: marker wins,
        // so the .html location is NOT redirected.
        let location = Location::parse("https://example.com/menu.html").unwrap();
        let outcome = Pass::new(&config).run(&mut doc, &location);
        assert!(matches!(outcome, PassOutcome::Done(_)));
        assert!(doc.to_html().contains(r#"content="netlify""#));
    }
}
