//! Link classification utilities.

/// Syntactic classification of anchor targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Absolute link: URL scheme (https:, mailto:, tel:, javascript:)
    /// or protocol-relative (//cdn.example.com). Never rewritten.
    Absolute(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /menu).
    SiteRoot(&'a str),
    /// File-relative path (./menu, menu.html).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if link.starts_with("//") || has_scheme(link) {
            Self::Absolute(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Check if the target is one the rewriter may touch at all.
    ///
    /// Absolute URLs, protocol-relative URLs, bare fragments, and
    /// non-navigational schemes are all left untouched.
    #[inline]
    pub fn is_rewritable(link: &'a str) -> bool {
        matches!(
            Self::parse(link),
            Self::SiteRoot(_) | Self::FileRelative(_)
        )
    }
}

/// Check if a link carries a URL scheme (http:, mailto:, javascript:, ...)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
fn has_scheme(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
