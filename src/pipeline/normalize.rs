//! URL normalizer: replace-navigation to clean URLs.

use crate::core::{Platform, strip_html_suffix};
use crate::env::Location;

/// Compute the replace-navigation target for a location, if any.
///
/// Managed hosts rewrite clean URLs natively, so nothing happens there.
/// Elsewhere, a path with a `.html` suffix (case-insensitive) redirects to
/// its stripped form with query string and fragment preserved. `None`
/// means the current URL stands.
pub fn normalize(location: &Location, platform: Platform) -> Option<String> {
    if platform.is_managed_host() {
        return None;
    }

    let stripped = strip_html_suffix(&location.path)?;
    if stripped == location.path {
        return None;
    }

    Some(format!("{stripped}{}", location.href_suffix()))
}
