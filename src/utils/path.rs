//! Filesystem path to URL route mapping.

use std::path::{Path, PathBuf};

/// Check if a path looks like an HTML file.
pub fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// The URL route a file is served at, relative to the site root.
///
/// Components are joined with `/` regardless of platform:
/// `menu.html` -> `menu.html`, `shop/index.html` -> `shop/index.html`.
pub fn url_route(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Normalize a path for map keys: absolute when possible, as-is otherwise.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html_file() {
        assert!(is_html_file(Path::new("index.html")));
        assert!(is_html_file(Path::new("INDEX.HTML")));
        assert!(is_html_file(Path::new("page.htm")));
        assert!(!is_html_file(Path::new("style.css")));
        assert!(!is_html_file(Path::new("html")));
    }

    #[test]
    fn test_url_route() {
        let root = Path::new("/site/public");
        assert_eq!(url_route(root, Path::new("/site/public/menu.html")), "menu.html");
        assert_eq!(
            url_route(root, Path::new("/site/public/shop/index.html")),
            "shop/index.html"
        );
    }

    #[test]
    fn test_url_route_outside_root_uses_file_components() {
        let root = Path::new("/site/public");
        assert_eq!(url_route(root, Path::new("menu.html")), "menu.html");
    }
}
