//! Minimal element selector: `tag`, `.class` or `#id`.
//!
//! Navigation containers are addressed with exactly these three forms;
//! combinators are not needed and not supported.

use super::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Selector {
    /// Parse a selector string. Returns `None` for empty input.
    pub fn parse(selector: &str) -> Option<Self> {
        let trimmed = selector.trim();
        if let Some(class) = trimmed.strip_prefix('.') {
            (!class.is_empty()).then(|| Self::Class(class.to_string()))
        } else if let Some(id) = trimmed.strip_prefix('#') {
            (!id.is_empty()).then(|| Self::Id(id.to_string()))
        } else {
            (!trimmed.is_empty()).then(|| Self::Tag(trimmed.to_ascii_lowercase()))
        }
    }

    /// Parse a list of selector strings, silently dropping invalid entries.
    pub fn parse_all(selectors: &[String]) -> Vec<Self> {
        selectors.iter().filter_map(|s| Self::parse(s)).collect()
    }

    pub fn matches(&self, el: &Element) -> bool {
        match self {
            Self::Tag(tag) => el.name() == tag,
            Self::Class(class) => el.has_class(class),
            Self::Id(id) => el.attr("id") == Some(id.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Selector::parse("nav"), Some(Selector::Tag("nav".into())));
        assert_eq!(
            Selector::parse(".nav-menu"),
            Some(Selector::Class("nav-menu".into()))
        );
        assert_eq!(Selector::parse("#footer"), Some(Selector::Id("footer".into())));
        assert_eq!(Selector::parse("NAV"), Some(Selector::Tag("nav".into())));
        assert_eq!(Selector::parse(""), None);
        assert_eq!(Selector::parse("."), None);
    }

    #[test]
    fn test_matches() {
        let mut el = Element::new("nav");
        el.set_attr("class", "main-nav sticky");
        el.set_attr("id", "top-nav");

        assert!(Selector::parse("nav").unwrap().matches(&el));
        assert!(Selector::parse(".main-nav").unwrap().matches(&el));
        assert!(Selector::parse(".sticky").unwrap().matches(&el));
        assert!(Selector::parse("#top-nav").unwrap().matches(&el));

        assert!(!Selector::parse("div").unwrap().matches(&el));
        assert!(!Selector::parse(".nav").unwrap().matches(&el));
        assert!(!Selector::parse("#nav").unwrap().matches(&el));
    }

    #[test]
    fn test_parse_all_drops_invalid() {
        let parsed = Selector::parse_all(&["nav".to_string(), String::new(), ".x".to_string()]);
        assert_eq!(parsed.len(), 2);
    }
}
