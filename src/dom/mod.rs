//! Owned HTML document tree.
//!
//! Parsing is delegated to `tl`; the mutable tree and the serializer live
//! here so transforms can edit attributes and classes in place and write
//! the document back out. Untouched content round-trips verbatim: text,
//! comments and attribute values are stored exactly as parsed.

mod parse;
mod select;
mod serialize;

pub use select::Selector;

use rustc_hash::FxHashSet;

/// A single node of the document tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Raw text, kept verbatim (entities included).
    Text(String),
    /// Comment markup, kept verbatim.
    Comment(String),
}

/// An element with ordered attributes and child nodes.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    /// Attribute order is preserved; `None` values are boolean attributes.
    attrs: Vec<(String, Option<String>)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value. Boolean attributes report an empty value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// Set an attribute value, replacing any existing one in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.set(name, Some(value.to_string()));
    }

    /// Set a boolean attribute (serialized without a value).
    pub fn set_flag(&mut self, name: &str) {
        self.set(name, None);
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        match self
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    // =========================================================================
    // Class handling
    // =========================================================================

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let merged = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attr("class", &merged);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        if !existing.split_whitespace().any(|c| c == class) {
            return;
        }
        let remaining = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if remaining.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", &remaining);
        }
    }

    /// Visit this element's descendant elements, depth-first.
    pub fn for_each_descendant_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        walk_elements_mut(&mut self.children, f);
    }
}

/// A parsed HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Original doctype line, if the source carried one.
    doctype: Option<String>,
    nodes: Vec<Node>,
}

impl Document {
    /// Parse a document from HTML source.
    pub fn parse(html: &str) -> anyhow::Result<Self> {
        parse::parse_document(html)
    }

    /// Serialize the tree back to HTML.
    pub fn to_html(&self) -> String {
        serialize::write_document(self)
    }

    pub(super) fn new(doctype: Option<String>, nodes: Vec<Node>) -> Self {
        Self { doctype, nodes }
    }

    pub(super) fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    pub(super) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Visit every element in the document, depth-first.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        walk_elements_mut(&mut self.nodes, &mut f);
    }

    /// Visit every element inside subtrees rooted at a matching container.
    ///
    /// The container elements themselves are not visited.
    pub fn for_each_in(&mut self, containers: &[Selector], mut f: impl FnMut(&mut Element)) {
        fn walk(
            nodes: &mut [Node],
            containers: &[Selector],
            f: &mut impl FnMut(&mut Element),
        ) {
            for node in nodes.iter_mut() {
                if let Node::Element(el) = node {
                    if containers.iter().any(|sel| sel.matches(el)) {
                        el.for_each_descendant_mut(f);
                    } else {
                        walk(&mut el.children, containers, f);
                    }
                }
            }
        }
        walk(&mut self.nodes, containers, &mut f);
    }

    /// Find the first element with the given tag name, depth-first.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.nodes, name)
    }

    /// Names of `<meta name=...>` tags in the document, lowercased.
    ///
    /// These are the markers the environment detector probes for
    /// (deployment platforms inject their own).
    pub fn meta_markers(&self) -> FxHashSet<String> {
        let mut markers = FxHashSet::default();
        collect_meta_names(&self.nodes, &mut markers);
        markers
    }
}

fn walk_elements_mut(nodes: &mut [Node], f: &mut impl FnMut(&mut Element)) {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            f(el);
            walk_elements_mut(&mut el.children, f);
        }
    }
}

fn find_element_mut<'a>(nodes: &'a mut [Node], name: &str) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if el.name() == name {
                return Some(el);
            }
            if let Some(found) = find_element_mut(&mut el.children, name) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_meta_names(nodes: &[Node], markers: &mut FxHashSet<String>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name() == "meta"
                && let Some(name) = el.attr("name")
                && !name.is_empty()
            {
                markers.insert(name.to_ascii_lowercase());
            }
            collect_meta_names(&el.children, markers);
        }
    }
}
