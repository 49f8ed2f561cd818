//! Document tree to HTML serialization.
//!
//! Text and comments are emitted verbatim (they were stored raw), so a
//! parse/serialize round trip without edits reproduces the source body.
//! Only attribute values are inspected, to keep quoting valid.

use super::{Document, Element, Node};

/// Void elements: no children, no closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[inline]
fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub(super) fn write_document(doc: &Document) -> String {
    let mut out = String::new();
    if let Some(doctype) = doc.doctype() {
        out.push_str(doctype);
        // The newline after the doctype lives in the first text node, so
        // nothing extra is inserted here.
    }
    write_nodes(&mut out, doc.nodes());
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Element(el) => write_element(out, el),
            Node::Text(text) => out.push_str(text),
            Node::Comment(comment) => write_comment(out, comment),
        }
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.name());
    for (key, value) in el.attrs() {
        out.push(' ');
        out.push_str(key);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&escape_attr_value(value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void_element(el.name()) {
        return;
    }

    write_nodes(out, &el.children);

    out.push_str("</");
    out.push_str(el.name());
    out.push('>');
}

fn write_comment(out: &mut String, comment: &str) {
    // Comments parsed from source carry their own markup; synthesized ones
    // get wrapped.
    if comment.starts_with("<!") {
        out.push_str(comment);
    } else {
        out.push_str("<!--");
        out.push_str(comment);
        out.push_str("-->");
    }
}

/// Escape only the quote character: values are stored raw, so entities in
/// the source must not be escaped a second time.
fn escape_attr_value(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains('"') {
        std::borrow::Cow::Owned(value.replace('"', "&quot;"))
    } else {
        std::borrow::Cow::Borrowed(value)
    }
}
