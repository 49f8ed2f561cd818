//! HTML source to document tree conversion, via `tl`.

use super::{Document, Element, Node};

/// Parse a full document, capturing the doctype separately so it survives
/// the round trip.
pub(super) fn parse_document(html: &str) -> anyhow::Result<Document> {
    let doctype = extract_doctype(html);

    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|e| anyhow::anyhow!("html parse failed: {e:?}"))?;
    let parser = dom.parser();

    let mut nodes = Vec::new();
    for handle in dom.children() {
        if let Some(node) = convert(*handle, parser) {
            nodes.push(node);
        }
    }

    Ok(Document::new(doctype, nodes))
}

/// Convert a tl node into an owned tree node.
fn convert(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();

            let mut element = Element::new(&name);
            for (key, value) in tag.attributes().iter() {
                let key: &str = key.as_ref();
                element
                    .attrs
                    .push((key.to_string(), value.map(|v| v.to_string())));
            }

            for child_handle in tag.children().top().iter() {
                if let Some(child) = convert(*child_handle, parser) {
                    element.children.push(child);
                }
            }

            Some(Node::Element(element))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            if is_doctype(&text) {
                return None;
            }
            Some(Node::Text(text.into_owned()))
        }
        tl::Node::Comment(bytes) => {
            let text = bytes.as_utf8_str();
            // The doctype is captured up front; drop it here so it is not
            // emitted twice.
            if is_doctype(&text) {
                return None;
            }
            Some(Node::Comment(text.into_owned()))
        }
    }
}

/// Capture a leading `<!doctype ...>` line verbatim.
fn extract_doctype(html: &str) -> Option<String> {
    let trimmed = html.trim_start();
    if !is_doctype(trimmed) {
        return None;
    }
    let end = trimmed.find('>')?;
    Some(trimmed[..=end].to_string())
}

fn is_doctype(text: &str) -> bool {
    let head = text.get(..9).unwrap_or(text);
    head.eq_ignore_ascii_case("<!doctype")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_doctype() {
        assert_eq!(
            extract_doctype("<!DOCTYPE html>\n<html></html>"),
            Some("<!DOCTYPE html>".to_string())
        );
        assert_eq!(
            extract_doctype("  <!doctype html><html></html>"),
            Some("<!doctype html>".to_string())
        );
        assert_eq!(extract_doctype("<html></html>"), None);
    }

    #[test]
    fn test_parse_basic() {
        let doc = parse_document(r#"<p id="x">Hello <b>world</b></p>"#).unwrap();
        assert_eq!(doc.nodes().len(), 1);
        let Node::Element(p) = &doc.nodes()[0] else {
            panic!("expected element");
        };
        assert_eq!(p.name(), "p");
        assert_eq!(p.attr("id"), Some("x"));
        assert_eq!(p.children.len(), 2);
    }

    #[test]
    fn test_parse_keeps_whitespace_text() {
        let doc = parse_document("<ul>\n  <li>a</li>\n</ul>").unwrap();
        let Node::Element(ul) = &doc.nodes()[0] else {
            panic!("expected element");
        };
        assert!(matches!(&ul.children[0], Node::Text(t) if t == "\n  "));
    }

    #[test]
    fn test_parse_boolean_attribute() {
        let doc = parse_document("<input disabled>").unwrap();
        let Node::Element(input) = &doc.nodes()[0] else {
            panic!("expected element");
        };
        assert!(input.has_attr("disabled"));
    }

    #[test]
    fn test_parse_uppercase_tag_is_lowercased() {
        let doc = parse_document("<DIV CLASS=\"x\">t</DIV>").unwrap();
        let Node::Element(div) = &doc.nodes()[0] else {
            panic!("expected element");
        };
        assert_eq!(div.name(), "div");
        assert_eq!(div.attr("class"), Some("x"));
    }
}
