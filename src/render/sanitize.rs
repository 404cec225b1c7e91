//! Re-parse and pretty-print HTML output.
//!
//! The assembled document goes through an HTML5 tree builder, which repairs
//! unclosed or misnested tags, and is serialized back with indentation.
//! Containers and elements holding block elements are laid out one child
//! per line; elements with text or only inline children are written on a
//! single line so no whitespace is added to their content.

use scraper::node::Node;
use scraper::{ElementRef, Html};

const INDENT: &str = "  ";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const INLINE_ELEMENTS: &[&str] = &[
    "a", "b", "br", "code", "em", "i", "img", "small", "span", "strong", "sub", "sup", "u", "wbr",
];

const CONTAINER_ELEMENTS: &[&str] = &[
    "html", "head", "body", "div", "table", "thead", "tbody", "tfoot", "tr", "ul", "ol",
];

/// Parse `html` as a document and serialize it back, indented.
pub fn reformat(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut output = String::with_capacity(html.len() * 2);
    write_block(&mut output, document.root_element(), 0);
    output
}

fn write_block(output: &mut String, element: ElementRef<'_>, depth: usize) {
    let indent = INDENT.repeat(depth);
    output.push_str(&indent);

    if !is_layout_only(element) {
        write_inline(output, element);
        output.push('\n');
        return;
    }

    write_start_tag(output, element);
    output.push('\n');
    for child in element.children().filter_map(ElementRef::wrap) {
        if is_empty_head(child) {
            continue;
        }
        write_block(output, child, depth + 1);
    }
    output.push_str(&indent);
    write_end_tag(output, element);
    output.push('\n');
}

fn write_inline(output: &mut String, element: ElementRef<'_>) {
    write_start_tag(output, element);
    if is_void(element) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => escape_text(output, text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_inline(output, child);
                }
            }
            _ => {}
        }
    }

    write_end_tag(output, element);
}

fn write_start_tag(output: &mut String, element: ElementRef<'_>) {
    output.push('<');
    output.push_str(element.value().name());
    for (name, value) in element.value().attrs() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        escape_attr(output, value);
        output.push('"');
    }
    output.push('>');
}

fn write_end_tag(output: &mut String, element: ElementRef<'_>) {
    output.push_str("</");
    output.push_str(element.value().name());
    output.push('>');
}

/// True when the element's children are laid out one per line.
///
/// That is the case for structural containers holding elements, and for
/// any element with a block-level child and no text besides whitespace.
/// Text blocks holding only inline elements (`<p><br></p>`) stay inline.
fn is_layout_only(element: ElementRef<'_>) -> bool {
    if is_void(element) {
        return false;
    }

    let mut has_inline = false;
    let mut has_block = false;
    for child in element.children() {
        match child.value() {
            Node::Element(child) if INLINE_ELEMENTS.contains(&child.name()) => has_inline = true,
            Node::Element(_) => has_block = true,
            Node::Text(text) if !text.trim().is_empty() => return false,
            _ => {}
        }
    }
    has_block || (has_inline && CONTAINER_ELEMENTS.contains(&element.value().name()))
}

fn is_void(element: ElementRef<'_>) -> bool {
    VOID_ELEMENTS.contains(&element.value().name())
}

fn is_empty_head(element: ElementRef<'_>) -> bool {
    element.value().name() == "head" && element.children().next().is_none()
}

fn escape_text(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn escape_attr(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}
