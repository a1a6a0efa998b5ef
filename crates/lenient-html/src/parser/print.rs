//! Indented, human-readable dumps of a tree.

use core::fmt::Write as _;

use lenient_dom::{AttributesMap, DomTree, NodeId, NodeType};

fn format_attrs(attrs: &AttributesMap) -> String {
    attrs
        .iter()
        .map(|(k, v)| {
            if v.is_empty() {
                k.clone()
            } else {
                format!("{k}=\"{v}\"")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_open_tag(tag_name: &str, attrs: &AttributesMap) -> String {
    if attrs.is_empty() {
        format!("<{tag_name}>")
    } else {
        format!("<{tag_name} {}>", format_attrs(attrs))
    }
}

/// Make whitespace visible.
fn visible(data: &str) -> String {
    data.replace('\n', "\\n").replace(' ', "\u{00B7}")
}

fn write_node(out: &mut String, tree: &DomTree, id: NodeId, indent: usize) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let prefix = "  ".repeat(indent);
    let line = match &node.node_type {
        NodeType::Document => "Document".to_string(),
        NodeType::Element(data) => format_open_tag(&data.tag_name, &data.attrs),
        NodeType::Void(data) => format!("{} (void)", format_open_tag(&data.tag_name, &data.attrs)),
        NodeType::RawText { element, data } => format!(
            "{} \"{}\"",
            format_open_tag(&element.tag_name, &element.attrs),
            visible(data)
        ),
        NodeType::Text(data) => format!("\"{}\"", visible(data)),
        NodeType::Comment(data) => format!("<!--{data}-->"),
        NodeType::CData(data) => format!("<![CDATA[{data}]]>"),
        NodeType::DocumentType(data) => format!("<!DOCTYPE {data}>"),
        NodeType::ProcessingInstruction(pi) => format!("<{} {}?>", pi.target, pi.content),
    };
    let _ = writeln!(out, "{prefix}{line} @{}", node.position);
    for &child_id in tree.children(id) {
        write_node(out, tree, child_id, indent + 1);
    }
}

/// Render the subtree at `id`, one node per line, two spaces per level.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_node(&mut out, tree, id, 0);
    out
}

/// Print the subtree at `id` to stdout, starting at `indent` levels.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let mut out = String::new();
    write_node(&mut out, tree, id, indent);
    print!("{out}");
}
