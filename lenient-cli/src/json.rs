//! JSON rendering of a parsed tree.

use lenient_common::Diagnostic;
use lenient_dom::{AttributesMap, DomTree, NodeId, NodeType};
use serde_json::{Map, Value, json};

fn attributes_to_json(attrs: &AttributesMap) -> Value {
    let attrs: Map<String, Value> = attrs
        .iter()
        .map(|(k, v)| (k.clone(), json!(v)))
        .collect();
    Value::Object(attrs)
}

/// Convert the subtree at `id` to a JSON object.
pub fn node_to_json(tree: &DomTree, id: NodeId) -> Value {
    let mut obj = Map::new();
    let Some(node) = tree.get(id) else {
        return Value::Object(obj);
    };

    let _ = obj.insert("type".to_string(), json!(node.node_type.kind()));
    let _ = obj.insert("position".to_string(), json!(node.position.to_string()));
    match &node.node_type {
        NodeType::Document => {}
        NodeType::Element(data) | NodeType::Void(data) => {
            let _ = obj.insert("tagName".to_string(), json!(data.tag_name));
            let _ = obj.insert("attributes".to_string(), attributes_to_json(&data.attrs));
        }
        NodeType::RawText { element, data } => {
            let _ = obj.insert("tagName".to_string(), json!(element.tag_name));
            let _ = obj.insert("attributes".to_string(), attributes_to_json(&element.attrs));
            let _ = obj.insert("content".to_string(), json!(data));
        }
        NodeType::Text(text)
        | NodeType::Comment(text)
        | NodeType::CData(text)
        | NodeType::DocumentType(text) => {
            let _ = obj.insert("content".to_string(), json!(text));
        }
        NodeType::ProcessingInstruction(pi) => {
            let _ = obj.insert("target".to_string(), json!(pi.target));
            let _ = obj.insert("content".to_string(), json!(pi.content));
        }
    }

    let children = tree.children(id);
    if !children.is_empty() {
        let children: Vec<Value> = children
            .iter()
            .map(|&child| node_to_json(tree, child))
            .collect();
        let _ = obj.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(obj)
}

/// The whole report: the tree plus every diagnostic with its message.
pub fn report_to_json(tree: &DomTree, diagnostics: &[Diagnostic]) -> Value {
    let diagnostics: Vec<Value> = diagnostics
        .iter()
        .map(|d| {
            json!({
                "code": d.code,
                "position": d.position,
                "args": d.args,
                "message": d.message(),
            })
        })
        .collect();
    json!({
        "tree": node_to_json(tree, tree.root()),
        "diagnostics": diagnostics,
    })
}
