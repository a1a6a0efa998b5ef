//! Tests for tree construction, fragments and attribute ordering.

use lenient_common::Position;
use lenient_dom::{AttributesMap, DomTree, ElementData, Fragment, NodeId, NodeType};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)), Position::START)
}

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.node_type(NodeId::ROOT), Some(&NodeType::Document));
    assert_eq!(tree.position(NodeId::ROOT), Some(Position::START));
}

#[test]
fn test_append_child_links_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(parent));
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
fn test_append_fragment_allocates_subtree() {
    let mut tree = DomTree::new();
    let fragment = Fragment::leaf(NodeType::Element(ElementData::new("ul")), Position::new(1, 1))
        .with_child(Fragment::leaf(
            NodeType::Text("one".to_string()),
            Position::new(1, 5),
        ))
        .with_child(Fragment::leaf(
            NodeType::Comment(" two ".to_string()),
            Position::new(2, 1),
        ));

    let ul = tree.append_fragment(NodeId::ROOT, fragment);
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.tag_name(ul), Some("ul"));
    assert_eq!(tree.children(ul).len(), 2);
    assert_eq!(tree.as_text(tree.children(ul)[0]), Some("one"));
    assert_eq!(tree.position(tree.children(ul)[1]), Some(Position::new(2, 1)));
}

#[test]
fn test_has_element_child_counts_element_like_nodes() {
    let mut tree = DomTree::new();
    let li = alloc_element(&mut tree, "li");
    let text = tree.alloc(NodeType::Text("item".to_string()), Position::START);
    tree.append_child(li, text);
    assert!(!tree.has_element_child(li));

    let br = tree.alloc(NodeType::Void(ElementData::new("br")), Position::START);
    tree.append_child(li, br);
    assert!(tree.has_element_child(li));
}

#[test]
fn test_element_data_for_element_like_variants() {
    let raw = NodeType::RawText {
        element: ElementData::new("script"),
        data: "a < b".to_string(),
    };
    assert_eq!(raw.element_data().map(|e| e.tag_name.as_str()), Some("script"));
    assert_eq!(raw.kind(), "rawtext");
    assert!(NodeType::Void(ElementData::new("br")).is_element());
    assert!(!NodeType::Comment(String::new()).is_element());
}

#[test]
fn test_attributes_keep_first_seen_order() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("b".to_string(), "1".to_string());
    let _ = attrs.insert("a".to_string(), "2".to_string());
    let _ = attrs.insert("b".to_string(), "3".to_string());

    let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(attrs.get("b").map(String::as_str), Some("3"));

    let data = ElementData {
        tag_name: "div".to_string(),
        attrs,
    };
    assert_eq!(data.attribute("a"), Some("2"));
    assert_eq!(data.id(), None);
}

#[test]
fn test_descendants_in_document_order() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let head = alloc_element(&mut tree, "head");
    let title = alloc_element(&mut tree, "title");
    let body = alloc_element(&mut tree, "body");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, head);
    tree.append_child(head, title);
    tree.append_child(html, body);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![NodeId::ROOT, html, head, title, body]);
}
