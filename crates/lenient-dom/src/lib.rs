//! Node tree for the lenient HTML scanner.
//!
//! This crate provides an arena-based tree of typed markup nodes. Every node
//! records the [`Position`] of its first character in the source text.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.
//!
//! Scanners do not touch the arena. They return a detached [`Fragment`] which
//! the tree builder grafts in with [`DomTree::append_fragment`].

use indexmap::IndexMap;
use lenient_common::Position;

/// Map of attribute names to values for an element.
///
/// Keys keep their first-seen order. Re-inserting an existing key replaces
/// its value in place, so a repeated attribute never moves.
pub type AttributesMap = IndexMap<String, String>;

/// A type-safe index into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena.
///
/// Stores indices for parent/child/sibling relationships, enabling O(1)
/// traversal in any direction.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of markup this node represents.
    pub node_type: NodeType,

    /// Position of the node's first character.
    pub position: Position,

    /// Parent node, `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,

    /// The node immediately following this one under the same parent.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one under the same parent.
    pub prev_sibling: Option<NodeId>,
}

/// The typed variants a scanner can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// The root of a parsed document.
    Document,
    /// A container element.
    Element(ElementData),
    /// An element that never has children or a closing tag (`br`, `img`, ...).
    Void(ElementData),
    /// An element whose body is kept verbatim (`script`, `style`, ...).
    RawText {
        /// Name and attributes of the opening tag.
        element: ElementData,
        /// The unparsed text between the opening and closing tags.
        data: String,
    },
    /// Character data outside of any markup construct.
    Text(String),
    /// `<!-- ... -->` or a bogus `<! ... >` comment.
    Comment(String),
    /// `<![CDATA[ ... ]]>`, also used to carry script failure traces.
    CData(String),
    /// `<!doctype ...>`; holds the text after the keyword.
    DocumentType(String),
    /// `<?target content?>`.
    ProcessingInstruction(ProcessingInstructionData),
}

impl NodeType {
    /// Element data of element-like nodes (`Element`, `Void`, `RawText`).
    #[must_use]
    pub const fn element_data(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) | Self::Void(data) | Self::RawText { element: data, .. } => {
                Some(data)
            }
            _ => None,
        }
    }

    /// True for `Element`, `Void` and `RawText` nodes.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        self.element_data().is_some()
    }

    /// Lower-case variant name, used by debug dumps.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Element(_) => "element",
            Self::Void(_) => "void",
            Self::RawText { .. } => "rawtext",
            Self::Text(_) => "text",
            Self::Comment(_) => "comment",
            Self::CData(_) => "cdata",
            Self::DocumentType(_) => "doctype",
            Self::ProcessingInstruction(_) => "pi",
        }
    }
}

/// Name and attributes of an element-like node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Lower-cased tag name.
    pub tag_name: String,
    /// Attributes in first-seen order, names as written.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Value of the attribute called `name`, if declared.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}

/// Target and content of a processing instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstructionData {
    /// The target, including its leading `?` (e.g. `?php`).
    pub target: String,
    /// Everything between the target and `?>`, minus one separating space.
    pub content: String,
}

/// A detached node with its subtree, not yet placed in a [`DomTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The node itself.
    pub node_type: NodeType,
    /// Position of the node's first character.
    pub position: Position,
    /// Detached children, in order.
    pub children: Vec<Fragment>,
}

impl Fragment {
    /// A fragment without children.
    #[must_use]
    pub const fn leaf(node_type: NodeType, position: Position) -> Self {
        Self {
            node_type,
            position,
            children: Vec::new(),
        }
    }

    /// Append `child` and return the fragment.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// Arena-based node tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            position: Position::START,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        };
        Self {
            nodes: vec![document],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, the Document included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            position,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // Get the current last child of parent (if any) to set up sibling links
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Allocate `fragment` and its whole subtree under `parent`.
    ///
    /// Returns the ID of the fragment's top node.
    pub fn append_fragment(&mut self, parent: NodeId, fragment: Fragment) -> NodeId {
        let Fragment {
            node_type,
            position,
            children,
        } = fragment;
        let id = self.alloc(node_type, position);
        self.append_child(parent, id);
        for child in children {
            let _ = self.append_fragment(id, child);
        }
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Get the type of a node.
    #[must_use]
    pub fn node_type(&self, id: NodeId) -> Option<&NodeType> {
        self.get(id).map(|n| &n.node_type)
    }

    /// Get the position of a node.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.get(id).map(|n| n.position)
    }

    /// Get element data if this node is element-like.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.node_type(id).and_then(NodeType::element_data)
    }

    /// Tag name of an element-like node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.as_element(id).map(|e| e.tag_name.as_str())
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        match self.node_type(id)? {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True if any child of `id` is element-like.
    #[must_use]
    pub fn has_element_child(&self, id: NodeId) -> bool {
        self.children(id)
            .iter()
            .any(|&child| self.node_type(child).is_some_and(NodeType::is_element))
    }

    /// Iterate over `id` and all its descendants in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            stack: vec![id],
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over a subtree.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
