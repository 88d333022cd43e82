use crate::classifier::StatementKind;
use crate::parser::ParseError;

// Program tree stored in two arenas (nodes and leaves) addressed by index.
// The Ast is the program root: it owns both arenas and the ordered list of
// top-level nodes. Parent links are plain indices used for upward navigation.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafId(usize);

impl LeafId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Typed scalar carried by a leaf
#[derive(Debug, Clone, PartialEq)]
pub enum LeafValue {
    Str(String),
    Int(i64),
    Double(f64),
    Bool(bool),
}

impl LeafValue {
    /// Pick the narrowest payload type for a piece of text
    pub fn infer(text: &str) -> Self {
        if let Ok(v) = text.parse::<i64>() {
            return LeafValue::Int(v);
        }
        if text.contains('.') {
            if let Ok(v) = text.parse::<f64>() {
                return LeafValue::Double(v);
            }
        }
        match text {
            "true" => LeafValue::Bool(true),
            "false" => LeafValue::Bool(false),
            _ => LeafValue::Str(text.to_string()),
        }
    }
}

impl std::fmt::Display for LeafValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LeafValue::Str(s) => write!(f, "{:?}", s),
            LeafValue::Int(v) => write!(f, "{}", v),
            LeafValue::Double(v) => write!(f, "{:?}", v),
            LeafValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Node variants with their kind-specific fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Allocation { var_name: String },
    Process { name: String },
    Expression { reference: String },
}

impl NodeKind {
    pub fn statement_kind(&self) -> StatementKind {
        match self {
            NodeKind::Allocation { .. } => StatementKind::Allocation,
            NodeKind::Process { .. } => StatementKind::Process,
            NodeKind::Expression { .. } => StatementKind::Expression,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AstNode {
    pub kind: NodeKind,
    /// Token codes of the statement the node was built from
    pub identifier: Vec<i64>,
    pub data: String,
    /// None when the node is owned directly by the program root
    pub parent: Option<NodeId>,
    /// Owned leaves in attachment order
    pub children: Vec<LeafId>,
}

impl AstNode {
    pub fn new(kind: NodeKind, identifier: Vec<i64>, data: impl Into<String>) -> Self {
        Self {
            kind,
            identifier,
            data: data.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn statement_kind(&self) -> StatementKind {
        self.kind.statement_kind()
    }
}

/// Terminal element holding a typed payload
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Position in the parent's child list
    pub id: i64,
    pub value: LeafValue,
    pub parent: NodeId,
}

/// Render an identifier path as comma-separated codes
pub fn identifier_to_string(identifier: &[i64]) -> String {
    identifier
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<AstNode>,
    leaves: Vec<Leaf>,
    top_level: Vec<NodeId>,
    max_elements: usize,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    pub fn new() -> Self {
        Self::with_limit(crate::config::FrontendConfig::default().max_ast_nodes)
    }

    /// Root whose arenas may hold at most `max_elements` nodes and leaves combined
    pub fn with_limit(max_elements: usize) -> Self {
        Self {
            nodes: Vec::new(),
            leaves: Vec::new(),
            top_level: Vec::new(),
            max_elements,
        }
    }

    fn reserve_element(&self) -> Result<(), ParseError> {
        if self.nodes.len() + self.leaves.len() >= self.max_elements {
            return Err(ParseError::NodeLimit {
                max: self.max_elements,
            });
        }
        Ok(())
    }

    fn push_node(&mut self, node: AstNode) -> Result<NodeId, ParseError> {
        self.reserve_element()?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Add a node owned directly by the program root
    pub fn add_top_level(&mut self, mut node: AstNode) -> Result<NodeId, ParseError> {
        node.parent = None;
        let id = self.push_node(node)?;
        self.top_level.push(id);
        Ok(id)
    }

    /// Append a leaf as the last child of `parent`
    pub fn append_leaf(&mut self, parent: NodeId, value: LeafValue) -> Result<LeafId, ParseError> {
        self.reserve_element()?;
        let id = LeafId(self.leaves.len());
        let position = self.nodes[parent.0].children.len() as i64;
        self.leaves.push(Leaf {
            id: position,
            value,
            parent,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    pub fn leaf(&self, id: LeafId) -> &Leaf {
        &self.leaves[id.0]
    }

    /// Top-level nodes in statement order
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    /// The most recently added top-level node
    pub fn last_top_level(&self) -> Option<NodeId> {
        self.top_level.last().copied()
    }

    /// Leaf children of a node, in order
    pub fn leaves_of(&self, id: NodeId) -> impl Iterator<Item = &Leaf> + '_ {
        self.nodes[id.0]
            .children
            .iter()
            .map(|leaf| &self.leaves[leaf.0])
    }

    /// Call `f` once per top-level node, in statement order
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(NodeId, &AstNode),
    {
        for &id in &self.top_level {
            f(id, &self.nodes[id.0]);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }
}
