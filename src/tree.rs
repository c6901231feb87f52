//! Concrete syntax tree.
//!
//! Nodes live in one arena and are addressed by [`NodeId`], handed out in
//! creation order. The tree only grows: a node is never removed or changed
//! once attached.

use std::fmt;

use crate::{grammar::Rule, stack::ensure_sufficient_stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic `start` node.
    Root,
    Rule(Rule),
    /// A consumed token, by its index in the token table.
    Token(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'bump> {
    pub label: &'bump str,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree<'bump> {
    nodes: Vec<Node<'bump>>,
}

impl<'bump> ParseTree<'bump> {
    fn new() -> Self {
        Self {
            nodes: vec![Node {
                label: "start",
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<'bump>> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order walk from the root.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<'bump>)> + '_ {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id.0];
            stack.extend(node.children.iter().rev().copied());
            Some((id, node))
        })
    }

    /// Token leaves, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<'bump>> + '_ {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| matches!(node.kind, NodeKind::Token(_)))
    }

    /// Nodes produced by `rule`, in pre-order.
    pub fn find(&self, rule: Rule) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.kind == NodeKind::Rule(rule))
            .map(|(id, _)| id)
    }

    /// Number of edges from the root to `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self.parent(id), |parent| self.parent(*parent)).count()
    }

    /// Text diagram, one node per line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn render_children(&self, f: &mut fmt::Formatter<'_>, id: NodeId, prefix: &str) -> fmt::Result {
        let children = self.children(id);
        for (position, child) in children.iter().enumerate() {
            let last = position + 1 == children.len();
            let (connector, extension) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
            writeln!(f, "{prefix}{connector}{}", self.nodes[child.0].label)?;
            let prefix = format!("{prefix}{extension}");
            ensure_sufficient_stack(|| self.render_children(f, *child, &prefix))?;
        }
        Ok(())
    }
}

impl fmt::Display for ParseTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.nodes[0].label)?;
        self.render_children(f, self.root(), "")
    }
}

/// Attaches nodes under a moving "current" node while the grammar runs.
#[derive(Debug)]
pub(crate) struct TreeBuilder<'bump> {
    tree: ParseTree<'bump>,
    current: NodeId,
}

impl<'bump> TreeBuilder<'bump> {
    pub(crate) fn new() -> Self {
        Self {
            tree: ParseTree::new(),
            current: NodeId(0),
        }
    }

    fn attach(&mut self, label: &'bump str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.tree.nodes.len());
        self.tree.nodes.push(Node {
            label,
            kind,
            parent: Some(self.current),
            children: Vec::new(),
        });
        self.tree.nodes[self.current.0].children.push(id);
        id
    }

    /// Opens a rule node and makes it current. Returns the node to restore.
    pub(crate) fn enter(&mut self, rule: Rule) -> NodeId {
        let id = self.attach(rule.as_str(), NodeKind::Rule(rule));
        std::mem::replace(&mut self.current, id)
    }

    pub(crate) fn exit(&mut self, previous: NodeId) {
        self.current = previous;
    }

    pub(crate) fn leaf(&mut self, label: &'bump str, token: usize) -> NodeId {
        self.attach(label, NodeKind::Token(token))
    }

    pub(crate) fn finish(self) -> ParseTree<'bump> {
        self.tree
    }
}
