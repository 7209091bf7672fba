// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration-tree model.
//!
//! A [`DeclarationTree`] is the parsed representation of one source unit,
//! supplied in full by the host front end before a pass begins. Nodes live
//! in a `Vec`-backed arena and refer to each other through stable
//! [`NodeId`] indices, so namespace resolution can walk parent chains
//! without borrowing pains.
//!
//! The tree is built once through [`DeclarationTree::add_namespace`] and
//! [`DeclarationTree::add_class`] and is read-only to the generation pass.
//! Scanning visits class nodes depth-first over the roots in insertion
//! order, which equals source order for trees built in document order.

mod decl;

pub use decl::{Annotation, ClassDecl, FieldDecl, Member, NamespaceDecl};

/// Stable index of a node within its [`DeclarationTree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// What a tree node declares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A namespace declaration; may enclose further namespaces and classes.
    Namespace(NamespaceDecl),
    /// A class declaration; may enclose nested classes.
    Class(ClassDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// An ordered forest of namespace and class declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclarationTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl DeclarationTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a namespace declaration under `parent`, or as a new root.
    pub fn add_namespace(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
    ) -> NodeId {
        self.add_node(parent, NodeKind::Namespace(NamespaceDecl::new(name)))
    }

    /// Append a class declaration under `parent`, or as a new root.
    pub fn add_class(&mut self, parent: Option<NodeId>, class: ClassDecl) -> NodeId {
        self.add_node(parent, NodeKind::Class(class))
    }

    fn add_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            kind,
        });
        match parent {
            Some(parent_id) => self.nodes[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// The parent of `id`, or `None` for a root node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The declaration stored at `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    /// The class stored at `id`, if the node is a class declaration.
    #[must_use]
    pub fn class(&self, id: NodeId) -> Option<&ClassDecl> {
        match &self.nodes[id.0].kind {
            NodeKind::Class(class) => Some(class),
            NodeKind::Namespace(_) => None,
        }
    }

    /// The namespace stored at `id`, if the node is a namespace declaration.
    #[must_use]
    pub fn namespace(&self, id: NodeId) -> Option<&NamespaceDecl> {
        match &self.nodes[id.0].kind {
            NodeKind::Namespace(ns) => Some(ns),
            NodeKind::Class(_) => None,
        }
    }

    /// Root nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All nodes in depth-first encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        order.into_iter()
    }

    /// All class nodes in depth-first encounter order.
    pub fn classes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|id| matches!(self.nodes[id.0].kind, NodeKind::Class(_)))
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
