//! The Raw Node tree produced by the BER decoder (§3).

use bytes::Bytes;

use crate::arena::{Arena, NodeId};
use crate::identifier::{NodeKind, TagClass};

/// A single BER element: its decoded tag/class/kind, its content bytes, and
/// (for constructed nodes) its children in encounter order.
///
/// `value` borrows from the arena's backing [`Bytes`], which is itself a
/// cheap reference-counted view over the caller's input buffer — slicing a
/// node's value never copies.
#[derive(Debug, Clone)]
pub struct RawNode {
    tag: u64,
    class: TagClass,
    kind: NodeKind,
    value: Bytes,
    children: Vec<NodeId>,
}

impl RawNode {
    pub(crate) fn new(tag: u64, class: TagClass, kind: NodeKind, value: Bytes, children: Vec<NodeId>) -> Self {
        RawNode { tag, class, kind, value, children }
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn class(&self) -> TagClass {
        self.class
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self.kind, NodeKind::Constructed)
    }

    /// The content octets (primitive) or the entire content region (constructed).
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Handles to this node's children, in encounter order.
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }
}

/// An arena of [`RawNode`]s plus the handle to the synthetic root.
///
/// The root always has `class = universal`, `kind = constructed`, `tag = 0`,
/// and `value` covering the whole input buffer (§4.2); its children are the
/// top-level TLVs.
pub struct RawTree {
    arena: Arena<RawNode>,
    root: NodeId,
}

impl RawTree {
    pub(crate) fn new(arena: Arena<RawNode>, root: NodeId) -> Self {
        RawTree { arena, root }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &RawNode {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> &RawNode {
        self.arena.get(id)
    }

    /// Iterates a node's children as `(id, node)` pairs, in encounter order.
    pub fn children<'a>(&'a self, node: &'a RawNode) -> impl Iterator<Item = (NodeId, &'a RawNode)> + 'a {
        node.child_ids().iter().map(move |&id| (id, self.node(id)))
    }
}
