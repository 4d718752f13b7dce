//! Type-syntax nodes.
//!
//! These are the only AST shapes the type core reads. The parser produces
//! them and the resolver rewrites `Symbol` elements to point at the node
//! that defines the named type, so that every use of a struct refers to a
//! single definition node.
//!
//! Nodes are stored flat in a [`TypeNodeArena`] and refer to each other by
//! [`TypeNodeId`]. A struct can therefore contain a pointer back to its own
//! node without any ownership cycle.

use std::fmt;

use crate::{BasicKind, Name, Span};

/// Index into a [`TypeNodeArena`].
///
/// The id is the node's identity. The type builder memoizes on it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeNodeId(u32);

impl TypeNodeId {
    /// Create a new `TypeNodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeNodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeNodeId({})", self.0)
    }
}

/// A declared struct member: `name: type`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StructMemberNode {
    pub name: Name,
    pub span: Span,
    pub ty: TypeNodeId,
}

/// The shape of a type-syntax node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeNodeKind {
    /// A primitive type already resolved to its kind.
    Basic(BasicKind),
    /// `^elem`
    Pointer { elem: TypeNodeId },
    /// `proc (params) -> ret`. An absent `ret` means no return type.
    Function {
        params: Vec<TypeNodeId>,
        ret: Option<TypeNodeId>,
    },
    /// `struct { members }`, declared as `name`.
    Struct {
        name: Name,
        members: Vec<StructMemberNode>,
    },
    /// A type name the resolver has not substituted.
    Symbol(Name),
    /// Parser recovery placeholder for a malformed type.
    Error,
}

impl TypeNodeKind {
    /// Short description of the node shape, for internal diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            TypeNodeKind::Basic(_) => "basic type",
            TypeNodeKind::Pointer { .. } => "pointer type",
            TypeNodeKind::Function { .. } => "function type",
            TypeNodeKind::Struct { .. } => "struct type",
            TypeNodeKind::Symbol(_) => "symbol",
            TypeNodeKind::Error => "error node",
        }
    }
}

/// A type-syntax node with its source position.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeNode {
    pub kind: TypeNodeKind,
    pub span: Span,
}

/// Flat storage for type-syntax nodes of one compilation unit.
#[derive(Clone, Default, Debug)]
pub struct TypeNodeArena {
    nodes: Vec<TypeNode>,
}

impl TypeNodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: TypeNodeKind, span: Span) -> TypeNodeId {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("type node arena exceeded u32::MAX nodes"));
        self.nodes.push(TypeNode { kind, span });
        TypeNodeId::new(raw)
    }

    pub fn basic(&mut self, kind: BasicKind, span: Span) -> TypeNodeId {
        self.alloc(TypeNodeKind::Basic(kind), span)
    }

    pub fn pointer(&mut self, elem: TypeNodeId, span: Span) -> TypeNodeId {
        self.alloc(TypeNodeKind::Pointer { elem }, span)
    }

    pub fn function(
        &mut self,
        params: Vec<TypeNodeId>,
        ret: Option<TypeNodeId>,
        span: Span,
    ) -> TypeNodeId {
        self.alloc(TypeNodeKind::Function { params, ret }, span)
    }

    /// Allocate a struct node with no members yet.
    ///
    /// Members are added with [`push_member`](Self::push_member), which lets a
    /// member refer to the struct's own id.
    pub fn struct_type(&mut self, name: Name, span: Span) -> TypeNodeId {
        self.alloc(
            TypeNodeKind::Struct {
                name,
                members: Vec::new(),
            },
            span,
        )
    }

    pub fn symbol(&mut self, name: Name, span: Span) -> TypeNodeId {
        self.alloc(TypeNodeKind::Symbol(name), span)
    }

    /// Append a member to a struct node, in declaration order.
    ///
    /// # Panics
    /// Panics if `struct_id` is not a struct node.
    pub fn push_member(&mut self, struct_id: TypeNodeId, member: StructMemberNode) {
        match &mut self.nodes[struct_id.index()].kind {
            TypeNodeKind::Struct { members, .. } => members.push(member),
            other => panic!(
                "push_member on {} node {struct_id:?}",
                other.describe()
            ),
        }
    }

    /// Point an existing pointer node at a new element.
    ///
    /// The resolver uses this to replace a `Symbol` element with the node
    /// that defines the type.
    ///
    /// # Panics
    /// Panics if `pointer_id` is not a pointer node.
    pub fn set_pointer_elem(&mut self, pointer_id: TypeNodeId, new_elem: TypeNodeId) {
        match &mut self.nodes[pointer_id.index()].kind {
            TypeNodeKind::Pointer { elem } => *elem = new_elem,
            other => panic!(
                "set_pointer_elem on {} node {pointer_id:?}",
                other.describe()
            ),
        }
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: TypeNodeId) -> &TypeNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::ops::Index<TypeNodeId> for TypeNodeArena {
    type Output = TypeNode;

    fn index(&self, id: TypeNodeId) -> &TypeNode {
        self.get(id)
    }
}
