//! Type builder: type-syntax nodes to pool entries.
//!
//! # Identity
//!
//! Struct and function nodes are memoized by [`TypeNodeId`]. Every use of a
//! struct points at its one definition node, so every use gets the same
//! `Idx`. Pointer nodes are not memoized: each one builds a fresh pointer
//! instance.
//!
//! # Recursive structs
//!
//! A struct is installed into the cache before its members are resolved.
//! A member of type `^Self` then finds the in-progress instance instead of
//! starting a new build, which is what terminates `struct Node { next: ^Node }`.
//!
//! A struct whose members fail to build is evicted again, together with
//! everything cached while it was in progress, so a failing node fails on
//! every build.

use onyx_ir::{StructMemberNode, TypeNodeArena, TypeNodeId, TypeNodeKind};
use rustc_hash::FxHashMap;

use crate::{ensure_sufficient_stack, BuildError, Idx, Pool, StructLayout, StructMember};

/// Builds pool types from type-syntax nodes, once per defining node.
///
/// One builder serves one compilation unit, alongside its [`Pool`] and
/// [`TypeNodeArena`].
#[derive(Clone, Default, Debug)]
pub struct TypeBuilder {
    cache: FxHashMap<TypeNodeId, Idx>,
}

impl TypeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the type for `node`. An absent node is the absent type.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidTypeNode`] if an unresolved symbol or a
    /// parser error node is reachable from `node`. This is an internal
    /// compiler error; the caller aborts compilation.
    ///
    /// Returns [`BuildError::StructTooLarge`] if a struct's packed members
    /// need more than `u32::MAX` bytes.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn build(
        &mut self,
        pool: &mut Pool,
        nodes: &TypeNodeArena,
        node: Option<TypeNodeId>,
    ) -> Result<Idx, BuildError> {
        match node {
            Some(id) => self.build_node(pool, nodes, id),
            None => Ok(Idx::NONE),
        }
    }

    /// The type already built for a struct or function node.
    pub fn cached(&self, id: TypeNodeId) -> Option<Idx> {
        self.cache.get(&id).copied()
    }

    /// Number of memoized nodes.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn build_node(
        &mut self,
        pool: &mut Pool,
        nodes: &TypeNodeArena,
        id: TypeNodeId,
    ) -> Result<Idx, BuildError> {
        if let Some(idx) = self.cached(id) {
            tracing::trace!(?id, ?idx, "type cache hit");
            return Ok(idx);
        }

        let node = &nodes[id];
        match &node.kind {
            TypeNodeKind::Basic(kind) => Ok(Idx::basic(*kind)),

            TypeNodeKind::Pointer { elem } => {
                let elem = ensure_sufficient_stack(|| self.build_node(pool, nodes, *elem))?;
                Ok(pool.make_pointer(elem))
            }

            TypeNodeKind::Function { params, ret } => {
                let ret = match ret {
                    Some(ret) => ensure_sufficient_stack(|| self.build_node(pool, nodes, *ret))?,
                    None => Idx::NONE,
                };
                let params = params
                    .iter()
                    .map(|param| ensure_sufficient_stack(|| self.build_node(pool, nodes, *param)))
                    .collect::<Result<Vec<_>, _>>()?;

                let func = pool.make_function(params, ret);
                self.cache.insert(id, func);
                Ok(func)
            }

            TypeNodeKind::Struct { name, members } => {
                let st = pool.alloc_struct(*name, members.len());
                self.cache.insert(id, st);
                tracing::trace!(?id, ?st, "struct installed");

                let built = self.build_members(pool, nodes, st, members).and_then(|layout| {
                    layout.finish().ok_or(BuildError::StructTooLarge {
                        node: id,
                        size: layout.size(),
                        span: node.span,
                    })
                });
                match built {
                    Ok(size) => {
                        pool.finish_struct(st, size);
                        tracing::debug!(?st, size, "struct finished");
                        Ok(st)
                    }
                    Err(err) => {
                        tracing::debug!(?st, %err, "struct build failed");
                        self.evict_since(st);
                        Err(err)
                    }
                }
            }

            TypeNodeKind::Symbol(_) | TypeNodeKind::Error => {
                let err = BuildError::InvalidTypeNode {
                    node: id,
                    kind: node.kind.describe(),
                    span: node.span,
                };
                tracing::error!(%err);
                Err(err)
            }
        }
    }

    /// Build and place the members of the struct `st`, in declaration order.
    fn build_members(
        &mut self,
        pool: &mut Pool,
        nodes: &TypeNodeArena,
        st: Idx,
        members: &[StructMemberNode],
    ) -> Result<StructLayout, BuildError> {
        let mut layout = StructLayout::new();
        for member in members {
            let ty = ensure_sufficient_stack(|| self.build_node(pool, nodes, member.ty))?;
            let offset = layout.place(pool.size_of(ty));
            pool.insert_struct_member(st, member.name, StructMember { offset, ty });
        }
        Ok(layout)
    }

    /// Forget every type cached since `st` was allocated.
    ///
    /// The pool hands out indices in increasing order, so these are exactly
    /// the types of a failed struct build: the struct itself and anything
    /// built while its members were resolved. None of them may be returned
    /// by a later build.
    fn evict_since(&mut self, st: Idx) {
        self.cache.retain(|_, idx| idx.raw() < st.raw());
    }
}
