//! Errors raised by the type core.
//!
//! [`BuildError`] aborts compilation. Most variants are internal compiler
//! errors: an earlier stage handed the builder a node it must never see.
//!
//! [`TypeError`] is a user-facing problem found by a type check. It is turned
//! into a queued message with [`TypeError::report`].

use onyx_diagnostic::{MessageKind, MessageQueue};
use onyx_ir::{Span, StringLookup, TypeNodeId};

use crate::{Idx, Pool};

/// A type-syntax node the builder cannot turn into a type.
#[derive(Clone, Copy, Eq, PartialEq, Debug, thiserror::Error)]
pub enum BuildError {
    /// A symbol (unresolved type name) or a non-type node reached the builder.
    #[error("internal compiler error: {kind} reached the type builder ({node:?} at {span})")]
    InvalidTypeNode {
        node: TypeNodeId,
        kind: &'static str,
        span: Span,
    },
    /// The packed members of a struct need more than `u32::MAX` bytes.
    #[error("struct type at {span} is too large: {size} bytes")]
    StructTooLarge {
        node: TypeNodeId,
        size: u64,
        span: Span,
    },
}

/// A type mismatch to be reported to the user.
#[derive(Clone, Copy, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TypeError {
    #[error("mismatched types on assignment")]
    AssignmentMismatch { expected: Idx, found: Idx },
    #[error("mismatched types for binary operator")]
    BinopMismatch { left: Idx, right: Idx },
}

impl TypeError {
    /// Queue the message for this error at `span`.
    pub fn report(
        &self,
        pool: &Pool,
        names: &impl StringLookup,
        span: Span,
        queue: &mut MessageQueue,
    ) {
        match *self {
            TypeError::AssignmentMismatch { expected, found } => {
                let expected = pool.display_name(expected, names);
                let found = pool.display_name(found, names);
                queue.add(MessageKind::AssignmentTypeMismatch, span, &[&expected, &found]);
            }
            TypeError::BinopMismatch { left, right } => {
                let left = pool.display_name(left, names);
                let right = pool.display_name(right, names);
                queue.add(MessageKind::BinopMismatchType, span, &[&left, &right]);
            }
        }
    }
}
