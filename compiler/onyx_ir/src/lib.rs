//! Onyx IR - the syntax shapes the type core consumes.
//!
//! The parser and resolver live upstream. What reaches the type core is:
//! - Spans for source positions
//! - Names for interned identifiers
//! - `BasicKind`, the closed set of primitive types
//! - Type-syntax nodes stored in a `TypeNodeArena`
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<TypeNode>`, nodes refer to each other by `TypeNodeId`
//! - **Identity by index**: two references to the same definition carry the same id

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod basic_kind;
mod interner;
mod name;
mod span;
mod type_node;

pub use basic_kind::BasicKind;
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use type_node::{StructMemberNode, TypeNode, TypeNodeArena, TypeNodeId, TypeNodeKind};
