//! Type system core for Onyx.
//!
//! Types live in a [`Pool`], one per compilation unit, and are referred to
//! by [`Idx`] handles. Identity of a type is equality of its `Idx`.
//!
//! # Pieces
//!
//! - **Basic table**: `BASIC_TYPES`, pre-allocated in every pool at the
//!   indices named by `Idx::VOID ..= Idx::RAWPTR`
//! - **Type graph**: `Tag` + tag-dependent storage, read back through [`TypeKind`]
//! - **Builder**: [`TypeBuilder`] turns type-syntax nodes into pool entries,
//!   once per defining node
//! - **Layout**: `size_of`, `alignment_class` and struct member offsets
//! - **Compatibility**: `compatible` / `surface_compatible`
//!
//! Nothing in a pool is freed individually. Dropping the pool drops every
//! type it holds, and every `Idx` into it becomes meaningless.

mod basic;
mod build;
mod check;
mod compat;
mod error;
mod flags;
mod idx;
mod item;
pub mod logging;
mod pool;
mod stack;
mod tag;

pub use basic::{lookup_basic, BasicType, BASIC_TYPES};
pub use build::TypeBuilder;
pub use error::{BuildError, TypeError};
pub use flags::BasicFlags;
pub use idx::Idx;
pub use item::Item;
pub use pool::{FunctionType, Pool, StructLayout, StructMember, StructType, TypeKind, POINTER_SIZE};
pub use stack::ensure_sufficient_stack;
pub use tag::Tag;
