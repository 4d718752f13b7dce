//! Primitive type kinds.
//!
//! The resolver maps a primitive type name to a `BasicKind` before the type
//! core ever sees the node, so the type core never looks names up.

use std::fmt;

/// The closed set of primitive types.
///
/// Discriminants follow declaration order. The type core stores each basic
/// type at index `kind as u32`, so this order must never change.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum BasicKind {
    Void = 0,
    Bool = 1,
    I8 = 2,
    U8 = 3,
    I16 = 4,
    U16 = 5,
    I32 = 6,
    U32 = 7,
    I64 = 8,
    U64 = 9,
    F32 = 10,
    F64 = 11,
    Rawptr = 12,
}

impl BasicKind {
    /// Number of basic kinds.
    pub const COUNT: usize = 13;

    /// Every kind, in declaration order.
    pub const ALL: [BasicKind; Self::COUNT] = [
        BasicKind::Void,
        BasicKind::Bool,
        BasicKind::I8,
        BasicKind::U8,
        BasicKind::I16,
        BasicKind::U16,
        BasicKind::I32,
        BasicKind::U32,
        BasicKind::I64,
        BasicKind::U64,
        BasicKind::F32,
        BasicKind::F64,
        BasicKind::Rawptr,
    ];

    /// Position of this kind in [`BasicKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source-level spelling of the type.
    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Void => "void",
            BasicKind::Bool => "bool",
            BasicKind::I8 => "i8",
            BasicKind::U8 => "u8",
            BasicKind::I16 => "i16",
            BasicKind::U16 => "u16",
            BasicKind::I32 => "i32",
            BasicKind::U32 => "u32",
            BasicKind::I64 => "i64",
            BasicKind::U64 => "u64",
            BasicKind::F32 => "f32",
            BasicKind::F64 => "f64",
            BasicKind::Rawptr => "rawptr",
        }
    }

    /// Find the kind spelled `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Debug for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BasicKind::{}", self.name())
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<BasicKind>() == 1);
