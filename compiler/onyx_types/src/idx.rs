//! Type index handle.
//!
//! `Idx` is the only way to refer to a type. Basic types have fixed indices
//! in every pool, equal to their [`BasicKind`] discriminant, so they can be
//! named without a pool in hand.

use std::fmt;

use onyx_ir::BasicKind;

/// A 32-bit index into the type pool.
///
/// Two `Idx` values from the same pool are equal exactly when they refer to
/// the same type instance.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic Types (indices 0-12) ===
    // Pre-allocated at pool creation, in `BasicKind` order.

    pub const VOID: Self = Self::basic(BasicKind::Void);
    pub const BOOL: Self = Self::basic(BasicKind::Bool);
    pub const I8: Self = Self::basic(BasicKind::I8);
    pub const U8: Self = Self::basic(BasicKind::U8);
    pub const I16: Self = Self::basic(BasicKind::I16);
    pub const U16: Self = Self::basic(BasicKind::U16);
    pub const I32: Self = Self::basic(BasicKind::I32);
    pub const U32: Self = Self::basic(BasicKind::U32);
    pub const I64: Self = Self::basic(BasicKind::I64);
    pub const U64: Self = Self::basic(BasicKind::U64);
    pub const F32: Self = Self::basic(BasicKind::F32);
    pub const F64: Self = Self::basic(BasicKind::F64);
    pub const RAWPTR: Self = Self::basic(BasicKind::Rawptr);

    /// Number of pre-allocated basic types.
    #[allow(clippy::cast_possible_truncation)]
    pub const BASIC_COUNT: u32 = BasicKind::COUNT as u32;

    /// First index handed out for pointer, function, and struct types.
    pub const FIRST_DYNAMIC: u32 = Self::BASIC_COUNT;

    /// The absent type: an untyped return, or "no such member".
    pub const NONE: Self = Self(u32::MAX);

    /// The pre-allocated index of a basic type.
    #[inline]
    pub const fn basic(kind: BasicKind) -> Self {
        Self(kind as u32)
    }

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in the pool.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is one of the pre-allocated basic types.
    #[inline]
    pub const fn is_basic(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// `Some(self)` unless this is the NONE sentinel.
    #[inline]
    pub const fn some(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        match BasicKind::ALL.get(self.0 as usize) {
            Some(kind) => write!(f, "Idx::{}", kind.name().to_uppercase()),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "<none>");
        }
        match BasicKind::ALL.get(self.0 as usize) {
            Some(kind) => f.write_str(kind.name()),
            None => write!(f, "type#{}", self.0),
        }
    }
}

const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_indices_follow_kind_order() {
        for (i, kind) in BasicKind::ALL.into_iter().enumerate() {
            assert_eq!(Idx::basic(kind).raw() as usize, i);
        }
        assert_eq!(Idx::VOID.raw(), 0);
        assert_eq!(Idx::RAWPTR.raw(), 12);
    }

    #[test]
    fn basic_check_works() {
        assert!(Idx::I32.is_basic());
        assert!(Idx::RAWPTR.is_basic());
        assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_basic());
        assert!(!Idx::NONE.is_basic());
    }

    #[test]
    fn none_sentinel_works() {
        assert!(Idx::NONE.is_none());
        assert!(!Idx::VOID.is_none());
        assert_eq!(Idx::NONE.some(), None);
        assert_eq!(Idx::U8.some(), Some(Idx::U8));
    }

    #[test]
    fn debug_and_display() {
        assert_eq!(format!("{:?}", Idx::U16), "Idx::U16");
        assert_eq!(format!("{:?}", Idx::from_raw(40)), "Idx(40)");
        assert_eq!(format!("{:?}", Idx::NONE), "Idx::NONE");
        assert_eq!(Idx::F64.to_string(), "f64");
        assert_eq!(Idx::from_raw(40).to_string(), "type#40");
    }
}
