//! Capability flags for basic types.
//!
//! Flags classify a type without naming it: "any integer", "anything that
//! orders". Constructed pointer types report [`BasicFlags::POINTER`] through
//! [`Pool::flags`](crate::Pool::flags), so the raw pointer basic and `^T`
//! classify the same way.

use bitflags::bitflags;

bitflags! {
    /// Semantic properties of a basic type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct BasicFlags: u32 {
        const BOOLEAN = 1 << 0;
        const INTEGER = 1 << 1;
        const UNSIGNED = 1 << 2;
        const FLOAT = 1 << 3;
        const POINTER = 1 << 4;

        const NUMERIC = Self::INTEGER.bits() | Self::FLOAT.bits();
        const ORDERED = Self::INTEGER.bits() | Self::FLOAT.bits() | Self::POINTER.bits();
        const CONSTANT_TYPE = Self::BOOLEAN.bits() | Self::NUMERIC.bits() | Self::POINTER.bits();
        const NUMERIC_ORDERED = Self::NUMERIC.bits() | Self::ORDERED.bits();
    }
}

impl BasicFlags {
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.contains(Self::INTEGER)
    }

    #[inline]
    pub const fn is_unsigned(self) -> bool {
        self.contains(Self::UNSIGNED)
    }

    #[inline]
    pub const fn is_pointer(self) -> bool {
        self.contains(Self::POINTER)
    }

    /// Integer or float.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.intersects(Self::NUMERIC)
    }

    /// Supports `<`, `>` and friends.
    #[inline]
    pub const fn is_ordered(self) -> bool {
        self.intersects(Self::ORDERED)
    }

    /// Can be the type of a literal constant.
    #[inline]
    pub const fn is_constant_type(self) -> bool {
        self.intersects(Self::CONSTANT_TYPE)
    }
}

impl Default for BasicFlags {
    fn default() -> Self {
        Self::empty()
    }
}
