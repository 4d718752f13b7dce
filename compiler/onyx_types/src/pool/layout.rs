//! Sizes, alignment classes, and struct member placement.
//!
//! Struct members are packed: each member starts right where the previous
//! one ends, with no alignment padding. Generated code depends on these
//! offsets byte for byte.

use super::{Pool, TypeKind};
use crate::{BasicFlags, Idx};

/// Byte size of every pointer (wasm32).
pub const POINTER_SIZE: u32 = 4;

/// Alignment class used where no rule matches: 4-byte alignment.
const DEFAULT_ALIGNMENT_CLASS: u32 = 2;

/// Running member placement for one struct.
///
/// The running offset is 64-bit, so placing members never overflows. Whether
/// the final size fits a `u32` is checked once, by [`StructLayout::finish`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct StructLayout {
    offset: u64,
}

impl StructLayout {
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Place a member of `size` bytes and return its offset.
    pub fn place(&mut self, size: u32) -> u64 {
        let at = self.offset;
        self.offset += u64::from(size);
        at
    }

    /// Aggregate size: the offset just past the last placed member.
    pub const fn size(&self) -> u64 {
        self.offset
    }

    /// Aggregate size as stored in the pool, or `None` if it exceeds `u32::MAX`.
    pub fn finish(&self) -> Option<u32> {
        u32::try_from(self.offset).ok()
    }
}

impl Pool {
    /// Storage size of a type in bytes.
    ///
    /// Functions have no storage, and neither does the absent type.
    pub fn size_of(&self, idx: Idx) -> u32 {
        match self.get(idx) {
            None | Some(TypeKind::Function(_)) => 0,
            Some(TypeKind::Basic(basic)) => basic.size,
            Some(TypeKind::Pointer { .. }) => POINTER_SIZE,
            Some(TypeKind::Struct(st)) => st.size,
        }
    }

    /// Log2 of the byte alignment of a type (0, 1, 2 or 3).
    ///
    /// Integer-like types (integers and pointers) map sizes 1/2/4/8 exactly.
    /// Floats only distinguish 4 and 8. Structs, functions, and the absent
    /// type always get class 2.
    pub fn alignment_class(&self, idx: Idx) -> u32 {
        if matches!(self.get(idx), Some(TypeKind::Struct(_))) {
            return DEFAULT_ALIGNMENT_CLASS;
        }

        let size = self.size_of(idx);
        let integer_like = self
            .flags(idx)
            .intersects(BasicFlags::INTEGER | BasicFlags::POINTER);

        match (integer_like, size) {
            (true, 1) => 0,
            (true, 2) => 1,
            (_, 4) => 2,
            (_, 8) => 3,
            _ => DEFAULT_ALIGNMENT_CLASS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onyx_ir::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_sizes() {
        let pool = Pool::new();
        assert_eq!(pool.size_of(Idx::VOID), 0);
        assert_eq!(pool.size_of(Idx::BOOL), 1);
        assert_eq!(pool.size_of(Idx::U16), 2);
        assert_eq!(pool.size_of(Idx::F32), 4);
        assert_eq!(pool.size_of(Idx::I64), 8);
        assert_eq!(pool.size_of(Idx::RAWPTR), POINTER_SIZE);
    }

    #[test]
    fn pointer_size_ignores_pointee() {
        let mut pool = Pool::new();
        let to_byte = pool.make_pointer(Idx::U8);
        let to_wide = pool.make_pointer(Idx::U64);
        let to_nothing = pool.make_pointer(Idx::NONE);
        assert_eq!(pool.size_of(to_byte), POINTER_SIZE);
        assert_eq!(pool.size_of(to_wide), POINTER_SIZE);
        assert_eq!(pool.size_of(to_nothing), POINTER_SIZE);
    }

    #[test]
    fn function_and_none_have_no_size() {
        let mut pool = Pool::new();
        let func = pool.make_function(vec![Idx::I64, Idx::I64], Idx::I64);
        assert_eq!(pool.size_of(func), 0);
        assert_eq!(pool.size_of(Idx::NONE), 0);
    }

    #[test]
    fn integer_alignment_is_exact() {
        let pool = Pool::new();
        assert_eq!(pool.alignment_class(Idx::I8), 0);
        assert_eq!(pool.alignment_class(Idx::U8), 0);
        assert_eq!(pool.alignment_class(Idx::I16), 1);
        assert_eq!(pool.alignment_class(Idx::U32), 2);
        assert_eq!(pool.alignment_class(Idx::I64), 3);
    }

    #[test]
    fn pointer_alignment() {
        let mut pool = Pool::new();
        let ptr = pool.make_pointer(Idx::F64);
        assert_eq!(pool.alignment_class(ptr), 2);
        assert_eq!(pool.alignment_class(Idx::RAWPTR), 2);
    }

    #[test]
    fn float_alignment() {
        let pool = Pool::new();
        assert_eq!(pool.alignment_class(Idx::F32), 2);
        assert_eq!(pool.alignment_class(Idx::F64), 3);
    }

    #[test]
    fn non_integer_small_sizes_default_to_class_2() {
        let pool = Pool::new();
        // bool is 1 byte but not integer-flagged
        assert_eq!(pool.alignment_class(Idx::BOOL), 2);
        assert_eq!(pool.alignment_class(Idx::VOID), 2);
        assert_eq!(pool.alignment_class(Idx::NONE), 2);
    }

    #[test]
    fn struct_alignment_is_always_class_2() {
        let interner = StringInterner::new();
        let mut pool = Pool::new();
        for size in [1, 2, 4, 8, 13] {
            let st = pool.alloc_struct(interner.intern("S"), 0);
            pool.finish_struct(st, size);
            assert_eq!(pool.alignment_class(st), 2, "struct of size {size}");
        }
    }

    #[test]
    fn function_alignment_defaults() {
        let mut pool = Pool::new();
        let func = pool.make_function(Vec::new(), Idx::NONE);
        assert_eq!(pool.alignment_class(func), 2);
    }

    #[test]
    fn layout_packs_members() {
        let mut layout = StructLayout::new();
        assert_eq!(layout.place(1), 0);
        assert_eq!(layout.place(4), 1);
        assert_eq!(layout.place(8), 5);
        assert_eq!(layout.size(), 13);
    }

    #[test]
    fn oversized_layout_does_not_wrap() {
        let mut layout = StructLayout::new();
        assert_eq!(layout.place(u32::MAX), 0);
        assert_eq!(layout.place(8), u64::from(u32::MAX));
        assert_eq!(layout.size(), u64::from(u32::MAX) + 8);
        assert_eq!(layout.finish(), None);
    }

    #[test]
    fn finish_fits_u32() {
        let mut layout = StructLayout::new();
        layout.place(u32::MAX);
        assert_eq!(layout.finish(), Some(u32::MAX));
        assert_eq!(StructLayout::new().finish(), Some(0));
    }

    #[test]
    fn zero_sized_members_share_offsets() {
        let mut layout = StructLayout::new();
        assert_eq!(layout.place(0), 0);
        assert_eq!(layout.place(0), 0);
        assert_eq!(layout.place(2), 0);
        assert_eq!(layout.size(), 2);
    }
}
