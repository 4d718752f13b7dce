//! Compact type item storage.

use crate::{Idx, Tag};

/// A single type item in the pool.
///
/// - `tag`: Identifies the type kind (see [`Tag`])
/// - `data`: Meaning depends on tag (basic kind, element index, or side-table index)
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct Item {
    pub tag: Tag,
    pub data: u32,
}

impl Item {
    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    /// Create a pointer item; the element is stored directly in `data`.
    #[inline]
    pub const fn pointer(elem: Idx) -> Self {
        Self {
            tag: Tag::Pointer,
            data: elem.raw(),
        }
    }

    /// Element index of a pointer item.
    #[inline]
    pub const fn child(self) -> Idx {
        Idx::from_raw(self.data)
    }

    /// Side-table index for function and struct items.
    #[inline]
    pub const fn table_idx(self) -> usize {
        self.data as usize
    }
}

const _: () = assert!(std::mem::size_of::<Item>() == 8);
