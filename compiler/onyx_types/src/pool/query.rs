//! Classification queries and member lookup.

use onyx_ir::Name;

use super::{Pool, StructMember, TypeKind};
use crate::{BasicFlags, Idx};

impl Pool {
    /// Capability flags of a type.
    ///
    /// Basic types report their table flags and constructed pointers report
    /// `POINTER`. Everything else has no flags.
    pub fn flags(&self, idx: Idx) -> BasicFlags {
        match self.get(idx) {
            Some(TypeKind::Basic(basic)) => basic.flags,
            Some(TypeKind::Pointer { .. }) => BasicFlags::POINTER,
            Some(TypeKind::Function(_) | TypeKind::Struct(_)) | None => BasicFlags::empty(),
        }
    }

    /// `^T` or `rawptr`.
    pub fn is_pointer(&self, idx: Idx) -> bool {
        self.flags(idx).is_pointer()
    }

    /// A struct, or a pointer directly to a struct.
    pub fn is_struct(&self, idx: Idx) -> bool {
        match self.get(idx) {
            Some(TypeKind::Struct(_)) => true,
            Some(TypeKind::Pointer { elem }) => {
                matches!(self.get(elem), Some(TypeKind::Struct(_)))
            }
            _ => false,
        }
    }

    /// Only the basic `bool` type.
    #[inline]
    pub fn is_bool(&self, idx: Idx) -> bool {
        idx == Idx::BOOL
    }

    /// Find member `name` of a struct or pointer-to-struct.
    ///
    /// Returns [`StructMember::ABSENT`] when `idx` is not struct-like or has no
    /// such member; check with [`StructMember::is_absent`].
    pub fn lookup_member(&self, idx: Idx, name: Name) -> StructMember {
        let target = self.pointer_elem(idx).unwrap_or(idx);
        self.struct_type(target)
            .and_then(|st| st.member(name))
            .unwrap_or(StructMember::ABSENT)
    }
}
