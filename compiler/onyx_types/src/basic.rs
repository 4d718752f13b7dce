//! The basic type table.

use onyx_ir::BasicKind;

use crate::BasicFlags;

/// A primitive type: one row of [`BASIC_TYPES`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BasicType {
    pub kind: BasicKind,
    pub flags: BasicFlags,
    /// Size in bytes.
    pub size: u32,
    pub name: &'static str,
}

const fn row(kind: BasicKind, flags: BasicFlags, size: u32) -> BasicType {
    BasicType {
        kind,
        flags,
        size,
        name: kind.name(),
    }
}

const INT: BasicFlags = BasicFlags::INTEGER;
const UINT: BasicFlags = BasicFlags::INTEGER.union(BasicFlags::UNSIGNED);

/// Every basic type, indexed by `BasicKind` discriminant.
///
/// Rows must stay in `BasicKind` order; `lookup_basic` and the pool's fixed
/// indices both index straight into this table.
pub static BASIC_TYPES: [BasicType; BasicKind::COUNT] = [
    row(BasicKind::Void, BasicFlags::empty(), 0),
    row(BasicKind::Bool, BasicFlags::BOOLEAN, 1),
    row(BasicKind::I8, INT, 1),
    row(BasicKind::U8, UINT, 1),
    row(BasicKind::I16, INT, 2),
    row(BasicKind::U16, UINT, 2),
    row(BasicKind::I32, INT, 4),
    row(BasicKind::U32, UINT, 4),
    row(BasicKind::I64, INT, 8),
    row(BasicKind::U64, UINT, 8),
    row(BasicKind::F32, BasicFlags::FLOAT, 4),
    row(BasicKind::F64, BasicFlags::FLOAT, 8),
    row(BasicKind::Rawptr, BasicFlags::POINTER, crate::POINTER_SIZE),
];

/// The table row for `kind`.
#[inline]
pub fn lookup_basic(kind: BasicKind) -> &'static BasicType {
    &BASIC_TYPES[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_are_in_kind_order() {
        for (i, row) in BASIC_TYPES.iter().enumerate() {
            assert_eq!(row.kind.index(), i, "row {i} is {:?}", row.kind);
        }
    }

    #[test]
    fn lookup_returns_stable_reference() {
        let a = lookup_basic(BasicKind::I64);
        let b = lookup_basic(BasicKind::I64);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.size, 8);
        assert_eq!(a.name, "i64");
    }

    #[test]
    fn sizes() {
        let sizes: Vec<u32> = BASIC_TYPES.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![0, 1, 1, 1, 2, 2, 4, 4, 8, 8, 4, 8, 4]);
    }

    #[test]
    fn signedness_flags() {
        assert!(!lookup_basic(BasicKind::I16).flags.is_unsigned());
        assert!(lookup_basic(BasicKind::U16).flags.is_unsigned());
        assert!(lookup_basic(BasicKind::U16).flags.is_integer());
        assert!(!lookup_basic(BasicKind::F32).flags.is_integer());
        assert!(lookup_basic(BasicKind::Rawptr).flags.is_pointer());
        assert!(lookup_basic(BasicKind::Void).flags.is_empty());
    }
}
