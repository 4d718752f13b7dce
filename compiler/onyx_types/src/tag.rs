//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! The tag determines how to interpret the associated `data` field:
//!
//! | Tag | `data` |
//! |---|---|
//! | `Basic` | `BasicKind` discriminant |
//! | `Pointer` | element `Idx` |
//! | `Function` | index into the pool's function table |
//! | `Struct` | index into the pool's struct table |

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Entry of the basic type table.
    Basic = 0,
    /// Pointer to an element type.
    Pointer = 1,
    /// Function signature.
    Function = 2,
    /// Struct with named members.
    Struct = 3,
}

impl Tag {
    /// Check if this tag's data indexes a side table.
    #[inline]
    pub const fn uses_side_table(self) -> bool {
        matches!(self, Self::Function | Self::Struct)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pointer => "pointer",
            Self::Function => "function",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_table_tags() {
        assert!(!Tag::Basic.uses_side_table());
        assert!(!Tag::Pointer.uses_side_table());
        assert!(Tag::Function.uses_side_table());
        assert!(Tag::Struct.uses_side_table());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Tag::Pointer.to_string(), "pointer");
        assert_eq!(format!("{:?}", Tag::Struct), "Tag::struct");
    }
}
