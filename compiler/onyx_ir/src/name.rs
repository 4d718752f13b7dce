//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A plain 32-bit index into the [`StringInterner`](crate::StringInterner).
/// Two names are equal exactly when their text is equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

crate::static_assert_size!(Name, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let name = Name::from_raw(1234);
        assert_eq!(name.raw(), 1234);
        assert_eq!(name.index(), 1234);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Name::default(), Name::EMPTY);
    }
}
