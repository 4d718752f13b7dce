//! String interner for identifier storage.
//!
//! Interns through `&self` so the arena, the builder, and diagnostics can all
//! hold a shared reference to one interner for the whole compilation unit.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded `u32::MAX` strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct InternState {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// String interner with O(1) lookup and equality.
///
/// Interned strings are leaked and never deallocated, which is what lets
/// [`lookup`](Self::lookup) hand out plain `&str` past the lock guard.
/// The interner lives as long as the compilation, so nothing is lost.
pub struct StringInterner {
    state: RwLock<InternState>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);

        let interner = Self {
            state: RwLock::new(InternState {
                map,
                strings: vec![empty],
            }),
        };
        interner.pre_intern_basic_names();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.state.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.state.write();

        // Another intern may have won the race between the two locks.
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.state.read().strings[name.index()]
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.state.read().strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Basic type names show up in every unit, so give them stable low indices.
    fn pre_intern_basic_names(&self) {
        for kind in crate::BasicKind::ALL {
            self.intern(kind.name());
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup-only view of an interner.
///
/// Display helpers take `&impl StringLookup` so they can be driven by a
/// test table as easily as by the real interner.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("node");
        let b = interner.intern("node");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "node");
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let interner = StringInterner::new();
        let a = interner.intern("left");
        let b = interner.intern("right");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_string_is_preinterned() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn basic_names_are_preinterned() {
        let interner = StringInterner::new();
        let before = interner.len();
        interner.intern("i32");
        interner.intern("rawptr");
        assert_eq!(interner.len(), before);
        assert!(!interner.is_empty());
    }

    #[test]
    fn len_counts_new_strings() {
        let interner = StringInterner::new();
        let before = interner.len();
        interner.intern("Vec2");
        interner.intern("Vec2");
        assert_eq!(interner.len(), before + 1);
    }
}
