//! Type names for diagnostics.

use onyx_ir::StringLookup;

use super::{Pool, TypeKind};
use crate::Idx;

/// Shown for function types and the absent type.
const UNKNOWN: &str = "unknown";

impl Pool {
    /// Human-readable name of a type: `i32`, `^^Node`, `unknown`.
    pub fn display_name(&self, idx: Idx, names: &impl StringLookup) -> String {
        let mut buf = String::new();
        self.display_name_into(idx, names, &mut buf);
        buf
    }

    /// Append the name of a type to an existing buffer.
    pub fn display_name_into(&self, idx: Idx, names: &impl StringLookup, buf: &mut String) {
        // Pointer chains are walked in a loop; each level is one `^`.
        let mut cur = idx;
        loop {
            match self.get(cur) {
                Some(TypeKind::Pointer { elem }) => {
                    buf.push('^');
                    cur = elem;
                }
                Some(TypeKind::Basic(basic)) => break buf.push_str(basic.name),
                Some(TypeKind::Struct(st)) => break buf.push_str(names.lookup(st.name)),
                Some(TypeKind::Function(_)) | None => break buf.push_str(UNKNOWN),
            }
        }
    }
}
