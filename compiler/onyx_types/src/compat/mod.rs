//! Type compatibility.
//!
//! Two checks share one shape and differ in how far they look:
//!
//! - [`Pool::compatible`] follows pointers into their element types, and
//!   compares struct members with `surface_compatible`.
//! - [`Pool::surface_compatible`] accepts any two pointers without looking
//!   at their elements, and compares struct members with `compatible`.
//!
//! Struct comparison always hands its members to the *other* check. That
//! alone does not terminate: with `A { s: S }` and `S { p: ^A }`, comparing
//! `A` against a same-shaped copy comes back to the same pair of structs
//! after one full and one surface step. Every cycle in the type graph runs
//! through a struct, so each walk keeps the struct pairs it is currently
//! comparing. Meeting a pair that is already in progress answers `true`:
//! any mismatch further down the cycle is still found on the way back out.
//!
//! Function types never reach these checks. A function operand is an
//! internal compiler error, not an incompatibility.

use rustc_hash::FxHashSet;

use crate::{ensure_sufficient_stack, BasicType, Idx, Pool, StructType, TypeKind};

/// Which of the two checks a step belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Depth {
    Full,
    Surface,
}

impl Depth {
    const fn other(self) -> Self {
        match self {
            Depth::Full => Depth::Surface,
            Depth::Surface => Depth::Full,
        }
    }
}

/// Struct pairs being compared on the current path.
type InProgress = FxHashSet<(Depth, Idx, Idx)>;

impl Pool {
    /// Full compatibility check, for assignment and comparison.
    pub fn compatible(&self, a: Idx, b: Idx) -> bool {
        self.compare(Depth::Full, a, b, &mut InProgress::default())
    }

    /// Shallow compatibility check: any two pointers match.
    pub fn surface_compatible(&self, a: Idx, b: Idx) -> bool {
        self.compare(Depth::Surface, a, b, &mut InProgress::default())
    }

    fn compare(&self, depth: Depth, a: Idx, b: Idx, in_progress: &mut InProgress) -> bool {
        if a == b {
            return true;
        }
        let (Some(ka), Some(kb)) = (self.get(a), self.get(b)) else {
            return false;
        };

        match (ka, kb) {
            (TypeKind::Function(_), _) | (_, TypeKind::Function(_)) => {
                function_in_compatibility(a, b)
            }
            (TypeKind::Basic(x), TypeKind::Basic(y)) => basics_compatible(x, y),
            (TypeKind::Pointer { elem: x }, TypeKind::Pointer { elem: y }) => match depth {
                Depth::Full => ensure_sufficient_stack(|| self.compare(depth, x, y, in_progress)),
                Depth::Surface => true,
            },
            (TypeKind::Struct(x), TypeKind::Struct(y)) => {
                if !in_progress.insert((depth, a, b)) {
                    return true;
                }
                let result = self.structs_compatible(depth.other(), x, y, in_progress);
                in_progress.remove(&(depth, a, b));
                result
            }
            _ => false,
        }
    }

    /// Same member count, then either the same declared name or the same
    /// members at the same offsets, each pair of member types compared at
    /// `member_depth`.
    fn structs_compatible(
        &self,
        member_depth: Depth,
        x: &StructType,
        y: &StructType,
        in_progress: &mut InProgress,
    ) -> bool {
        if x.member_count() != y.member_count() {
            return false;
        }
        if x.name == y.name {
            return true;
        }

        x.members().all(|(name, mx)| match y.member(name) {
            Some(my) => {
                mx.offset == my.offset
                    && ensure_sufficient_stack(|| {
                        self.compare(member_depth, mx.ty, my.ty, in_progress)
                    })
            }
            None => false,
        })
    }
}

/// Distinct basic types match only when both are integers of the same width.
/// Signedness is ignored.
fn basics_compatible(x: &BasicType, y: &BasicType) -> bool {
    x.flags.is_integer() && y.flags.is_integer() && x.size == y.size
}

/// A function type on either side of a non-identical comparison.
///
/// Both operand positions are rejected alike, whether the function is on the
/// left or on the right; neither is quietly answered `false`.
#[cold]
fn function_in_compatibility(a: Idx, b: Idx) -> ! {
    tracing::error!(?a, ?b, "function type reached the compatibility check");
    panic!("internal compiler error: function type in compatibility check ({a:?}, {b:?})")
}
