//! Checks that turn compatibility into reportable errors.

use crate::{Idx, Pool, TypeError};

impl Pool {
    /// A value of type `value` may be stored into a place of type `target`.
    pub fn check_assignment(&self, target: Idx, value: Idx) -> Result<(), TypeError> {
        if self.compatible(target, value) {
            Ok(())
        } else {
            Err(TypeError::AssignmentMismatch {
                expected: target,
                found: value,
            })
        }
    }

    /// The two operands of a binary operator agree.
    pub fn check_binop(&self, left: Idx, right: Idx) -> Result<(), TypeError> {
        if self.compatible(left, right) {
            Ok(())
        } else {
            Err(TypeError::BinopMismatch { left, right })
        }
    }
}
