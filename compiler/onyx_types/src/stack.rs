//! Stack growth for recursive type walks.
//!
//! Building a deeply nested type, or comparing two of them, recurses once
//! per nesting level. On native targets the stack is grown on demand so
//! that depth is bounded by memory, not by the thread's stack size.

/// Grow the stack when less than this much remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
    }

    #[test]
    fn survives_deep_recursion() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }
        assert_eq!(depth(200_000), 200_000);
    }
}
