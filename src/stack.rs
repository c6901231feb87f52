//! Stack growth for the recursive grammar and tree rendering.
//!
//! Nesting depth is bounded only by the input, so every recursive step runs
//! through [`ensure_sufficient_stack`], which moves onto a fresh segment
//! when the remaining stack drops below the red zone.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
