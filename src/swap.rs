//! In-place exchange of two mutable slots.

/// Swap the values behind `a` and `b`.
///
/// Works for any `T`: integers, strings, boxed values alike. Calling it twice
/// with the same slots restores the original pair.
pub fn swap_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}
