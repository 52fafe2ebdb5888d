//! Constant-time operations.
//!
//! Digest comparison time is independent of where the inputs differ.
//! Comparisons go through the `subtle` crate's `ConstantTimeEq`.

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if and only if `a` and `b` have the same length and contents.
/// The comparison time depends only on the length, not the contents.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
