//! Scalar transpose and shared helpers.
//!
//! The naive transpose is the correctness baseline the SIMD strategies
//! are checked against. The remainder copy is what the blocked paths
//! fall back to at the matrix edges.

pub mod naive;
pub(crate) mod remainder;

/// Check that both buffers can hold a `width` × `height` matrix.
///
/// Runs once per transpose call, never inside the loops.
#[inline]
pub(crate) fn check_buffers(src: &[i32], dst: &[i32], width: usize, height: usize) {
    let len = width
        .checked_mul(height)
        .expect("matrix dimensions overflow usize");
    assert!(
        src.len() >= len,
        "src: expected at least {}x{}={} elements, got {}",
        width,
        height,
        len,
        src.len()
    );
    assert!(
        dst.len() >= len,
        "dst: expected at least {}x{}={} elements, got {}",
        height,
        width,
        len,
        dst.len()
    );
}
