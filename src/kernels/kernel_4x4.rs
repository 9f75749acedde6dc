//! In-register 4×4 transpose kernels.
//!
//! Each kernel loads four rows of four `i32` (one vector register each),
//! shuffles them so rows become columns, and stores the four registers
//! as rows of the destination block. One kernel per target; the
//! portable one keeps non-SIMD targets on the same blocked code path.

/// Transposes one 4×4 block using SSE2.
///
/// Two interleave stages: 32-bit unpacks pair up rows (0,1) and (2,3),
/// then 64-bit unpacks merge the pairs into full columns.
///
/// # Safety
///
/// Caller must ensure:
/// - `src.add(row * src_stride)` is readable for 4 `i32` for row in 0..4
/// - `dst.add(row * dst_stride)` is writable for 4 `i32` for row in 0..4
/// - the source and destination blocks don't overlap
#[cfg(target_arch = "x86_64")]
#[inline(always)]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn transpose_4x4(src: *const i32, src_stride: usize, dst: *mut i32, dst_stride: usize) {
    use std::arch::x86_64::*;

    // SSE2 is part of the x86_64 baseline, no feature detection needed.
    let r0 = _mm_loadu_si128(src.add(0 * src_stride) as *const __m128i);
    let r1 = _mm_loadu_si128(src.add(1 * src_stride) as *const __m128i);
    let r2 = _mm_loadu_si128(src.add(2 * src_stride) as *const __m128i);
    let r3 = _mm_loadu_si128(src.add(3 * src_stride) as *const __m128i);

    // a0 b0 a1 b1 | c0 d0 c1 d1 | a2 b2 a3 b3 | c2 d2 c3 d3
    let t0 = _mm_unpacklo_epi32(r0, r1);
    let t1 = _mm_unpacklo_epi32(r2, r3);
    let t2 = _mm_unpackhi_epi32(r0, r1);
    let t3 = _mm_unpackhi_epi32(r2, r3);

    let c0 = _mm_unpacklo_epi64(t0, t1);
    let c1 = _mm_unpackhi_epi64(t0, t1);
    let c2 = _mm_unpacklo_epi64(t2, t3);
    let c3 = _mm_unpackhi_epi64(t2, t3);

    _mm_storeu_si128(dst.add(0 * dst_stride) as *mut __m128i, c0);
    _mm_storeu_si128(dst.add(1 * dst_stride) as *mut __m128i, c1);
    _mm_storeu_si128(dst.add(2 * dst_stride) as *mut __m128i, c2);
    _mm_storeu_si128(dst.add(3 * dst_stride) as *mut __m128i, c3);
}

/// Transposes one 4×4 block using NEON.
///
/// `vtrnq` swaps odd/even lanes between row pairs, then the low and high
/// halves are recombined into full columns.
///
/// # Safety
///
/// Same contract as the x86_64 kernel.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
#[allow(clippy::identity_op)]
#[allow(clippy::erasing_op)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn transpose_4x4(src: *const i32, src_stride: usize, dst: *mut i32, dst_stride: usize) {
    use std::arch::aarch64::*;

    let r0 = vld1q_s32(src.add(0 * src_stride));
    let r1 = vld1q_s32(src.add(1 * src_stride));
    let r2 = vld1q_s32(src.add(2 * src_stride));
    let r3 = vld1q_s32(src.add(3 * src_stride));

    // (a0 b0 a2 b2, a1 b1 a3 b3), (c0 d0 c2 d2, c1 d1 c3 d3)
    let t01 = vtrnq_s32(r0, r1);
    let t23 = vtrnq_s32(r2, r3);

    let c0 = vcombine_s32(vget_low_s32(t01.0), vget_low_s32(t23.0));
    let c1 = vcombine_s32(vget_low_s32(t01.1), vget_low_s32(t23.1));
    let c2 = vcombine_s32(vget_high_s32(t01.0), vget_high_s32(t23.0));
    let c3 = vcombine_s32(vget_high_s32(t01.1), vget_high_s32(t23.1));

    vst1q_s32(dst.add(0 * dst_stride), c0);
    vst1q_s32(dst.add(1 * dst_stride), c1);
    vst1q_s32(dst.add(2 * dst_stride), c2);
    vst1q_s32(dst.add(3 * dst_stride), c3);
}

/// Portable 4×4 transpose through a stack array.
///
/// # Safety
///
/// Same contract as the SIMD kernels.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn transpose_4x4(src: *const i32, src_stride: usize, dst: *mut i32, dst_stride: usize) {
    let mut rows = [[0i32; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        std::ptr::copy_nonoverlapping(src.add(r * src_stride), row.as_mut_ptr(), 4);
    }
    for c in 0..4 {
        let out = dst.add(c * dst_stride);
        for (r, row) in rows.iter().enumerate() {
            *out.add(r) = row[c];
        }
    }
}

/// Hints the cache to start loading the line holding `p`.
///
/// No observable effect on memory; a no-op where the target has no
/// stable prefetch intrinsic.
#[inline(always)]
pub fn prefetch_t1(p: *const i32) {
    #[cfg(target_arch = "x86_64")]
    {
        use std::arch::x86_64::{_MM_HINT_T1, _mm_prefetch};
        // SAFETY: prefetch never faults, whatever the address.
        unsafe { _mm_prefetch::<_MM_HINT_T1>(p as *const i8) };
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        let _ = p;
    }
}
