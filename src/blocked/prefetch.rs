//! Tiled transpose with software prefetch.

use super::{tiled_extent, transpose_edges};
use crate::kernels::kernel_4x4::{prefetch_t1, transpose_4x4};
use crate::kernels::{BLOCK, PREFETCH_DISTANCE};
use crate::matrix::check_buffers;

/// Cache-blocked transpose that prefetches the source ahead of the kernel.
///
/// Same tiling and output as
/// [`transpose_vectorized`](super::vectorized::transpose_vectorized).
/// Before each tile it asks for the four source rows
/// [`PREFETCH_DISTANCE`] rows further down the same tile column, which is
/// where the inner loop goes next. Tiles near the bottom edge issue no
/// hint.
///
/// # Panics
///
/// Panics if either buffer holds fewer than `width * height` elements.
pub fn transpose_vectorized_prefetch(src: &[i32], dst: &mut [i32], width: usize, height: usize) {
    check_buffers(src, dst, width, height);
    log::trace!("vectorized-prefetch: {}x{}", width, height);

    let (w_main, h_main) = tiled_extent(width, height);
    let src_ptr = src.as_ptr();
    let dst_ptr = dst.as_mut_ptr();

    for x in (0..w_main).step_by(BLOCK) {
        for y in (0..h_main).step_by(BLOCK) {
            let ahead = y + PREFETCH_DISTANCE;
            if ahead + BLOCK <= height {
                for row in ahead..ahead + BLOCK {
                    prefetch_t1(src_ptr.wrapping_add(row * width + x));
                }
            }

            // SAFETY: x + BLOCK <= width and y + BLOCK <= height, and both
            // buffers hold width * height elements (checked above).
            unsafe {
                transpose_4x4(
                    src_ptr.add(y * width + x),
                    width,
                    dst_ptr.add(x * height + y),
                    height,
                );
            }
        }
    }

    transpose_edges(src, dst, width, height);
}
