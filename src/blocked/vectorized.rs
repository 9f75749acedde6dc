//! Tiled transpose using the 4×4 vector kernel.

use super::{tiled_extent, transpose_edges};
use crate::kernels::BLOCK;
use crate::kernels::kernel_4x4::transpose_4x4;
use crate::matrix::check_buffers;

/// Cache-blocked transpose: dst = src^T
///
/// Walks the source one column of tiles at a time, so the destination is
/// written row by row while the source is read in short, cache-friendly
/// bursts. Output is identical to
/// [`transpose_naive`](crate::matrix::naive::transpose_naive) for every
/// shape, including ones that aren't a multiple of the block size.
///
/// # Panics
///
/// Panics if either buffer holds fewer than `width * height` elements.
pub fn transpose_vectorized(src: &[i32], dst: &mut [i32], width: usize, height: usize) {
    check_buffers(src, dst, width, height);
    log::trace!("vectorized: {}x{}", width, height);

    let (w_main, h_main) = tiled_extent(width, height);
    let src_ptr = src.as_ptr();
    let dst_ptr = dst.as_mut_ptr();

    for x in (0..w_main).step_by(BLOCK) {
        for y in (0..h_main).step_by(BLOCK) {
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
