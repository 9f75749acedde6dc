//! Cache-blocked transpose implementations.
//!
//! These walk the matrix in [`BLOCK`]×[`BLOCK`] tiles, transpose each
//! tile in registers with the 4×4 microkernel, and write it straight to
//! its mirrored position in the destination. Whatever doesn't fill a
//! whole tile goes through the scalar remainder copy.
//!
//! Available implementations:
//! - `vectorized`: tiled transpose
//! - `prefetch`: same tiling, plus a software prefetch of the source
//!   rows a few tiles ahead

pub mod prefetch;
pub mod vectorized;

use crate::kernels::BLOCK;
use crate::matrix::remainder::transpose_region;

/// Largest extents covered by whole tiles.
#[inline]
fn tiled_extent(width: usize, height: usize) -> (usize, usize) {
    ((width / BLOCK) * BLOCK, (height / BLOCK) * BLOCK)
}

// Handle the cells the tiles don't reach: the strip of columns to the
// right of the last full tile (all rows), then the strip of rows below
// the tiles (tiled columns only, so no cell is copied twice).
fn transpose_edges(src: &[i32], dst: &mut [i32], width: usize, height: usize) {
    let (w_main, h_main) = tiled_extent(width, height);

    if w_main < width {
        transpose_region(src, dst, width, height, w_main..width, 0..height);
    }
    if h_main < height {
        transpose_region(src, dst, width, height, 0..w_main, h_main..height);
    }
}
