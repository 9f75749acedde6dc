/// Scalar copy for the part of a matrix the block kernels don't cover.
///
/// Transposes the cells in columns `x_range` and rows `y_range` of the
/// `width` × `height` source. The block paths call this for the
/// right-hand strip (leftover columns, all rows) and the bottom strip
/// (tiled columns, leftover rows) when a dimension isn't a multiple of
/// the block size.
#[inline]
pub(crate) fn transpose_region(
    src: &[i32],
    dst: &mut [i32],
    width: usize,
    height: usize,
    x_range: std::ops::Range<usize>,
    y_range: std::ops::Range<usize>,
) {
    for x in x_range {
        for y in y_range.clone() {
            dst[x * height + y] = src[y * width + x];
        }
    }
}
