/// Scalar reference transpose: dst = src^T
///
/// Reads `src` as `height` rows of `width` elements and writes `dst` as
/// `width` rows of `height` elements. Every output cell is copied
/// directly, so this defines what the vectorized strategies must produce.
///
/// # Arguments
///
/// * `src` - Source matrix (height × width), row-major
/// * `dst` - Destination matrix (width × height), row-major
/// * `width` - Number of columns in src
/// * `height` - Number of rows in src
///
/// # Example
///
/// ```
/// use transpose::matrix::naive::transpose_naive;
///
/// let src = vec![1, 2, 3,   // 2 rows × 3 columns
///                4, 5, 6];
/// let mut dst = vec![0; 6]; // will be 3 rows × 2 columns
///
/// transpose_naive(&src, &mut dst, 3, 2);
///
/// assert_eq!(dst, vec![1, 4,
///                      2, 5,
///                      3, 6]);
/// ```
///
/// # Panics
///
/// Panics if either buffer holds fewer than `width * height` elements.
pub fn transpose_naive(src: &[i32], dst: &mut [i32], width: usize, height: usize) {
    super::check_buffers(src, dst, width, height);
    log::trace!("naive: {}x{}", width, height);

    for x in 0..width {
        for y in 0..height {
            dst[x * height + y] = src[y * width + x];
        }
    }
}
