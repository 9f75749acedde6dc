//! Output verification.
//!
//! A broken transpose is fatal for a benchmark run, so these return an
//! error naming the first wrong cell instead of printing and carrying on.

use crate::error::VerifyError;
use crate::matrix::naive::transpose_naive;
use crate::strategy::Strategy;

/// 4×4 input holding `0..16` row-major.
pub const FIXTURE_INPUT: [i32; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Transpose of [`FIXTURE_INPUT`].
pub const FIXTURE_EXPECTED: [i32; 16] = [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15];

/// Transpose the 4×4 fixture with `strategy` and check every cell.
///
/// Returns the transposed fixture on success so callers can show it.
pub fn verify_fixture(strategy: Strategy) -> Result<[i32; 16], VerifyError> {
    let mut out = [0i32; 16];
    strategy.transpose(&FIXTURE_INPUT, &mut out, 4, 4);
    compare(strategy, &FIXTURE_EXPECTED, &out)?;
    Ok(out)
}

/// Check `out` against the naive transpose of `src`.
///
/// `scratch` receives the reference output and must hold at least
/// `width * height` elements.
pub fn verify_against_reference(
    strategy: Strategy,
    src: &[i32],
    out: &[i32],
    scratch: &mut [i32],
    width: usize,
    height: usize,
) -> Result<(), VerifyError> {
    let len = width * height;
    transpose_naive(src, scratch, width, height);
    compare(strategy, &scratch[..len], &out[..len])
}

fn compare(strategy: Strategy, expected: &[i32], actual: &[i32]) -> Result<(), VerifyError> {
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(index) => Err(VerifyError::Mismatch {
            strategy: strategy.name(),
            index,
            expected: expected[index],
            actual: actual[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_passes_for_every_strategy() {
        for strategy in Strategy::ALL {
            assert_eq!(verify_fixture(strategy).unwrap(), FIXTURE_EXPECTED);
        }
    }

    #[test]
    fn mismatch_reports_first_bad_cell() {
        let mut bad = FIXTURE_EXPECTED;
        bad[5] = 99;
        assert_eq!(
            compare(Strategy::Vectorized, &FIXTURE_EXPECTED, &bad),
            Err(VerifyError::Mismatch {
                strategy: "vectorized",
                index: 5,
                expected: 5,
                actual: 99,
            })
        );
    }

    #[test]
    fn reference_check_catches_corruption() {
        let (w, h) = (5, 3);
        let src: Vec<i32> = (0..15).collect();
        let mut out = vec![0; 15];
        let mut scratch = vec![0; 15];
        Strategy::VectorizedPrefetch.transpose(&src, &mut out, w, h);
        assert!(verify_against_reference(Strategy::VectorizedPrefetch, &src, &out, &mut scratch, w, h).is_ok());

        out[14] += 1;
        assert!(verify_against_reference(Strategy::VectorizedPrefetch, &src, &out, &mut scratch, w, h).is_err());
    }
}
