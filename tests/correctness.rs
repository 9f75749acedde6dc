use proptest::prelude::*;
use proptest::strategy::Strategy as PropStrategy;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use transpose::verify::{FIXTURE_EXPECTED, FIXTURE_INPUT};
use transpose::{
    AllocationError, Pool, Strategy, transpose, transpose_naive, transpose_vectorized,
    transpose_vectorized_prefetch,
};

fn random_matrix(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() as i32).collect()
}

fn assert_transposed(src: &[i32], dst: &[i32], w: usize, h: usize, name: &str) {
    for y in 0..h {
        for x in 0..w {
            assert_eq!(
                dst[x * h + y],
                src[y * w + x],
                "{}: mismatch at x={}, y={} ({}x{})",
                name,
                x,
                y,
                w,
                h
            );
        }
    }
}

// ============================================================
// 4×4 fixture
// ============================================================

#[test]
fn test_fixture_every_strategy() {
    for strategy in Strategy::ALL {
        let mut out = [0; 16];
        strategy.transpose(&FIXTURE_INPUT, &mut out, 4, 4);
        assert_eq!(out, FIXTURE_EXPECTED, "{}", strategy);
    }
}

#[test]
fn test_fixture_literal() {
    let src: Vec<i32> = (0..16).collect();
    let mut out = vec![0; 16];
    transpose(&src, &mut out, 4, 4);
    assert_eq!(out, [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]);
}

// ============================================================
// Cross-strategy equivalence
// ============================================================

#[test]
fn test_strategies_agree_on_all_shapes() {
    let dims = [1, 2, 3, 4, 5, 8, 16, 17, 100, 4096];

    for &w in &dims {
        for &h in &dims {
            // 4096×4096 is covered by the dedicated test below
            if w * h > 4096 * 100 {
                continue;
            }
            let src = random_matrix(w * h, (w * 31 + h) as u64);
            let mut expected = vec![0; w * h];
            transpose_naive(&src, &mut expected, w, h);

            for strategy in [Strategy::Vectorized, Strategy::VectorizedPrefetch] {
                let mut out = vec![0; w * h];
                strategy.transpose(&src, &mut out, w, h);
                assert_eq!(expected, out, "{} at {}x{}", strategy, w, h);
            }
        }
    }
}

#[test]
fn test_strategies_agree_large() {
    let n = 4096;
    let src = random_matrix(n * n, 4096);
    let pool = Pool::create(3 * n * n).unwrap();
    let expected = pool.allocate(n * n).unwrap();
    let vectorized = pool.allocate(n * n).unwrap();
    let prefetch = pool.allocate(n * n).unwrap();

    transpose_naive(&src, expected, n, n);
    transpose_vectorized(&src, vectorized, n, n);
    transpose_vectorized_prefetch(&src, prefetch, n, n);

    assert!(expected == vectorized, "vectorized differs at 4096x4096");
    assert!(expected == prefetch, "prefetch differs at 4096x4096");
}

// ============================================================
// Block boundary and remainder tests
// ============================================================

#[test]
fn test_block_boundaries() {
    let test_sizes = [3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33];

    for w in test_sizes {
        for h in test_sizes {
            let src: Vec<i32> = (0..(w * h) as i32).collect();
            for strategy in Strategy::ALL {
                let mut out = vec![-1; w * h];
                strategy.transpose(&src, &mut out, w, h);
                assert_transposed(&src, &out, w, h, strategy.name());
            }
        }
    }
}

#[test]
fn test_smaller_than_one_block() {
    for (w, h) in [(1, 1), (2, 3), (3, 2), (3, 3), (1, 3), (3, 1)] {
        let src: Vec<i32> = (0..(w * h) as i32).collect();
        for strategy in Strategy::ALL {
            let mut out = vec![0; w * h];
            strategy.transpose(&src, &mut out, w, h);
            assert_transposed(&src, &out, w, h, strategy.name());
        }
    }
}

#[test]
fn test_single_row_and_column() {
    let row: Vec<i32> = (0..37).collect();
    for strategy in Strategy::ALL {
        // 1 row of 37 becomes 37 rows of 1: same memory layout
        let mut out = vec![0; 37];
        strategy.transpose(&row, &mut out, 37, 1);
        assert_eq!(out, row, "{} single row", strategy);

        let mut back = vec![0; 37];
        strategy.transpose(&row, &mut back, 1, 37);
        assert_eq!(back, row, "{} single column", strategy);
    }
}

#[test]
fn test_rectangular_shape_swap() {
    let test_cases = [(8, 4), (4, 8), (100, 17), (17, 100), (5, 64), (64, 5)];

    for (w, h) in test_cases {
        let src = random_matrix(w * h, 7);
        for strategy in Strategy::ALL {
            let mut out = vec![0; w * h];
            strategy.transpose(&src, &mut out, w, h);
            assert_transposed(&src, &out, w, h, strategy.name());
        }
    }
}

#[test]
fn test_oversized_destination_untouched_past_matrix() {
    let (w, h) = (6, 5);
    let src: Vec<i32> = (0..30).collect();
    for strategy in Strategy::ALL {
        let mut out = vec![-7; 40];
        strategy.transpose(&src, &mut out, w, h);
        assert_transposed(&src, &out, w, h, strategy.name());
        assert!(out[30..].iter().all(|&v| v == -7), "{} wrote past w*h", strategy);
    }
}

#[test]
fn test_zero_dimension_is_noop() {
    for strategy in Strategy::ALL {
        let mut out: Vec<i32> = vec![];
        strategy.transpose(&[], &mut out, 0, 5);
        strategy.transpose(&[], &mut out, 5, 0);
    }
}

#[test]
#[should_panic(expected = "dst")]
fn test_short_destination_panics() {
    let src = vec![0; 16];
    let mut dst = vec![0; 15];
    transpose_vectorized(&src, &mut dst, 4, 4);
}

// ============================================================
// Involution
// ============================================================

#[test]
fn test_double_transpose_square() {
    for n in [1, 4, 5, 16, 17, 64, 100] {
        let src = random_matrix(n * n, n as u64);
        for strategy in Strategy::ALL {
            let mut once = vec![0; n * n];
            let mut twice = vec![0; n * n];
            strategy.transpose(&src, &mut once, n, n);
            strategy.transpose(&once, &mut twice, n, n);
            assert_eq!(src, twice, "{} involution at {}", strategy, n);
        }
    }
}

// ============================================================
// Pool
// ============================================================

#[test]
fn test_pool_exhaustion_keeps_cursor() {
    let pool = Pool::create(100).unwrap();
    pool.allocate(60).unwrap();

    assert_eq!(
        pool.allocate(41).unwrap_err(),
        AllocationError::Exhausted {
            requested: 41,
            remaining: 40
        }
    );

    // Cursor didn't move: exactly the remainder still fits
    let rest = pool.allocate(40).unwrap();
    assert_eq!(rest.len(), 40);
    assert!(pool.allocate(1).is_err());
}

#[test]
fn test_pool_sequential_allocations() {
    let (a_len, b_len) = (48, 80);
    let pool = Pool::create(a_len + b_len + 16).unwrap();

    let a = pool.allocate(a_len).unwrap();
    let b = pool.allocate(b_len).unwrap();

    let a_start = a.as_ptr() as usize;
    let b_start = b.as_ptr() as usize;
    assert_eq!(b_start - a_start, a_len * std::mem::size_of::<i32>());

    a.fill(1);
    b.fill(2);
    assert!(a.iter().all(|&v| v == 1));
    assert!(b.iter().all(|&v| v == 2));
}

#[test]
fn test_pool_buffers_feed_transpose() {
    let (w, h) = (33, 9);
    let pool = Pool::create(2 * w * h).unwrap();
    let src = pool.allocate(w * h).unwrap();
    let dst = pool.allocate(w * h).unwrap();

    src.iter_mut().enumerate().for_each(|(i, v)| *v = i as i32 * 3);
    transpose_vectorized_prefetch(src, dst, w, h);
    assert_transposed(src, dst, w, h, "pool buffers");

    assert_eq!(pool.remaining(), 0);
    pool.release();
}

// ============================================================
// Properties
// ============================================================

fn shape_and_data() -> impl PropStrategy<Value = (usize, usize, Vec<i32>)> {
    (1usize..70, 1usize..70).prop_flat_map(|(w, h)| {
        (Just(w), Just(h), proptest::collection::vec(any::<i32>(), w * h))
    })
}

proptest! {
    #[test]
    fn prop_strategies_match_naive((w, h, src) in shape_and_data()) {
        let mut expected = vec![0; w * h];
        transpose_naive(&src, &mut expected, w, h);

        let mut vectorized = vec![0; w * h];
        transpose_vectorized(&src, &mut vectorized, w, h);
        prop_assert_eq!(&expected, &vectorized);

        let mut prefetch = vec![0; w * h];
        transpose_vectorized_prefetch(&src, &mut prefetch, w, h);
        prop_assert_eq!(&expected, &prefetch);
    }

    #[test]
    fn prop_shape_swap((w, h, src) in shape_and_data()) {
        let mut out = vec![0; w * h];
        transpose(&src, &mut out, w, h);
        for y in 0..h {
            for x in 0..w {
                prop_assert_eq!(out[x * h + y], src[y * w + x]);
            }
        }
    }

    #[test]
    fn prop_transpose_twice_is_identity((w, h, src) in shape_and_data()) {
        // Rectangular too: the second pass swaps the dimensions back
        let mut once = vec![0; w * h];
        let mut twice = vec![0; w * h];
        transpose_vectorized_prefetch(&src, &mut once, w, h);
        transpose_vectorized_prefetch(&once, &mut twice, h, w);
        prop_assert_eq!(src, twice);
    }

    #[test]
    fn prop_pool_never_overcommits(sizes in proptest::collection::vec(0usize..50, 1..20)) {
        let pool = Pool::create(200).unwrap();
        let mut used = 0;
        for n in sizes {
            match pool.allocate(n) {
                Ok(slice) => {
                    prop_assert_eq!(slice.len(), n);
                    used += n;
                }
                Err(AllocationError::Exhausted { requested, remaining }) => {
                    prop_assert_eq!(requested, n);
                    prop_assert_eq!(remaining, 200 - used);
                    prop_assert!(n > remaining);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
            prop_assert_eq!(pool.used(), used);
        }
    }
}
