//! Fast integer matrix transpose in Rust, built from scratch.
//!
//! Three ways to transpose a row-major `i32` matrix, plus a bump pool to
//! hand out the buffers without a heap allocation per call. The naive
//! version is the baseline. The blocked versions move 4×4 tiles through
//! vector registers and handle the leftover edges with scalar copies;
//! one of them also prefetches source rows ahead of the kernel.
//!
//! ## Usage
//!
//! ```
//! use transpose::transpose;
//!
//! let src: Vec<i32> = (0..16).collect();
//! let mut dst = vec![0; 16];
//!
//! transpose(&src, &mut dst, 4, 4);
//!
//! assert_eq!(dst, [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]);
//! ```
//!
//! To compare implementations, pick one by name:
//!
//! ```
//! use transpose::{Pool, create_strategy};
//!
//! let strategy = create_strategy("vectorized-prefetch").unwrap();
//! let pool = Pool::create(2 * 6 * 5).unwrap();
//! let src = pool.allocate(6 * 5).unwrap();
//! let dst = pool.allocate(6 * 5).unwrap();
//!
//! src.iter_mut().enumerate().for_each(|(i, v)| *v = i as i32);
//! strategy.transpose(src, dst, 6, 5); // 5 rows of 6 -> 6 rows of 5
//!
//! assert_eq!(dst[1], 6);
//! pool.release();
//! ```
//!
//! ## What's inside
//!
//! - 4×4 in-register transpose: SSE2 (x86_64), NEON (aarch64), portable
//! - Tiled driver with scalar remainder handling for any shape
//! - Software prefetch variant
//! - Bump-allocated buffer pool with borrow-checked lifetimes

pub mod blocked;
pub mod config;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod pool;
pub mod strategy;
pub mod timing;
pub mod verify;

pub use blocked::prefetch::transpose_vectorized_prefetch;
pub use blocked::vectorized::transpose_vectorized;
pub use config::BenchConfig;
pub use error::{AllocationError, ConfigError, VerifyError};
pub use matrix::naive::transpose_naive;
pub use pool::Pool;
pub use strategy::{Strategy, TransposeFn, create_strategy};

/// Matrix transpose: dst = src^T
///
/// `src` is `height` rows of `width` elements; `dst` becomes `width`
/// rows of `height` elements. Uses the tiled vector kernel.
///
/// # Panics
///
/// Panics if either buffer holds fewer than `width * height` elements.
pub fn transpose(src: &[i32], dst: &mut [i32], width: usize, height: usize) {
    transpose_vectorized(src, dst, width, height);
}
