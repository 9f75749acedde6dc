//! SIMD microkernels for the blocked transpose.
//!
//! The block edge is the number of `i32` lanes in one 128-bit vector
//! register, which is what SSE2 and NEON both provide. The blocked
//! drivers only ever step by [`BLOCK`] and hand the leftover edges to a
//! scalar copy, so a wider kernel needs only a new constant and kernel.
//!
//! Available kernels:
//! - `kernel_4x4`: SSE2 on x86_64, NEON on aarch64, portable elsewhere

pub mod kernel_4x4;

/// Bytes in one vector register used by the kernels.
pub const VECTOR_BYTES: usize = 16;

/// Block edge in elements: `i32` lanes per vector register.
pub const BLOCK: usize = VECTOR_BYTES / std::mem::size_of::<i32>();

/// How many rows ahead the prefetching strategy reaches.
pub const PREFETCH_DISTANCE: usize = 8;

const _: () = assert!(BLOCK == 4, "kernel_4x4 assumes four lanes per register");
