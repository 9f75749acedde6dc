//! Bump-allocated buffer pool.
//!
//! A [`Pool`] makes one reservation up front and then hands out `i32`
//! slices by advancing a cursor. There is no per-slice free: the whole
//! reservation goes back in one step when the pool is released (or
//! dropped). Every slice borrows the pool, so the borrow checker rejects
//! any use of a slice after [`Pool::release`].
//!
//! ```
//! use transpose::Pool;
//!
//! let pool = Pool::create(32).unwrap();
//! let src = pool.allocate(16).unwrap();
//! let dst = pool.allocate(16).unwrap();
//! src.iter_mut().enumerate().for_each(|(i, v)| *v = i as i32);
//! transpose::transpose(src, dst, 4, 4);
//! assert_eq!(dst[1], 4);
//! pool.release();
//! ```
//!
//! Slices can't outlive the pool. This does not compile:
//!
//! ```compile_fail
//! use transpose::Pool;
//!
//! let pool = Pool::create(8).unwrap();
//! let buf = pool.allocate(8).unwrap();
//! pool.release();
//! buf[0] = 1;
//! ```
//!
//! Alignment is only the natural alignment of `i32`. Slices are not
//! aligned to vector width; the kernels use unaligned loads and stores.

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::mem;
use std::ptr::NonNull;
use std::slice;

use log::debug;

use crate::error::AllocationError;

/// Size of one pool element in bytes.
pub const ELEMENT_BYTES: usize = mem::size_of::<i32>();

/// Fixed-capacity linear arena of `i32`.
///
/// The cursor lives in a [`Cell`], so a pool is `Send` but not `Sync`:
/// sharing one pool between threads needs an external lock.
pub struct Pool {
    /// First element owned by the arena.
    base: NonNull<i32>,
    /// Elements handed out so far. Always `<= limit`.
    cursor: Cell<usize>,
    /// Total capacity in elements.
    limit: usize,
}

// SAFETY: the pool exclusively owns its reservation. Moving it to another
// thread moves every outstanding borrow with it.
unsafe impl Send for Pool {}

impl Pool {
    /// Reserve storage for exactly `capacity` elements.
    ///
    /// Performs one underlying allocation (none when `capacity` is zero).
    /// Storage is zero-filled by the reservation, but callers must not rely
    /// on slices being zeroed.
    pub fn create(capacity: usize) -> Result<Self, AllocationError> {
        if capacity == 0 {
            return Ok(Self {
                base: NonNull::dangling(),
                cursor: Cell::new(0),
                limit: 0,
            });
        }

        let layout = Layout::array::<i32>(capacity).map_err(|_| AllocationError::Reservation {
            requested_bytes: capacity.saturating_mul(ELEMENT_BYTES),
        })?;

        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) }.cast::<i32>();
        let base = NonNull::new(raw).ok_or(AllocationError::Reservation {
            requested_bytes: layout.size(),
        })?;

        debug!("pool: reserved {} elements ({} bytes)", capacity, layout.size());

        Ok(Self {
            base,
            cursor: Cell::new(0),
            limit: capacity,
        })
    }

    /// Reserve storage for as many whole elements as fit in `bytes`.
    pub fn with_bytes(bytes: usize) -> Result<Self, AllocationError> {
        Self::create(bytes / ELEMENT_BYTES)
    }

    /// Carve the next `count` elements off the pool.
    ///
    /// Fails with [`AllocationError::Exhausted`] when fewer than `count`
    /// elements remain; the cursor does not move on failure. Contents of
    /// the returned slice are unspecified.
    #[allow(clippy::mut_from_ref)]
    pub fn allocate(&self, count: usize) -> Result<&mut [i32], AllocationError> {
        let cursor = self.cursor.get();
        let remaining = self.limit - cursor;
        if count > remaining {
            debug!("pool: exhausted, requested {} of {} remaining", count, remaining);
            return Err(AllocationError::Exhausted {
                requested: count,
                remaining,
            });
        }

        self.cursor.set(cursor + count);

        // SAFETY: [cursor, cursor + count) lies inside the reservation and
        // the cursor has moved past it, so no other slice covers it. The
        // slice borrows `self`, which keeps the reservation alive.
        Ok(unsafe { slice::from_raw_parts_mut(self.base.as_ptr().add(cursor), count) })
    }

    /// Give the whole reservation back in one step.
    ///
    /// Consumes the pool; slices handed out earlier can no longer be used.
    pub fn release(self) {
        drop(self);
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Elements handed out so far.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Elements still available.
    pub fn remaining(&self) -> usize {
        self.limit - self.cursor.get()
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        if self.limit == 0 {
            return;
        }
        // The layout was valid at creation; rebuilding it cannot fail.
        if let Ok(layout) = Layout::array::<i32>(self.limit) {
            // SAFETY: `base` came from `alloc_zeroed` with this exact layout
            // and is freed only here.
            unsafe { alloc::dealloc(self.base.as_ptr().cast::<u8>(), layout) };
            debug!("pool: released {} elements", self.limit);
        }
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("capacity", &self.limit)
            .field("used", &self.cursor.get())
            .finish()
    }
}
