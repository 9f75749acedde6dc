//! Named transpose strategies.
//!
//! A [`Strategy`] is picked once at startup (usually from a string) and
//! then used by value for every call. Dispatch is a `match` on a closed
//! enum, so there is no string comparison after selection.

use std::fmt;
use std::str::FromStr;

use crate::blocked::prefetch::transpose_vectorized_prefetch;
use crate::blocked::vectorized::transpose_vectorized;
use crate::error::ConfigError;
use crate::matrix::naive::transpose_naive;

/// Signature shared by every transpose implementation:
/// `(src, dst, width, height)`.
pub type TransposeFn = fn(&[i32], &mut [i32], usize, usize);

/// One of the interchangeable transpose implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Element-by-element copy. The correctness baseline.
    Naive,
    /// 4×4 register-tiled transpose.
    #[default]
    Vectorized,
    /// Tiled transpose with software prefetch of upcoming source rows.
    VectorizedPrefetch,
}

impl Strategy {
    /// Every strategy, baseline first.
    pub const ALL: [Strategy; 3] = [
        Strategy::Naive,
        Strategy::Vectorized,
        Strategy::VectorizedPrefetch,
    ];

    /// Display name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Vectorized => "vectorized",
            Strategy::VectorizedPrefetch => "vectorized-prefetch",
        }
    }

    /// The implementation bound to this strategy.
    pub fn function(self) -> TransposeFn {
        match self {
            Strategy::Naive => transpose_naive,
            Strategy::Vectorized => transpose_vectorized,
            Strategy::VectorizedPrefetch => transpose_vectorized_prefetch,
        }
    }

    /// Transpose `src` (height × width) into `dst` (width × height).
    ///
    /// # Panics
    ///
    /// Panics if either buffer holds fewer than `width * height` elements.
    #[inline]
    pub fn transpose(self, src: &[i32], dst: &mut [i32], width: usize, height: usize) {
        (self.function())(src, dst, width, height)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "vectorized" | "sse" => Ok(Strategy::Vectorized),
            "vectorized-prefetch" | "sse-prefetch" | "sse_prefetch" => {
                Ok(Strategy::VectorizedPrefetch)
            }
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Resolve a strategy by name.
pub fn create_strategy(name: &str) -> Result<Strategy, ConfigError> {
    let strategy = name.parse()?;
    log::debug!("selected strategy '{}'", strategy);
    Ok(strategy)
}
