//! Wall-clock timing of one strategy.

use std::time::Instant;

use crate::config::BenchConfig;
use crate::error::ConfigError;

/// Result of a timed run, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub average_us: u128,
    pub best_us: u128,
}

/// Time a transpose: one warmup run, then `config.iterations` timed runs.
///
/// The config is validated first, so a hand-built one with zero
/// iterations or zero dimensions is rejected instead of timed.
///
/// # Panics
///
/// Panics if `src` or `out` holds fewer than `width * height` elements.
pub fn time_strategy(config: &BenchConfig, src: &[i32], out: &mut [i32]) -> Result<Timing, ConfigError> {
    config.validate()?;
    let f = config.strategy.function();
    let (w, h) = (config.width, config.height);

    // Warmup
    f(src, out, w, h);

    let mut total = 0u128;
    let mut best = u128::MAX;
    for _ in 0..config.iterations {
        let start = Instant::now();
        f(src, out, w, h);
        let us = start.elapsed().as_micros();
        total += us;
        best = best.min(us);
    }

    Ok(Timing {
        average_us: total / config.iterations as u128,
        best_us: best,
    })
}
