//! Benchmark configuration.
//!
//! Everything the harness needs is passed in explicitly through
//! [`BenchConfig`]; nothing is read from process-wide state after startup.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;
use crate::strategy::{Strategy, create_strategy};

/// Default matrix edge for the benchmark run.
pub const DEFAULT_SIZE: usize = 4096;

/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub strategy: Strategy,
    pub width: usize,
    pub height: usize,
    /// Timed runs after one warmup run.
    pub iterations: usize,
    /// Seed for the random source matrix.
    pub seed: u64,
    /// Compare the timed output against the naive transpose.
    pub cross_check: bool,
}

impl BenchConfig {
    /// Defaults with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            strategy: Strategy::default(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            iterations: 1,
            seed,
            cross_check: false,
        }
    }

    /// Parse command-line arguments (without the program name).
    ///
    /// Recognised flags: `--strategy NAME`, `--width N`, `--height N`,
    /// `--size N`, `--iterations N`, `--seed N`, `--check`. A seed taken
    /// from the wall clock is used when `--seed` is absent.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::with_seed(clock_seed());
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--strategy" => {
                    let name = value(&flag, args.next())?;
                    config.strategy = create_strategy(&name)?;
                }
                "--width" => config.width = number(&flag, args.next())?,
                "--height" => config.height = number(&flag, args.next())?,
                "--size" => {
                    let n = number(&flag, args.next())?;
                    config.width = n;
                    config.height = n;
                }
                "--iterations" => config.iterations = number(&flag, args.next())?,
                "--seed" => config.seed = number(&flag, args.next())?,
                "--check" => config.cross_check = true,
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can't produce a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension("height"));
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroDimension("iterations"));
        }
        // Room for source, output and the cross-check reference.
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(3))
            .and_then(|n| n.checked_mul(std::mem::size_of::<i32>()))
            .ok_or(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            })?;
        Ok(())
    }

    /// Elements in one matrix buffer.
    ///
    /// Only meaningful after [`validate`](Self::validate) has passed.
    pub fn elements(&self) -> usize {
        self.width * self.height
    }

    /// Pool capacity covering every buffer the run needs.
    pub fn pool_elements(&self) -> usize {
        let buffers = if self.cross_check { 3 } else { 2 };
        self.elements() * buffers
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, ConfigError> {
    next.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, ConfigError> {
    let raw = value(flag, next)?;
    raw.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: raw,
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
