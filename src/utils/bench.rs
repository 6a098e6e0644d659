//! Shared benchmark utilities.
//!
//! Wall-clock time comes from `std::time::Instant`, which is monotonic. With
//! the `cpu_cycles` feature a raw cycle counter is sampled alongside it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Time taken by one measured pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
    pub elapsed: Duration,
    /// Raw cycles/ticks, only with the `cpu_cycles` feature
    pub cycles: Option<u64>,
}

impl Timing {
    /// Elapsed time truncated to whole milliseconds
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Started measurement. Call [`Stopwatch::stop`] right after the measured work.
pub struct Stopwatch {
    start: Instant,
    #[cfg(feature = "cpu_cycles")]
    start_cycles: u64,
}

impl Stopwatch {
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
            #[cfg(feature = "cpu_cycles")]
            start_cycles: crate::utils::cycles::read_cycles(),
        }
    }

    #[inline(always)]
    pub fn stop(self) -> Timing {
        #[cfg(feature = "cpu_cycles")]
        let cycles = Some(crate::utils::cycles::read_cycles().saturating_sub(self.start_cycles));
        #[cfg(not(feature = "cpu_cycles"))]
        let cycles = None;

        Timing {
            elapsed: self.start.elapsed(),
            cycles,
        }
    }
}

/// Time an expression, returning `(Timing, value)`.
///
/// ```ignore
/// let (timing, sum) = measure!(data.iter().sum::<u64>());
/// ```
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let stopwatch = $crate::utils::bench::Stopwatch::start();
        let value = $e;
        (stopwatch.stop(), value)
    }};
}

/// Get the measurement unit name for the cycle column
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        "cycles"
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Seeded generator handed to the sequence generators
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed for one named phase, independent of which other phases run
pub fn phase_seed(seed: u64, name: &str) -> u64 {
    name.bytes().fold(seed, |acc, b| {
        (acc ^ b as u64)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_measure_returns_value() {
        let (timing, value) = crate::measure!((1..=10u32).sum::<u32>());
        assert_eq!(value, 55);
        assert!(timing.elapsed < Duration::from_secs(1));
        assert_eq!(timing.cycles.is_some(), cfg!(feature = "cpu_cycles"));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_phase_seed_depends_on_name_only() {
        assert_eq!(phase_seed(1, "constant"), phase_seed(1, "constant"));
        assert_ne!(phase_seed(1, "constant"), phase_seed(1, "random"));
        assert_ne!(phase_seed(1, "constant"), phase_seed(2, "constant"));
    }

    #[test]
    fn test_millis_truncates() {
        let timing = Timing {
            elapsed: Duration::from_micros(2_999),
            cycles: None,
        };
        assert_eq!(timing.millis(), 2);
    }
}
