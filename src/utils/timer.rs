//! Run configuration and the repetition loop.
//!
//! Every (sequence, mapper) pair is timed `repetitions` times and each raw
//! pass is kept. Nothing is averaged: the spread between passes is the point.

use super::cpu_affinity::CpuPinGuard;
use crate::control_flow::gray_point::bench::{benchmark_with_sequence, PassResult};
use crate::control_flow::gray_point::MapFn;

/// Length of each generated sequence
pub const DEFAULT_SEQUENCE_LEN: usize = 3 * 10_000_000;
/// Timed passes per (sequence, mapper) pair
pub const DEFAULT_REPETITIONS: usize = 5;
/// Elements shown in the sequence preview
pub const DEFAULT_PREVIEW_LEN: usize = 15;

/// Configuration for a benchmark run
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Number of indices per sequence (default: 30,000,000)
    pub sequence_len: usize,
    /// Passes per mapper and sequence (default: 5)
    pub repetitions: usize,
    /// Sequence elements to print before benchmarking (default: 15)
    pub preview_len: usize,
    /// RNG seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Pin the thread to its current core during each pass (default: true)
    pub pin: bool,
    /// Include the asm and C variants, not just branch / branch-free
    pub all_variants: bool,
    /// Write raw per-pass timings to this CSV file
    pub csv_path: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sequence_len: DEFAULT_SEQUENCE_LEN,
            repetitions: DEFAULT_REPETITIONS,
            preview_len: DEFAULT_PREVIEW_LEN,
            seed: None,
            pin: true,
            all_variants: false,
            csv_path: None,
        }
    }
}

/// Time `func` over `sequence` `config.repetitions` times.
///
/// `on_pass` is called after each pass so results can be printed as they arrive.
pub fn measure_repetitions<F>(
    sequence: &[usize],
    func: MapFn,
    config: &BenchConfig,
    mut on_pass: F,
) -> Vec<PassResult>
where
    F: FnMut(usize, &PassResult),
{
    let mut passes = Vec::with_capacity(config.repetitions);

    for repetition in 0..config.repetitions {
        let pass = {
            let _pin = config.pin.then(CpuPinGuard::new);
            benchmark_with_sequence(sequence, func)
        };
        on_pass(repetition, &pass);
        passes.push(pass);
    }

    passes
}
