//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(feature = "cpu_cycles")]
pub mod cycles;

// Re-export commonly used items
pub use bench::{seeded_rng, time_seed, Stopwatch, Timing};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_repetitions, BenchConfig};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "branch", "x86_64-asm-cmov")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
