//! # Branch Predict Bench
//!
//! Times a branchy and a branch-free corner lookup over random, cyclic and
//! constant index sequences to show the cost of branch misprediction.

pub mod control_flow;
pub mod registry;
pub mod sequence;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::control_flow::gray_point::{MapFn, Mapper, Point};
    pub use crate::registry::{build_registry, SequenceGenerator, SequenceRegistry};
    pub use crate::utils::BenchConfig;
}

#[cfg(test)]
mod tests {
    use crate::control_flow::gray_point::test::verify_all;
    use crate::prelude::*;
    use crate::utils::bench::seeded_rng;

    #[test]
    fn test_all_generators_in_range() {
        let registry = build_registry();

        for generator in registry.all() {
            let mut rng = seeded_rng(2024);
            let sequence = generator.generate(500, &mut rng);
            assert_eq!(sequence.len(), 500, "{}", generator.name());
            assert!(
                sequence.iter().all(|&v| v <= 3),
                "Generator '{}' produced an index outside 0..=3",
                generator.name()
            );
        }
    }

    #[test]
    fn test_all_mappers_verify() {
        if let Err(e) = verify_all() {
            panic!("Mapper verification failed: {}", e);
        }
    }
}
