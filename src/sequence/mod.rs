//! # Index Sequences
//!
//! Inputs shaped to make the branch predictor's job hard or easy:
//!
//! - **random**: independent uniform draws, the worst case
//! - **cyclic**: `0, 1, 2, 3, 0, 1, ...`, a short learnable pattern
//! - **constant**: one value drawn once and repeated, the best case
//!
//! Every element is in `0..=3`. Randomness always comes from the caller's
//! generator so a fixed seed reproduces a run.

use crate::registry::SequenceGenerator;
use rand::rngs::StdRng;
use rand::Rng;

/// Number of distinct indices (corners of the unit square)
pub const INDEX_RANGE: usize = 4;

/// `len` independent uniform draws from `0..4`
pub fn uniform_random(len: usize, rng: &mut StdRng) -> Vec<usize> {
    (0..len).map(|_| rng.random_range(0..INDEX_RANGE)).collect()
}

/// `i % 4` for each position `i`
pub fn cyclic(len: usize) -> Vec<usize> {
    (0..len).map(|i| i % INDEX_RANGE).collect()
}

/// One uniform draw from `0..4`, repeated `len` times
pub fn constant(len: usize, rng: &mut StdRng) -> Vec<usize> {
    let value = rng.random_range(0..INDEX_RANGE);
    vec![value; len]
}

pub struct UniformRandom;

impl SequenceGenerator for UniformRandom {
    fn name(&self) -> &'static str {
        "random"
    }

    fn description(&self) -> &'static str {
        "Uniform random indices, maximizes branch mispredictions"
    }

    fn headline(&self) -> &'static str {
        "RANDOM SEQUENCE BENCHMARK TO COMPLICATE A CPU BRANCH PREDICTION"
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<usize> {
        uniform_random(len, rng)
    }
}

pub struct Cyclic;

impl SequenceGenerator for Cyclic {
    fn name(&self) -> &'static str {
        "cyclic"
    }

    fn description(&self) -> &'static str {
        "Repeating 0,1,2,3 pattern the predictor can learn"
    }

    fn headline(&self) -> &'static str {
        "PREDICTABLE SEQUENCE WITH PATTERN TO SIMPLIFY A CPU BRANCH PREDICTION"
    }

    fn generate(&self, len: usize, _rng: &mut StdRng) -> Vec<usize> {
        cyclic(len)
    }
}

pub struct Constant;

impl SequenceGenerator for Constant {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn description(&self) -> &'static str {
        "Single random index repeated, best case for prediction"
    }

    fn headline(&self) -> &'static str {
        "PREDICTABLE SEQUENCE FILLED WITH THE SAME NUMBER"
    }

    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<usize> {
        constant(len, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bench::seeded_rng;

    #[test]
    fn test_cyclic_pattern() {
        assert_eq!(cyclic(8), vec![0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(cyclic(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_constant_repeats_one_value() {
        let mut rng = seeded_rng(7);
        let seq = constant(5, &mut rng);
        assert_eq!(seq.len(), 5);
        assert!(seq[0] < INDEX_RANGE);
        assert!(seq.iter().all(|&v| v == seq[0]));
    }

    #[test]
    fn test_uniform_random_range_and_spread() {
        let mut rng = seeded_rng(0xC0FFEE);
        let seq = uniform_random(1000, &mut rng);
        assert_eq!(seq.len(), 1000);

        let mut counts = [0usize; INDEX_RANGE];
        for &v in &seq {
            assert!(v < INDEX_RANGE, "index {} out of range", v);
            counts[v] += 1;
        }
        // Expected 250 each; 150..350 is far outside any plausible deviation.
        for (value, &count) in counts.iter().enumerate() {
            assert!((150..350).contains(&count), "value {} drawn {} times", value, count);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = uniform_random(256, &mut seeded_rng(99));
        let b = uniform_random(256, &mut seeded_rng(99));
        assert_eq!(a, b);
        assert_eq!(constant(4, &mut seeded_rng(5)), constant(4, &mut seeded_rng(5)));
    }

    #[test]
    fn test_empty_sequences() {
        let mut rng = seeded_rng(1);
        assert!(uniform_random(0, &mut rng).is_empty());
        assert!(cyclic(0).is_empty());
        assert!(constant(0, &mut rng).is_empty());
    }

    #[test]
    fn test_generators_delegate() {
        let mut rng = seeded_rng(3);
        assert_eq!(Cyclic.generate(6, &mut rng), cyclic(6));
        assert_eq!(UniformRandom.generate(10, &mut rng).len(), 10);
        assert_eq!(Constant.generate(2, &mut rng).len(), 2);
    }
}
