//! Sequence generator registry.
//!
//! Each benchmark phase is driven by one registered generator, so the CLI can
//! list them and run a single one by name.

use rand::rngs::StdRng;

/// Trait that all index sequence generators implement
pub trait SequenceGenerator: Send + Sync {
    /// Short name used on the command line (e.g., "random")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Section title printed before the phase
    fn headline(&self) -> &'static str;

    /// Build `len` indices in `0..=3`, drawing any randomness from `rng`
    fn generate(&self, len: usize, rng: &mut StdRng) -> Vec<usize>;
}

/// Ordered collection of sequence generators
pub struct SequenceRegistry {
    generators: Vec<Box<dyn SequenceGenerator>>,
}

impl SequenceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Register a generator
    pub fn register<G: SequenceGenerator + 'static>(&mut self, generator: G) {
        self.generators.push(Box::new(generator));
    }

    /// Get all registered generators, in registration order
    pub fn all(&self) -> &[Box<dyn SequenceGenerator>] {
        &self.generators
    }

    /// Find generator by name
    pub fn find(&self, name: &str) -> Option<&dyn SequenceGenerator> {
        self.generators
            .iter()
            .find(|g| g.name() == name)
            .map(|g| g.as_ref())
    }

    /// List generator names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }
}

impl Default for SequenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry: random, cyclic, constant
pub fn build_registry() -> SequenceRegistry {
    let mut registry = SequenceRegistry::new();

    registry.register(crate::sequence::UniformRandom);
    registry.register(crate::sequence::Cyclic);
    registry.register(crate::sequence::Constant);

    registry
}
