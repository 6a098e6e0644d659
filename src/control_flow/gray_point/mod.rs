//! # Branch vs Branch-Free Corner Lookup
//!
//! Maps an index to a corner of the unit square in Gray order:
//! 0 -> (0,0), 1 -> (1,0), 2 -> (1,1), 3 -> (0,1).
//!
//! ## Key Concepts
//!
//! - **Branch**: one conditional jump per case, relies on the branch predictor
//! - **Branch-free**: `y = bit1`, `x = bit0 ^ bit1`, same cost for every input
//!
//! ## Performance Implications
//!
//! - Random indices: the branch version mispredicts about every other call
//! - Cyclic indices: a short pattern most predictors learn completely
//! - Constant index: best case for the branch version
//! - The branch-free version should time the same on all three
//!
//! Indices outside 0..=3 map to (0,0) in every variant.

pub mod bench;
pub mod code;
pub mod point;
pub mod test;

pub use code::MapFn;
pub use point::Point;

/// The two mappers compared by default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapper {
    Branch,
    BranchFree,
}

impl Mapper {
    pub const ALL: [Mapper; 2] = [Mapper::Branch, Mapper::BranchFree];

    pub fn name(self) -> &'static str {
        match self {
            Mapper::Branch => "branch",
            Mapper::BranchFree => "branch-free",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mapper::Branch => "Rust match expression, one arm per index",
            Mapper::BranchFree => "Rust bit arithmetic (bit0 ^ bit1, bit1)",
        }
    }

    pub fn function(self) -> MapFn {
        match self {
            Mapper::Branch => code::original::map_branch,
            Mapper::BranchFree => code::original::map_branch_free,
        }
    }

    pub fn map(self, index: usize) -> Point {
        (self.function())(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappers_agree() {
        for index in 0..16 {
            assert_eq!(Mapper::Branch.map(index), Mapper::BranchFree.map(index));
        }
    }

    #[test]
    fn test_map_uses_table() {
        assert_eq!(Mapper::Branch.map(1), Point::new(1, 0));
        assert_eq!(Mapper::BranchFree.map(3), Point::new(0, 1));
        assert_eq!(Mapper::Branch.name(), "branch");
        assert_eq!(Mapper::BranchFree.name(), "branch-free");
    }
}
