//! Implementation variants of the Gray-order corner lookup

pub mod c_impl;
pub mod original;
#[cfg(target_arch = "x86_64")]
pub mod x86_64_asm;

use super::point::Point;
use super::Mapper;
use crate::utils::VariantInfo;

/// Function signature: maps an index (0-3) to a corner of the unit square
pub type MapFn = fn(usize) -> Point;

/// The two Rust mappers every run compares
pub fn core_variants() -> Vec<VariantInfo<MapFn>> {
    Mapper::ALL
        .iter()
        .map(|&mapper| VariantInfo {
            name: mapper.name(),
            description: mapper.description(),
            function: mapper.function(),
        })
        .collect()
}

/// Returns all available variants, core ones first
pub fn get_variants() -> Vec<VariantInfo<MapFn>> {
    #[allow(unused_mut)]
    let mut variants = core_variants();

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-asm-jcc",
            description: "x86_64 assembly with a chain of conditional jumps",
            function: x86_64_asm::map_jcc,
        });
        variants.push(VariantInfo {
            name: "x86_64-asm-cmov",
            description: "x86_64 assembly, bit arithmetic with CMOV range check",
            function: x86_64_asm::map_cmov,
        });
    }

    #[cfg(c_implementation_active)]
    {
        variants.push(VariantInfo {
            name: "c-switch",
            description: "C switch statement",
            function: c_impl::map_c_switch,
        });
        variants.push(VariantInfo {
            name: "c-bits",
            description: "C bit arithmetic",
            function: c_impl::map_c_bits,
        });
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_variants_lead() {
        let names: Vec<_> = get_variants().iter().map(|v| v.name).collect();
        assert_eq!(&names[..2], &["branch", "branch-free"]);
    }

    #[test]
    fn test_c_variants_follow_build() {
        let has_c = get_variants().iter().any(|v| v.name.starts_with("c-"));
        assert_eq!(has_c, c_impl::C_IMPL_AVAILABLE);
    }
}
